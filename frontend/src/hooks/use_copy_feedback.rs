use gloo_timers::callback::Timeout;
use shared::constants::COPY_RESET_MS;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use yew::prelude::*;

/// Owns the transient "Code Copied" indicator: writes the code to the
/// clipboard, raises the flag, and lowers it after the fixed delay.
///
/// A re-copy replaces the pending timeout in the slot, which cancels the
/// old timer on drop, so a stale timer cannot clear a fresh confirmation
/// early.
#[hook]
pub fn use_copy_feedback() -> (bool, Callback<String>) {
    let copied = use_state(|| false);
    let pending_reset = use_mut_ref(|| None::<Timeout>);

    let on_copy = {
        let copied = copied.clone();
        let pending_reset = pending_reset.clone();
        Callback::from(move |code: String| {
            if let Some(window) = web_sys::window() {
                // Fire and forget: the optimistic indicator is all the
                // feedback the page gives.
                let promise: js_sys::Promise = window.navigator().clipboard().write_text(&code);
                spawn_local(async move {
                    if JsFuture::from(promise).await.is_err() {
                        log::debug!("clipboard write rejected");
                    }
                });
            }
            log::info!("discount code copied: {}", code);
            copied.set(true);

            let copied = copied.clone();
            let reset = Timeout::new(COPY_RESET_MS, move || copied.set(false));
            *pending_reset.borrow_mut() = Some(reset);
        })
    };

    (*copied, on_copy)
}
