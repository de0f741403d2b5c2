use gloo::events::EventListener;
use shared::theme::{theme_for_scroll, Theme, THEMES};
use yew::prelude::*;

/// Tracks window scroll and derives the displayed theme from it. Runs on
/// every scroll event, unthrottled; the listener dies with the component.
#[hook]
pub fn use_scroll_theme() -> Theme {
    let theme = use_state(|| THEMES[0]);

    {
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global window exists");
            let scroll_window = window.clone();
            let listener = EventListener::new(&window, "scroll", move |_| {
                let scroll_y = scroll_window.scroll_y().unwrap_or(0.0);
                let viewport = scroll_window
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                theme.set(theme_for_scroll(scroll_y, viewport));
            });
            move || drop(listener)
        });
    }

    *theme
}
