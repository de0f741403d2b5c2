use shared::constants::BOOKING_URL;
use shared::prize::Prize;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct EggModalProps {
    pub prize: Prize,
    pub code_copied: bool,
    pub on_copy: Callback<String>,
    pub on_close: Callback<MouseEvent>,
}

/// The reveal dialog. Clicking the backdrop closes it; the panel swallows
/// its own clicks. Spoiled prizes only offer the close control.
#[function_component(EggModal)]
pub fn egg_modal(props: &EggModalProps) -> Html {
    let on_copy_click = {
        let on_copy = props.on_copy.clone();
        let code = props.prize.code.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(code) = &code {
                on_copy.emit(code.clone());
            }
        })
    };

    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={props.on_close.clone()}>
            <div class={styles::MODAL_OVERLAY}></div>
            <div class={styles::MODAL_PANEL} onclick={swallow_click}>
                <button class={styles::MODAL_CLOSE} onclick={props.on_close.clone()}>
                    { icons::close_icon() }
                </button>

                if props.prize.is_spoiled() {
                    <h3 class={styles::MODAL_TITLE}>{"Oops!"}</h3>
                    <p class={styles::MODAL_BODY}>{props.prize.value.clone()}</p>
                    <p class={styles::MODAL_HINT}>{"Keep searching for more eggs!"}</p>
                } else {
                    <h3 class={styles::MODAL_TITLE}>{"Congratulations! \u{1f389}"}</h3>
                    <p class={styles::MODAL_BODY}>{"You found a special discount!"}</p>
                    <p class={styles::MODAL_VALUE}>{props.prize.value.clone()}</p>
                    <p class={styles::MODAL_BODY}>
                        {"Use code: "}
                        <span class="font-bold">{props.prize.code.clone().unwrap_or_default()}</span>
                    </p>
                    <p class="text-sm text-gray-700 mb-6">{"Valid for 48 hours only!"}</p>

                    <div class="flex flex-col gap-3">
                        <button
                            onclick={on_copy_click}
                            class={if props.code_copied {
                                styles::COPY_BUTTON_DONE
                            } else {
                                styles::COPY_BUTTON_IDLE
                            }}
                        >
                            if props.code_copied {
                                { icons::check_icon() }
                                {"Code Copied"}
                            } else {
                                {"Copy Code"}
                            }
                        </button>
                        <a
                            href={BOOKING_URL}
                            target="_blank"
                            rel="noopener noreferrer"
                            class={styles::BOOK_BUTTON}
                        >
                            {"Book Class"}
                        </a>
                    </div>
                }
            </div>
        </div>
    }
}
