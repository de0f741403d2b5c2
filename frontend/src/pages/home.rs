use std::rc::Rc;

use rand::thread_rng;
use shared::constants::SPOILED_EGG_COUNT;
use shared::prize::{self, Prize};
use shared::scene::{self, SceneConfig, SceneElement};
use shared::session::HuntSession;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{EggModal, GradientBackground, SceneField};
use crate::hooks::{use_copy_feedback, use_scroll_theme};
use crate::styles;

/// The hunt page. Owns the session state, generates the scene once on
/// mount from the live viewport size, and wires scroll, clicks and the
/// copy confirmation together.
#[function_component(Home)]
pub fn home() -> Html {
    let session = use_state(HuntSession::new);
    let elements = use_state(|| Rc::new(Vec::<SceneElement>::new()));
    let theme = use_scroll_theme();
    let (code_copied, on_copy) = use_copy_feedback();

    // One generation per session load. Resizing does not re-roll the field.
    {
        let elements = elements.clone();
        use_effect_with((), move |_| {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|w| w.as_f64())
                .unwrap_or(1280.0);

            let mut rng = thread_rng();
            let mut prizes = prize::DISCOUNTS.clone();
            prizes.extend(prize::spoiled_pool(&mut rng, SPOILED_EGG_COUNT));

            let generated = scene::generate(&mut rng, &SceneConfig::for_viewport(width), &prizes);
            log::info!(
                "scene ready: {} elements, {} of them eggs",
                generated.len(),
                prizes.len()
            );
            elements.set(Rc::new(generated));
            || ()
        });
    }

    let on_egg_click = {
        let session = session.clone();
        Callback::from(move |prize: Prize| {
            let mut next = (*session).clone();
            next.reveal(prize);
            session.set(next);
        })
    };

    let on_close = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*session).clone();
            next.close_modal();
            session.set(next);
        })
    };

    html! {
        <GradientBackground theme={theme}>
            <header class={styles::HEADER}>
                <div class="container mx-auto">
                    <h1 class={styles::HEADER_TITLE}>{"Pottery Chicago Easter Hunt"}</h1>
                </div>
            </header>

            <main class="pt-20">
                <section class={styles::HERO_SECTION}>
                    <h2 class={styles::HERO_TITLE}>{"Find Hidden Easter Eggs!"}</h2>
                    <p class={styles::HERO_TEXT}>
                        {"Click on the hidden eggs to discover special discounts for pottery classes! Valid for 48 hours only."}
                    </p>
                </section>

                <SceneField
                    elements={(*elements).clone()}
                    theme={theme}
                    on_egg_click={on_egg_click}
                />
            </main>

            if session.modal_open {
                if let Some(prize) = (*session).current_prize.clone() {
                    <EggModal
                        prize={prize}
                        code_copied={code_copied}
                        on_copy={on_copy.clone()}
                        on_close={on_close}
                    />
                }
            }
        </GradientBackground>
    }
}
