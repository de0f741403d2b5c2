use std::rc::Rc;

use shared::prize::Prize;
use shared::scene::{ElementKind, SceneElement};
use shared::theme::Theme;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SceneFieldProps {
    pub elements: Rc<Vec<SceneElement>>,
    pub theme: Theme,
    pub on_egg_click: Callback<Prize>,
}

/// The scattered element field over the tall virtual canvas. Eggs sit on a
/// higher stacking layer than scenery regardless of paint order.
#[function_component(SceneField)]
pub fn scene_field(props: &SceneFieldProps) -> Html {
    let color = props.theme.primary.to_hex();

    html! {
        <div class={styles::CANVAS}>
            { for props
                .elements
                .iter()
                .map(|element| render_element(element, &color, &props.on_egg_click)) }
        </div>
    }
}

fn render_element(element: &SceneElement, color: &str, on_egg_click: &Callback<Prize>) -> Html {
    match &element.kind {
        ElementKind::Egg(prize) => {
            let onclick = {
                let on_egg_click = on_egg_click.clone();
                let prize = prize.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    on_egg_click.emit(prize.clone());
                })
            };

            html! {
                <div
                    key={element.id.clone()}
                    class="egg absolute cursor-pointer"
                    style={inline_style(element, color, 2)}
                    {onclick}
                >
                    { icons::egg_icon() }
                </div>
            }
        }
        ElementKind::Decor(kind) => html! {
            <div
                key={element.id.clone()}
                class="absolute"
                style={inline_style(element, color, 1)}
            >
                { icons::decor_icon(*kind) }
            </div>
        },
    }
}

// Position and tint via plain properties; the looping idle motion runs off
// the `drift` keyframes, parameterized per element through custom
// properties.
fn inline_style(element: &SceneElement, color: &str, z_index: u8) -> String {
    let p = &element.placement;
    let m = &element.motion;
    format!(
        "top:{:.1}px;left:{:.1}px;width:{:.1}px;height:{:.1}px;opacity:{:.2};color:{};z-index:{};\
         filter:drop-shadow(0 0 2px rgba(0,0,0,0.3));\
         --base-rotation:{:.1}deg;--base-scale:{:.2};--move-range:{:.1}px;--rotate-range:{:.1}deg;\
         animation:drift {:.2}s ease-in-out {:.2}s infinite",
        p.top,
        p.left,
        p.size,
        p.size,
        p.opacity,
        color,
        z_index,
        p.rotation,
        p.scale,
        m.move_range,
        m.rotate_range,
        m.duration_secs,
        m.delay_secs,
    )
}
