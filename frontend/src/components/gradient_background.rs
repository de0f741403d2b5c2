use shared::theme::Theme;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    pub theme: Theme,
    #[prop_or_default]
    pub children: Html,
}

/// Full-page vertical gradient driven by the current scroll theme.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    let background = format!(
        "background: linear-gradient(to bottom, {}, {})",
        props.theme.primary.to_hex(),
        props.theme.secondary.to_hex()
    );

    html! {
        <div class="min-h-screen relative transition-colors duration-1000" style={background}>
            {props.children.clone()}
        </div>
    }
}
