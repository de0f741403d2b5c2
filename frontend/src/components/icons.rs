use shared::scene::DecorKind;
use yew::prelude::*;

/// Inline SVG glyphs for the scattered scenery. All of them fill with
/// `currentColor` so the scroll theme tints them.
pub fn decor_icon(kind: DecorKind) -> Html {
    match kind {
        DecorKind::Leaf => html! {
            <svg class="w-full h-full" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M20 4c-7 0-13 3-15 10-1 3 0 6 0 6s1-4 5-6c-2 3-2 6-2 6s5 0 9-4c3.5-3.5 3-12 3-12z"/>
            </svg>
        },
        DecorKind::Plant => html! {
            <svg class="w-full h-full" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M12 22V10M12 10C12 6 9 3 4 3c0 5 3 8 8 7zm0 2c0-4 3-7 8-7 0 5-3 8-8 7z"
                    stroke="currentColor" stroke-width="2" fill="none" stroke-linecap="round"/>
            </svg>
        },
        DecorKind::Mountain => html! {
            <svg class="w-full h-full" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M2 20L9 6l3.5 7L15 9l7 11z"/>
            </svg>
        },
        DecorKind::Water => html! {
            <svg class="w-full h-full" viewBox="0 0 24 24" fill="none" stroke="currentColor"
                stroke-width="2" stroke-linecap="round" aria-hidden="true">
                <path d="M2 8c2.5 2 5 2 7.5 0s5-2 7.5 0 4 2 5 1M2 13c2.5 2 5 2 7.5 0s5-2 7.5 0 4 2 5 1M2 18c2.5 2 5 2 7.5 0s5-2 7.5 0 4 2 5 1"/>
            </svg>
        },
        DecorKind::Cloud => html! {
            <svg class="w-full h-full" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M6.5 19a4.5 4.5 0 0 1-.4-8.98A6 6 0 0 1 17.7 8.6 4.5 4.5 0 0 1 17.5 19z"/>
            </svg>
        },
        DecorKind::Circle => html! {
            <svg class="w-full h-full" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <circle cx="12" cy="12" r="9"/>
            </svg>
        },
        DecorKind::Star => html! {
            <svg class="w-full h-full" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M12 2l2.9 6.3 6.9.8-5.1 4.7 1.4 6.8L12 17.2l-6.1 3.4 1.4-6.8L2.2 9.1l6.9-.8z"/>
            </svg>
        },
    }
}

pub fn egg_icon() -> Html {
    html! {
        <svg class="w-full h-full" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M12 2C8.7 2 5 8.4 5 13.5a7 7 0 0 0 14 0C19 8.4 15.3 2 12 2z"/>
        </svg>
    }
}

pub fn close_icon() -> Html {
    html! {
        <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" aria-hidden="true">
            <path d="M6 6l12 12M18 6L6 18"/>
        </svg>
    }
}

pub fn check_icon() -> Html {
    html! {
        <svg class="w-5 h-5" viewBox="0 0 24 24" fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M4 12l5 5L20 6"/>
        </svg>
    }
}
