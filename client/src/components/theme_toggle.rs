//! Light/dark theme switch.

use leptos::prelude::*;

use crate::state::theme::Theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let on_click = move |_| theme.update(|t| *t = crate::util::theme::toggle(*t));

    view! {
        <button
            class="theme-toggle"
            type="button"
            aria-label=move || theme.get().toggle_label()
            title=move || theme.get().toggle_label()
            on:click=on_click
        >
            <span class="theme-icon" class:is-dark=move || theme.get() == Theme::Dark>
                {move || if theme.get() == Theme::Dark { "\u{2600}" } else { "\u{263E}" }}
            </span>
        </button>
    }
}
