//! Thin bar across the top of the viewport showing read progress.

use leptos::prelude::*;

use effects::scroll::ScrollState;

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();
    let width = move || progress_width(scroll.with(|s| s.fraction));

    view! {
        <div class="scroll-progress" role="presentation" style:width=width></div>
    }
}

fn progress_width(fraction: f64) -> String {
    format!("{fraction:.2}%")
}
