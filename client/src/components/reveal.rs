//! Wrapper that fades its children in the first time they scroll into view.
//!
//! The `reveal` class hides the block until the visibility animator adds
//! `visible`. The id keys the one-shot bookkeeping, so it must be unique.

use leptos::prelude::*;

#[component]
pub fn Reveal(
    id: &'static str,
    #[prop(optional)] extra_class: &'static str,
    children: Children,
) -> impl IntoView {
    view! { <div id=id class=reveal_class(extra_class)>{children()}</div> }
}

fn reveal_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() { "reveal".to_owned() } else { format!("reveal {extra}") }
}
