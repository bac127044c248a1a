//! Statistic counters. Each number starts at zero and counts up to its
//! `data-target` once it scrolls into view.

use leptos::prelude::*;

use crate::content::STATS;

#[component]
pub fn Stats() -> impl IntoView {
    let items = STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="stat">
                    <p class="stat-value">
                        <span id=stat.id class="stat-number" data-target=stat.target.to_string()>
                            "0"
                        </span>
                        <span class="stat-suffix">{stat.suffix}</span>
                    </p>
                    <p class="stat-label">{stat.label}</p>
                </div>
            }
        })
        .collect_view();

    view! { <div class="stats">{items}</div> }
}
