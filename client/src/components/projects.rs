//! Project grid with category filter buttons.
//!
//! Card phases come from [`FilterState`]. A card leaving the filter keeps its
//! slot for [`FILTER_EXIT_MS`] with the `filtering-out` class, then an exit
//! timer hides it. Timers are kept per card index; re-showing a card drops
//! its timer, and the ticket check in [`FilterState::finish_exit`] covers a
//! timer that already fired.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::consts::FILTER_EXIT_MS;
use crate::content::PROJECTS;
use crate::state::projects::{CardPhase, Category, FilterState};

#[component]
pub fn Projects() -> impl IntoView {
    let filter = RwSignal::new(FilterState::new(PROJECTS.iter().map(|p| p.category)));

    #[cfg(feature = "hydrate")]
    let exits = StoredValue::new_local(std::collections::HashMap::<usize, gloo_timers::callback::Timeout>::new());
    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        exits.try_update_value(std::collections::HashMap::clear);
    });

    let on_select = move |category: Category| {
        let Some(selection) = filter.try_update(|f| f.select(category)) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        exits.update_value(|timers| {
            for index in &selection.cancelled {
                timers.remove(index);
            }
            for ticket in selection.exiting {
                let timeout = gloo_timers::callback::Timeout::new(FILTER_EXIT_MS, move || {
                    filter.update(|f| {
                        f.finish_exit(ticket);
                    });
                });
                timers.insert(ticket.index, timeout);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = selection;
        }
    };

    let buttons = Category::EVERY
        .into_iter()
        .map(|category| {
            view! {
                <button
                    type="button"
                    class="filter-btn"
                    class:active=move || filter.with(|f| f.selected() == category)
                    data-filter=category.tag()
                    on:click=move |_| on_select(category)
                >
                    {category.label()}
                </button>
            }
        })
        .collect_view();

    let cards = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            let class = move || filter.with(|f| f.phase(index).unwrap_or(CardPhase::Shown).class());
            let tags = project.tags.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view();
            view! {
                <article class=class data-category=project.category.tag()>
                    <div class="project-body">
                        <h3 class="project-title">{project.title}</h3>
                        <p class="project-description">{project.description}</p>
                        <ul class="project-tags">{tags}</ul>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section id="projects" class="section projects">
            <div class="container">
                <h2 class="section-title">"Projects"</h2>
                <div class="filter-buttons" role="group" aria-label="Filter projects">
                    {buttons}
                </div>
                <div class="projects-grid">{cards}</div>
            </div>
        </section>
    }
}
