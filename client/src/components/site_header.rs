//! Fixed header with section navigation and the collapsible menu.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::NAV_LINKS;
use crate::state::menu::MenuState;
use effects::scroll::ScrollState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu = expect_context::<RwSignal<MenuState>>();
    let scroll = expect_context::<RwSignal<ScrollState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || match browser::dismiss_on_escape(menu) {
        Ok(listener) => crate::util::retain_until_cleanup(listener),
        Err(err) => log::error!("menu escape handling not wired: {err}"),
    });

    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let target = link.target;
            let is_active = move || scroll.with(|s| s.active_section.as_deref() == Some(target));
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                menu.update(MenuState::close);
                #[cfg(feature = "hydrate")]
                {
                    if let Err(err) = crate::util::dom::scroll_to_section(target) {
                        log::error!("nav link: {err}");
                    }
                }
            };
            view! {
                <li class="nav-item">
                    <a href=format!("#{target}") class="nav-link" class:active=is_active on:click=on_click>
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="header" class:scrolled=move || scroll.with(|s| s.header_scrolled)>
            <nav class="nav container">
                <a href="#home" class="nav-logo">"Portfolio"</a>
                <ul id="nav-menu" class="nav-menu" class:active=move || menu.get().open>
                    {links}
                </ul>
                <div class="nav-actions">
                    <ThemeToggle/>
                    <button
                        class="hamburger"
                        class:active=move || menu.get().open
                        aria-label="Toggle navigation"
                        aria-controls="nav-menu"
                        aria-expanded=move || menu.get().aria_expanded()
                        on:click=move |_| menu.update(MenuState::toggle)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_events::EventListener;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Event, KeyboardEvent};

    use crate::state::menu::{MenuState, is_dismiss_key};
    use crate::util::dom::{self, DomError};

    pub fn dismiss_on_escape(menu: RwSignal<MenuState>) -> Result<EventListener, DomError> {
        let document = dom::document()?;
        Ok(EventListener::new(&document, "keydown", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if is_dismiss_key(&event.key()) && menu.get_untracked().open {
                menu.update(MenuState::close);
            }
        }))
    }
}
