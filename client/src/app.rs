//! Root application component and the server-rendered HTML shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::{menu::MenuState, theme::Theme};
use effects::scroll::ScrollState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The document starts dark; hydration swaps in the stored preference.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme=Theme::default().as_str()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the page-wide signals (theme, menu, scroll) and mounts the single
/// route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(Theme::default());
    provide_context(theme);
    provide_context(RwSignal::new(MenuState::default()));
    provide_context(RwSignal::new(ScrollState::default()));

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let stored = crate::util::theme::read_preference();
        crate::util::theme::apply(stored);
        theme.set(stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Portfolio"/>
        <Meta name="description" content="Portfolio of a full-stack developer: projects, background, and contact."/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
