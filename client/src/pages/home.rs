//! The one-page portfolio.
//!
//! ARCHITECTURE
//! ============
//! Sections render as plain components. Once hydrated, the page installs the
//! behaviors that span sections: the throttled scroll tracker feeding the
//! shared [`ScrollState`], the visibility animator for `.reveal` blocks and
//! statistic counters, and keyboard focus outlines. A missing anchor element
//! is logged and leaves only that behavior unwired.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::projects::Projects;
use crate::components::reveal::Reveal;
use crate::components::scroll_progress::ScrollProgress;
use crate::components::site_header::SiteHeader;
use crate::components::stats::Stats;
use effects::scroll::ScrollState;

#[component]
pub fn HomePage() -> impl IntoView {
    let scroll = expect_context::<RwSignal<ScrollState>>();

    #[cfg(feature = "hydrate")]
    Effect::new(move || browser::install(scroll));
    #[cfg(not(feature = "hydrate"))]
    let _ = scroll;

    view! {
        <ScrollProgress/>
        <SiteHeader/>
        <main>
            <Hero/>
            <section id="about" class="section about">
                <div class="container">
                    <h2 class="section-title">"About Me"</h2>
                    <div class="about-grid">
                        <Reveal id="about-bio" extra_class="about-text">
                            <p>
                                "I design and build software end to end, from database schemas to the "
                                "last pixel of an animation. Lately that means Rust on the server and in "
                                "the browser."
                            </p>
                            <p>
                                "I care about fast pages, clear interfaces, and code the next person can "
                                "read."
                            </p>
                        </Reveal>
                        <Reveal id="about-skills" extra_class="about-skills">
                            <ul class="skill-list">
                                <li>"Rust"</li>
                                <li>"TypeScript"</li>
                                <li>"Leptos"</li>
                                <li>"PostgreSQL"</li>
                                <li>"Figma"</li>
                            </ul>
                        </Reveal>
                    </div>
                    <Stats/>
                </div>
            </section>
            <Projects/>
            <ContactForm/>
        </main>
        <Footer/>
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use effects::consts::SCROLL_THROTTLE_MS;
    use effects::scroll::{ScrollState, ScrollTracker};
    use leptos::prelude::*;

    use crate::consts::{REVEAL_SELECTOR, SECTION_SELECTOR};
    use crate::util::dom::{self, DomError};
    use crate::util::focus::FocusOutline;
    use crate::util::observer::VisibilityAnimator;
    use crate::util::pace::{ThrottledListener, throttled_listener};
    use crate::util::retain_until_cleanup;
    use crate::util::viewport;

    pub fn install(scroll: RwSignal<ScrollState>) {
        match track_scroll(scroll) {
            Ok(listener) => retain_until_cleanup(listener),
            Err(err) => log::error!("scroll tracking not wired: {err}"),
        }
        match VisibilityAnimator::install(REVEAL_SELECTOR) {
            Ok(animator) => retain_until_cleanup(animator),
            Err(err) => log::error!("reveal animations not wired: {err}"),
        }
        match FocusOutline::install() {
            Ok(outline) => retain_until_cleanup(outline),
            Err(err) => log::error!("focus outlines not wired: {err}"),
        }
    }

    fn track_scroll(scroll: RwSignal<ScrollState>) -> Result<ThrottledListener, DomError> {
        let window = dom::window()?;
        let sections = viewport::section_elements(SECTION_SELECTOR)?;
        let mut tracker = ScrollTracker::new();

        let mut publish = move || match viewport::measure_scroll() {
            Ok(metrics) => {
                let boxes = viewport::measure_sections(&sections);
                let next = tracker.on_scroll(metrics, &boxes);
                if scroll.with_untracked(|current| current != next) {
                    scroll.set(next.clone());
                }
            }
            Err(err) => log::warn!("scroll measurement failed: {err}"),
        };
        publish();
        Ok(throttled_listener(&window, "scroll", SCROLL_THROTTLE_MS, publish))
    }
}
