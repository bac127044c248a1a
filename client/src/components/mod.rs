//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render server-side and hydrate in place. Shared page state
//! (theme, menu, scroll) arrives through Leptos context; browser-only wiring
//! sits behind `#[cfg(feature = "hydrate")]` and is torn down with the
//! component.

pub mod contact_form;
pub mod footer;
pub mod hero;
pub mod particle_field;
pub mod projects;
pub mod reveal;
pub mod scroll_progress;
pub mod site_header;
pub mod stats;
pub mod theme_toggle;
