//! Route-level pages.
//!
//! The site is a single scrolling page; [`home`] composes its sections and
//! owns the page-wide browser wiring.

pub mod home;
