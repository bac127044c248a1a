//! Browser adapters shared across client components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web-sys`, `gloo`, or `localStorage` lives here so
//! components only wire signals. Modules that cannot mean anything outside a
//! browser compile under `hydrate` only; the rest expose no-op fallbacks for
//! SSR, the way `theme` does.

pub mod dom;
pub mod focus;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod observer;
#[cfg(feature = "hydrate")]
pub mod pace;
#[cfg(feature = "hydrate")]
pub mod schedule;
#[cfg(feature = "hydrate")]
pub mod viewport;

/// Keep a non-`Send` browser handle alive until the current reactive owner
/// is cleaned up, then drop it (removing listeners, cancelling timers).
#[cfg(feature = "hydrate")]
pub fn retain_until_cleanup<T: 'static>(handle: T) {
    use leptos::prelude::*;

    let slot = StoredValue::new_local(Some(handle));
    on_cleanup(move || {
        slot.try_update_value(|held| {
            held.take();
        });
    });
}
