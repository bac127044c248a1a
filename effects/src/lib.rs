//! Host-independent logic for the portfolio page's visual effects.
//!
//! Everything here is plain Rust with no browser dependency, so it runs under
//! `cargo test` natively. The `client` crate owns the browser side: it wires
//! DOM events, timers, and `requestAnimationFrame` to the state machines
//! defined here and renders their outputs.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`particles`] | Decorative particle field with wall-bounce reflection |
//! | [`ramp`] | Statistic counter ramp (fixed duration, fixed frame interval) |
//! | [`reveal`] | One-shot bookkeeping for elements entering the viewport |
//! | [`scroll`] | Scroll fraction, header state, and active section |
//! | [`pace`] | Throttle and debounce windows for high-frequency events |
//! | [`consts`] | Shared numeric constants (speeds, windows, thresholds) |
//! | [`error`] | Error type for contract violations |

pub mod consts;
pub mod error;
pub mod pace;
pub mod particles;
pub mod ramp;
pub mod reveal;
pub mod scroll;

pub use error::EffectsError;
