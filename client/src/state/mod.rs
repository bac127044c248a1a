//! Page state machines.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `menu`, `projects`, `contact`) so each
//! component depends on a small focused model. Nothing here touches the
//! browser; components hold these models in signals and hydrate-only adapters
//! drive their timed transitions.

pub mod contact;
pub mod menu;
pub mod projects;
pub mod theme;
