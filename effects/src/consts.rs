//! Shared numeric constants for the effects crate.

// ── Particles ───────────────────────────────────────────────────

/// Number of particles in the hero background.
pub const PARTICLE_COUNT: usize = 50;

/// Scale applied to the unit random velocity, in CSS pixels per frame.
pub const PARTICLE_SPEED: f64 = 0.5;

/// Sprite radius range in CSS pixels (half-open).
pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_MAX: f64 = 3.0;

/// Sprite opacity range (half-open).
pub const PARTICLE_OPACITY_MIN: f64 = 0.1;
pub const PARTICLE_OPACITY_MAX: f64 = 0.6;

// ── Counter ramp ────────────────────────────────────────────────

/// Total ramp duration in milliseconds.
pub const RAMP_DURATION_MS: u32 = 2000;

/// Interval between ramp ticks in milliseconds (about 60 fps).
pub const RAMP_FRAME_MS: u32 = 16;

// ── Scroll ──────────────────────────────────────────────────────

/// Scroll offset past which the header switches to its compact style.
pub const HEADER_SCROLLED_PX: f64 = 100.0;

/// Sections activate this many pixels before their top reaches the viewport top.
pub const SECTION_ACTIVATION_OFFSET_PX: f64 = 100.0;

// ── Pacing ──────────────────────────────────────────────────────

/// Scroll handlers run at most once per window.
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Resize handlers run once the viewport has been quiet this long.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;
