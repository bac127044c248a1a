//! Timing and presentation constants owned by the client crate.
//!
//! Effect physics and pacing constants live in `effects::consts`.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the literal `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

// ── Project filter ──────────────────────────────────────────────

/// Exit transition length before a filtered-out card leaves the layout.
pub const FILTER_EXIT_MS: u32 = 300;

// ── Contact form ────────────────────────────────────────────────

/// Simulated submission latency.
pub const SUBMIT_LATENCY_MS: u32 = 2000;

/// How long the success notice stays on screen.
pub const SUCCESS_NOTICE_MS: u32 = 5000;

// ── Visibility ──────────────────────────────────────────────────

/// Fraction of an element that must be visible to trigger its reveal.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Shrinks the observed viewport so reveals start slightly after entry.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Selector for every element the visibility animator observes.
pub const REVEAL_SELECTOR: &str = ".reveal, .stat-number";

/// Selector for the sections the scroll tracker measures.
pub const SECTION_SELECTOR: &str = "section[id]";
