//! Scroll-driven page state: progress fraction, header style, active section.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::consts::{HEADER_SCROLLED_PX, SECTION_ACTIVATION_OFFSET_PX};

/// Raw viewport measurements taken on a scroll notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

/// Vertical extent of a page section, in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self { id: id.into(), top, height }
    }

    fn contains(&self, offset: f64) -> bool {
        self.top - SECTION_ACTIVATION_OFFSET_PX <= offset && offset < self.top + self.height
    }
}

/// Percentage of the scrollable range already scrolled, in `[0, 100]`.
///
/// A page with no scrollable range reports 0.
#[must_use]
pub fn scroll_fraction(metrics: ScrollMetrics) -> f64 {
    let range = metrics.document_height - metrics.viewport_height;
    if range <= 0.0 || !range.is_finite() {
        return 0.0;
    }
    let fraction = 100.0 * metrics.offset / range;
    if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 100.0) }
}

/// Whether the header should switch to its scrolled style.
#[must_use]
pub fn header_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLLED_PX
}

/// The last section, in document order, whose activation window holds `offset`.
#[must_use]
pub fn locate_section(offset: f64, sections: &[SectionBox]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(offset))
        .map(|section| section.id.as_str())
}

/// Derived scroll state published to the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub fraction: f64,
    pub header_scrolled: bool,
    pub active_section: Option<String>,
}

/// Recomputes [`ScrollState`] on each scroll notification.
///
/// The active section is sticky: when no section matches, the previous one is
/// kept.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    state: ScrollState,
}

impl ScrollTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, metrics: ScrollMetrics, sections: &[SectionBox]) -> &ScrollState {
        self.state.fraction = scroll_fraction(metrics);
        self.state.header_scrolled = header_scrolled(metrics.offset);
        if let Some(id) = locate_section(metrics.offset, sections)
            && self.state.active_section.as_deref() != Some(id)
        {
            self.state.active_section = Some(id.to_owned());
        }
        &self.state
    }

    #[must_use]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }
}
