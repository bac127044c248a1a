#![allow(clippy::float_cmp)]

use super::*;

fn metrics(offset: f64, document_height: f64, viewport_height: f64) -> ScrollMetrics {
    ScrollMetrics { offset, document_height, viewport_height }
}

fn page() -> Vec<SectionBox> {
    vec![
        SectionBox::new("home", 0.0, 800.0),
        SectionBox::new("about", 800.0, 600.0),
        SectionBox::new("projects", 1400.0, 900.0),
        SectionBox::new("contact", 2300.0, 700.0),
    ]
}

// =============================================================
// scroll_fraction
// =============================================================

#[test]
fn fraction_is_proportional_to_offset() {
    assert_eq!(scroll_fraction(metrics(0.0, 3000.0, 1000.0)), 0.0);
    assert_eq!(scroll_fraction(metrics(1000.0, 3000.0, 1000.0)), 50.0);
    assert_eq!(scroll_fraction(metrics(2000.0, 3000.0, 1000.0)), 100.0);
}

#[test]
fn fraction_is_clamped_to_range() {
    assert_eq!(scroll_fraction(metrics(2500.0, 3000.0, 1000.0)), 100.0);
    assert_eq!(scroll_fraction(metrics(-40.0, 3000.0, 1000.0)), 0.0);
}

#[test]
fn fraction_is_zero_without_scrollable_range() {
    assert_eq!(scroll_fraction(metrics(0.0, 900.0, 900.0)), 0.0);
    assert_eq!(scroll_fraction(metrics(15.0, 900.0, 900.0)), 0.0);
    assert_eq!(scroll_fraction(metrics(15.0, 500.0, 900.0)), 0.0);
}

#[test]
fn fraction_stays_in_range_for_sampled_inputs() {
    for offset in [-100.0, 0.0, 1.0, 333.3, 999.0, 5000.0, f64::NAN] {
        for (doc, view) in [(1000.0, 1000.0), (2000.0, 800.0), (10.0, 5.0)] {
            let f = scroll_fraction(metrics(offset, doc, view));
            assert!((0.0..=100.0).contains(&f), "offset {offset} doc {doc} view {view}: {f}");
        }
    }
}

// =============================================================
// header_scrolled
// =============================================================

#[test]
fn header_switches_strictly_past_threshold() {
    assert!(!header_scrolled(0.0));
    assert!(!header_scrolled(100.0));
    assert!(header_scrolled(100.5));
}

// =============================================================
// locate_section
// =============================================================

#[test]
fn locate_section_uses_activation_offset() {
    let sections = page();
    assert_eq!(locate_section(0.0, &sections), Some("home"));
    assert_eq!(locate_section(699.0, &sections), Some("home"));
    assert_eq!(locate_section(700.0, &sections), Some("about"));
    assert_eq!(locate_section(1350.0, &sections), Some("projects"));
    assert_eq!(locate_section(2250.0, &sections), Some("contact"));
}

#[test]
fn locate_section_prefers_last_matching_section() {
    let sections = page();
    // 750 lies in both home [0, 800) and about's window starting at 700.
    assert_eq!(locate_section(750.0, &sections), Some("about"));
}

#[test]
fn locate_section_none_past_last_section() {
    let sections = page();
    assert_eq!(locate_section(3000.0, &sections), None);
    assert_eq!(locate_section(100.0, &[]), None);
}

// =============================================================
// ScrollTracker
// =============================================================

#[test]
fn tracker_starts_empty() {
    let tracker = ScrollTracker::new();
    assert_eq!(tracker.state(), &ScrollState::default());
}

#[test]
fn tracker_publishes_all_derived_fields() {
    let mut tracker = ScrollTracker::new();
    let state = tracker.on_scroll(metrics(1500.0, 3000.0, 1000.0), &page()).clone();
    assert_eq!(state.fraction, 75.0);
    assert!(state.header_scrolled);
    assert_eq!(state.active_section.as_deref(), Some("projects"));
}

#[test]
fn tracker_keeps_previous_section_when_none_matches() {
    let mut tracker = ScrollTracker::new();
    tracker.on_scroll(metrics(2400.0, 4000.0, 1000.0), &page());
    assert_eq!(tracker.state().active_section.as_deref(), Some("contact"));

    let state = tracker.on_scroll(metrics(3100.0, 4000.0, 1000.0), &page());
    assert_eq!(state.active_section.as_deref(), Some("contact"));
    assert!(state.fraction > 99.0);
}

#[test]
fn tracker_without_any_match_stays_none() {
    let mut tracker = ScrollTracker::new();
    let state = tracker.on_scroll(metrics(50.0, 1000.0, 1000.0), &[]);
    assert_eq!(state.active_section, None);
    assert_eq!(state.fraction, 0.0);
    assert!(!state.header_scrolled);
}
