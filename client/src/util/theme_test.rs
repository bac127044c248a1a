#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_defaults_to_dark_without_browser() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn toggle_returns_opposite_theme() {
    assert_eq!(toggle(Theme::Dark), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}

#[test]
fn apply_is_callable_without_browser() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
