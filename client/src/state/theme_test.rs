use super::*;

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn stored_literals_round_trip() {
    assert_eq!(Theme::from_stored(Some(Theme::Light.as_str())), Theme::Light);
    assert_eq!(Theme::from_stored(Some(Theme::Dark.as_str())), Theme::Dark);
}

#[test]
fn missing_preference_defaults_to_dark() {
    assert_eq!(Theme::from_stored(None), Theme::Dark);
}

#[test]
fn unrecognized_preference_defaults_to_dark() {
    assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("true")), Theme::Dark);
    assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
}

#[test]
fn toggled_flips_between_the_two_themes() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn toggle_label_names_the_next_theme() {
    assert!(Theme::Dark.toggle_label().contains("light"));
    assert!(Theme::Light.toggle_label().contains("dark"));
}
