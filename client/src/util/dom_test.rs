use super::*;

#[test]
fn missing_element_names_selector() {
    let err = DomError::missing("#particles");
    assert_eq!(err, DomError::MissingElement { selector: "#particles".to_owned() });
    assert_eq!(err.to_string(), "required element not found: #particles");
}

#[test]
fn unavailable_names_api() {
    let err = DomError::Unavailable { api: "localStorage" };
    assert_eq!(err.to_string(), "browser api unavailable: localStorage");
}

#[test]
fn effects_errors_pass_through() {
    let err = DomError::from(effects::EffectsError::InvalidBounds { width: -1.0, height: 2.0 });
    assert!(matches!(err, DomError::Effects(_)));
    assert_eq!(err.to_string(), effects::EffectsError::InvalidBounds { width: -1.0, height: 2.0 }.to_string());
}
