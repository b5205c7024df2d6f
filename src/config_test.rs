use super::*;

#[test]
fn defaults_match_server_markup() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.toggle_id, "menuToggle");
    assert_eq!(cfg.sidebar_selector, ".sidebar");
    assert_eq!(cfg.active_class, "active");
    assert_eq!(cfg.confirm_selector(), "[data-confirm]");
    assert_eq!(cfg.alert_selector, ".alert");
    assert_eq!(cfg.mobile_breakpoint_px, 768.0);
    assert_eq!(cfg.alert_lifecycle(), AlertLifecycle::default());
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = PageConfig::from_json(r#"{ "mobileBreakpointPx": 1024, "alertFadeDelayMs": 8000 }"#).unwrap();
    assert_eq!(cfg.mobile_breakpoint_px, 1024.0);
    assert_eq!(cfg.alert_lifecycle().fade_at_ms(), 8000);
    assert_eq!(cfg.alert_lifecycle().remove_at_ms(), 8300);
    assert_eq!(cfg.toggle_id, "menuToggle");
}

#[test]
fn confirm_selector_follows_attribute() {
    let cfg = PageConfig::from_json(r#"{ "confirmAttribute": "data-ask" }"#).unwrap();
    assert_eq!(cfg.confirm_selector(), "[data-ask]");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = PageConfig::from_json(r#"{ "sidebar": ".nav" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn malformed_json_is_rejected() {
    assert!(matches!(PageConfig::from_json("{ nope"), Err(ConfigError::Json(_))));
}

#[test]
fn blank_names_are_rejected() {
    let err = PageConfig::from_json(r#"{ "activeClass": "  " }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { field: "activeClass" }));
    assert_eq!(err.to_string(), "invalid page config: activeClass must not be empty");
}
