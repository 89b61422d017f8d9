use super::*;

#[test]
fn missing_globals_have_readable_messages() {
    assert_eq!(PageError::NoWindow.to_string(), "no global window");
    assert_eq!(PageError::NoDocument.to_string(), "window has no document");
    assert_eq!(PageError::NoBody.to_string(), "document has no body");
}

#[test]
fn config_parse_wraps_serde_error() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let page_err = PageError::from(err);
    assert!(matches!(page_err, PageError::ConfigParse(_)));
    assert!(page_err.to_string().starts_with("invalid page config:"));
}

#[test]
fn config_value_names_the_field() {
    let err = PageError::ConfigValue { field: "counter_tick_ms", reason: "must be greater than zero" };
    assert_eq!(err.to_string(), "invalid page config value `counter_tick_ms`: must be greater than zero");
}
