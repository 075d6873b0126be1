#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn TranscoderConfig___default___has_expected_values() {
    let config = TranscoderConfig::default();

    assert_eq!(config.log_level, "info");
    assert!(config.xml_root_tag.is_none());
}

#[test]
fn TranscoderConfig___from_empty_bytes___returns_defaults() {
    let config = TranscoderConfig::from_json(&[]).unwrap();

    assert_eq!(config, TranscoderConfig::default());
}

#[test]
fn TranscoderConfig___from_json___parses_xml_root_tag() {
    let json = r#"{"xml_root_tag": "Data"}"#;

    let config = TranscoderConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.xml_root_tag.as_deref(), Some("Data"));
    assert_eq!(config.log_level, "info");
}

#[test_case(r#"{"log_level": "trace"}"#, LogLevel::Trace)]
#[test_case(r#"{"log_level": "debug"}"#, LogLevel::Debug)]
#[test_case(r#"{"log_level": "warn"}"#, LogLevel::Warn)]
#[test_case(r#"{}"#, LogLevel::Info)]
fn TranscoderConfig___log_level_json___parses_correctly(json: &str, expected: LogLevel) {
    let config = TranscoderConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.log_level().unwrap(), expected);
}

#[test]
fn TranscoderConfig___from_json___invalid_json_is_config_error() {
    let result = TranscoderConfig::from_json(b"{not json");

    assert!(matches!(result, Err(EventError::ConfigError(_))));
}

#[test]
fn TranscoderConfig___from_json___unknown_log_level_is_config_error() {
    let result = TranscoderConfig::from_json(br#"{"log_level": "chatty"}"#);

    assert!(matches!(result, Err(EventError::ConfigError(_))));
}

#[test_case("Data", true)]
#[test_case("_root", true)]
#[test_case("ns:event-data.v1", true)]
#[test_case("", false)]
#[test_case("1root", false)]
#[test_case("has space", false)]
#[test_case("<tag>", false)]
fn TranscoderConfig___validate___checks_xml_root_tag(tag: &str, valid: bool) {
    let config = TranscoderConfig::new().with_xml_root_tag(tag);

    assert_eq!(config.validate().is_ok(), valid);
}

#[test]
fn TranscoderConfig___builders___set_fields() {
    let config = TranscoderConfig::new()
        .with_xml_root_tag("Payload")
        .with_log_level("debug");

    assert_eq!(config.xml_root_tag.as_deref(), Some("Payload"));
    assert_eq!(config.log_level().unwrap(), LogLevel::Debug);
}
