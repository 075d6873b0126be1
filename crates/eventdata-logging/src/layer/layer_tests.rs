#![allow(non_snake_case)]

use super::*;
use eventdata_core::EventError;

// Only this test installs the global subscriber in this binary.
#[test]
fn init_logging___called_twice___installs_once_and_enables_reload() {
    let first = init_logging(LogLevel::Info);
    let second = init_logging(LogLevel::Debug);

    tracing::info!("subscriber installed");

    assert!(first);
    assert!(!second);
    assert!(ReloadHandle::global().is_initialized());
    assert!(ReloadHandle::global().reload_level(LogLevel::Trace).is_ok());
}

#[test]
fn init_logging_from_config___invalid_level___is_config_error() {
    let config = TranscoderConfig::new().with_log_level("chatty");

    let result = init_logging_from_config(&config);

    assert!(matches!(result, Err(EventError::ConfigError(_))));
}
