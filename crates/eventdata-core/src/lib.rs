//! eventdata-core - Envelope metadata types, errors, and configuration
//!
//! This crate provides the foundational types shared by the eventdata crates:
//! - [`SpecVersion`] for the envelope's declared spec version
//! - [`ContentEncoding`] for the payload's transport-text transform
//! - [`EventError`] for error handling
//! - [`TranscoderConfig`] for codec configuration

mod config;
mod encoding;
mod error;
mod spec_version;

pub use config::TranscoderConfig;
pub use encoding::ContentEncoding;
pub use error::{EventError, EventResult};
pub use spec_version::SpecVersion;

/// Log levels understood by the logging setup
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl std::str::FromStr for LogLevel {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(EventError::ConfigError(format!("unknown log level: {other}"))),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ContentEncoding, EventError, EventResult, LogLevel, SpecVersion, TranscoderConfig,
    };
}
