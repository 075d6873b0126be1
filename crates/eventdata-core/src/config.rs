//! Transcoder configuration

use crate::{EventError, EventResult, LogLevel};
use serde::{Deserialize, Serialize};

/// Configuration for the data transcoder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscoderConfig {
    /// Root element name used by the XML codec
    ///
    /// When unset, the root element is the serialized value's type name.
    /// Map-shaped values have no type name and need this to be set.
    #[serde(default)]
    pub xml_root_tag: Option<String>,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            xml_root_tag: None,
            log_level: default_log_level(),
        }
    }
}

impl TranscoderConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    ///
    /// Empty input yields the default configuration.
    pub fn from_json(bytes: &[u8]) -> EventResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the XML root element name
    pub fn with_xml_root_tag(mut self, tag: impl Into<String>) -> Self {
        self.xml_root_tag = Some(tag.into());
        self
    }

    /// Set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Parsed log level
    pub fn log_level(&self) -> EventResult<LogLevel> {
        self.log_level.parse()
    }

    /// Check that every field holds a usable value
    pub fn validate(&self) -> EventResult<()> {
        self.log_level()?;
        if let Some(tag) = &self.xml_root_tag
            && !is_xml_name(tag)
        {
            return Err(EventError::ConfigError(format!("invalid XML root tag: {tag:?}")));
        }
        Ok(())
    }
}

// Loose NCName-style check: a letter or underscore, then name characters.
fn is_xml_name(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

#[cfg(test)]
#[path = "config/config_tests.rs"]
mod config_tests;
