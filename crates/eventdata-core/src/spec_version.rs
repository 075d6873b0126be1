//! Envelope spec versions

use crate::EventError;
use serde::{Deserialize, Serialize};

/// Spec version declared by an envelope
///
/// The data payload is transcoded identically for every version; the version
/// only travels with the envelope's metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecVersion {
    #[serde(rename = "0.1")]
    V01,
    #[serde(rename = "0.2")]
    V02,
    #[default]
    #[serde(rename = "0.3")]
    V03,
}

impl SpecVersion {
    /// All supported versions, oldest first
    pub const ALL: [SpecVersion; 3] = [SpecVersion::V01, SpecVersion::V02, SpecVersion::V03];

    /// The version's wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecVersion::V01 => "0.1",
            SpecVersion::V02 => "0.2",
            SpecVersion::V03 => "0.3",
        }
    }
}

impl std::str::FromStr for SpecVersion {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0.1" => Ok(SpecVersion::V01),
            "0.2" => Ok(SpecVersion::V02),
            "0.3" => Ok(SpecVersion::V03),
            other => Err(EventError::UnknownSpecVersion(other.to_string())),
        }
    }
}

impl std::fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
