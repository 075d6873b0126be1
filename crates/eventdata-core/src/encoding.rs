//! Content encoding declared on an envelope's payload

use crate::EventError;
use serde::{Deserialize, Serialize};

/// Transport-text transform applied on top of the codec's raw bytes
///
/// The encoding never influences which codec is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContentEncoding {
    /// Codec bytes are stored as-is
    #[default]
    #[serde(rename = "")]
    Identity,
    /// Codec bytes are stored as standard, padded base64 text
    #[serde(rename = "base64")]
    Base64,
}

impl ContentEncoding {
    /// The encoding's wire string (empty for [`ContentEncoding::Identity`])
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Identity => "",
            ContentEncoding::Base64 => "base64",
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, ContentEncoding::Identity)
    }
}

impl std::str::FromStr for ContentEncoding {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(ContentEncoding::Identity),
            "base64" => Ok(ContentEncoding::Base64),
            other => Err(EventError::UnsupportedContentEncoding(other.to_string())),
        }
    }
}

impl std::fmt::Display for ContentEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
