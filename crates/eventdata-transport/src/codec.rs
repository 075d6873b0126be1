//! Codec trait with JSON and XML implementations

use crate::canonical::Canonical;
use crate::xml_text::preserve_text_whitespace;
use eventdata_core::EventError;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors that can occur during encoding/decoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            CodecError::Deserialization(err.to_string())
        } else {
            CodecError::Serialization(err.to_string())
        }
    }
}

impl From<CodecError> for EventError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Serialization(msg) => EventError::MarshalError(msg),
            CodecError::Deserialization(msg) | CodecError::InvalidFormat(msg) => {
                EventError::UnmarshalError(msg)
            }
        }
    }
}

/// Trait for structured-data encoding and decoding
pub trait Codec: Send + Sync {
    /// Encode a value to bytes
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError>;

    /// Decode bytes to a value
    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError>;

    /// Decode bytes into an existing target
    ///
    /// The target is only replaced when decoding succeeds.
    fn decode_into<T: DeserializeOwned>(
        &self,
        data: &[u8],
        target: &mut T,
    ) -> Result<(), CodecError> {
        *target = self.decode(data)?;
        Ok(())
    }

    /// Get the canonical content type for this codec
    fn content_type(&self) -> &'static str;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// JSON codec implementation using serde_json
///
/// Output is always compact. Map entries are written in sorted key order;
/// struct fields keep their declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl JsonCodec {
    /// Create a new JSON codec
    pub fn new() -> Self {
        Self
    }
}

impl Codec for JsonCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(&Canonical(value)).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(data).map_err(Into::into)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// XML codec implementation using quick-xml
///
/// Field-level serde attributes drive the element layout: `rename` remaps the
/// element name, `skip_serializing_if` omits empty fields, and sequence fields
/// are written as one repeated element per item. Leading and trailing
/// whitespace in text content is significant and survives decoding.
#[derive(Debug, Clone, Default)]
pub struct XmlCodec {
    /// Root element override; `None` uses the value's type name
    root_tag: Option<String>,
}

impl XmlCodec {
    /// Create an XML codec that names the root element after the value's type
    pub fn new() -> Self {
        Self { root_tag: None }
    }

    /// Create an XML codec with a fixed root element name
    pub fn with_root_tag(tag: impl Into<String>) -> Self {
        Self {
            root_tag: Some(tag.into()),
        }
    }

    pub fn root_tag(&self) -> Option<&str> {
        self.root_tag.as_deref()
    }
}

impl Codec for XmlCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        let xml = match &self.root_tag {
            Some(tag) => quick_xml::se::to_string_with_root(tag, value),
            None => quick_xml::se::to_string(value),
        };
        xml.map(String::into_bytes)
            .map_err(|e| CodecError::Serialization(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| CodecError::InvalidFormat(format!("XML payload is not UTF-8: {e}")))?;
        let prepared = preserve_text_whitespace(text)
            .map_err(|e| CodecError::Deserialization(e.to_string()))?;
        quick_xml::de::from_str(&prepared).map_err(|e| CodecError::Deserialization(e.to_string()))
    }

    fn content_type(&self) -> &'static str {
        "application/xml"
    }

    fn name(&self) -> &'static str {
        "xml"
    }
}

/// The structured-data codecs a payload can be transcoded with
///
/// New formats are added as new variants.
#[derive(Debug, Clone)]
pub enum DataCodec {
    Json(JsonCodec),
    Xml(XmlCodec),
}

impl DataCodec {
    pub fn is_json(&self) -> bool {
        matches!(self, DataCodec::Json(_))
    }

    pub fn is_xml(&self) -> bool {
        matches!(self, DataCodec::Xml(_))
    }
}

impl Default for DataCodec {
    fn default() -> Self {
        DataCodec::Json(JsonCodec)
    }
}

impl Codec for DataCodec {
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            DataCodec::Json(codec) => codec.encode(value),
            DataCodec::Xml(codec) => codec.encode(value),
        }
    }

    fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, CodecError> {
        match self {
            DataCodec::Json(codec) => codec.decode(data),
            DataCodec::Xml(codec) => codec.decode(data),
        }
    }

    fn content_type(&self) -> &'static str {
        match self {
            DataCodec::Json(codec) => codec.content_type(),
            DataCodec::Xml(codec) => codec.content_type(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DataCodec::Json(codec) => codec.name(),
            DataCodec::Xml(codec) => codec.name(),
        }
    }
}
