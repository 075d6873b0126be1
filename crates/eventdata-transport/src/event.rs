//! Event envelope carrying metadata plus a transcoded data payload

use crate::media_type::media_type;
use crate::transcoder::{TranscodeError, Transcoder};
use eventdata_core::{ContentEncoding, SpecVersion};
use serde::{Serialize, de::DeserializeOwned};

/// Event envelope
///
/// Only `data_content_type`, `data_content_encoding` and the payload take part
/// in transcoding; the remaining fields are carried as-is.
///
/// The envelope is not internally synchronized. Callers sharing one envelope
/// between threads must serialize `set_data`/`data_as` themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    /// Declared spec version
    pub spec_version: SpecVersion,

    /// Event identifier
    pub id: String,

    /// Event source (URI reference)
    pub source: String,

    /// Event type (e.g., "com.example.object.created")
    pub event_type: String,

    /// Declared media type of the payload; unset means JSON
    pub data_content_type: Option<String>,

    /// Transport-text transform applied to the payload
    pub data_content_encoding: ContentEncoding,

    data: Option<Vec<u8>>,
}

impl Event {
    /// Create an empty envelope for a spec version
    pub fn new(spec_version: SpecVersion) -> Self {
        Self {
            spec_version,
            ..Self::default()
        }
    }

    /// Set event ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Set event source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Set event type
    pub fn with_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Set data content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.set_data_content_type(content_type);
        self
    }

    /// Set data content encoding
    pub fn with_content_encoding(mut self, encoding: ContentEncoding) -> Self {
        self.data_content_encoding = encoding;
        self
    }

    /// Attach an already-encoded payload as received from a transport
    ///
    /// The bytes are stored verbatim and must match the declared content
    /// type and encoding.
    pub fn with_raw_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn set_data_content_type(&mut self, content_type: impl Into<String>) {
        self.data_content_type = Some(content_type.into());
    }

    pub fn set_data_content_encoding(&mut self, encoding: ContentEncoding) {
        self.data_content_encoding = encoding;
    }

    /// Media-type token of the declared content type, without parameters
    pub fn data_media_type(&self) -> Option<&str> {
        self.data_content_type.as_deref().map(media_type)
    }

    /// Stored payload bytes, after content encoding
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn has_data(&self) -> bool {
        self.data.as_ref().is_some_and(|d| !d.is_empty())
    }

    /// Serialize a value into the payload
    ///
    /// The codec is chosen from the content type and the result is wrapped
    /// in the content encoding. On error the previous payload is kept.
    pub fn set_data<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), TranscodeError> {
        self.set_data_with(Transcoder::shared(), value)
    }

    /// [`Event::set_data`] with an explicitly configured transcoder
    pub fn set_data_with<T: Serialize + ?Sized>(
        &mut self,
        transcoder: &Transcoder,
        value: &T,
    ) -> Result<(), TranscodeError> {
        let payload = transcoder.encode(
            self.data_content_type.as_deref(),
            self.data_content_encoding,
            value,
        )?;
        self.data = Some(payload);
        Ok(())
    }

    /// Remove the payload; no codec is involved
    pub fn clear_data(&mut self) {
        self.data = None;
    }

    /// Deserialize the payload into `target`
    ///
    /// With no payload `target` is left as it was and `Ok(())` is returned.
    pub fn data_as<T: DeserializeOwned>(&self, target: &mut T) -> Result<(), TranscodeError> {
        self.data_as_with(Transcoder::shared(), target)
    }

    /// [`Event::data_as`] with an explicitly configured transcoder
    pub fn data_as_with<T: DeserializeOwned>(
        &self,
        transcoder: &Transcoder,
        target: &mut T,
    ) -> Result<(), TranscodeError> {
        transcoder.decode_into(
            self.data_content_type.as_deref(),
            self.data_content_encoding,
            self.data(),
            target,
        )
    }

    /// Deserialize the payload into a new value, or `None` when there is no payload
    pub fn data_to<T: DeserializeOwned + Default>(&self) -> Result<Option<T>, TranscodeError> {
        Transcoder::shared().decode(
            self.data_content_type.as_deref(),
            self.data_content_encoding,
            self.data(),
        )
    }
}
