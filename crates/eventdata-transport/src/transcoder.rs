//! Payload transcoding between in-memory values and stored bytes
//!
//! The write path is `value -> codec -> content encoding -> payload`; the read
//! path reverses it. Both are synchronous, in-memory and deterministic, so a
//! failure is never retried.

use crate::codec::{Codec, CodecError, DataCodec};
use crate::content_encoding::{decode_payload, encode_payload};
use crate::media_type::select_codec;
use eventdata_core::{ContentEncoding, EventError, TranscoderConfig};
use once_cell::sync::Lazy;
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Errors surfaced by the transcoding paths
#[derive(Error, Debug)]
pub enum TranscodeError {
    /// The selected codec could not serialize the value
    #[error("failed to marshal data: {0}")]
    Marshal(#[source] CodecError),

    /// The stored payload is not valid for its declared content encoding
    #[error("failed to decode {encoding} payload: {message}")]
    Decoding {
        encoding: ContentEncoding,
        message: String,
    },

    /// The decoded bytes do not fit the codec's grammar or the target's shape
    #[error("failed to unmarshal data: {0}")]
    Unmarshal(#[source] CodecError),
}

impl From<TranscodeError> for EventError {
    fn from(err: TranscodeError) -> Self {
        match err {
            TranscodeError::Marshal(e) => EventError::MarshalError(e.to_string()),
            TranscodeError::Decoding { message, .. } => EventError::DecodingError(message),
            TranscodeError::Unmarshal(e) => EventError::UnmarshalError(e.to_string()),
        }
    }
}

static SHARED: Lazy<Transcoder> = Lazy::new(Transcoder::default);

/// Content-type driven transcoding engine
///
/// Holds no mutable state; one instance can serve any number of envelopes.
#[derive(Debug, Clone, Default)]
pub struct Transcoder {
    config: TranscoderConfig,
}

impl Transcoder {
    /// Create a transcoder with the given configuration
    pub fn new(config: TranscoderConfig) -> Self {
        Self { config }
    }

    /// Process-wide transcoder with the default configuration
    pub fn shared() -> &'static Transcoder {
        &SHARED
    }

    pub fn config(&self) -> &TranscoderConfig {
        &self.config
    }

    /// Codec selected for a content type
    pub fn codec_for(&self, content_type: Option<&str>) -> DataCodec {
        select_codec(content_type, &self.config)
    }

    /// Write path: marshal a value and apply the content encoding
    pub fn encode<T: Serialize + ?Sized>(
        &self,
        content_type: Option<&str>,
        encoding: ContentEncoding,
        value: &T,
    ) -> Result<Vec<u8>, TranscodeError> {
        let codec = self.codec_for(content_type);
        let raw = codec.encode(value).map_err(|e| {
            tracing::warn!("Failed to marshal data with {} codec: {}", codec.name(), e);
            TranscodeError::Marshal(e)
        })?;
        let raw_len = raw.len();
        let payload = encode_payload(encoding, raw);
        tracing::trace!(
            "Encoded {} bytes with {} codec into {} byte payload (encoding: {:?})",
            raw_len,
            codec.name(),
            payload.len(),
            encoding
        );
        Ok(payload)
    }

    /// Read path: reverse the content encoding and unmarshal into `target`
    ///
    /// An absent or empty payload is the "no data" state: `target` is left
    /// untouched and `Ok(())` is returned without decoding anything. On a
    /// decoding or unmarshal failure `target` is also left untouched.
    pub fn decode_into<T: DeserializeOwned>(
        &self,
        content_type: Option<&str>,
        encoding: ContentEncoding,
        payload: Option<&[u8]>,
        target: &mut T,
    ) -> Result<(), TranscodeError> {
        let Some(payload) = payload.filter(|p| !p.is_empty()) else {
            tracing::debug!("No payload to decode, leaving target unchanged");
            return Ok(());
        };

        let raw = decode_payload(encoding, payload).map_err(|e| {
            tracing::warn!("Failed to decode {:?} payload: {}", encoding, e);
            TranscodeError::Decoding {
                encoding,
                message: e.to_string(),
            }
        })?;

        let codec = self.codec_for(content_type);
        codec.decode_into(&raw, target).map_err(|e| {
            tracing::warn!("Failed to unmarshal data with {} codec: {}", codec.name(), e);
            TranscodeError::Unmarshal(e)
        })?;
        tracing::trace!("Decoded {} byte payload with {} codec", payload.len(), codec.name());
        Ok(())
    }

    /// Read path into a freshly allocated target
    ///
    /// Returns `Ok(None)` when there is no payload.
    pub fn decode<T: DeserializeOwned + Default>(
        &self,
        content_type: Option<&str>,
        encoding: ContentEncoding,
        payload: Option<&[u8]>,
    ) -> Result<Option<T>, TranscodeError> {
        if payload.is_none_or(|p| p.is_empty()) {
            return Ok(None);
        }
        let mut target = T::default();
        self.decode_into(content_type, encoding, payload, &mut target)?;
        Ok(Some(target))
    }
}
