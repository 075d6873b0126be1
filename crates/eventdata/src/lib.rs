//! # eventdata
//!
//! Data payload transcoding for event envelopes.
//!
//! An [`Event`] carries a byte payload together with a declared content type
//! and content encoding. eventdata converts between in-memory values and that
//! payload:
//! - the content type picks the codec: anything containing `"xml"` uses XML,
//!   everything else (including no content type) uses JSON
//! - the `"base64"` content encoding wraps codec output in padded base64 text
//!
//! ## Quick Start
//!
//! ```
//! use eventdata::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! struct Reading {
//!     sensor: String,
//!     value: i32,
//! }
//!
//! # fn main() -> Result<(), TranscodeError> {
//! let mut event = Event::new(SpecVersion::V03)
//!     .with_content_type("application/json")
//!     .with_content_encoding(ContentEncoding::Base64);
//!
//! let reading = Reading { sensor: "t1".into(), value: 7 };
//! event.set_data(&reading)?;
//!
//! let mut decoded = Reading::default();
//! event.data_as(&mut decoded)?;
//! assert_eq!(decoded, reading);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`eventdata_core`] - Metadata value types, errors, and configuration
//! - [`eventdata_transport`] - Codecs, codec selection, and the transcoder
//! - [`eventdata_logging`] - Subscriber setup with runtime level reloading

// Re-export core types
pub use eventdata_core::{
    ContentEncoding, EventError, EventResult, LogLevel, SpecVersion, TranscoderConfig,
};

// Re-export transport types
pub use eventdata_transport::{
    Codec, CodecError, DataCodec, Event, JsonCodec, TranscodeError, Transcoder, XmlCodec,
    is_xml, media_type, select_codec,
};

// Re-export logging setup
pub use eventdata_logging::{ReloadHandle, init_logging, init_logging_from_config};

// Re-export dependencies for convenience
pub use serde;
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Codec, ContentEncoding, Event, EventError, EventResult, SpecVersion, TranscodeError,
        Transcoder, TranscoderConfig,
    };
    pub use serde::{Deserialize, Serialize};
}
