//! eventdata-transport - Content-type driven payload transcoding
//!
//! This crate provides:
//! - [`Codec`] trait with [`JsonCodec`] and [`XmlCodec`] implementations
//! - [`select_codec`] choosing a [`DataCodec`] from a declared content type
//! - [`Transcoder`] running the marshal/encode and decode/unmarshal paths
//! - [`Event`] envelope exposing `set_data` and `data_as`

mod canonical;
mod codec;
mod content_encoding;
mod event;
mod media_type;
mod transcoder;
mod xml_text;

pub use codec::{Codec, CodecError, DataCodec, JsonCodec, XmlCodec};
pub use content_encoding::{decode_payload, encode_payload};
pub use event::Event;
pub use media_type::{is_xml, media_type, select_codec};
pub use transcoder::{TranscodeError, Transcoder};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Codec, CodecError, DataCodec, Event, JsonCodec, TranscodeError, Transcoder, XmlCodec,
    };
}
