//! Content-type parsing and codec selection

use crate::codec::{DataCodec, JsonCodec, XmlCodec};
use eventdata_core::TranscoderConfig;

/// Returns the media-type token of a content-type string
///
/// Parameters after the first `;` are dropped and surrounding whitespace is
/// trimmed, so `"application/json; charset=utf-8"` yields `"application/json"`.
pub fn media_type(content_type: &str) -> &str {
    match content_type.split_once(';') {
        Some((token, _params)) => token.trim(),
        None => content_type.trim(),
    }
}

/// Whether a content type selects the XML codec
///
/// This is a case-sensitive, unanchored substring match for `"xml"` on the
/// media-type token. It is intentionally loose: `"application/xmlfoo"` and
/// `"application/atom+xml"` both match, while `"application/XML"` does not.
pub fn is_xml(content_type: &str) -> bool {
    media_type(content_type).contains("xml")
}

/// Choose the codec for a declared content type
///
/// Always succeeds. Anything that is not XML, including an unset or empty
/// content type, is treated as JSON.
pub fn select_codec(content_type: Option<&str>, config: &TranscoderConfig) -> DataCodec {
    match content_type {
        Some(ct) if is_xml(ct) => DataCodec::Xml(match &config.xml_root_tag {
            Some(tag) => XmlCodec::with_root_tag(tag.clone()),
            None => XmlCodec::new(),
        }),
        _ => DataCodec::Json(JsonCodec::new()),
    }
}
