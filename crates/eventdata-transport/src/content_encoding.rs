//! Byte-to-text transforms for declared content encodings

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use eventdata_core::ContentEncoding;
use std::borrow::Cow;

/// Apply the content encoding to codec output
///
/// Base64 uses the standard alphabet with `=` padding.
pub fn encode_payload(encoding: ContentEncoding, bytes: Vec<u8>) -> Vec<u8> {
    match encoding {
        ContentEncoding::Identity => bytes,
        ContentEncoding::Base64 => STANDARD.encode(bytes).into_bytes(),
    }
}

/// Reverse the content encoding of a stored payload
///
/// Identity payloads are borrowed as-is. Base64 text may be wrapped across
/// lines: CR and LF are skipped, any other stray byte is an error.
pub fn decode_payload(
    encoding: ContentEncoding,
    payload: &[u8],
) -> Result<Cow<'_, [u8]>, base64::DecodeError> {
    match encoding {
        ContentEncoding::Identity => Ok(Cow::Borrowed(payload)),
        ContentEncoding::Base64 => STANDARD.decode(unwrap_lines(payload)).map(Cow::Owned),
    }
}

fn unwrap_lines(text: &[u8]) -> Cow<'_, [u8]> {
    let is_line_break = |b: &u8| matches!(b, b'\r' | b'\n');
    if text.iter().any(is_line_break) {
        Cow::Owned(text.iter().copied().filter(|b| !is_line_break(b)).collect())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
#[path = "content_encoding/content_encoding_tests.rs"]
mod content_encoding_tests;
