#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn encode_payload___base64___uses_padded_standard_alphabet() {
    let encoded = encode_payload(ContentEncoding::Base64, br#"{"hello":"unittest"}"#.to_vec());

    assert_eq!(encoded, b"eyJoZWxsbyI6InVuaXR0ZXN0In0=");
}

#[test]
fn encode_payload___identity___returns_bytes_unchanged() {
    let encoded = encode_payload(ContentEncoding::Identity, b"<a>1</a>".to_vec());

    assert_eq!(encoded, b"<a>1</a>");
}

#[test]
fn decode_payload___identity___borrows_input() {
    let payload = b"raw bytes";

    let decoded = decode_payload(ContentEncoding::Identity, payload).unwrap();

    assert!(matches!(decoded, Cow::Borrowed(_)));
    assert_eq!(&*decoded, payload);
}

#[test]
fn decode_payload___base64___reverses_encoding() {
    let decoded = decode_payload(ContentEncoding::Base64, b"eyJoZWxsbyI6InVuaXR0ZXN0In0=").unwrap();

    assert_eq!(&*decoded, br#"{"hello":"unittest"}"#);
}

#[test_case(b"not base64!" ; "invalid symbol")]
#[test_case(b"eyJoZWxsbyI6InVuaXR0ZXN0In0" ; "missing padding")]
#[test_case(b"eyJo ZWxs" ; "embedded space")]
fn decode_payload___malformed_base64___is_error(payload: &[u8]) {
    let result = decode_payload(ContentEncoding::Base64, payload);

    assert!(result.is_err());
}

#[test_case(b"eyJoZWxsbyI6\r\nInVuaXR0ZXN0In0=" ; "crlf wrapped")]
#[test_case(b"eyJoZWxsbyI6\nInVuaXR0\nZXN0In0=\n" ; "lf wrapped with trailing newline")]
#[test_case(b"\r\neyJoZWxsbyI6InVuaXR0ZXN0In0=" ; "leading line break")]
fn decode_payload___base64_with_line_breaks___skips_them(payload: &[u8]) {
    let decoded = decode_payload(ContentEncoding::Base64, payload).unwrap();

    assert_eq!(&*decoded, br#"{"hello":"unittest"}"#);
}
