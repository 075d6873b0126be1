//! Property-based tests for payload transcoding
//!
//! Every content type × content encoding combination must reproduce the value
//! that was set, and base64 payloads must always be valid padded text.

use eventdata_core::{ContentEncoding, SpecVersion};
use eventdata_transport::{Event, TranscodeError};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Sample {
    #[serde(rename = "n")]
    number: i64,
    #[serde(rename = "flag")]
    flag: bool,
    #[serde(rename = "item", default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<String>,
}

// Strategy: printable text, optionally padded with spaces and tabs
fn arb_text() -> impl Strategy<Value = String> {
    "[ \t]{0,3}\\PC{1,30}[ \t]{0,3}"
}

fn arb_sample() -> impl Strategy<Value = Sample> {
    (
        any::<i64>(),
        any::<bool>(),
        prop::collection::vec(arb_text(), 0..8),
    )
        .prop_map(|(number, flag, items)| Sample {
            number,
            flag,
            items,
        })
}

fn arb_content_type() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("application/json")),
        Just(Some("text/json")),
        Just(Some("application/xml")),
        Just(Some("text/xml; charset=utf-8")),
    ]
}

fn arb_encoding() -> impl Strategy<Value = ContentEncoding> {
    prop_oneof![Just(ContentEncoding::Identity), Just(ContentEncoding::Base64)]
}

fn arb_version() -> impl Strategy<Value = SpecVersion> {
    prop::sample::select(SpecVersion::ALL.to_vec())
}

fn new_event(
    version: SpecVersion,
    content_type: Option<&str>,
    encoding: ContentEncoding,
) -> Event {
    let mut event = Event::new(version).with_content_encoding(encoding);
    if let Some(ct) = content_type {
        event.set_data_content_type(ct);
    }
    event
}

proptest! {
    /// Property: set_data followed by data_as reproduces the value
    #[test]
    fn proptest_struct_roundtrip(
        sample in arb_sample(),
        content_type in arb_content_type(),
        encoding in arb_encoding(),
        version in arb_version(),
    ) {
        let mut event = new_event(version, content_type, encoding);

        event.set_data(&sample).expect("struct values should marshal");
        let mut decoded = Sample::default();
        event.data_as(&mut decoded).expect("stored payload should unmarshal");

        prop_assert_eq!(decoded, sample);
    }

    /// Property: JSON maps round-trip under both encodings
    #[test]
    fn proptest_json_map_roundtrip(
        map in prop::collection::btree_map(".*", ".*", 0..16),
        encoding in arb_encoding(),
    ) {
        let mut event = new_event(SpecVersion::V03, Some("application/json"), encoding);

        event.set_data(&map).expect("string maps should marshal to JSON");
        let decoded: Option<BTreeMap<String, String>> =
            event.data_to().expect("stored payload should unmarshal");

        prop_assert_eq!(decoded, Some(map));
    }

    /// Property: base64 payloads are padded standard-alphabet text
    #[test]
    fn proptest_base64_payload_is_text(sample in arb_sample(), content_type in arb_content_type()) {
        let mut event = new_event(SpecVersion::V03, content_type, ContentEncoding::Base64);

        event.set_data(&sample).expect("struct values should marshal");
        let payload = event.data().expect("payload should be present");

        prop_assert_eq!(payload.len() % 4, 0);
        prop_assert!(payload
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=')));
    }

    /// Property: clearing data always leaves the target untouched
    #[test]
    fn proptest_clear_data_is_noop_for_reads(
        sample in arb_sample(),
        content_type in arb_content_type(),
        encoding in arb_encoding(),
    ) {
        let mut event = new_event(SpecVersion::V03, content_type, encoding);
        event.set_data(&sample).expect("struct values should marshal");

        event.clear_data();
        let mut target = sample.clone();
        event.data_as(&mut target).expect("absent payload is not an error");

        prop_assert!(event.data().is_none());
        prop_assert_eq!(target, sample);
    }

    /// Property: arbitrary bytes under base64 either decode or fail cleanly
    #[test]
    fn proptest_arbitrary_base64_payload_never_panics(
        raw in prop::collection::vec(any::<u8>(), 1..256),
        content_type in arb_content_type(),
    ) {
        let event = Event::new(SpecVersion::V03)
            .with_content_encoding(ContentEncoding::Base64)
            .with_raw_data(raw);
        let event = match content_type {
            Some(ct) => event.with_content_type(ct),
            None => event,
        };
        let mut target = Sample::default();

        match event.data_as(&mut target) {
            Ok(()) => {}
            Err(TranscodeError::Decoding { .. }) | Err(TranscodeError::Unmarshal(_)) => {
                prop_assert_eq!(target, Sample::default());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}

#[test]
fn test_unknown_content_type_is_json() {
    let mut event = Event::new(SpecVersion::V03).with_content_type("application/octet-stream");
    let mut map = BTreeMap::new();
    map.insert("hello", "unittest");

    event.set_data(&map).expect("map should marshal");

    assert_eq!(event.data(), Some(&br#"{"hello":"unittest"}"#[..]));
}

#[test]
fn test_empty_base64_payload_is_not_decoded() {
    let event = Event::new(SpecVersion::V03)
        .with_content_encoding(ContentEncoding::Base64)
        .with_raw_data(Vec::new());
    let mut target = Sample {
        number: 9,
        ..Default::default()
    };

    event.data_as(&mut target).expect("empty payload is not an error");

    assert_eq!(target.number, 9);
}
