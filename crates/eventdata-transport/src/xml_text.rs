//! Whitespace-preserving preparation of XML payloads
//!
//! The quick-xml deserializer trims leading and trailing whitespace from text
//! content but passes CDATA through verbatim. Text whose edges are whitespace
//! is rewritten as CDATA so it reaches the target unchanged.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesCData, Event};
use std::borrow::Cow;

/// Rewrite whitespace-significant text as CDATA
///
/// Whitespace-only text counts as content only when it is the sole child of
/// an element; between elements it is formatting and is left alone. Input
/// without such text is returned borrowed.
pub(crate) fn preserve_text_whitespace(xml: &str) -> Result<Cow<'_, str>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut events = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Eof => break,
            event => events.push(event),
        }
    }

    let replacements: Vec<Option<Cow<'_, str>>> = (0..events.len())
        .map(|i| significant_text(&events, i))
        .collect();
    if replacements.iter().all(Option::is_none) {
        return Ok(Cow::Borrowed(xml));
    }

    let mut writer = Writer::new(Vec::with_capacity(xml.len() + 32));
    for (event, replacement) in events.into_iter().zip(replacements) {
        match replacement {
            Some(text) => {
                for cdata in BytesCData::escaped(&text) {
                    writer.write_event(Event::CData(cdata))?;
                }
            }
            None => writer.write_event(event)?,
        }
    }
    let bytes = writer.into_inner();
    // Every byte written comes from `xml` or from text decoded out of it.
    Ok(Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Unescaped text of `events[i]` if the deserializer would trim it
fn significant_text<'a>(events: &[Event<'a>], i: usize) -> Option<Cow<'a, str>> {
    let Event::Text(text) = &events[i] else {
        return None;
    };
    // Unknown entities are left for the deserializer to report.
    let text = text.unescape().ok()?;
    let bytes = text.as_bytes();
    let (first, last) = (bytes.first()?, bytes.last()?);
    if !is_xml_whitespace(*first) && !is_xml_whitespace(*last) {
        return None;
    }
    if bytes.iter().all(|b| is_xml_whitespace(*b)) {
        let prev = i.checked_sub(1).and_then(|j| events.get(j));
        let is_leaf = matches!(prev, Some(Event::Start(_)))
            && matches!(events.get(i + 1), Some(Event::End(_)));
        if !is_leaf {
            return None;
        }
    }
    Some(text)
}

fn is_xml_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}
