//! Resolution of raw field values into canonical capability lists.

use serde_json::Value;

use crate::{CapabilityList, RawFieldValue};

/// Resolve any accepted wire shape into the canonical list form.
///
/// Arrays are flattened, JSON-encoded strings are unwrapped (any number of
/// encoding layers deep), plain multi-line text is split on newlines, and
/// scalars fold to their display text. Items are trimmed and blank items
/// dropped, so the result is already in save-payload shape. Malformed JSON is
/// not an error: text that fails to parse is kept verbatim.
///
/// Normalizing an already-canonical list is a no-op, which is what makes it
/// safe to call on every read regardless of how the record was written.
pub fn normalize(input: impl Into<RawFieldValue>) -> CapabilityList {
    let mut items = Vec::new();
    collect(input.into(), &mut items);
    CapabilityList(
        items
            .into_iter()
            .map(|item| item.trim().to_string())
            .filter(|item| !item.is_empty())
            .collect(),
    )
}

fn collect(value: RawFieldValue, out: &mut Vec<String>) {
    match value {
        RawFieldValue::Null => {}
        RawFieldValue::Bool(b) => out.push(b.to_string()),
        RawFieldValue::Number(n) => out.push(n.to_string()),
        RawFieldValue::Text(text) => collect_single_text(text, out),
        RawFieldValue::Sequence(items) => {
            for item in items {
                collect_element(item, out);
            }
        }
    }
}

/// A field that is one bare string: JSON-encoded array, JSON scalar, or
/// newline-delimited plain text.
fn collect_single_text(text: String, out: &mut Vec<String>) {
    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Array(items)) => {
            for item in items {
                collect_element(RawFieldValue::from(item), out);
            }
        }
        // Valid JSON but not an array: the field holds ordinary text that
        // happens to parse (a bare number, a quoted string). Keep the
        // original text, not the parsed value.
        Ok(_) => out.push(text),
        // Not JSON at all: newline-delimited lines from a text control.
        Err(_) => {
            for line in text.split('\n') {
                collect_element(RawFieldValue::Text(line.to_string()), out);
            }
        }
    }
}

fn collect_element(element: RawFieldValue, out: &mut Vec<String>) {
    match element {
        RawFieldValue::Null => {}
        RawFieldValue::Bool(b) => out.push(b.to_string()),
        RawFieldValue::Number(n) => out.push(n.to_string()),
        RawFieldValue::Text(text) => {
            if looks_like_encoded_array(&text) {
                // serde_json skips only ASCII whitespace, so parse the
                // trimmed text; kept items get the same trim later, and the
                // two have to agree on whether the text is an array.
                if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text.trim()) {
                    for item in items {
                        collect_element(RawFieldValue::from(item), out);
                    }
                    return;
                }
            }
            out.push(text);
        }
        // A nested wire array behaves exactly like its encoded form.
        RawFieldValue::Sequence(items) => {
            for item in items {
                collect_element(item, out);
            }
        }
    }
}

/// Capability text written by hand does not start with `[`; text that does is
/// almost always an array that went through one JSON encoding too many. Text
/// that starts with `[` but fails to parse is kept verbatim.
fn looks_like_encoded_array(text: &str) -> bool {
    text.trim_start().starts_with('[')
}
