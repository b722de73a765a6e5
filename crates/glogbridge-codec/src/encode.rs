//! Encoding a field map into the native variant wire form

use glogbridge_core::{FieldMap, FieldValue, Variant};
use std::collections::BTreeMap;

/// Encode a field map for the native variant log call
///
/// Already-typed [`Variant`] values pass through unchanged, byte values
/// become native byte arrays, and everything else is stringified into a
/// native text value. A stringified value containing an interior null byte
/// is truncated at the first null with a diagnostic; the conversion itself
/// never fails.
pub fn encode_fields(fields: &FieldMap) -> BTreeMap<String, Variant> {
    let mut encoded = BTreeMap::new();

    for (key, value) in fields.iter() {
        let variant = match value {
            FieldValue::Variant(variant) => variant.clone(),
            FieldValue::Bytes(bytes) => Variant::Bytes(bytes.clone()),
            other => Variant::Str(truncate_at_nul(&other.as_text())),
        };
        encoded.insert(key.to_string(), variant);
    }

    encoded
}

/// Cut a string at the first interior null byte
///
/// The native side stores text values as C strings; anything past a null
/// would be silently lost there, so the cut happens here where it can be
/// reported.
pub(crate) fn truncate_at_nul(text: &str) -> String {
    match text.find('\0') {
        Some(position) => {
            tracing::warn!(
                "found 0-byte in string value, will be cut off: {:?}",
                text
            );
            text[..position].to_string()
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
#[path = "encode/encode_tests.rs"]
mod encode_tests;
