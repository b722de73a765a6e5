//! Decoding native field descriptors into a field map

use crate::raw::RawLogField;
use glogbridge_core::{BridgeError, BridgeResult, FieldMap, FieldValue, NullFieldPolicy};
use std::ffi::{CStr, c_char};

/// Decode a native field descriptor sequence into a [`FieldMap`]
///
/// Value handling follows the wire convention:
/// - length `0`: empty byte value
/// - length `-1`: strict UTF-8 decode of the null-terminated buffer; on
///   failure the raw bytes are kept instead (a single bad value never fails
///   the batch)
/// - length `> 0`: exactly that many raw bytes, never interpreted as text
///
/// A null value pointer is resolved per `policy`: inserted as an empty byte
/// value or skipped entirely.
///
/// Fails with [`BridgeError::MalformedInput`] only when a descriptor itself
/// is unreadable: a null or non-UTF-8 key, or a negative length other than
/// `-1`.
///
/// # Safety
/// Every descriptor in `fields` must carry a valid null-terminated `key`
/// pointer (or null), and its `value` pointer must be valid for the extent
/// its `length` declares: null-terminated for `-1`, `length` bytes
/// otherwise.
pub unsafe fn decode_fields(
    fields: &[RawLogField],
    policy: NullFieldPolicy,
) -> BridgeResult<FieldMap> {
    let mut map = FieldMap::new();

    for (index, field) in fields.iter().enumerate() {
        if field.key.is_null() {
            return Err(BridgeError::MalformedInput(format!(
                "field {} has a null key",
                index
            )));
        }
        // SAFETY: caller guarantees the key is null-terminated
        let key = unsafe { CStr::from_ptr(field.key) };
        let key = key.to_str().map_err(|_| {
            BridgeError::MalformedInput(format!("field {} key is not valid UTF-8", index))
        })?;

        if field.value.is_null() {
            match policy {
                NullFieldPolicy::InsertEmpty => map.insert(key, FieldValue::Bytes(Vec::new())),
                NullFieldPolicy::Skip => {}
            }
            continue;
        }

        let value = match field.length {
            0 => FieldValue::Bytes(Vec::new()),
            -1 => {
                // SAFETY: caller guarantees text values are null-terminated
                let raw = unsafe { CStr::from_ptr(field.value as *const c_char) };
                match std::str::from_utf8(raw.to_bytes()) {
                    Ok(text) => FieldValue::Text(text.to_string()),
                    Err(_) => FieldValue::Bytes(raw.to_bytes().to_vec()),
                }
            }
            length if length > 0 => {
                // SAFETY: caller guarantees `length` bytes are readable
                let bytes = unsafe {
                    std::slice::from_raw_parts(field.value as *const u8, length as usize)
                };
                FieldValue::Bytes(bytes.to_vec())
            }
            length => {
                return Err(BridgeError::MalformedInput(format!(
                    "field {} ({}) declares invalid length {}",
                    index, key, length
                )));
            }
        };
        map.insert(key, value);
    }

    Ok(map)
}
