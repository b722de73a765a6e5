//! Owned wire buffers for the field-pointer form

use crate::encode::truncate_at_nul;
use crate::raw::RawLogField;
use glogbridge_core::{BridgeError, BridgeResult, FieldMap, FieldValue};
use std::ffi::{CString, c_void};

/// Owned value storage backing one descriptor
#[derive(Debug)]
enum OwnedValue {
    /// Null-terminated text, transmitted with length -1
    Text(CString),
    /// Raw bytes, transmitted with an explicit length
    Raw(Vec<u8>),
}

/// Owned buffers plus descriptors for a field-pointer native call
///
/// The descriptor slice points into storage owned by this object, so the
/// object must outlive the single synchronous native call that consumes the
/// descriptors. Keep it on the stack around the call and drop it right
/// after; never hand the slice across a call boundary that outlives it.
///
/// Text values are transmitted as null-terminated strings (length -1);
/// byte values keep their exact length; every other value is stringified
/// first and transmitted with an explicit length.
#[derive(Debug)]
pub struct FieldBuffers {
    // Owned storage backing the descriptor pointers
    _keys: Vec<CString>,
    _values: Vec<OwnedValue>,
    descriptors: Vec<RawLogField>,
}

impl FieldBuffers {
    /// Build wire buffers from a field map
    ///
    /// Keys and text values containing an interior null byte are truncated
    /// at the first null with a diagnostic.
    pub fn from_field_map(fields: &FieldMap) -> BridgeResult<Self> {
        let mut keys = Vec::with_capacity(fields.len());
        let mut values = Vec::with_capacity(fields.len());

        for (key, value) in fields.iter() {
            keys.push(nul_terminated(key)?);
            values.push(match value {
                FieldValue::Text(text) => OwnedValue::Text(nul_terminated(text)?),
                FieldValue::Bytes(bytes) => OwnedValue::Raw(bytes.clone()),
                other => OwnedValue::Raw(other.as_text().into_owned().into_bytes()),
            });
        }

        let descriptors = keys
            .iter()
            .zip(values.iter())
            .map(|(key, value)| {
                let (value_ptr, length) = match value {
                    OwnedValue::Text(text) => (text.as_ptr() as *const c_void, -1),
                    OwnedValue::Raw(bytes) => {
                        (bytes.as_ptr() as *const c_void, bytes.len() as isize)
                    }
                };
                RawLogField {
                    key: key.as_ptr(),
                    value: value_ptr,
                    length,
                }
            })
            .collect();

        Ok(Self {
            _keys: keys,
            _values: values,
            descriptors,
        })
    }

    /// The descriptor slice, valid while this object lives
    pub fn fields(&self) -> &[RawLogField] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Convert text into an owned C string, truncating at an interior null
fn nul_terminated(text: &str) -> BridgeResult<CString> {
    CString::new(truncate_at_nul(text))
        .map_err(|e| BridgeError::Internal(format!("field buffer conversion: {}", e)))
}

#[cfg(test)]
#[path = "buffers/buffers_tests.rs"]
mod buffers_tests;
