//! Field maps: the key/value model shared by both pipelines

use std::borrow::Cow;
use std::collections::BTreeMap;

/// Standard field keys recognized on the native wire
///
/// The `GLIB_`/`CODE_` names are fixed by the native logging convention and
/// must not be altered. The `RUST_` names are the runtime metadata this
/// bridge adds on egress.
pub mod keys {
    /// Native log domain (hyphen-separated)
    pub const GLIB_DOMAIN: &str = "GLIB_DOMAIN";
    /// Human-readable message text
    pub const MESSAGE: &str = "MESSAGE";
    /// Journal priority digit, "0" through "7"
    pub const PRIORITY: &str = "PRIORITY";
    /// Source file emitting the message (writer-callback convention)
    pub const CODE_PATH: &str = "CODE_PATH";
    /// Source file emitting the message (structured-log convention)
    pub const CODE_FILE: &str = "CODE_FILE";
    /// Source line number, decimal digits
    pub const CODE_LINE: &str = "CODE_LINE";
    /// Function emitting the message
    pub const CODE_FUNC: &str = "CODE_FUNC";

    /// Unformatted message template, when it differs from MESSAGE
    pub const RUST_MESSAGE: &str = "RUST_MESSAGE";
    /// Module path the record was emitted from
    pub const RUST_MODULE: &str = "RUST_MODULE";
    /// Runtime logger name the record was addressed to
    pub const RUST_LOGGER: &str = "RUST_LOGGER";
    /// Emitting thread name
    pub const RUST_TNAME: &str = "RUST_TNAME";
    /// Emitting thread id
    pub const RUST_TID: &str = "RUST_TID";
    /// Error type carried by the record
    pub const RUST_EXC: &str = "RUST_EXC";
    /// Stringified error message carried by the record
    pub const RUST_EXC_MESSAGE: &str = "RUST_EXC_MESSAGE";
}

/// A native variant wire value
///
/// The closed set of typed values the native variant log call accepts.
/// Values of this type pass through field encoding unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Str(String),
    Bytes(Vec<u8>),
    Bool(bool),
    Int64(i64),
    UInt64(u64),
}

impl Variant {
    /// The native type string for this value
    pub fn type_string(&self) -> &'static str {
        match self {
            Variant::Str(_) => "s",
            Variant::Bytes(_) => "ay",
            Variant::Bool(_) => "b",
            Variant::Int64(_) => "x",
            Variant::UInt64(_) => "t",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Str(s) => write!(f, "{}", s),
            Variant::Bytes(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Variant::Bool(b) => write!(f, "{}", b),
            Variant::Int64(i) => write!(f, "{}", i),
            Variant::UInt64(u) => write!(f, "{}", u),
        }
    }
}

/// A single field value: UTF-8 text, raw bytes, an integer, or an
/// already-typed native variant
///
/// Decoding produces only `Text` and `Bytes`; the other arms exist for
/// values attached on the runtime side before encoding. Anything that is
/// not text or bytes is stringified when it reaches the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Variant(Variant),
}

impl FieldValue {
    /// A text view of the value, replacing invalid UTF-8 sequences
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(s),
            FieldValue::Bytes(b) => String::from_utf8_lossy(b),
            FieldValue::Int(i) => Cow::Owned(i.to_string()),
            FieldValue::Variant(v) => Cow::Owned(v.to_string()),
        }
    }

    /// The raw bytes, if this is a byte value
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        FieldValue::Bytes(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<Variant> for FieldValue {
    fn from(value: Variant) -> Self {
        FieldValue::Variant(value)
    }
}

/// Mapping from field key to field value
///
/// Keys are unique; the map is rebuilt fresh for every log event and
/// discarded after the event is dispatched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    entries: BTreeMap<String, FieldValue>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a value under `key`, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.entries.remove(key)
    }

    /// A text view of the value under `key`, if present
    ///
    /// Byte values are decoded with lossy replacement of invalid sequences.
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.entries.get(key).map(FieldValue::as_text)
    }

    /// Merge `other` into this map, overwriting same-named keys
    ///
    /// Used for the round-trip carry: fields that originated on the native
    /// side win over recomputed ones.
    pub fn merge(&mut self, other: FieldMap) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
#[path = "fields/fields_tests.rs"]
mod fields_tests;
