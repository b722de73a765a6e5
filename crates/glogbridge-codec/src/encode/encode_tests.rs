#![allow(non_snake_case)]

use super::*;
use glogbridge_core::keys;

#[test]
fn encode_fields___text_value___becomes_string_variant() {
    let mut fields = FieldMap::new();
    fields.insert(keys::MESSAGE, "boot ok");

    let encoded = encode_fields(&fields);

    assert_eq!(
        encoded.get(keys::MESSAGE),
        Some(&Variant::Str("boot ok".into()))
    );
}

#[test]
fn encode_fields___byte_value___becomes_byte_array_variant() {
    let mut fields = FieldMap::new();
    fields.insert("BLOB", vec![1u8, 2, 3]);

    let encoded = encode_fields(&fields);

    assert_eq!(encoded.get("BLOB"), Some(&Variant::Bytes(vec![1, 2, 3])));
}

#[test]
fn encode_fields___integer_value___stringifies() {
    let mut fields = FieldMap::new();
    fields.insert(keys::CODE_LINE, 42i64);

    let encoded = encode_fields(&fields);

    assert_eq!(
        encoded.get(keys::CODE_LINE),
        Some(&Variant::Str("42".into()))
    );
}

#[test]
fn encode_fields___typed_variant___passes_through_unchanged() {
    let mut fields = FieldMap::new();
    fields.insert("COUNT", Variant::UInt64(7));

    let encoded = encode_fields(&fields);

    assert_eq!(encoded.get("COUNT"), Some(&Variant::UInt64(7)));
}

#[test]
fn encode_fields___interior_null___truncates_at_first_null() {
    let mut fields = FieldMap::new();
    fields.insert(keys::MESSAGE, "before\0after");

    let encoded = encode_fields(&fields);

    assert_eq!(
        encoded.get(keys::MESSAGE),
        Some(&Variant::Str("before".into()))
    );
}

#[test]
fn encode_fields___bytes_with_interior_null___kept_intact() {
    let mut fields = FieldMap::new();
    fields.insert("BLOB", vec![0u8, 1, 0, 2]);

    let encoded = encode_fields(&fields);

    // Byte arrays carry explicit lengths; no truncation applies
    assert_eq!(encoded.get("BLOB"), Some(&Variant::Bytes(vec![0, 1, 0, 2])));
}
