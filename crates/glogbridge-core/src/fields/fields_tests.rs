#![allow(non_snake_case)]

use super::*;

// FieldValue tests

#[test]
fn FieldValue___as_text___text_borrows() {
    let value = FieldValue::Text("hello".into());

    assert_eq!(value.as_text(), "hello");
}

#[test]
fn FieldValue___as_text___invalid_utf8_uses_replacement() {
    let value = FieldValue::Bytes(vec![0xFF, 0xFE]);

    let text = value.as_text();

    assert!(text.contains('\u{FFFD}'));
}

#[test]
fn FieldValue___as_text___int_stringifies() {
    let value = FieldValue::Int(42);

    assert_eq!(value.as_text(), "42");
}

#[test]
fn FieldValue___as_bytes___only_for_byte_values() {
    assert_eq!(
        FieldValue::Bytes(vec![1, 2, 3]).as_bytes(),
        Some(&[1u8, 2, 3][..])
    );
    assert_eq!(FieldValue::Text("abc".into()).as_bytes(), None);
}

#[test]
fn Variant___type_string___matches_native_convention() {
    assert_eq!(Variant::Str("x".into()).type_string(), "s");
    assert_eq!(Variant::Bytes(vec![]).type_string(), "ay");
    assert_eq!(Variant::Bool(true).type_string(), "b");
    assert_eq!(Variant::Int64(-1).type_string(), "x");
    assert_eq!(Variant::UInt64(1).type_string(), "t");
}

// FieldMap tests

#[test]
fn FieldMap___insert___replaces_existing_key() {
    let mut fields = FieldMap::new();
    fields.insert(keys::MESSAGE, "first");

    fields.insert(keys::MESSAGE, "second");

    assert_eq!(fields.len(), 1);
    assert_eq!(fields.text(keys::MESSAGE).as_deref(), Some("second"));
}

#[test]
fn FieldMap___text___absent_key_is_none() {
    let fields = FieldMap::new();

    assert!(fields.text(keys::MESSAGE).is_none());
}

#[test]
fn FieldMap___merge___other_side_wins_on_conflict() {
    let mut computed = FieldMap::new();
    computed.insert(keys::GLIB_DOMAIN, "derived-domain");
    computed.insert(keys::CODE_LINE, 10i64);

    let mut origin = FieldMap::new();
    origin.insert(keys::GLIB_DOMAIN, "sensor-hub");

    computed.merge(origin);

    assert_eq!(
        computed.text(keys::GLIB_DOMAIN).as_deref(),
        Some("sensor-hub")
    );
    assert_eq!(computed.text(keys::CODE_LINE).as_deref(), Some("10"));
}

#[test]
fn FieldMap___from_iter___collects_pairs() {
    let fields: FieldMap = [("A", "1"), ("B", "2")].into_iter().collect();

    assert_eq!(fields.len(), 2);
    assert_eq!(fields.text("B").as_deref(), Some("2"));
}

#[test]
fn FieldMap___iter___yields_all_entries() {
    let mut fields = FieldMap::new();
    fields.insert("A", "1");
    fields.insert("B", vec![2u8]);

    let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();

    assert_eq!(keys, vec!["A", "B"]);
}
