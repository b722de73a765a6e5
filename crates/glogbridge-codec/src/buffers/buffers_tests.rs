#![allow(non_snake_case)]

use super::*;
use crate::decode::decode_fields;
use glogbridge_core::{NullFieldPolicy, keys};
use std::ffi::CStr;

#[test]
fn FieldBuffers___text_value___transmitted_with_length_minus_one() {
    let mut fields = FieldMap::new();
    fields.insert(keys::MESSAGE, "boot ok");

    let buffers = FieldBuffers::from_field_map(&fields).unwrap();

    let descriptor = &buffers.fields()[0];
    assert_eq!(descriptor.length, -1);
    let text = unsafe { CStr::from_ptr(descriptor.value as *const _) };
    assert_eq!(text.to_str().unwrap(), "boot ok");
}

#[test]
fn FieldBuffers___byte_value___transmitted_with_exact_length() {
    let mut fields = FieldMap::new();
    fields.insert("BLOB", vec![0u8, 1, 2]);

    let buffers = FieldBuffers::from_field_map(&fields).unwrap();

    let descriptor = &buffers.fields()[0];
    assert_eq!(descriptor.length, 3);
    let bytes = unsafe { std::slice::from_raw_parts(descriptor.value as *const u8, 3) };
    assert_eq!(bytes, &[0, 1, 2]);
}

#[test]
fn FieldBuffers___integer_value___stringified_with_explicit_length() {
    let mut fields = FieldMap::new();
    fields.insert(keys::CODE_LINE, 42i64);

    let buffers = FieldBuffers::from_field_map(&fields).unwrap();

    let descriptor = &buffers.fields()[0];
    assert_eq!(descriptor.length, 2);
    let bytes = unsafe { std::slice::from_raw_parts(descriptor.value as *const u8, 2) };
    assert_eq!(bytes, b"42");
}

#[test]
fn FieldBuffers___text_with_interior_null___truncated() {
    let mut fields = FieldMap::new();
    fields.insert(keys::MESSAGE, "cut\0here");

    let buffers = FieldBuffers::from_field_map(&fields).unwrap();

    let descriptor = &buffers.fields()[0];
    let text = unsafe { CStr::from_ptr(descriptor.value as *const _) };
    assert_eq!(text.to_str().unwrap(), "cut");
}

#[test]
fn FieldBuffers___descriptor_count___matches_field_count() {
    let mut fields = FieldMap::new();
    fields.insert("A", "1");
    fields.insert("B", vec![2u8]);
    fields.insert("C", 3i64);

    let buffers = FieldBuffers::from_field_map(&fields).unwrap();

    assert_eq!(buffers.len(), 3);
    assert!(!buffers.is_empty());
}

#[test]
fn FieldBuffers___empty_map___yields_no_descriptors() {
    let buffers = FieldBuffers::from_field_map(&FieldMap::new()).unwrap();

    assert!(buffers.is_empty());
}

#[test]
fn FieldBuffers___roundtrip_through_decoder___preserves_values() {
    let mut fields = FieldMap::new();
    fields.insert(keys::MESSAGE, "boot ok");
    fields.insert(keys::GLIB_DOMAIN, "disk-io");
    fields.insert("BLOB", vec![0xFFu8, 0x00, 0x01]);

    let buffers = FieldBuffers::from_field_map(&fields).unwrap();
    let decoded =
        unsafe { decode_fields(buffers.fields(), NullFieldPolicy::InsertEmpty) }.unwrap();

    assert_eq!(decoded.text(keys::MESSAGE).as_deref(), Some("boot ok"));
    assert_eq!(decoded.text(keys::GLIB_DOMAIN).as_deref(), Some("disk-io"));
    assert_eq!(
        decoded.get("BLOB"),
        Some(&FieldValue::Bytes(vec![0xFF, 0x00, 0x01]))
    );
}
