//! glogbridge-codec - Field codec for the native log wire format
//!
//! This crate provides:
//! - [`RawLogField`] and the native callback types crossing the FFI boundary
//! - [`decode_fields`] for turning raw field descriptors into a [`FieldMap`]
//! - [`encode_fields`] for the variant-encoded wire form
//! - [`FieldBuffers`] for the field-pointer wire form with owned buffers
//!
//! [`FieldMap`]: glogbridge_core::FieldMap

mod buffers;
mod decode;
mod encode;
mod raw;

pub use buffers::FieldBuffers;
pub use decode::decode_fields;
pub use encode::encode_fields;
pub use raw::{LegacyLogFn, NativeWriterFn, RawLogField, UserData, WriterOutput};
