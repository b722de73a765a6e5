//! Native write backends

use glogbridge_codec::{
    FieldBuffers, LegacyLogFn, NativeWriterFn, UserData, WriterOutput, encode_fields,
};
use glogbridge_core::{
    BridgeError, BridgeResult, NativeLogEvent, NativeSeverity, Variant, keys,
};
use std::collections::BTreeMap;
use std::ffi::CString;

/// A native-side consumer of translated log events
///
/// The set of backends is closed and selected at configuration time: the
/// variant log call, a field-pointer writer function, or the legacy
/// single-message handler.
pub trait NativeWriter: Send + Sync {
    /// Consume one event with a single synchronous native call
    fn write(&self, event: NativeLogEvent) -> BridgeResult<WriterOutput>;
}

/// Backend invoking the native variant log call
///
/// The call receives the domain, the severity, and the field map encoded
/// into the variant wire form.
pub struct VariantWriter {
    log_fn: Box<dyn Fn(&str, NativeSeverity, &BTreeMap<String, Variant>) + Send + Sync>,
}

impl VariantWriter {
    pub fn new(
        log_fn: impl Fn(&str, NativeSeverity, &BTreeMap<String, Variant>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            log_fn: Box::new(log_fn),
        }
    }
}

impl NativeWriter for VariantWriter {
    fn write(&self, event: NativeLogEvent) -> BridgeResult<WriterOutput> {
        if !event.fields.contains_key(keys::MESSAGE) {
            // The native backend treats a missing message as a protocol
            // violation that may crash it; report and forward anyway.
            tracing::error!(
                "missing mandatory MESSAGE, possible crash ahead: {:?}",
                event.fields
            );
        }
        let encoded = encode_fields(&event.fields);
        (self.log_fn)(&event.domain, event.severity, &encoded);
        Ok(WriterOutput::Handled)
    }
}

/// Backend invoking a native field-pointer writer function
///
/// The default, standard-stream, and structured-journal writers all take
/// this shape; construct one instance per target function pointer.
pub struct FieldPointerWriter {
    writer: NativeWriterFn,
    user_data: UserData,
}

impl FieldPointerWriter {
    pub fn new(writer: NativeWriterFn, user_data: UserData) -> Self {
        Self { writer, user_data }
    }
}

impl NativeWriter for FieldPointerWriter {
    fn write(&self, event: NativeLogEvent) -> BridgeResult<WriterOutput> {
        let mut fields = event.fields;
        // The field-pointer signature has no domain parameter; the domain
        // rides in GLIB_DOMAIN. A caller-supplied value stays untouched.
        if !fields.contains_key(keys::GLIB_DOMAIN) {
            fields.insert(keys::GLIB_DOMAIN, event.domain.as_str());
        }

        let buffers = FieldBuffers::from_field_map(&fields)?;
        // The buffers outlive exactly this call and are dropped right after
        let output = unsafe {
            (self.writer)(
                event.severity,
                buffers.fields().as_ptr(),
                buffers.len(),
                self.user_data.as_ptr(),
            )
        };
        Ok(output)
    }
}

/// Backend invoking the legacy single-message handler
///
/// Only domain, severity, and the formatted message cross this signature;
/// all other fields are dropped.
pub struct LegacyWriter {
    handler: LegacyLogFn,
    user_data: UserData,
}

impl LegacyWriter {
    pub fn new(handler: LegacyLogFn, user_data: UserData) -> Self {
        Self { handler, user_data }
    }
}

impl NativeWriter for LegacyWriter {
    fn write(&self, event: NativeLogEvent) -> BridgeResult<WriterOutput> {
        let message = event
            .fields
            .text(keys::MESSAGE)
            .map(|text| text.into_owned())
            .unwrap_or_default();

        let domain = nul_terminated(&event.domain)?;
        let message = nul_terminated(&message)?;
        unsafe {
            (self.handler)(
                domain.as_ptr(),
                event.severity,
                message.as_ptr(),
                self.user_data.as_ptr(),
            )
        };
        Ok(WriterOutput::Handled)
    }
}

/// Convert text to a C string, cutting at an interior null byte
fn nul_terminated(text: &str) -> BridgeResult<CString> {
    let end = text.find('\0').unwrap_or(text.len());
    CString::new(&text[..end])
        .map_err(|e| BridgeError::Internal(format!("legacy write conversion: {}", e)))
}
