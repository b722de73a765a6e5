//! Native write callback handling

use crate::dispatch::{FacadeDispatch, RuntimeDispatch};
use glogbridge_codec::{RawLogField, WriterOutput, decode_fields};
use glogbridge_core::severity::native_to_runtime;
use glogbridge_core::{
    BridgeResult, FieldMap, IngressConfig, LogEvent, NativeSeverity, RuntimeLevel, keys,
};
use std::any::Any;
use std::ffi::c_void;
use std::panic::{self, AssertUnwindSafe};

/// Translates native write callbacks into runtime log events
///
/// One synchronous translation per invocation, dispatched to the configured
/// [`RuntimeDispatch`]. Every failure (decode error, dispatch error, or a
/// panic anywhere in between) is reported to the native caller as
/// [`WriterOutput::Unhandled`] so its fallback writer chain can take over;
/// nothing ever unwinds into native code.
pub struct IngressTranslator {
    config: IngressConfig,
    dispatch: Box<dyn RuntimeDispatch>,
}

impl IngressTranslator {
    /// Create a translator dispatching into the `log` facade
    pub fn new(config: IngressConfig) -> Self {
        Self::with_dispatch(config, FacadeDispatch::new())
    }

    /// Create a translator with a specific runtime dispatch
    pub fn with_dispatch(config: IngressConfig, dispatch: impl RuntimeDispatch + 'static) -> Self {
        Self {
            config,
            dispatch: Box::new(dispatch),
        }
    }

    pub fn config(&self) -> &IngressConfig {
        &self.config
    }

    /// Handle a native write callback carrying raw field descriptors
    ///
    /// # Safety
    /// The descriptors must satisfy the [`decode_fields`] contract for the
    /// duration of the call.
    pub unsafe fn handle_writer_fields(
        &self,
        severity: NativeSeverity,
        fields: &[RawLogField],
    ) -> WriterOutput {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            // SAFETY: forwarded from our own caller contract
            let map = unsafe { decode_fields(fields, self.config.null_field_policy) }?;
            self.translate_and_dispatch(severity, map)
        }));
        Self::boundary_output(outcome)
    }

    /// Handle a native write callback carrying an already-decoded map
    ///
    /// The map passes through verbatim; no codec involvement.
    pub fn handle_field_map(&self, severity: NativeSeverity, fields: FieldMap) -> WriterOutput {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            self.translate_and_dispatch(severity, fields)
        }));
        Self::boundary_output(outcome)
    }

    /// Handle the legacy four-argument native handler
    ///
    /// Synthesizes a field map from the message and domain, then reuses the
    /// field-map path.
    pub fn handle_legacy(
        &self,
        domain: &str,
        severity: NativeSeverity,
        message: &str,
    ) -> WriterOutput {
        let mut fields = FieldMap::new();
        fields.insert(keys::MESSAGE, message);
        fields.insert(keys::GLIB_DOMAIN, domain);
        self.handle_field_map(severity, fields)
    }

    /// Build the runtime-bound event from a decoded field map
    ///
    /// The full original map travels on the event as `origin_fields` for
    /// round-trip use.
    pub fn translate(&self, severity: NativeSeverity, fields: FieldMap) -> LogEvent {
        let logger_name = match fields.text(keys::GLIB_DOMAIN) {
            Some(domain) => self.config.logger_name(&domain),
            None => self.config.logger_name(""),
        };

        let level = native_to_runtime(
            severity,
            &fields,
            self.config.use_priority_field,
            RuntimeLevel::Info,
        );
        let message = fields
            .text(keys::MESSAGE)
            .map(|text| text.into_owned())
            .unwrap_or_default();
        let (source_path, source_line, source_function) = code_location(&fields);

        LogEvent {
            logger_name,
            level,
            message,
            source_path,
            source_line,
            source_function,
            origin_fields: fields,
        }
    }

    fn translate_and_dispatch(
        &self,
        severity: NativeSeverity,
        fields: FieldMap,
    ) -> BridgeResult<()> {
        let event = self.translate(severity, fields);
        self.dispatch.dispatch(event)
    }

    /// Collapse the boundary outcome into the native writer result
    fn boundary_output(outcome: Result<BridgeResult<()>, Box<dyn Any + Send>>) -> WriterOutput {
        match outcome {
            Ok(Ok(())) => WriterOutput::Handled,
            Ok(Err(error)) => {
                tracing::debug!("ingress translation failed: {}", error);
                WriterOutput::Unhandled
            }
            Err(_) => WriterOutput::Unhandled,
        }
    }
}

/// Derive the optional call-site triple from the standard fields
///
/// The file name is read from CODE_PATH with CODE_FILE as fallback; the
/// line must parse as decimal digits or is treated as absent.
fn code_location(fields: &FieldMap) -> (Option<String>, Option<u32>, Option<String>) {
    let path = fields
        .text(keys::CODE_PATH)
        .or_else(|| fields.text(keys::CODE_FILE))
        .map(|text| text.into_owned());
    let line = fields
        .text(keys::CODE_LINE)
        .and_then(|text| text.trim().parse().ok());
    let function = fields.text(keys::CODE_FUNC).map(|text| text.into_owned());
    (path, line, function)
}

/// Native writer callback entry point
///
/// Register this function as the native writer hook with a pointer to a
/// long-lived [`IngressTranslator`] as the user data.
///
/// # Safety
/// - `user_data` must be a valid `*const IngressTranslator` that outlives
///   the writer registration, or null (reported as unhandled)
/// - `fields` must point to `n_fields` descriptors satisfying the
///   [`decode_fields`] contract
pub unsafe extern "C" fn writer_trampoline(
    severity: NativeSeverity,
    fields: *const RawLogField,
    n_fields: usize,
    user_data: *mut c_void,
) -> WriterOutput {
    if user_data.is_null() {
        return WriterOutput::Unhandled;
    }
    // SAFETY: caller registered a valid translator pointer
    let translator = unsafe { &*(user_data as *const IngressTranslator) };

    let fields = if fields.is_null() || n_fields == 0 {
        &[]
    } else {
        // SAFETY: caller guarantees n_fields descriptors
        unsafe { std::slice::from_raw_parts(fields, n_fields) }
    };

    // SAFETY: descriptor validity forwarded from the caller
    unsafe { translator.handle_writer_fields(severity, fields) }
}
