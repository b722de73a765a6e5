//! # glogbridge
//!
//! A bidirectional bridge between a native C structured-logging subsystem
//! and the Rust `log` facade.
//!
//! Two symmetric, synchronous pipelines share a field codec and a pair of
//! severity tables:
//! - **Ingress**: native write callbacks (severity flag word + key/value
//!   field list) become runtime log events under a dot-separated logger
//!   name.
//! - **Egress**: runtime records become native log events (hyphenated
//!   domain + field map) and are handed to one of the native write
//!   backends.
//!
//! ## Forwarding native logs into the runtime
//!
//! ```ignore
//! use glogbridge::prelude::*;
//!
//! let translator = Box::leak(Box::new(IngressTranslator::new(IngressConfig::default())));
//! // Register with the native writer hook:
//! //   native_log_set_writer_func(writer_trampoline, translator as *const _ as *mut _)
//! ```
//!
//! ## Forwarding runtime logs to the native side
//!
//! ```ignore
//! use glogbridge::prelude::*;
//!
//! let writer = FieldPointerWriter::new(native_default_writer, UserData::null());
//! let translator = EgressTranslator::new(EgressConfig::default(), writer);
//! glogbridge::install(BridgeHandler::new(translator), log::LevelFilter::Debug);
//! ```
//!
//! ## Crate structure
//!
//! This is a facade crate that re-exports from:
//! - [`glogbridge_core`] - field model, severity mapping, configuration
//! - [`glogbridge_codec`] - native descriptor decoding and wire encoding
//! - [`glogbridge_ingress`] - native-to-runtime translation
//! - [`glogbridge_egress`] - runtime-to-native forwarding

// Re-export core types
pub use glogbridge_core::{
    BridgeError, BridgeResult, EgressConfig, ExceptionInfo, FieldMap, FieldValue, IngressConfig,
    LogEvent, NativeLogEvent, NativeSeverity, NullFieldPolicy, RuntimeLevel, RuntimeRecord,
    Variant, keys, severity,
};

// Re-export codec types
pub use glogbridge_codec::{
    FieldBuffers, LegacyLogFn, NativeWriterFn, RawLogField, UserData, WriterOutput, decode_fields,
    encode_fields,
};

// Re-export the two translators and their seams
pub use glogbridge_egress::{
    BridgeHandler, EgressTranslator, FieldPointerWriter, LegacyWriter, NativeWriter,
    VariantWriter, install,
};
pub use glogbridge_ingress::{
    DomainDebugFilter, FacadeDispatch, IngressTranslator, MESSAGES_DEBUG_ENV, RuntimeDispatch,
    writer_trampoline,
};

// Re-export common dependencies that bridge users need
pub use log;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use glogbridge::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        BridgeError, BridgeHandler, BridgeResult, EgressConfig, EgressTranslator, FieldMap,
        FieldPointerWriter, IngressConfig, IngressTranslator, LegacyWriter, LogEvent,
        NativeLogEvent, NativeSeverity, NativeWriter, NullFieldPolicy, RuntimeDispatch,
        RuntimeLevel, RuntimeRecord, UserData, VariantWriter, WriterOutput, writer_trampoline,
    };
}
