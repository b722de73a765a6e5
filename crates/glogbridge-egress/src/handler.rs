//! `log` facade adapter

use crate::forwarder::EgressTranslator;
use glogbridge_core::{RuntimeLevel, RuntimeRecord};

/// `log::Log` implementation forwarding facade records to a native backend
///
/// Filtering is left to the facade's max level and the native side; this
/// handler accepts everything the facade lets through. Forwarding failures
/// are reported on the diagnostic channel and never reach the caller.
pub struct BridgeHandler {
    translator: EgressTranslator,
}

impl BridgeHandler {
    pub fn new(translator: EgressTranslator) -> Self {
        Self { translator }
    }

    /// Convert a facade level to the runtime scale
    pub fn runtime_level(level: log::Level) -> RuntimeLevel {
        match level {
            log::Level::Error => RuntimeLevel::Error,
            log::Level::Warn => RuntimeLevel::Warning,
            log::Level::Info => RuntimeLevel::Info,
            log::Level::Debug | log::Level::Trace => RuntimeLevel::Debug,
        }
    }

    /// Build a runtime record from a live facade record
    ///
    /// Captures the calling thread's identity; the facade record carries no
    /// thread information of its own.
    pub fn runtime_record(record: &log::Record<'_>) -> RuntimeRecord {
        let mut built = RuntimeRecord::new(
            record.target(),
            Self::runtime_level(record.level()),
            record.args().to_string(),
        )
        .on_current_thread();
        built.module = record.module_path().map(str::to_string);
        built.file = record.file().map(str::to_string);
        built.line = record.line();
        built
    }
}

impl log::Log for BridgeHandler {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let runtime_record = Self::runtime_record(record);
        if let Err(error) = self.translator.handle_record(&runtime_record) {
            tracing::debug!("egress forwarding failed: {}", error);
        }
    }

    fn flush(&self) {}
}

/// Install a handler as the process-wide facade logger
///
/// Sets the max level only when installation succeeds; a logger installed
/// earlier stays in place.
pub fn install(handler: BridgeHandler, max_level: log::LevelFilter) {
    if log::set_boxed_logger(Box::new(handler)).is_ok() {
        log::set_max_level(max_level);
    }
}
