//! Runtime record forwarding

use crate::backend::NativeWriter;
use glogbridge_codec::WriterOutput;
use glogbridge_core::severity::runtime_to_native;
use glogbridge_core::{
    BridgeResult, EgressConfig, FieldMap, NativeLogEvent, NativeSeverity, RuntimeRecord, keys,
};

/// Translates runtime records into native log events and forwards them
///
/// One synchronous forward per record: derive the domain and severity,
/// build the field map, merge any round-tripped origin fields, and hand the
/// event to the configured backend.
pub struct EgressTranslator {
    config: EgressConfig,
    writer: Box<dyn NativeWriter>,
}

impl EgressTranslator {
    pub fn new(config: EgressConfig, writer: impl NativeWriter + 'static) -> Self {
        Self {
            config,
            writer: Box::new(writer),
        }
    }

    pub fn config(&self) -> &EgressConfig {
        &self.config
    }

    /// Forward one record to the native backend
    pub fn handle_record(&self, record: &RuntimeRecord) -> BridgeResult<WriterOutput> {
        let event = self.translate(record);
        self.writer.write(event)
    }

    /// Build the native-bound event from a runtime record
    ///
    /// Origin fields merged in overwrite recomputed keys, and an
    /// origin-supplied GLIB_DOMAIN overrides the logger-name-derived
    /// domain.
    pub fn translate(&self, record: &RuntimeRecord) -> NativeLogEvent {
        let severity = runtime_to_native(record.level, NativeSeverity::DEBUG);

        let mut fields = self.build_fields(record);
        if let Some(origin) = &record.origin_fields {
            fields.merge(origin.clone());
        }

        let domain = fields
            .text(keys::GLIB_DOMAIN)
            .map(|domain| domain.into_owned())
            .unwrap_or_else(|| self.config.domain(&record.logger_name));

        NativeLogEvent {
            domain,
            severity,
            fields,
        }
    }

    /// The recomputed field set for a record
    ///
    /// MESSAGE and the call-site use the native key names; runtime-only
    /// metadata goes under the RUST_ keys.
    fn build_fields(&self, record: &RuntimeRecord) -> FieldMap {
        let mut fields = FieldMap::new();
        fields.insert(keys::MESSAGE, record.message.as_str());
        if let Some(function) = &record.function {
            fields.insert(keys::CODE_FUNC, function.as_str());
        }
        if let Some(file) = &record.file {
            fields.insert(keys::CODE_FILE, file.as_str());
        }
        if let Some(line) = record.line {
            fields.insert(keys::CODE_LINE, i64::from(line));
        }

        if let Some(template) = &record.template {
            fields.insert(keys::RUST_MESSAGE, template.as_str());
        }
        if let Some(module) = &record.module {
            fields.insert(keys::RUST_MODULE, module.as_str());
        }
        fields.insert(keys::RUST_LOGGER, record.logger_name.as_str());
        if let Some(name) = &record.thread_name {
            fields.insert(keys::RUST_TNAME, name.as_str());
        }
        if let Some(id) = &record.thread_id {
            fields.insert(keys::RUST_TID, id.as_str());
        }

        if let Some(exception) = &record.exception {
            fields.insert(keys::RUST_EXC, exception.type_name.as_str());
            fields.insert(keys::RUST_EXC_MESSAGE, exception.message.as_str());
        }

        fields
    }
}
