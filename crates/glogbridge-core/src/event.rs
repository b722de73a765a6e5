//! Event and record types moved across the bridge

use crate::fields::FieldMap;
use crate::level::{NativeSeverity, RuntimeLevel};

/// Error information carried by a runtime record
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionInfo {
    /// Fully qualified error type name
    pub type_name: String,
    /// Stringified error message
    pub message: String,
}

impl ExceptionInfo {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// A runtime-bound log event, produced by ingress translation
///
/// Owned exclusively by the constructing call until handed to the runtime
/// dispatch. `origin_fields` carries the full decoded native field map so a
/// later egress translation can thread it back onto the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    /// Dot-separated hierarchical logger name
    pub logger_name: String,
    pub level: RuntimeLevel,
    pub message: String,
    pub source_path: Option<String>,
    pub source_line: Option<u32>,
    pub source_function: Option<String>,
    /// The decoded native fields, kept for round-trip use
    pub origin_fields: FieldMap,
}

/// A runtime-side record, consumed by egress translation
///
/// Constructed directly, from a [`LogEvent`] on a round trip, or by the
/// `log` handler adapter from a live record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuntimeRecord {
    /// Dot-separated logger name
    pub logger_name: String,
    /// Raw ordinal on the runtime scale; custom in-between values allowed
    pub level: u8,
    /// Fully formatted message
    pub message: String,
    /// Unformatted message template, when it differs from `message`
    pub template: Option<String>,
    pub module: Option<String>,
    pub file: Option<String>,
    pub line: Option<u32>,
    pub function: Option<String>,
    pub thread_name: Option<String>,
    pub thread_id: Option<String>,
    pub exception: Option<ExceptionInfo>,
    /// Native fields attached by a prior ingress translation
    pub origin_fields: Option<FieldMap>,
}

impl RuntimeRecord {
    pub fn new(
        logger_name: impl Into<String>,
        level: RuntimeLevel,
        message: impl Into<String>,
    ) -> Self {
        Self {
            logger_name: logger_name.into(),
            level: level.value(),
            message: message.into(),
            ..Self::default()
        }
    }

    /// Set a raw ordinal, for levels between the named ones
    pub fn with_level_value(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_location(
        mut self,
        file: Option<String>,
        line: Option<u32>,
        function: Option<String>,
    ) -> Self {
        self.file = file;
        self.line = line;
        self.function = function;
        self
    }

    pub fn with_exception(mut self, exception: ExceptionInfo) -> Self {
        self.exception = Some(exception);
        self
    }

    pub fn with_origin_fields(mut self, fields: FieldMap) -> Self {
        self.origin_fields = Some(fields);
        self
    }

    /// Fill thread name and id from the calling thread
    pub fn on_current_thread(mut self) -> Self {
        let current = std::thread::current();
        self.thread_name = current.name().map(str::to_string);
        // ThreadId exposes no stable numeric accessor; carry its debug form
        self.thread_id = Some(format!("{:?}", current.id()));
        self
    }
}

impl From<LogEvent> for RuntimeRecord {
    /// Round-trip conversion: an ingress-produced event re-entering egress
    /// keeps its message, call-site, and origin fields.
    fn from(event: LogEvent) -> Self {
        Self {
            logger_name: event.logger_name,
            level: event.level.value(),
            message: event.message,
            template: None,
            module: None,
            file: event.source_path,
            line: event.source_line,
            function: event.source_function,
            thread_name: None,
            thread_id: None,
            exception: None,
            origin_fields: if event.origin_fields.is_empty() {
                None
            } else {
                Some(event.origin_fields)
            },
        }
    }
}

/// A native-bound log event, produced by egress translation
///
/// Consumed immediately by exactly one native write backend, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeLogEvent {
    /// Hyphen-separated native domain
    pub domain: String,
    pub severity: NativeSeverity,
    pub fields: FieldMap,
}
