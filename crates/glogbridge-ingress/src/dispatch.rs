//! Runtime dispatch seam

use glogbridge_core::{BridgeResult, LogEvent, RuntimeLevel};

/// Destination of ingress translation
///
/// The runtime's logging registry sits behind this trait as a black box: it
/// receives a fully constructed event under its logger name and runs its
/// own filter/handler chain.
pub trait RuntimeDispatch: Send + Sync {
    fn dispatch(&self, event: LogEvent) -> BridgeResult<()>;
}

/// Dispatch into the `log` facade
///
/// Builds a record with a dynamic target and call-site and hands it to the
/// installed logger. The facade record cannot carry the origin field map or
/// the emitting function name; a round trip that must preserve those wires
/// ingress to egress directly instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeDispatch;

impl FacadeDispatch {
    pub fn new() -> Self {
        Self
    }

    /// Convert a runtime level to a facade level
    ///
    /// The facade has no Critical level; it folds into Error.
    pub fn facade_level(level: RuntimeLevel) -> log::Level {
        match level {
            RuntimeLevel::Critical | RuntimeLevel::Error => log::Level::Error,
            RuntimeLevel::Warning => log::Level::Warn,
            RuntimeLevel::Info => log::Level::Info,
            RuntimeLevel::Debug => log::Level::Debug,
        }
    }
}

impl RuntimeDispatch for FacadeDispatch {
    fn dispatch(&self, event: LogEvent) -> BridgeResult<()> {
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", event.message))
                .level(Self::facade_level(event.level))
                .target(&event.logger_name)
                .file(event.source_path.as_deref())
                .line(event.source_line)
                .build(),
        );
        Ok(())
    }
}
