//! glogbridge-ingress - Native-to-runtime log translation
//!
//! This crate provides:
//! - [`IngressTranslator`] turning native write callbacks into runtime
//!   log events
//! - [`RuntimeDispatch`] seam to the runtime logging registry, with
//!   [`FacadeDispatch`] targeting the `log` facade
//! - [`writer_trampoline`] for registering a translator as the native
//!   writer callback
//! - [`DomainDebugFilter`] for the environment-driven debug-domain list

mod debug_filter;
mod dispatch;
mod translator;

pub use debug_filter::{DomainDebugFilter, MESSAGES_DEBUG_ENV};
pub use dispatch::{FacadeDispatch, RuntimeDispatch};
pub use translator::{IngressTranslator, writer_trampoline};
