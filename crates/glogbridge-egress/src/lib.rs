//! glogbridge-egress - Runtime-to-native log forwarding
//!
//! This crate provides:
//! - [`EgressTranslator`] turning runtime records into native log events
//! - [`NativeWriter`] backends: [`VariantWriter`], [`FieldPointerWriter`],
//!   and [`LegacyWriter`]
//! - [`BridgeHandler`], a `log::Log` adapter forwarding facade records

mod backend;
mod forwarder;
mod handler;

pub use backend::{
    FieldPointerWriter, LegacyWriter, NativeWriter, VariantWriter,
};
pub use forwarder::EgressTranslator;
pub use handler::{BridgeHandler, install};
