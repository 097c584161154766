//! Relay Module
//!
//! The mediation layer: inbound adapters feed [`RelayService`], which
//! transforms each payload and hands it to an outbound port.

pub mod api;
pub mod backends;
pub mod service;

pub use api::*;
pub use backends::*;
pub use service::*;
