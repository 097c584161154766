//! API Module
//!
//! Inbound adapters: request/response HTTP endpoints and the bidirectional
//! WebSocket event channel, plus the server hosting both.

pub mod rest;
pub mod server;
pub mod socket;

pub use rest::*;
pub use server::*;
pub use socket::*;
