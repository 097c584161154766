//! Message Relay - Ports-and-Adapters Message Pipeline
//!
//! Relays inbound messages from two transports through a single transform
//! step, then dispatches them to one of two outbound sinks.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │   HTTP Adapter (axum)        │   │   WebSocket Adapter (axum)   │
//! │   POST /http   POST /sqs     │   │   events: http, sqs          │
//! └──────────────┬───────────────┘   └───────────────┬──────────────┘
//!                │                                   │
//!                └─────────────────┬─────────────────┘
//!                                  │
//!                     ┌────────────┴────────────┐
//!                     │      Relay Service      │
//!                     │  reverse + dispatch +   │
//!                     │  response formatting    │
//!                     └────────────┬────────────┘
//!                                  │
//!                ┌─────────────────┴─────────────────┐
//!                │                                   │
//! ┌──────────────┴───────────────┐   ┌───────────────┴──────────────┐
//! │   Remote Service Port        │   │   Queue Port (SQS)           │
//! │   (reqwest)                  │   │   (aws-sdk-sqs)              │
//! └──────────────────────────────┘   └──────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Port traits, payload transform, response formatting
//! - [`relay`]: Relay service, inbound adapters, outbound adapters
//! - [`logging`]: Tagged diagnostic sink over `tracing`
//! - [`error`]: Error types and handling

pub mod domain;
pub mod error;
pub mod logging;
pub mod relay;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use domain::message::{format_response, reverse, QueueReceipt};
pub use domain::ports::{Channel, DiagnosticSink, DispatchResult, QueuePort, ServicePort};

pub use error::{Error, Result};

pub use logging::TracingSink;

pub use relay::{
    MessageSender, QueueConfig, RelayServer, RelayServerConfig, RelayService, RemoteServiceConfig,
    RemoteServicePort, RestRouter, SocketAdapter, SqsQueuePort, SqsSender,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
