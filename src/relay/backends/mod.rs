//! Outbound Adapters
//!
//! Provides the two outbound ports of the relay:
//! - Remote service: HTTP call to one configured endpoint
//! - SQS: publish to one configured queue

pub mod remote_service;
pub mod sqs;

pub use remote_service::*;
pub use sqs::*;
