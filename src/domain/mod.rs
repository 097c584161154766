//! Domain layer - Core relay logic and port definitions
//!
//! This module defines the core traits (ports) that adapters implement,
//! following hexagonal architecture principles, plus the pure payload
//! transform shared by every channel.

pub mod message;
pub mod ports;

pub use message::*;
pub use ports::*;
