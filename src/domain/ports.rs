//! Domain Ports - Core trait definitions for the message relay
//!
//! These traits define the boundaries between the relay logic and external systems.
//! Outbound adapters implement [`ServicePort`] and [`QueuePort`]; the diagnostic
//! output is reached only through [`DiagnosticSink`].

use async_trait::async_trait;

// =============================================================================
// Dispatch Result
// =============================================================================

/// Outcome of a single outbound dispatch.
///
/// `Some` carries the provider's success value (or the structured non-2xx
/// object from the remote service). `None` is the absence marker: the port
/// failed, logged the failure, and has nothing to report.
pub type DispatchResult = Option<serde_json::Value>;

// =============================================================================
// Channels
// =============================================================================

/// One of the two processing paths through the relay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Relayed to the remote service
    Service,
    /// Published to the message queue
    Queue,
}

impl Channel {
    /// Every channel, in registration order
    pub const ALL: [Channel; 2] = [Channel::Service, Channel::Queue];

    /// Wire-visible label used in responses and log lines
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Service => "HTTP",
            Channel::Queue => "SQS",
        }
    }

    /// Event name on the socket surface (also the HTTP route segment)
    pub fn event_name(&self) -> &'static str {
        match self {
            Channel::Service => "http",
            Channel::Queue => "sqs",
        }
    }

    /// Resolve a socket event name to its channel
    pub fn from_event_name(name: &str) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| c.event_name() == name)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Outbound Ports
// =============================================================================

/// Port for the single configured remote service endpoint
#[async_trait]
pub trait ServicePort: Send + Sync {
    /// Invoke the endpoint. Never fails; faults become `None`.
    async fn call(&self, payload: &str) -> DispatchResult;
}

/// Port for the single configured message queue
#[async_trait]
pub trait QueuePort: Send + Sync {
    /// Publish `payload` as the message body. Never fails; faults become `None`.
    async fn publish(&self, payload: &str) -> DispatchResult;
}

// =============================================================================
// Diagnostics
// =============================================================================

/// Tagged diagnostic output
pub trait DiagnosticSink: Send + Sync {
    fn log(&self, tag: &str, message: &str);

    fn error(&self, tag: &str, message: &str);
}
