//! Relay Service
//!
//! Transforms inbound payloads and dispatches them to the outbound port
//! bound to each channel:
//! - `HTTP` channel: remote service call
//! - `SQS` channel: queue publish
//!
//! Both operations are infallible. A failed dispatch shows up as `null`
//! inside the response text.

use crate::domain::message::{format_response, reverse};
use crate::domain::ports::{Channel, DiagnosticSink, QueuePort, ServicePort};
use std::sync::Arc;
use tracing::debug;

const TAG: &str = "BusinessLogic";

// =============================================================================
// Relay Service
// =============================================================================

/// Transform + dispatch service shared by every inbound adapter
pub struct RelayService {
    /// Remote service port
    service: Arc<dyn ServicePort>,
    /// Queue port
    queue: Arc<dyn QueuePort>,
    sink: Arc<dyn DiagnosticSink>,
}

impl RelayService {
    /// Create a new relay service with its ports injected
    pub fn new(
        service: Arc<dyn ServicePort>,
        queue: Arc<dyn QueuePort>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Arc<Self> {
        Arc::new(Self {
            service,
            queue,
            sink,
        })
    }

    /// Relay a payload through the remote service channel
    pub async fn relay_to_service(&self, payload: &str) -> String {
        self.relay(Channel::Service, payload).await
    }

    /// Relay a payload through the queue channel
    pub async fn relay_to_queue(&self, payload: &str) -> String {
        self.relay(Channel::Queue, payload).await
    }

    /// Relay a payload through `channel` and format the reply
    pub async fn relay(&self, channel: Channel, payload: &str) -> String {
        self.sink.log(
            TAG,
            &format!(
                "Processing {} message in business logic: {}",
                channel.label(),
                payload
            ),
        );
        self.secret_business_function();

        let reversed = reverse(payload);
        let result = match channel {
            Channel::Service => self.service.call(&reversed).await,
            Channel::Queue => self.queue.publish(&reversed).await,
        };

        debug!(
            channel = channel.label(),
            dispatched = result.is_some(),
            "Dispatch complete"
        );

        format_response(channel, &reversed, &result)
    }

    /// Marker step; carries no computation
    fn secret_business_function(&self) {
        self.sink.log(TAG, "Executing secret business function");
    }
}
