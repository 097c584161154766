//! SQS Queue Adapter
//!
//! Publishes relayed payloads to a single configured queue.
//! The provider client sits behind [`MessageSender`]; production wiring uses
//! [`SqsSender`] on top of the AWS SDK.

use crate::domain::message::QueueReceipt;
use crate::domain::ports::{DiagnosticSink, DispatchResult, QueuePort};
use crate::error::{Error, Result};
use async_trait::async_trait;
use aws_sdk_sqs::config::Region;
use aws_sdk_sqs::error::DisplayErrorContext;
use std::sync::Arc;
use tracing::{debug, info};

const TAG: &str = "SQSPort";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the queue adapter
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Destination queue URL
    pub queue_url: String,
    /// AWS region
    pub region: String,
    /// Endpoint override (e.g. LocalStack)
    pub endpoint_url: Option<String>,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            queue_url: String::new(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
        }
    }
}

// =============================================================================
// Message Sender
// =============================================================================

/// Provider client capable of a single send-message request
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<QueueReceipt>;
}

/// [`MessageSender`] backed by the AWS SDK
#[derive(Debug, Clone)]
pub struct SqsSender {
    client: aws_sdk_sqs::Client,
}

impl SqsSender {
    pub fn new(client: aws_sdk_sqs::Client) -> Self {
        Self { client }
    }

    /// Build a client from the standard AWS provider chain.
    ///
    /// Credentials come from the environment or profile; region and
    /// endpoint come from `config`.
    pub async fn from_config(config: &QueueConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let shared = loader.load().await;

        info!(region = %config.region, "SQS client initialized");
        Self::new(aws_sdk_sqs::Client::new(&shared))
    }
}

#[async_trait]
impl MessageSender for SqsSender {
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<QueueReceipt> {
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| Error::Queue(DisplayErrorContext(&e).to_string()))?;

        let message_id = output
            .message_id()
            .ok_or_else(|| Error::Queue("SendMessage response carried no MessageId".into()))?;

        Ok(QueueReceipt {
            message_id: message_id.to_string(),
            md5_of_message_body: output.md5_of_message_body().map(str::to_string),
            sequence_number: output.sequence_number().map(str::to_string),
        })
    }
}

// =============================================================================
// Queue Port
// =============================================================================

/// Adapter publishing to the configured queue
pub struct SqsQueuePort {
    config: QueueConfig,
    sender: Arc<dyn MessageSender>,
    sink: Arc<dyn DiagnosticSink>,
}

impl SqsQueuePort {
    /// Create a new queue adapter
    pub fn new(
        config: QueueConfig,
        sender: Arc<dyn MessageSender>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            config,
            sender,
            sink,
        }
    }

    async fn send(&self, payload: &str) -> Result<QueueReceipt> {
        let receipt = self
            .sender
            .send_message(&self.config.queue_url, payload)
            .await?;
        self.sink.log(
            TAG,
            &format!("Message sent to SQS with ID: {}", receipt.message_id),
        );
        Ok(receipt)
    }
}

#[async_trait]
impl QueuePort for SqsQueuePort {
    async fn publish(&self, payload: &str) -> DispatchResult {
        self.sink
            .log(TAG, &format!("Sending message to SQS: {}", payload));

        let outcome = self
            .send(payload)
            .await
            .and_then(|receipt| serde_json::to_value(&receipt).map_err(Error::from));

        match outcome {
            Ok(ack) => {
                debug!(queue_url = %self.config.queue_url, "Publish acknowledged");
                Some(ack)
            }
            Err(e) => {
                self.sink
                    .error(TAG, &format!("Failed to send message to SQS: {}", e));
                None
            }
        }
    }
}
