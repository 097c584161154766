//! Remote Service Adapter
//!
//! Calls the single configured service endpoint over HTTP.
//!
//! The request is fixed and parameterless: the payload is logged for context
//! but never attached to the outgoing request.

use crate::domain::ports::{DiagnosticSink, DispatchResult, ServicePort};
use crate::error::{Error, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

const TAG: &str = "HTTP:Port";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the remote service adapter
#[derive(Debug, Clone)]
pub struct RemoteServiceConfig {
    /// Endpoint URL
    pub url: String,
}

impl RemoteServiceConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// =============================================================================
// Remote Service Port
// =============================================================================

/// Adapter for the remote service endpoint
pub struct RemoteServicePort {
    config: RemoteServiceConfig,
    client: reqwest::Client,
    sink: Arc<dyn DiagnosticSink>,
}

impl RemoteServicePort {
    /// Create a new remote service adapter
    pub fn new(config: RemoteServiceConfig, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            sink,
        }
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Issue the request and decode a successful body
    async fn fetch(&self) -> Result<Value> {
        let response = self.client.get(&self.config.url).send().await?;

        let status = response.status();
        debug!(url = %self.config.url, status = status.as_u16(), "Remote service responded");

        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl ServicePort for RemoteServicePort {
    async fn call(&self, payload: &str) -> DispatchResult {
        self.sink
            .log(TAG, &format!("Making HTTP call with message: {}", payload));

        match self.fetch().await {
            Ok(body) => {
                self.sink
                    .log(TAG, &format!("Received response: {}", body));
                Some(body)
            }
            Err(e) => {
                self.sink
                    .error(TAG, &format!("Error during HTTP call: {}", e));
                match e {
                    Error::HttpStatus { status } => Some(json!({ "ok": false, "status": status })),
                    _ => None,
                }
            }
        }
    }
}
