//! REST API Handlers
//!
//! Request/response inbound adapter. Each channel has one endpoint that
//! delegates to [`RelayService`] and always answers `200` with the
//! response text.

use crate::domain::ports::{Channel, DiagnosticSink};
use crate::relay::RelayService;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

const TAG: &str = "HTTP:Adapter";

// =============================================================================
// Request Types
// =============================================================================

/// Relay request body
#[derive(Debug, Clone, Deserialize)]
pub struct RelayRequest {
    /// Payload to relay
    pub message: String,
}

// =============================================================================
// REST Router
// =============================================================================

/// REST API router builder
pub struct RestRouter {
    relay: Arc<RelayService>,
    sink: Arc<dyn DiagnosticSink>,
}

impl RestRouter {
    /// Create a new REST router
    pub fn new(relay: Arc<RelayService>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { relay, sink }
    }

    /// Build the Axum router
    pub fn build(self) -> Router {
        let state = AppState {
            relay: self.relay,
            sink: self.sink,
        };

        Router::new()
            // Relay endpoints
            .route("/http", post(relay_http))
            .route("/sqs", post(relay_sqs))
            // Health endpoint
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}

/// Shared application state
#[derive(Clone)]
struct AppState {
    relay: Arc<RelayService>,
    sink: Arc<dyn DiagnosticSink>,
}

// =============================================================================
// Handlers
// =============================================================================

async fn relay_http(
    State(state): State<AppState>,
    Json(request): Json<RelayRequest>,
) -> impl IntoResponse {
    relay_channel(&state, Channel::Service, request.message).await
}

async fn relay_sqs(
    State(state): State<AppState>,
    Json(request): Json<RelayRequest>,
) -> impl IntoResponse {
    relay_channel(&state, Channel::Queue, request.message).await
}

async fn relay_channel(state: &AppState, channel: Channel, message: String) -> (StatusCode, String) {
    state
        .sink
        .log(TAG, &format!("{} - message: {}", channel.label(), message));

    let response = state.relay.relay(channel, &message).await;
    (StatusCode::OK, response)
}

/// Health check
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
