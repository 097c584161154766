//! WebSocket inbound adapter
//!
//! Each connection gets a dispatch table mapping event names to channels,
//! built at connect time and dropped at disconnect. Frames are JSON event
//! envelopes:
//!
//! ```text
//! -> {"event":"http","data":"hello"}
//! <- {"event":"http","data":"Processed HTTP: olleh with response: {...}"}
//! ```

use crate::domain::ports::{Channel, DiagnosticSink};
use crate::relay::RelayService;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
    routing::get,
    Router,
};
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use uuid::Uuid;

const TAG: &str = "Socket:Adapter";

// =============================================================================
// Wire Types
// =============================================================================

/// Event envelope carried in each text frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketEvent {
    /// Event name
    pub event: String,
    /// Payload (inbound) or response text (outbound)
    pub data: String,
}

impl SocketEvent {
    pub fn new(event: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            data: data.into(),
        }
    }
}

// =============================================================================
// Connection
// =============================================================================

/// Live socket session and its event dispatch table
#[derive(Debug)]
pub struct Connection {
    id: String,
    handlers: HashMap<&'static str, Channel>,
}

impl Connection {
    /// Provider-assigned identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Channel registered for `event`, if any
    pub fn channel_for(&self, event: &str) -> Option<Channel> {
        self.handlers.get(event).copied()
    }
}

// =============================================================================
// Socket Adapter
// =============================================================================

/// Event-channel inbound adapter
pub struct SocketAdapter {
    relay: Arc<RelayService>,
    sink: Arc<dyn DiagnosticSink>,
}

impl SocketAdapter {
    /// Create a new socket adapter
    pub fn new(relay: Arc<RelayService>, sink: Arc<dyn DiagnosticSink>) -> Arc<Self> {
        Arc::new(Self { relay, sink })
    }

    /// Open a session and register one handler per channel
    pub fn connect(&self, id: impl Into<String>) -> Connection {
        let id = id.into();
        self.sink.log(TAG, &format!("user connected: {}", id));

        let handlers = Channel::ALL
            .into_iter()
            .map(|channel| (channel.event_name(), channel))
            .collect();

        Connection { id, handlers }
    }

    /// Handle one inbound event; returns the reply for the same event name.
    ///
    /// Events without a registered handler are ignored.
    pub async fn handle_event(
        &self,
        connection: &Connection,
        event: &str,
        payload: &str,
    ) -> Option<SocketEvent> {
        let Some(channel) = connection.channel_for(event) else {
            debug!(connection = %connection.id, event, "No handler for event");
            return None;
        };

        self.sink
            .log(TAG, &format!("{} - message: {}", channel.label(), payload));

        let response = self.relay.relay(channel, payload).await;
        Some(SocketEvent::new(event, response))
    }

    /// Close a session; its dispatch table goes with the last handle
    pub fn disconnect(&self, connection: &Connection) {
        debug!(connection = %connection.id, "Tearing down connection");
        self.sink.log(TAG, "user disconnected");
    }

    /// Build the Axum router serving the WebSocket endpoint
    pub fn router(self: Arc<Self>) -> Router {
        Router::new()
            .route("/", get(ws_handler))
            .route("/socket", get(ws_handler))
            .with_state(self)
    }
}

// =============================================================================
// WebSocket Driver
// =============================================================================

/// WebSocket upgrade handler
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(adapter): State<Arc<SocketAdapter>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, adapter))
}

/// Drive a single WebSocket connection until it closes
async fn handle_socket(socket: WebSocket, adapter: Arc<SocketAdapter>) {
    let connection = Arc::new(adapter.connect(Uuid::new_v4().to_string()));
    let (mut sender, mut receiver) = socket.split();
    let (reply_tx, mut reply_rx) = mpsc::unbounded_channel::<SocketEvent>();

    let connection_id = connection.id().to_string();
    let writer = tokio::spawn(async move {
        while let Some(reply) = reply_rx.recv().await {
            let text = match serde_json::to_string(&reply) {
                Ok(text) => text,
                Err(e) => {
                    warn!(connection = %connection_id, "Failed to encode reply: {}", e);
                    continue;
                }
            };
            if let Err(e) = sender.send(Message::Text(text)).await {
                debug!(connection = %connection_id, "Reply not delivered: {}", e);
                break;
            }
        }
    });

    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let frame: SocketEvent = match serde_json::from_str(&text) {
                    Ok(frame) => frame,
                    Err(e) => {
                        debug!(connection = %connection.id(), "Ignoring malformed frame: {}", e);
                        continue;
                    }
                };

                // Each event is its own unit of work
                let adapter = adapter.clone();
                let connection = connection.clone();
                let reply_tx = reply_tx.clone();
                tokio::spawn(async move {
                    if let Some(reply) = adapter
                        .handle_event(&connection, &frame.event, &frame.data)
                        .await
                    {
                        let _ = reply_tx.send(reply);
                    }
                });
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(connection = %connection.id(), "WebSocket error: {}", e);
                break;
            }
        }
    }

    adapter.disconnect(&connection);

    // Writer exits once in-flight replies are flushed or the socket refuses them
    drop(reply_tx);
    let _ = writer.await;
}
