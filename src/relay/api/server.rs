//! Relay Server
//!
//! Runs the HTTP and WebSocket inbound adapters on their own listeners.

use crate::domain::ports::DiagnosticSink;
use crate::error::{Error, Result};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{error, info};

use super::rest::RestRouter;
use super::socket::SocketAdapter;
use crate::relay::RelayService;

// =============================================================================
// Server Configuration
// =============================================================================

/// Configuration for the relay server
#[derive(Debug, Clone)]
pub struct RelayServerConfig {
    /// HTTP adapter bind address
    pub http_addr: SocketAddr,
    /// WebSocket adapter bind address
    pub socket_addr: SocketAddr,
}

impl Default for RelayServerConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            socket_addr: SocketAddr::from(([0, 0, 0, 0], 3001)),
        }
    }
}

// =============================================================================
// Relay Server
// =============================================================================

/// Server hosting both inbound adapters
pub struct RelayServer {
    config: RelayServerConfig,
    relay: Arc<RelayService>,
    sink: Arc<dyn DiagnosticSink>,
    shutdown_tx: broadcast::Sender<()>,
}

impl RelayServer {
    /// Create a new relay server
    pub fn new(
        config: RelayServerConfig,
        relay: Arc<RelayService>,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            config,
            relay,
            sink,
            shutdown_tx,
        }
    }

    /// Run both listeners until Ctrl-C or until either one stops
    pub async fn run(&self) -> Result<()> {
        info!("Starting relay server");
        info!("  HTTP adapter: {}", self.config.http_addr);
        info!("  Socket adapter: {}", self.config.socket_addr);

        let http_handle = self.spawn_http_server();
        let socket_handle = self.spawn_socket_server();

        let shutdown_tx = self.shutdown_tx.clone();
        let signal_handle = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
                let _ = shutdown_tx.send(());
            }
        });

        let (http_result, socket_result) = tokio::join!(http_handle, socket_handle);
        signal_handle.abort();

        for result in [http_result, socket_result] {
            match result {
                Ok(inner) => inner?,
                Err(e) => {
                    error!("Server task failed: {:?}", e);
                    return Err(Error::Internal(format!("Server task failed: {}", e)));
                }
            }
        }

        Ok(())
    }

    /// Spawn the HTTP adapter
    fn spawn_http_server(&self) -> tokio::task::JoinHandle<Result<()>> {
        let app = RestRouter::new(self.relay.clone(), self.sink.clone()).build();
        self.spawn_listener("HTTP adapter", self.config.http_addr, app)
    }

    /// Spawn the WebSocket adapter
    fn spawn_socket_server(&self) -> tokio::task::JoinHandle<Result<()>> {
        let app = SocketAdapter::new(self.relay.clone(), self.sink.clone()).router();
        self.spawn_listener("Socket adapter", self.config.socket_addr, app)
    }

    /// Serve `app` until shutdown; stopping for any reason stops the sibling too
    fn spawn_listener(
        &self,
        name: &'static str,
        addr: SocketAddr,
        app: Router,
    ) -> tokio::task::JoinHandle<Result<()>> {
        let shutdown_tx = self.shutdown_tx.clone();
        let shutdown_rx = self.shutdown_tx.subscribe();

        tokio::spawn(async move {
            let result = serve(name, addr, app, shutdown_rx).await;
            if let Err(e) = &result {
                error!("{} error: {}", name, e);
            }
            let _ = shutdown_tx.send(());
            result
        })
    }

    /// Trigger graceful shutdown
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

/// Bind and serve one listener
async fn serve(
    name: &'static str,
    addr: SocketAddr,
    app: Router,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("{} listening on {}", name, addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("{} shutting down", name);
        })
        .await
        .map_err(|e| Error::Internal(format!("{} error: {}", name, e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakePort, RecordingSink};
    use assert_matches::assert_matches;
    use std::time::Duration;

    fn server(config: RelayServerConfig) -> Arc<RelayServer> {
        let sink = RecordingSink::new();
        let relay = RelayService::new(
            FakePort::returning(None),
            FakePort::returning(None),
            sink.clone(),
        );
        Arc::new(RelayServer::new(config, relay, sink))
    }

    #[test]
    fn test_default_config() {
        let config = RelayServerConfig::default();
        assert_eq!(config.http_addr.port(), 3000);
        assert_eq!(config.socket_addr.port(), 3001);
    }

    #[tokio::test]
    async fn test_shutdown_stops_both_listeners() {
        let server = server(RelayServerConfig {
            http_addr: "127.0.0.1:0".parse().unwrap(),
            socket_addr: "127.0.0.1:0".parse().unwrap(),
        });

        let runner = server.clone();
        let handle = tokio::spawn(async move { runner.run().await });

        tokio::time::sleep(Duration::from_millis(100)).await;
        server.shutdown();

        let result = tokio::time::timeout(Duration::from_secs(5), handle)
            .await
            .expect("server did not stop")
            .unwrap();
        assert_matches!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_bind_failure_stops_sibling() {
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = server(RelayServerConfig {
            http_addr: occupied.local_addr().unwrap(),
            socket_addr: "127.0.0.1:0".parse().unwrap(),
        });

        let result = tokio::time::timeout(Duration::from_secs(5), server.run())
            .await
            .expect("server did not stop");

        assert_matches!(result, Err(Error::Io(e)) if e.kind() == std::io::ErrorKind::AddrInUse);
    }
}
