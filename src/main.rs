//! Message Relay
//!
//! Receives messages over HTTP and WebSocket, reverses them, and relays
//! them to a remote service or an SQS queue.

use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use message_relay::{
    DiagnosticSink, Error, QueueConfig, RelayServer, RelayServerConfig, RelayService,
    RemoteServiceConfig, RemoteServicePort, Result, SqsQueuePort, SqsSender, TracingSink,
};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Message Relay - HTTP/WebSocket in, remote service/SQS out
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTTP adapter bind address
    #[arg(long, env = "HTTP_ADDR", default_value = "0.0.0.0:3000")]
    http_addr: String,

    /// WebSocket adapter bind address
    #[arg(long, env = "SOCKET_ADDR", default_value = "0.0.0.0:3001")]
    socket_addr: String,

    /// Remote service endpoint
    #[arg(long, env = "SERVICE_URL")]
    service_url: String,

    /// Destination SQS queue URL
    #[arg(long, env = "SQS_QUEUE_URL")]
    sqs_queue_url: String,

    /// AWS region of the queue
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    aws_region: String,

    /// SQS endpoint override (e.g. LocalStack)
    #[arg(long, env = "SQS_ENDPOINT_URL")]
    sqs_endpoint_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    init_logging(&args)?;

    info!("Starting Message Relay");
    info!("  Version: {}", message_relay::VERSION);
    info!("  Service URL: {}", args.service_url);
    info!("  Queue URL: {}", args.sqs_queue_url);

    let server_config = RelayServerConfig {
        http_addr: parse_addr("HTTP", &args.http_addr)?,
        socket_addr: parse_addr("socket", &args.socket_addr)?,
    };

    let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingSink);

    // Outbound ports
    let client = reqwest::Client::builder()
        .user_agent(concat!("message-relay/", env!("CARGO_PKG_VERSION")))
        .build()?;
    let service = RemoteServicePort::new(RemoteServiceConfig::new(&args.service_url), sink.clone())
        .with_client(client);

    let queue_config = QueueConfig {
        queue_url: args.sqs_queue_url.clone(),
        region: args.aws_region.clone(),
        endpoint_url: args.sqs_endpoint_url.clone(),
    };
    let sender = SqsSender::from_config(&queue_config).await;
    let queue = SqsQueuePort::new(queue_config, Arc::new(sender), sink.clone());

    let relay = RelayService::new(Arc::new(service), Arc::new(queue), sink.clone());

    let server = RelayServer::new(server_config, relay, sink);
    server.run().await?;

    info!("Relay shutdown complete");
    Ok(())
}

fn parse_addr(name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse()
        .map_err(|e| Error::Configuration(format!("Invalid {} address {}: {}", name, addr, e)))
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(args: &Args) -> Result<()> {
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let mut filter = EnvFilter::from_default_env().add_directive(level.into());
    for directive in ["hyper=warn", "tower=warn", "aws_config=warn", "aws_smithy_runtime=warn"] {
        let directive = directive
            .parse()
            .map_err(|e| Error::Configuration(format!("Invalid log directive: {}", e)))?;
        filter = filter.add_directive(directive);
    }

    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }

    Ok(())
}
