//! Diagnostic sink backed by `tracing`
//!
//! Components never talk to `tracing` for their tagged diagnostics directly;
//! they hold an `Arc<dyn DiagnosticSink>` so tests can record the exact lines.

use crate::domain::ports::DiagnosticSink;
use tracing::{error, info};

/// Severity of a tagged diagnostic line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Log => write!(f, "LOG"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// Render a tagged line as `[LEVEL] (tag): message`
pub fn format_line(level: LogLevel, tag: &str, message: &str) -> String {
    format!("[{}] ({}): {}", level, tag, message)
}

/// Sink that forwards tagged lines to the installed tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, tag: &str, message: &str) {
        info!(tag, "{}", format_line(LogLevel::Log, tag, message));
    }

    fn error(&self, tag: &str, message: &str) {
        error!(tag, "{}", format_line(LogLevel::Error, tag, message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_log_line() {
        assert_eq!(
            format_line(LogLevel::Log, "TestAdapter", "Test message"),
            "[LOG] (TestAdapter): Test message"
        );
    }

    #[test]
    fn test_format_error_line() {
        assert_eq!(
            format_line(LogLevel::Error, "TestAdapter", "Error message"),
            "[ERROR] (TestAdapter): Error message"
        );
    }

    #[test]
    fn test_sink_without_subscriber() {
        // No subscriber installed; must not panic
        let sink = TracingSink;
        sink.log("SQSPort", "Sending message to SQS: x");
        sink.error("SQSPort", "Failed to send message to SQS: y");
    }
}
