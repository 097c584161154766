//! Error types for the message relay
//!
//! Errors only travel along startup paths and inside the outbound ports.
//! Ports collapse every failure into an absent [`DispatchResult`] before
//! returning, so nothing here reaches the inbound adapters.
//!
//! [`DispatchResult`]: crate::domain::ports::DispatchResult

use thiserror::Error;

/// Unified error type for the relay
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Internal Errors
    // =========================================================================
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // =========================================================================
    // Outbound Errors
    // =========================================================================
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error("{0}")]
    Queue(String),

    // =========================================================================
    // Parse Errors
    // =========================================================================
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = Error::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_queue_error_is_bare_message() {
        let err = Error::Queue("SQS Error".into());
        assert_eq!(err.to_string(), "SQS Error");

        let config_err = Error::Configuration("bad address".into());
        assert_eq!(config_err.to_string(), "Configuration error: bad address");
    }
}
