//! Error types and handling module.
//!
//! Defines the connection-level error types and conversions.

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failures talking to the node.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The `net_version` query returned an error-shaped response, or the
    /// reported network has no known contract deployment.
    #[error("Network detection failed: {0}")]
    NetworkDetection(String),

    /// No usable signing account after exhausting the node's default
    /// account and the unlocked-account scan.
    #[error("coinbase not found")]
    CoinbaseNotFound,

    /// A connection attempt failed and the hosted-node fallback failed too.
    #[error("connection failed after hosted-node fallback")]
    Connection(#[source] Box<ConnectError>),
}

impl ConnectError {
    /// Wrap the step error that survived the one-shot fallback retry.
    pub fn after_fallback(err: ConnectError) -> Self {
        ConnectError::Connection(Box::new(err))
    }
}

impl From<alloy::transports::TransportError> for ConnectError {
    fn from(err: alloy::transports::TransportError) -> Self {
        ConnectError::Transport(err.to_string())
    }
}

/// Result type alias using ConnectError.
pub type Result<T> = std::result::Result<T, ConnectError>;
