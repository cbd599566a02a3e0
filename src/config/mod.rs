//! Configuration management module.
//!
//! Handles loading configuration from environment variables and building
//! the RPC transport configuration shape.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ConnectError;
use crate::ethereum::constants::CONNECTION_TIMEOUT_MS;
use crate::types::NetworkId;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP endpoint of a user-operated node.
    pub http: Option<String>,
    /// WebSocket endpoint.
    pub ws: Option<String>,
    /// IPC socket path.
    pub ipc: Option<String>,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ETHEREUM_HTTP`: HTTP endpoint of a user-operated node
    /// - `ETHEREUM_WS`: WebSocket endpoint
    /// - `ETHEREUM_IPC`: IPC socket path
    /// - `LOG_LEVEL`: Logging level (default: info)
    ///
    /// With no endpoints set, `connect` goes straight to the hosted nodes.
    pub fn from_env() -> Result<Self, ConnectError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let http = env::var("ETHEREUM_HTTP").ok().filter(|v| !v.is_empty());
        let ws = env::var("ETHEREUM_WS").ok().filter(|v| !v.is_empty());
        let ipc = env::var("ETHEREUM_IPC").ok().filter(|v| !v.is_empty());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        if let Some(url) = &http {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConnectError::Config(format!("ETHEREUM_HTTP is not a URL: {url}")));
            }
        }
        if let Some(url) = &ws {
            if !url.starts_with("ws://") && !url.starts_with("wss://") {
                return Err(ConnectError::Config(format!("ETHEREUM_WS is not a URL: {url}")));
            }
        }

        Ok(Self { http, ws, ipc, log_level })
    }
}

/// Raw endpoint configuration handed in by the embedding application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndpointConfig {
    pub http_addresses: Vec<String>,
    pub ws_addresses: Vec<String>,
    pub ipc_addresses: Vec<String>,
    #[serde(rename = "networkID")]
    pub network_id: Option<NetworkId>,
    pub start_block_stream_on_connect: bool,
}

/// The shape the RPC transport is configured with.
#[derive(Debug, Clone)]
pub struct RpcConfiguration {
    /// Connection timeout in milliseconds.
    pub connection_timeout: u64,
    /// Sink for transport-level errors.
    pub error_handler: fn(&ConnectError),
    pub http_addresses: Vec<String>,
    pub ws_addresses: Vec<String>,
    pub ipc_addresses: Vec<String>,
    pub network_id: Option<NetworkId>,
    pub start_block_stream_on_connect: bool,
}

fn log_rpc_error(err: &ConnectError) {
    tracing::error!(error = %err, "RPC transport error");
}

/// Build the transport configuration from a raw endpoint configuration,
/// injecting the fixed connection timeout and the default error logger.
pub fn create_rpc_configuration(configuration: EndpointConfig) -> RpcConfiguration {
    RpcConfiguration {
        connection_timeout: CONNECTION_TIMEOUT_MS,
        error_handler: log_rpc_error,
        http_addresses: configuration.http_addresses,
        ws_addresses: configuration.ws_addresses,
        ipc_addresses: configuration.ipc_addresses,
        network_id: configuration.network_id,
        start_block_stream_on_connect: configuration.start_block_stream_on_connect,
    }
}
