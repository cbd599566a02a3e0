//! The node RPC collaborator seam.
//!
//! The connector drives everything through [`NodeRpc`], so tests can swap
//! in a scripted transport and production code uses the alloy-backed
//! [`crate::ethereum::EthereumRpc`].

use alloy::primitives::Address;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::NetworkId;

use super::constants::HOSTED_HTTP_NODES;

/// Endpoint configuration for a transport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoints {
    /// User-operated HTTP endpoint.
    pub http: Option<String>,
    /// WebSocket endpoint.
    pub ws: Option<String>,
    /// IPC socket path.
    pub ipc: Option<String>,
    /// Hosted fallback HTTP endpoints.
    pub hosted: Vec<String>,
}

impl Endpoints {
    /// Exactly the user-supplied endpoints, hosted list cleared.
    pub fn user(http: Option<String>, ws: Option<String>, ipc: Option<String>) -> Self {
        Self { http, ws, ipc, hosted: Vec::new() }
    }

    /// The built-in hosted fallback set.
    pub fn hosted() -> Self {
        Self {
            hosted: HOSTED_HTTP_NODES.iter().map(|node| node.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Active HTTP target: the user endpoint, else the first hosted node.
    pub fn active_http(&self) -> Option<&str> {
        self.http.as_deref().or_else(|| self.hosted.first().map(String::as_str))
    }

    /// True when pointed at a node the caller operates, via HTTP or IPC.
    pub fn is_local(&self) -> bool {
        self.http.is_some() || self.ipc.is_some()
    }
}

/// Wire operations and endpoint control the connector needs from a node.
#[async_trait]
pub trait NodeRpc: Send + Sync {
    /// `net_version`: the network id the node reports.
    async fn version(&self) -> Result<NetworkId>;

    /// The node's default signing account. `Ok(None)` when the node
    /// declares none; transport failures are `Err`.
    async fn coinbase(&self) -> Result<Option<Address>>;

    /// All accounts the node knows.
    async fn accounts(&self) -> Result<Vec<Address>>;

    /// Whether the account can sign without further authentication.
    async fn unlocked(&self, address: Address) -> Result<bool>;

    /// Point the transport at exactly these endpoints.
    fn configure(&mut self, endpoints: Endpoints);

    /// Drop all endpoint state.
    fn reset(&mut self);

    /// Switch to the built-in hosted node set.
    fn use_hosted_nodes(&mut self);

    /// The endpoints currently in effect.
    fn endpoints(&self) -> &Endpoints;

    /// True when talking to a locally-operated node.
    fn is_local(&self) -> bool {
        self.endpoints().is_local()
    }
}
