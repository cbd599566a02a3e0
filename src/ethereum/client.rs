//! Alloy-backed node transport.

use alloy::{
    network::Ethereum,
    primitives::{Address, Bytes},
    providers::{Provider, ProviderBuilder, RootProvider},
    transports::RpcError,
};
use async_trait::async_trait;

use crate::error::{ConnectError, Result};
use crate::types::NetworkId;

use super::rpc::{Endpoints, NodeRpc};

/// Type alias for the HTTP provider.
pub type HttpProvider = RootProvider<Ethereum>;

/// Production [`NodeRpc`] implementation over HTTP.
///
/// The provider is rebuilt whenever the endpoint set changes and is only
/// exercised lazily, so constructing or reconfiguring the transport never
/// touches the network. WebSocket and IPC targets are recorded for the
/// caller but all wire traffic goes over the active HTTP endpoint.
pub struct EthereumRpc {
    endpoints: Endpoints,
    provider: Option<HttpProvider>,
}

impl EthereumRpc {
    /// Create a transport with no endpoints configured.
    pub fn new() -> Self {
        Self { endpoints: Endpoints::default(), provider: None }
    }

    /// Create a transport already pointed at the given endpoints.
    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        let mut rpc = Self::new();
        rpc.apply(endpoints);
        rpc
    }

    fn apply(&mut self, endpoints: Endpoints) {
        self.provider = match endpoints.active_http() {
            Some(raw) => match raw.parse() {
                Ok(url) => {
                    tracing::debug!(endpoint = raw, "RPC transport configured");
                    #[allow(deprecated)]
                    Some(ProviderBuilder::new().connect_http(url).root().clone())
                }
                Err(err) => {
                    tracing::warn!(endpoint = raw, error = %err, "invalid RPC URL, transport left unconfigured");
                    None
                }
            },
            None => None,
        };
        self.endpoints = endpoints;
    }

    fn provider(&self) -> Result<&HttpProvider> {
        self.provider
            .as_ref()
            .ok_or_else(|| ConnectError::Transport("no RPC endpoint configured".to_string()))
    }
}

impl Default for EthereumRpc {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NodeRpc for EthereumRpc {
    async fn version(&self) -> Result<NetworkId> {
        let version: String = self.provider()?.raw_request("net_version".into(), ()).await?;
        Ok(NetworkId::from(version))
    }

    async fn coinbase(&self) -> Result<Option<Address>> {
        // A node without an etherbase answers with a JSON-RPC error, not a
        // transport failure.
        match self.provider()?.raw_request::<_, Address>("eth_coinbase".into(), ()).await {
            Ok(address) if !address.is_zero() => Ok(Some(address)),
            Ok(_) => Ok(None),
            Err(RpcError::ErrorResp(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        Ok(self.provider()?.get_accounts().await?)
    }

    async fn unlocked(&self, address: Address) -> Result<bool> {
        // A locked account rejects eth_sign; that rejection is the signal.
        match self
            .provider()?
            .raw_request::<_, Bytes>("eth_sign".into(), (address, Bytes::new()))
            .await
        {
            Ok(_) => Ok(true),
            Err(RpcError::ErrorResp(_)) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn configure(&mut self, endpoints: Endpoints) {
        self.apply(endpoints);
    }

    fn reset(&mut self) {
        self.apply(Endpoints::default());
    }

    fn use_hosted_nodes(&mut self) {
        self.apply(Endpoints::hosted());
    }

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
