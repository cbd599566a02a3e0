//! Connection negotiation.
//!
//! Composes three steps against the node transport: network detection,
//! coinbase discovery, and contract table reconciliation. `connect` runs
//! them in order with a one-shot hosted-node fallback.

pub mod blocking;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::contracts;
use crate::error::{ConnectError, Result};
use crate::ethereum::rpc::{Endpoints, NodeRpc};
use crate::types::{ContractTable, DescriptorSet, NetworkId};

pub use blocking::BlockingConnector;

/// Endpoint options for a connection attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectOptions {
    /// HTTP endpoint of a user-operated node.
    pub http: Option<String>,
    /// WebSocket endpoint.
    pub ws: Option<String>,
    /// IPC socket path.
    pub ipc: Option<String>,
    /// Prior attempt count; callers leave this at zero.
    #[serde(default)]
    pub attempts: u32,
}

impl ConnectOptions {
    /// Options targeting a single HTTP endpoint.
    pub fn http(url: impl Into<String>) -> Self {
        Self { http: Some(url.into()), ..Self::default() }
    }

    fn has_endpoint(&self) -> bool {
        self.http.is_some() || self.ipc.is_some() || self.ws.is_some()
    }
}

/// The endpoint set a successful connection resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedEndpoints {
    /// The user HTTP endpoint, or the hosted list when falling back.
    pub http: Vec<String>,
    pub ws: Option<String>,
    pub ipc: Option<String>,
}

impl From<Endpoints> for ResolvedEndpoints {
    fn from(endpoints: Endpoints) -> Self {
        let http = match endpoints.http {
            Some(url) => vec![url],
            None => endpoints.hosted,
        };
        Self { http, ws: endpoints.ws, ipc: endpoints.ipc }
    }
}

/// State of one connection cycle.
///
/// An explicit value rather than process-global state, so independent
/// connectors can coexist and tests stay deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectorState {
    /// Detected (or assumed) network id.
    pub network_id: NetworkId,
    /// Active per-network contract address table.
    pub contracts: ContractTable,
    /// Snapshot of the last table the descriptors were reconciled against.
    pub init_contracts: ContractTable,
    /// Active transaction descriptor table.
    pub tx: DescriptorSet,
    /// Discovered default signing account.
    pub coinbase: Option<Address>,
    /// Sender stamped onto descriptors; defaults to the coinbase.
    pub from: Option<Address>,
    /// `None` until a connection has been attempted, then the outcome.
    pub connection: Option<bool>,
}

impl Default for ConnectorState {
    fn default() -> Self {
        let network_id = NetworkId::default();
        let contracts = contracts::contract_table(&network_id).unwrap_or_default();
        let tx = contracts::transaction_templates(&contracts);
        Self {
            network_id,
            init_contracts: contracts.clone(),
            contracts,
            tx,
            coinbase: None,
            from: None,
            connection: None,
        }
    }
}

/// Connection manager over a node transport.
pub struct Connector<T: NodeRpc> {
    rpc: T,
    state: ConnectorState,
}

impl<T: NodeRpc> Connector<T> {
    /// Create a connector in the idle state.
    pub fn new(rpc: T) -> Self {
        Self { rpc, state: ConnectorState::default() }
    }

    /// Create a connector resuming from an explicit state.
    pub fn with_state(rpc: T, state: ConnectorState) -> Self {
        Self { rpc, state }
    }

    /// Current connection-cycle state.
    pub fn state(&self) -> &ConnectorState {
        &self.state
    }

    /// The underlying transport.
    pub fn rpc(&self) -> &T {
        &self.rpc
    }

    /// Mutable access to the underlying transport.
    pub fn rpc_mut(&mut self) -> &mut T {
        &mut self.rpc
    }

    /// Detect the network and activate its contract table.
    ///
    /// Skipped once a connection attempt has resolved, or after the active
    /// table has diverged from its initial snapshot. On an error-shaped
    /// version response the descriptor table is left untouched.
    pub async fn detect_network(&mut self) -> Result<()> {
        if self.state.connection.is_some() || self.state.contracts != self.state.init_contracts {
            return Ok(());
        }

        let network = self
            .rpc
            .version()
            .await
            .map_err(|err| ConnectError::NetworkDetection(err.to_string()))?;
        let table = contracts::contract_table(&network).ok_or_else(|| {
            ConnectError::NetworkDetection(format!(
                "no known contract deployment for network {network}"
            ))
        })?;
        tracing::debug!(network = %network, "network detected");

        let mut tx = contracts::transaction_templates(&table);
        // Descriptors still pointing into the initial table follow it to
        // the newly activated one.
        tx.retarget(&self.state.init_contracts.address_index(), &table);

        self.state.network_id = network;
        self.state.contracts = table;
        self.state.tx = tx;
        Ok(())
    }

    /// Determine a signing account and stamp it across the descriptors.
    ///
    /// Resolution order: the node's declared coinbase, then the first
    /// unlocked account when talking to a local node. A previously chosen
    /// `from` is kept.
    pub async fn discover_coinbase(&mut self) -> Result<()> {
        let mut coinbase = match self.rpc.coinbase().await {
            Ok(Some(address)) if !address.is_zero() => Some(address),
            _ => None,
        };

        if coinbase.is_none() && self.rpc.is_local() {
            for account in self.rpc.accounts().await.unwrap_or_default() {
                if self.rpc.unlocked(account).await.unwrap_or(false) {
                    coinbase = Some(account);
                    break;
                }
            }
        }

        let coinbase = coinbase.ok_or(ConnectError::CoinbaseNotFound)?;
        tracing::debug!(coinbase = %coinbase, "coinbase discovered");

        self.state.coinbase = Some(coinbase);
        let from = self.state.from.unwrap_or(coinbase);
        self.state.from = Some(from);
        self.state.tx.set_from(from);
        Ok(())
    }

    /// Reconcile descriptors against the active table and commit it as the
    /// new snapshot. Idempotent.
    pub fn update_contracts(&mut self) {
        if self.state.contracts != self.state.init_contracts {
            self.state
                .tx
                .retarget(&self.state.init_contracts.address_index(), &self.state.contracts);
        }
        self.state.init_contracts = self.state.contracts.clone();
    }

    /// Negotiate a connection.
    ///
    /// The first attempt uses exactly the endpoints in `options` when any
    /// are given; otherwise, and on the single fallback retry, the built-in
    /// hosted node set is used. Never makes more than two attempts.
    pub async fn connect(&mut self, options: ConnectOptions) -> Result<ResolvedEndpoints> {
        let mut options = options;
        loop {
            self.configure_transport(&options);
            match self.negotiate().await {
                Ok(()) => {
                    self.update_contracts();
                    self.state.connection = Some(true);
                    let resolved = ResolvedEndpoints::from(self.rpc.endpoints().clone());
                    tracing::info!(
                        network = %self.state.network_id,
                        coinbase = ?self.state.coinbase,
                        http = ?resolved.http,
                        "connected to Ethereum"
                    );
                    return Ok(resolved);
                }
                Err(err) => {
                    tracing::warn!(error = %err, ?options, "couldn't connect to Ethereum");
                    self.state.connection = Some(false);
                    if options.attempts == 0 {
                        options.attempts = 1;
                        continue;
                    }
                    return Err(ConnectError::after_fallback(err));
                }
            }
        }
    }

    /// Liveness probe: true iff the node reports a usable coinbase.
    pub async fn connected(&self) -> bool {
        matches!(self.rpc.coinbase().await, Ok(Some(address)) if !address.is_zero())
    }

    // Detection must precede coinbase discovery: stamping runs over the
    // freshly retargeted descriptor table.
    async fn negotiate(&mut self) -> Result<()> {
        self.detect_network().await?;
        self.discover_coinbase().await
    }

    fn configure_transport(&mut self, options: &ConnectOptions) {
        if options.attempts == 0 && options.has_endpoint() {
            self.rpc.configure(Endpoints::user(
                options.http.clone(),
                options.ws.clone(),
                options.ipc.clone(),
            ));
        } else {
            tracing::debug!("connecting to hosted Ethereum node");
            self.rpc.reset();
            self.rpc.use_hosted_nodes();
        }
    }
}
