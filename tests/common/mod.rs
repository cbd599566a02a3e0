//! Common utilities for integration tests.

// Not every test binary exercises every helper.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy::primitives::Address;
use async_trait::async_trait;
use ethereum_connect::{ConnectError, Endpoints, NetworkId, NodeRpc, Result};

/// An address with the given last byte.
pub fn account(n: u8) -> Address {
    Address::with_last_byte(n)
}

/// Scripted node transport.
///
/// `network: None` makes `version` answer error-shaped; `fail_coinbase`
/// does the same for `coinbase`. Call counters record how the connector
/// drove the transport.
pub struct MockRpc {
    pub network: Option<NetworkId>,
    pub coinbase: Option<Address>,
    pub fail_coinbase: bool,
    pub accounts: Vec<Address>,
    pub unlocked: HashSet<Address>,
    pub endpoints: Endpoints,
    pub version_calls: AtomicUsize,
    pub coinbase_calls: AtomicUsize,
    pub hosted_switches: AtomicUsize,
}

impl MockRpc {
    pub fn new(network: &str) -> Self {
        Self {
            network: Some(NetworkId::from(network)),
            coinbase: None,
            fail_coinbase: false,
            accounts: Vec::new(),
            unlocked: HashSet::new(),
            endpoints: Endpoints::default(),
            version_calls: AtomicUsize::new(0),
            coinbase_calls: AtomicUsize::new(0),
            hosted_switches: AtomicUsize::new(0),
        }
    }

    /// A node that answers nothing successfully.
    pub fn unreachable() -> Self {
        let mut rpc = Self::new("2");
        rpc.network = None;
        rpc.fail_coinbase = true;
        rpc
    }

    pub fn with_coinbase(mut self, address: Address) -> Self {
        self.coinbase = Some(address);
        self
    }

    pub fn with_unlocked_account(mut self, address: Address) -> Self {
        self.accounts.push(address);
        self.unlocked.insert(address);
        self
    }

    pub fn with_locked_account(mut self, address: Address) -> Self {
        self.accounts.push(address);
        self
    }
}

#[async_trait]
impl NodeRpc for MockRpc {
    async fn version(&self) -> Result<NetworkId> {
        self.version_calls.fetch_add(1, Ordering::SeqCst);
        self.network
            .clone()
            .ok_or_else(|| ConnectError::Transport("node unreachable".to_string()))
    }

    async fn coinbase(&self) -> Result<Option<Address>> {
        self.coinbase_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_coinbase {
            return Err(ConnectError::Transport("node unreachable".to_string()));
        }
        Ok(self.coinbase)
    }

    async fn accounts(&self) -> Result<Vec<Address>> {
        Ok(self.accounts.clone())
    }

    async fn unlocked(&self, address: Address) -> Result<bool> {
        Ok(self.unlocked.contains(&address))
    }

    fn configure(&mut self, endpoints: Endpoints) {
        self.endpoints = endpoints;
    }

    fn reset(&mut self) {
        self.endpoints = Endpoints::default();
    }

    fn use_hosted_nodes(&mut self) {
        self.hosted_switches.fetch_add(1, Ordering::SeqCst);
        self.endpoints = Endpoints::hosted();
    }

    fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}
