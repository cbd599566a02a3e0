//! Blocking convenience wrapper over the async connector.

use tokio::runtime::{Builder, Runtime};

use crate::error::{ConnectError, Result};
use crate::ethereum::rpc::NodeRpc;

use super::{ConnectOptions, Connector, ConnectorState, ResolvedEndpoints};

/// Drives a [`Connector`] from synchronous code.
///
/// Owns a private current-thread runtime and forwards every operation via
/// `block_on`; there is no second implementation of the negotiation logic.
/// Must not be used from within an async context.
pub struct BlockingConnector<T: NodeRpc> {
    runtime: Runtime,
    inner: Connector<T>,
}

impl<T: NodeRpc> BlockingConnector<T> {
    /// Create a blocking connector in the idle state.
    pub fn new(rpc: T) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| ConnectError::Config(format!("failed to build runtime: {err}")))?;
        Ok(Self { runtime, inner: Connector::new(rpc) })
    }

    /// Blocking [`Connector::connect`].
    pub fn connect(&mut self, options: ConnectOptions) -> Result<ResolvedEndpoints> {
        self.runtime.block_on(self.inner.connect(options))
    }

    /// Blocking [`Connector::connected`].
    pub fn connected(&self) -> bool {
        self.runtime.block_on(self.inner.connected())
    }

    /// Blocking [`Connector::detect_network`].
    pub fn detect_network(&mut self) -> Result<()> {
        self.runtime.block_on(self.inner.detect_network())
    }

    /// Blocking [`Connector::discover_coinbase`].
    pub fn discover_coinbase(&mut self) -> Result<()> {
        self.runtime.block_on(self.inner.discover_coinbase())
    }

    /// See [`Connector::update_contracts`].
    pub fn update_contracts(&mut self) {
        self.inner.update_contracts()
    }

    /// Current connection-cycle state.
    pub fn state(&self) -> &ConnectorState {
        self.inner.state()
    }

    /// Unwrap back into the async connector.
    pub fn into_inner(self) -> Connector<T> {
        self.inner
    }
}
