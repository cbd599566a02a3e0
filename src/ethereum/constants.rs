//! Network constants.
//!
//! Contains the default network id, the hosted fallback node set, and the
//! built-in per-network contract deployments.

use alloy::primitives::{address, Address};

// ============================================================================
// Networks
// ============================================================================

/// Network id assumed before detection has run.
pub const DEFAULT_NETWORK_ID: &str = "2";

/// Transport connection timeout injected into RPC configurations, in
/// milliseconds.
pub const CONNECTION_TIMEOUT_MS: u64 = 60_000;

// ============================================================================
// Hosted fallback nodes
// ============================================================================

/// HTTP endpoints of the hosted nodes used when user endpoints fail.
/// The hosted set carries no WebSocket or IPC targets.
pub const HOSTED_HTTP_NODES: &[&str] =
    &["https://eth1.ethconnect.net", "https://eth2.ethconnect.net"];

// ============================================================================
// Contract Deployments (network "1", Mainnet)
// ============================================================================

/// Name registry on Mainnet.
pub const MAINNET_REGISTRY: Address = address!("2a4b08f1c9d37e650a8ec1545f3078c4b9e2d716");

/// Exchange on Mainnet.
pub const MAINNET_EXCHANGE: Address = address!("7c1e9d04b6f2385a90d4ce78b1a35f06e8d2c49b");

/// Vault on Mainnet.
pub const MAINNET_VAULT: Address = address!("913fa8027cd46b15e2a90c63d7f8412b5ae0c6d8");

/// Price oracle on Mainnet.
pub const MAINNET_ORACLE: Address = address!("4e6d210af95c83b7d012ef4a68c5d39b07f1e82c");

// ============================================================================
// Contract Deployments (network "2", Morden)
// ============================================================================

/// Name registry on Morden.
pub const MORDEN_REGISTRY: Address = address!("a0c58f6b21d49e3708b5fd12c43a96e0d7218f5c");

/// Exchange on Morden.
pub const MORDEN_EXCHANGE: Address = address!("b52d7e09c1f6834a20de59b78c4f01a3e6d928b4");

/// Vault on Morden.
pub const MORDEN_VAULT: Address = address!("c716e3a98d05f42bb681ac29e5d0f7364c8391da");

/// Price oracle on Morden.
pub const MORDEN_ORACLE: Address = address!("d98b04c2e7a1f5630cd28b4916e0a3c5f74d218e");

// ============================================================================
// Contract Deployments (network "3", Ropsten)
// ============================================================================

/// Name registry on Ropsten.
pub const ROPSTEN_REGISTRY: Address = address!("e2f1708c5a9d34b6012c8ef59d7a40b3c61e95d2");

/// Exchange on Ropsten.
pub const ROPSTEN_EXCHANGE: Address = address!("f40a92d61e8c57b3a94d01f28c6b5e07d3a1c698");

/// Vault on Ropsten.
pub const ROPSTEN_VAULT: Address = address!("06e8d3b15c2f79a480b6e1d49f05c7a2318d64fb");

/// Price oracle on Ropsten.
pub const ROPSTEN_ORACLE: Address = address!("17c5f02a9e6d48b3520a8c91d4e7f63b09c2e85a");
