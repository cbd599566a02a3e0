//! Ethereum Connection Manager Library
//!
//! Negotiates a connection to an Ethereum-compatible node: detects the
//! network, discovers an unlocked signing account ("coinbase"), and patches
//! the built-in contract transaction descriptors with the deployment
//! addresses for the detected network.
//!
//! # Features
//!
//! - **Network Detection**: `net_version` negotiation with per-network
//!   contract address tables
//! - **Coinbase Discovery**: default account, else the first unlocked
//!   account on a local node
//! - **Hosted Fallback**: one-shot retry against the built-in hosted nodes
//!
//! # Example
//!
//! ```rust,ignore
//! use ethereum_connect::{ConnectOptions, Connector, EthereumRpc};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut connector = Connector::new(EthereumRpc::new());
//!     let endpoints = connector.connect(ConnectOptions::http("http://localhost:8545")).await?;
//!     println!("connected via {:?}", endpoints.http);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connector;
pub mod contracts;
pub mod error;
pub mod ethereum;
pub mod types;

pub use config::{create_rpc_configuration, Config, EndpointConfig, RpcConfiguration};
pub use connector::{
    BlockingConnector, ConnectOptions, Connector, ConnectorState, ResolvedEndpoints,
};
pub use error::{ConnectError, Result};
pub use ethereum::{Endpoints, EthereumRpc, NodeRpc};
pub use types::{set_from, ContractTable, DescriptorSet, NetworkId, TransactionDescriptor};
