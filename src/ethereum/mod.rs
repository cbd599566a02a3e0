//! Ethereum node interaction module.
//!
//! Contains the transport trait, the alloy-backed client, and network
//! constants.

pub mod client;
pub mod constants;
pub mod rpc;

pub use client::{EthereumRpc, HttpProvider};
pub use rpc::{Endpoints, NodeRpc};
