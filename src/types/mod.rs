//! Type definitions module.
//!
//! Contains the network identity, contract table, and descriptor types
//! shared across the crate.

pub mod abi;
pub mod descriptors;
pub mod network;

pub use abi::{set_from, FunctionAbi, FunctionsAbi};
pub use descriptors::{DescriptorGroup, DescriptorSet, TransactionDescriptor};
pub use network::{AddressIndex, ContractTable, NetworkId};
