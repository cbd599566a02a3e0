//! Built-in contract registry.
//!
//! Maps each supported network id to its contract address table and builds
//! the default transaction-descriptor templates for a table.

use std::collections::BTreeMap;

use alloy::primitives::Address;

use crate::ethereum::constants::{
    MAINNET_EXCHANGE, MAINNET_ORACLE, MAINNET_REGISTRY, MAINNET_VAULT, MORDEN_EXCHANGE,
    MORDEN_ORACLE, MORDEN_REGISTRY, MORDEN_VAULT, ROPSTEN_EXCHANGE, ROPSTEN_ORACLE,
    ROPSTEN_REGISTRY, ROPSTEN_VAULT,
};
use crate::types::{ContractTable, DescriptorSet, NetworkId, TransactionDescriptor};

/// Contract address table for a network, or `None` when the network has no
/// known deployment.
pub fn contract_table(network: &NetworkId) -> Option<ContractTable> {
    let entries: &[(&str, Address)] = match network.as_str() {
        "1" => &[
            ("registry", MAINNET_REGISTRY),
            ("exchange", MAINNET_EXCHANGE),
            ("vault", MAINNET_VAULT),
            ("oracle", MAINNET_ORACLE),
        ],
        "2" => &[
            ("registry", MORDEN_REGISTRY),
            ("exchange", MORDEN_EXCHANGE),
            ("vault", MORDEN_VAULT),
            ("oracle", MORDEN_ORACLE),
        ],
        "3" => &[
            ("registry", ROPSTEN_REGISTRY),
            ("exchange", ROPSTEN_EXCHANGE),
            ("vault", ROPSTEN_VAULT),
            ("oracle", ROPSTEN_ORACLE),
        ],
        _ => return None,
    };
    Some(ContractTable::from_entries(entries.iter().copied()))
}

/// Default descriptor templates for a contract table.
///
/// Exchange, registry, and oracle methods use the flat shape; the vault
/// methods are grouped under their contract name.
pub fn transaction_templates(table: &ContractTable) -> DescriptorSet {
    let mut set = DescriptorSet::new();

    if let Some(exchange) = table.get("exchange") {
        set.insert_method(
            "trade",
            TransactionDescriptor::transaction(exchange, "trade", &["uint256", "uint256", "uint256"]),
        );
        set.insert_method(
            "cancelOrder",
            TransactionDescriptor::transaction(exchange, "cancelOrder", &["uint256"]),
        );
        set.insert_method(
            "getOrder",
            TransactionDescriptor::call(exchange, "getOrder", &["uint256"], "uint256[]"),
        );
    }

    if let Some(registry) = table.get("registry") {
        set.insert_method(
            "lookup",
            TransactionDescriptor::call(registry, "lookup", &["bytes32"], "address"),
        );
    }

    if let Some(oracle) = table.get("oracle") {
        set.insert_method(
            "getPrice",
            TransactionDescriptor::call(oracle, "getPrice", &["address"], "uint256"),
        );
    }

    if let Some(vault) = table.get("vault") {
        let mut methods = BTreeMap::new();
        methods.insert(
            "deposit".to_string(),
            TransactionDescriptor::transaction(vault, "deposit", &[]),
        );
        methods.insert(
            "withdraw".to_string(),
            TransactionDescriptor::transaction(vault, "withdraw", &["uint256"]),
        );
        methods.insert(
            "balanceOf".to_string(),
            TransactionDescriptor::call(vault, "balanceOf", &["address"], "uint256"),
        );
        set.insert_contract("vault", methods);
    }

    set
}
