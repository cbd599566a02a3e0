//! Network identity and per-network contract address tables.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::ethereum::constants::DEFAULT_NETWORK_ID;

/// Chain network identifier as reported by `net_version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NetworkId(String);

impl NetworkId {
    /// Create a network id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The string form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NetworkId {
    fn default() -> Self {
        Self(DEFAULT_NETWORK_ID.to_string())
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NetworkId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NetworkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Per-network mapping from logical contract name to deployed address.
///
/// Tables are plain values with structural equality, so snapshotting one is
/// an explicit `clone()` and comparing against a snapshot is `==`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTable {
    addresses: BTreeMap<String, Address>,
}

impl ContractTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (name, address) pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Address)>,
        S: Into<String>,
    {
        Self {
            addresses: entries.into_iter().map(|(name, address)| (name.into(), address)).collect(),
        }
    }

    /// Register or replace a contract address.
    pub fn insert(&mut self, name: impl Into<String>, address: Address) {
        self.addresses.insert(name.into(), address);
    }

    /// Address for a logical contract name.
    pub fn get(&self, name: &str) -> Option<Address> {
        self.addresses.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Iterate over (name, address) entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Address)> {
        self.addresses.iter().map(|(name, address)| (name.as_str(), *address))
    }

    /// Build the reverse index for this table. Built once per table
    /// activation and reused for every descriptor rewrite.
    pub fn address_index(&self) -> AddressIndex {
        AddressIndex {
            names: self
                .addresses
                .iter()
                .map(|(name, address)| (*address, name.clone()))
                .collect(),
        }
    }
}

/// Reverse lookup from deployed address to logical contract name.
#[derive(Debug, Clone, Default)]
pub struct AddressIndex {
    names: HashMap<Address, String>,
}

impl AddressIndex {
    /// Logical name of the contract deployed at `address`, if any.
    pub fn name_of(&self, address: Address) -> Option<&str> {
        self.names.get(&address).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_network_id_default() {
        assert_eq!(NetworkId::default().as_str(), "2");
    }

    #[test]
    fn test_network_id_display_and_parse() {
        let id: NetworkId = "1".parse().unwrap();
        assert_eq!(id.to_string(), "1");
        assert_eq!(id, NetworkId::from("1"));
    }

    #[test]
    fn test_address_index_reverse_lookup() {
        let exchange = address!("7c1e9d04b6f2385a90d4ce78b1a35f06e8d2c49b");
        let table = ContractTable::from_entries([("exchange", exchange)]);
        let index = table.address_index();

        assert_eq!(index.name_of(exchange), Some("exchange"));
        assert_eq!(index.name_of(Address::ZERO), None);
    }

    #[test]
    fn test_snapshot_structural_equality() {
        let mut table = ContractTable::new();
        table.insert("registry", address!("2a4b08f1c9d37e650a8ec1545f3078c4b9e2d716"));

        let snapshot = table.clone();
        assert_eq!(table, snapshot);

        table.insert("registry", Address::ZERO);
        assert_ne!(table, snapshot);
    }
}
