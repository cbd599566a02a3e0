//! Transaction descriptor tables.
//!
//! A descriptor bundles everything needed to address a contract method:
//! destination, sender, and method metadata. Sets hold descriptors either
//! flatly (method name -> descriptor) or nested under a contract name.

use std::collections::BTreeMap;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use super::network::{AddressIndex, ContractTable};

/// Metadata for building one contract call or transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDescriptor {
    /// Destination contract address.
    pub to: Address,
    /// Sender address; stamped during coinbase discovery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Contract method name.
    pub method: String,
    /// Parameter type signature.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Whether the method is sent as a transaction rather than a call.
    #[serde(default)]
    pub send: bool,
    /// Return type for call methods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

impl TransactionDescriptor {
    /// A read-only call descriptor.
    pub fn call(to: Address, method: &str, inputs: &[&str], returns: &str) -> Self {
        Self {
            to,
            from: None,
            method: method.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            send: false,
            returns: Some(returns.to_string()),
        }
    }

    /// A state-changing transaction descriptor.
    pub fn transaction(to: Address, method: &str, inputs: &[&str]) -> Self {
        Self {
            to,
            from: None,
            method: method.to_string(),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            send: true,
            returns: None,
        }
    }
}

/// One entry in a descriptor set: a bare method or a contract grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DescriptorGroup {
    /// Flat shape: the entry is a single method descriptor.
    Method(TransactionDescriptor),
    /// Nested shape: method name -> descriptor under one contract.
    Contract(BTreeMap<String, TransactionDescriptor>),
}

/// The active descriptor table, supporting both flat and nested shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorSet {
    entries: BTreeMap<String, DescriptorGroup>,
}

impl DescriptorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a flat method descriptor.
    pub fn insert_method(&mut self, name: impl Into<String>, descriptor: TransactionDescriptor) {
        self.entries.insert(name.into(), DescriptorGroup::Method(descriptor));
    }

    /// Insert a nested contract group.
    pub fn insert_contract(
        &mut self,
        name: impl Into<String>,
        methods: BTreeMap<String, TransactionDescriptor>,
    ) {
        self.entries.insert(name.into(), DescriptorGroup::Contract(methods));
    }

    /// Flat descriptor registered under `name`, if any.
    pub fn method(&self, name: &str) -> Option<&TransactionDescriptor> {
        match self.entries.get(name) {
            Some(DescriptorGroup::Method(descriptor)) => Some(descriptor),
            _ => None,
        }
    }

    /// Nested contract group registered under `name`, if any.
    pub fn contract(&self, name: &str) -> Option<&BTreeMap<String, TransactionDescriptor>> {
        match self.entries.get(name) {
            Some(DescriptorGroup::Contract(methods)) => Some(methods),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every descriptor in the set, flat and nested alike.
    pub fn descriptors(&self) -> impl Iterator<Item = &TransactionDescriptor> {
        self.entries.values().flat_map(|group| match group {
            DescriptorGroup::Method(descriptor) => {
                Box::new(std::iter::once(descriptor))
                    as Box<dyn Iterator<Item = &TransactionDescriptor>>
            }
            DescriptorGroup::Contract(methods) => Box::new(methods.values()),
        })
    }

    fn descriptors_mut(&mut self) -> impl Iterator<Item = &mut TransactionDescriptor> {
        self.entries.values_mut().flat_map(|group| match group {
            DescriptorGroup::Method(descriptor) => {
                Box::new(std::iter::once(descriptor))
                    as Box<dyn Iterator<Item = &mut TransactionDescriptor>>
            }
            DescriptorGroup::Contract(methods) => Box::new(methods.values_mut()),
        })
    }

    /// Stamp the sender on every descriptor.
    pub fn set_from(&mut self, from: Address) {
        for descriptor in self.descriptors_mut() {
            descriptor.from = Some(from);
        }
    }

    /// Rewrite every destination that `index` resolves to a logical name
    /// with that contract's address in `table`. Destinations the index does
    /// not know are left alone.
    pub fn retarget(&mut self, index: &AddressIndex, table: &ContractTable) {
        for descriptor in self.descriptors_mut() {
            if let Some(name) = index.name_of(descriptor.to) {
                if let Some(address) = table.get(name) {
                    descriptor.to = address;
                }
            }
        }
    }
}
