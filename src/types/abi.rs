//! Nested contract/method ABI tables and the sender-stamping helper.

use std::collections::BTreeMap;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

/// ABI entry for a single contract method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionAbi {
    /// Sender address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Destination contract address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// Parameter type signature.
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Whether the method is read-only.
    #[serde(default)]
    pub constant: bool,
}

/// Contract name -> method name -> ABI entry.
pub type FunctionsAbi = BTreeMap<String, BTreeMap<String, FunctionAbi>>;

/// Stamp `from` onto every method of a nested ABI table.
///
/// Identity when the address is `None` or the table is empty.
pub fn set_from(mut abi: FunctionsAbi, from: Option<Address>) -> FunctionsAbi {
    let Some(from) = from else { return abi };
    for methods in abi.values_mut() {
        for function in methods.values_mut() {
            function.from = Some(from);
        }
    }
    abi
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    fn sample_abi() -> FunctionsAbi {
        let mut methods = BTreeMap::new();
        methods.insert("trade".to_string(), FunctionAbi::default());
        methods.insert(
            "getOrder".to_string(),
            FunctionAbi { constant: true, ..FunctionAbi::default() },
        );
        let mut abi = FunctionsAbi::new();
        abi.insert("exchange".to_string(), methods);
        abi
    }

    #[test]
    fn test_set_from_identity_on_empty_table() {
        let abi = FunctionsAbi::new();
        let from = address!("913fa8027cd46b15e2a90c63d7f8412b5ae0c6d8");
        assert_eq!(set_from(abi.clone(), Some(from)), abi);
    }

    #[test]
    fn test_set_from_identity_on_missing_address() {
        let abi = sample_abi();
        assert_eq!(set_from(abi.clone(), None), abi);
    }

    #[test]
    fn test_set_from_stamps_every_method() {
        let from = address!("913fa8027cd46b15e2a90c63d7f8412b5ae0c6d8");
        let stamped = set_from(sample_abi(), Some(from));

        for methods in stamped.values() {
            for function in methods.values() {
                assert_eq!(function.from, Some(from));
            }
        }
    }
}
