//! Integration tests for the blocking connector wrapper.
//!
//! Run with: `cargo test --test test_blocking`

mod common;

use common::{account, MockRpc};
use ethereum_connect::{BlockingConnector, ConnectError, ConnectOptions, NetworkId};

#[test]
fn test_blocking_connect_runs_full_sequence() {
    let rpc = MockRpc::new("1").with_coinbase(account(0xaa));
    let mut connector = BlockingConnector::new(rpc).unwrap();

    let resolved = connector.connect(ConnectOptions::http("http://localhost:8545")).unwrap();

    assert_eq!(resolved.http, vec!["http://localhost:8545".to_string()]);
    assert_eq!(connector.state().connection, Some(true));
    assert_eq!(connector.state().network_id, NetworkId::from("1"));
    assert!(connector.connected());
}

#[test]
fn test_blocking_connect_reports_fallback_failure() {
    let mut connector = BlockingConnector::new(MockRpc::unreachable()).unwrap();

    let err = connector.connect(ConnectOptions::default()).unwrap_err();
    assert!(matches!(err, ConnectError::Connection(_)));
    assert_eq!(connector.state().connection, Some(false));
    assert!(!connector.connected());
}

#[test]
fn test_blocking_step_operations() {
    let rpc = MockRpc::new("3").with_coinbase(account(0x05));
    let mut connector = BlockingConnector::new(rpc).unwrap();

    connector.detect_network().unwrap();
    connector.discover_coinbase().unwrap();
    connector.update_contracts();

    let state = connector.state();
    assert_eq!(state.network_id, NetworkId::from("3"));
    assert_eq!(state.contracts, state.init_contracts);
    assert!(state.tx.descriptors().all(|d| d.from == Some(account(0x05))));
}
