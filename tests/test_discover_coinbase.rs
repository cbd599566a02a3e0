//! Integration tests for coinbase discovery.
//!
//! Run with: `cargo test --test test_discover_coinbase`

mod common;

use common::{account, MockRpc};
use ethereum_connect::{ConnectError, Connector, Endpoints};

fn local_endpoints() -> Endpoints {
    Endpoints::user(Some("http://localhost:8545".to_string()), None, None)
}

#[tokio::test]
async fn test_declared_coinbase_is_used_and_stamped() {
    let mut connector = Connector::new(MockRpc::new("1").with_coinbase(account(0xaa)));

    connector.discover_coinbase().await.expect("discovery should succeed");

    let state = connector.state();
    assert_eq!(state.coinbase, Some(account(0xaa)));
    assert_eq!(state.from, Some(account(0xaa)));
    assert!(state.tx.descriptors().all(|d| d.from == Some(account(0xaa))));
}

#[tokio::test]
async fn test_first_unlocked_account_selected_on_local_node() {
    let mut rpc = MockRpc::new("1")
        .with_locked_account(account(0x01))
        .with_unlocked_account(account(0x02))
        .with_unlocked_account(account(0x03));
    rpc.endpoints = local_endpoints();
    let mut connector = Connector::new(rpc);

    connector.discover_coinbase().await.unwrap();

    assert_eq!(connector.state().coinbase, Some(account(0x02)));
    assert_eq!(connector.state().from, Some(account(0x02)));
}

#[tokio::test]
async fn test_remote_node_never_scans_accounts() {
    // Unlocked accounts exist, but the transport is not local.
    let rpc = MockRpc::new("1").with_unlocked_account(account(0x02));
    let mut connector = Connector::new(rpc);

    let err = connector.discover_coinbase().await.unwrap_err();
    assert!(matches!(err, ConnectError::CoinbaseNotFound));
    assert!(connector.state().coinbase.is_none());
}

#[tokio::test]
async fn test_zero_accounts_and_no_coinbase_fails() {
    let mut rpc = MockRpc::new("1");
    rpc.endpoints = local_endpoints();
    let mut connector = Connector::new(rpc);

    let err = connector.discover_coinbase().await.unwrap_err();
    assert!(matches!(err, ConnectError::CoinbaseNotFound));
}

#[tokio::test]
async fn test_zero_address_coinbase_counts_as_absent() {
    let mut rpc = MockRpc::new("1").with_coinbase(account(0x00));
    rpc.endpoints = local_endpoints();
    let mut connector = Connector::new(rpc);

    let err = connector.discover_coinbase().await.unwrap_err();
    assert!(matches!(err, ConnectError::CoinbaseNotFound));
}

#[tokio::test]
async fn test_locked_accounts_are_skipped_entirely() {
    let mut rpc = MockRpc::new("1")
        .with_locked_account(account(0x01))
        .with_locked_account(account(0x02));
    rpc.endpoints = local_endpoints();
    let mut connector = Connector::new(rpc);

    let err = connector.discover_coinbase().await.unwrap_err();
    assert!(matches!(err, ConnectError::CoinbaseNotFound));
}

#[tokio::test]
async fn test_existing_from_is_preserved_across_rediscovery() {
    let mut connector = Connector::new(MockRpc::new("1").with_coinbase(account(0xaa)));
    connector.discover_coinbase().await.unwrap();

    // The node switches its default account; the chosen sender sticks.
    connector.rpc_mut().coinbase = Some(account(0xbb));
    connector.discover_coinbase().await.unwrap();

    let state = connector.state();
    assert_eq!(state.coinbase, Some(account(0xbb)));
    assert_eq!(state.from, Some(account(0xaa)));
    assert!(state.tx.descriptors().all(|d| d.from == Some(account(0xaa))));
}
