//! Ethereum connection probe.
//!
//! Connects to a node using environment configuration and reports the
//! negotiated state.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ethereum_connect::{Config, ConnectOptions, Connector, EthereumRpc};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let options = ConnectOptions {
        http: config.http,
        ws: config.ws,
        ipc: config.ipc,
        attempts: 0,
    };

    let mut connector = Connector::new(EthereumRpc::new());
    let endpoints = connector.connect(options).await?;

    let state = connector.state();
    tracing::info!(
        http = ?endpoints.http,
        ws = ?endpoints.ws,
        ipc = ?endpoints.ipc,
        network = %state.network_id,
        coinbase = ?state.coinbase,
        contracts = state.contracts.len(),
        "connection negotiated"
    );

    Ok(())
}
