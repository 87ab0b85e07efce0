//! Wallet client (v1)
//!
//! Runs a single wallet session: connect, report network and balance, then
//! disconnect.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌───────────────────────────────────────────────┐
//!                 │                 WALLET CLIENT                  │
//!                 │                                                │
//!    Connector    │  ┌────────────┐   state   ┌────────────────┐   │
//!   (local key)  ─┼─▶│ connection │──────────▶│    balance     │───┼──▶ RPC endpoints
//!                 │  │  manager   │           │    fetcher     │   │   (fallback chain)
//!                 │  └─────┬──────┘           └────────────────┘   │
//!                 │        │ provider handle                       │
//!                 │        ▼                                       │
//!                 │  ┌────────────┐   ┌──────────┐  ┌──────────┐   │
//!                 │  │  transfer  │──▶│  codec   │  │ network  │   │
//!                 │  │  builder   │   │hex/units │  │ registry │   │
//!                 │  └────────────┘   └──────────┘  └──────────┘   │
//!                 │                                                │
//!                 │      config · observability · error            │
//!                 └───────────────────────────────────────────────┘
//! ```
//!
//! Configuration comes from the TOML file named by `WALLET_CLIENT_CONFIG`,
//! defaults otherwise. The private key is read from the environment variable
//! named in `[wallet] private_key_env`.

use std::sync::Arc;

use wallet_client::balance::BalanceFetcher;
use wallet_client::config::loader::load_from_env;
use wallet_client::connection::{ConnectionManager, LocalKeyConnector};
use wallet_client::network;
use wallet_client::observability::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_from_env()?;
    logging::init(&config.observability);

    tracing::info!("wallet-client v0.1.0 starting");
    tracing::info!(
        rpc_url = %config.wallet.rpc_url,
        balance_endpoints = config.balance.endpoints.len(),
        "Configuration loaded"
    );

    let connector = Arc::new(LocalKeyConnector::from_env(&config.wallet)?);
    let manager = Arc::new(ConnectionManager::new(connector));
    let fetcher = BalanceFetcher::from_config(&config.balance)?;
    let listener = manager.spawn_event_listener();

    let state = match manager.connect().await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, kind = e.kind(), "Could not connect wallet");
            return Err(e.into());
        }
    };

    if let (Some(account), Some(chain_id)) = (state.account(), state.chain_id()) {
        let info = network::lookup(chain_id);
        if !network::registry::is_known(chain_id) {
            tracing::warn!(chain_id = %chain_id, "Chain not in the network registry, showing generic metadata");
        }
        let explorer = info
            .address_url(&account.to_string())
            .unwrap_or_else(|| "-".to_string());
        tracing::info!(
            account = %account,
            chain_id = %chain_id,
            network = %info.name,
            symbol = %info.symbol,
            explorer = %explorer,
            "Session established"
        );

        match manager.refresh_balance(&fetcher).await {
            Ok(Some(balance)) => {
                tracing::info!(balance = %balance, symbol = %info.symbol, "Balance")
            }
            Ok(None) => tracing::info!("Account or chain changed while fetching balance"),
            Err(e) => tracing::warn!(error = %e, kind = e.kind(), "Balance unavailable"),
        }
    }

    manager.disconnect().await;
    if let Some(listener) = listener {
        listener.abort();
    }

    tracing::info!("Session closed");
    Ok(())
}
