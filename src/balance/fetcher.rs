//! Balance fetching with ordered fallback.

use alloy::primitives::Address;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::balance::endpoint::{BalanceSource, RpcEndpoint};
use crate::balance::types::Balance;
use crate::config::schema::BalanceConfig;
use crate::connection::ProviderHandle;
use crate::error::{WalletError, WalletResult};
use crate::network::ChainId;
use crate::observability::metrics;

/// Decimal places shown for balances.
pub const DEFAULT_DISPLAY_PRECISION: u8 = 4;

/// Queries balances through the wallet's provider, then fallback endpoints.
#[derive(Clone)]
pub struct BalanceFetcher {
    endpoints: Vec<Arc<dyn BalanceSource>>,
    /// Bound on each individual attempt.
    attempt_timeout: Duration,
    precision: u8,
}

impl BalanceFetcher {
    pub fn new(endpoints: Vec<Arc<dyn BalanceSource>>, attempt_timeout: Duration) -> Self {
        Self {
            endpoints,
            attempt_timeout,
            precision: DEFAULT_DISPLAY_PRECISION,
        }
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    /// Build RPC fallback endpoints from configuration, in configured order.
    pub fn from_config(config: &BalanceConfig) -> WalletResult<Self> {
        let endpoints = config
            .endpoints
            .iter()
            .map(|endpoint| RpcEndpoint::from_config(endpoint).map(|e| Arc::new(e) as Arc<dyn BalanceSource>))
            .collect::<WalletResult<Vec<_>>>()?;

        Ok(Self::new(endpoints, Duration::from_millis(config.timeout_ms))
            .with_precision(config.display_decimals))
    }

    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Fetch the balance of `account` on `chain_id`.
    ///
    /// Each source is tried at most once. Returns `BalanceUnavailable` once
    /// every applicable source has failed.
    pub async fn fetch(
        &self,
        account: Address,
        chain_id: ChainId,
        preferred: Option<&ProviderHandle>,
    ) -> WalletResult<Balance> {
        let timeout_ms = self.attempt_timeout.as_millis() as u64;
        let mut attempted = 0;

        if let Some(provider) = preferred {
            attempted += 1;
            match timeout(self.attempt_timeout, provider.get_balance(account)).await {
                Ok(Ok(value)) => {
                    metrics::record_balance_attempt("wallet", "ok");
                    return Ok(Balance::from_minimal_units(value, self.precision));
                }
                Ok(Err(e)) => {
                    metrics::record_balance_attempt("wallet", "error");
                    tracing::warn!(
                        provider_kind = ?provider.kind(),
                        error = %e,
                        "Wallet provider balance query failed, trying fallback endpoints"
                    );
                }
                Err(_) => {
                    metrics::record_balance_attempt("wallet", "timeout");
                    tracing::warn!(
                        provider_kind = ?provider.kind(),
                        timeout_ms = timeout_ms,
                        "Wallet provider balance query timed out, trying fallback endpoints"
                    );
                }
            }
        }

        for (i, endpoint) in self.endpoints.iter().enumerate() {
            if let Some(pinned) = endpoint.chain_id() {
                if pinned != chain_id {
                    tracing::debug!(
                        endpoint = endpoint.label(),
                        endpoint_chain = %pinned,
                        chain_id = %chain_id,
                        "Skipping endpoint for another chain"
                    );
                    continue;
                }
            }

            attempted += 1;
            match timeout(self.attempt_timeout, endpoint.balance_of(account)).await {
                Ok(Ok(value)) => {
                    metrics::record_balance_attempt(endpoint.label(), "ok");
                    tracing::debug!(endpoint_idx = i, endpoint = endpoint.label(), "Balance fetched");
                    return Ok(Balance::from_minimal_units(value, self.precision));
                }
                Ok(Err(e)) => {
                    metrics::record_balance_attempt(endpoint.label(), "error");
                    tracing::warn!(
                        endpoint_idx = i,
                        endpoint = endpoint.label(),
                        error = %e,
                        "Balance query failed, trying next endpoint"
                    );
                }
                Err(_) => {
                    metrics::record_balance_attempt(endpoint.label(), "timeout");
                    tracing::warn!(
                        endpoint_idx = i,
                        endpoint = endpoint.label(),
                        timeout_ms = timeout_ms,
                        "Balance query timed out, trying next endpoint"
                    );
                }
            }
        }

        tracing::error!(
            account = %account,
            chain_id = %chain_id,
            attempted = attempted,
            "All balance sources failed"
        );
        Err(WalletError::BalanceUnavailable { attempted })
    }
}

impl std::fmt::Debug for BalanceFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let labels: Vec<&str> = self.endpoints.iter().map(|e| e.label()).collect();
        f.debug_struct("BalanceFetcher")
            .field("endpoints", &labels)
            .field("attempt_timeout", &self.attempt_timeout)
            .field("precision", &self.precision)
            .finish()
    }
}
