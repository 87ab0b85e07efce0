//! Read-only balance sources.

use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::config::schema::EndpointConfig;
use crate::connection::ProviderError;
use crate::error::{WalletError, WalletResult};
use crate::network::ChainId;

/// A fallback endpoint able to answer balance queries.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Name used in logs and metrics.
    fn label(&self) -> &str;

    /// Chain this endpoint serves, if pinned to one.
    fn chain_id(&self) -> Option<ChainId> {
        None
    }

    /// Balance in minimal units.
    async fn balance_of(&self, account: Address) -> Result<U256, ProviderError>;
}

/// JSON-RPC endpoint over HTTP.
pub struct RpcEndpoint {
    name: String,
    chain_id: Option<ChainId>,
    provider: Arc<dyn Provider + Send + Sync>,
}

impl RpcEndpoint {
    pub fn new(name: impl Into<String>, url: &str, chain_id: Option<ChainId>) -> WalletResult<Self> {
        let url: url::Url = url
            .parse()
            .map_err(|e| WalletError::Config(format!("Invalid RPC URL '{}': {}", url, e)))?;

        Ok(Self {
            name: name.into(),
            chain_id,
            provider: Arc::new(ProviderBuilder::new().connect_http(url)),
        })
    }

    pub fn from_config(config: &EndpointConfig) -> WalletResult<Self> {
        Self::new(&config.name, &config.url, config.chain_id.map(ChainId))
    }
}

#[async_trait]
impl BalanceSource for RpcEndpoint {
    fn label(&self) -> &str {
        &self.name
    }

    fn chain_id(&self) -> Option<ChainId> {
        self.chain_id
    }

    async fn balance_of(&self, account: Address) -> Result<U256, ProviderError> {
        Ok(self.provider.get_balance(account).await?)
    }
}

impl fmt::Debug for RpcEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcEndpoint")
            .field("name", &self.name)
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_from_config() {
        let config = EndpointConfig {
            name: "local".to_string(),
            url: "http://localhost:8545".to_string(),
            chain_id: Some(31337),
        };
        let endpoint = RpcEndpoint::from_config(&config).unwrap();
        assert_eq!(endpoint.label(), "local");
        assert_eq!(endpoint.chain_id(), Some(ChainId(31337)));
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = RpcEndpoint::new("bad", "::not-a-url::", None);
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_errors() {
        // Port 9 (discard) is not an RPC server; the call must fail, not hang or panic.
        let endpoint = RpcEndpoint::new("dead", "http://127.0.0.1:9", None).unwrap();
        let result = tokio::time::timeout(
            std::time::Duration::from_secs(10),
            endpoint.balance_of(Address::ZERO),
        )
        .await;
        if let Ok(inner) = result {
            assert!(inner.is_err());
        }
    }
}
