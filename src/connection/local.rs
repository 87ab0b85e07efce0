//! Connector backed by a locally held key and a JSON-RPC endpoint.
//!
//! Stands in for a browser wallet extension when the client runs outside a
//! browser.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::config::schema::WalletConfig;
use crate::connection::connector::{
    Activation, ProviderError, ProviderHandle, ProviderKind, TransferReceipt, TransferTx,
    WalletConnector, WalletProvider,
};
use crate::error::{WalletError, WalletResult};
use crate::network::ChainId;

/// Default environment variable holding the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "WALLET_CLIENT_PRIVATE_KEY";

/// Wallet connector that signs with a local private key.
#[derive(Debug)]
pub struct LocalKeyConnector {
    /// `None` when no key was configured; activation then reports the
    /// connector as unavailable.
    signer: Option<PrivateKeySigner>,
    rpc_url: url::Url,
    activation_timeout: Duration,
}

impl LocalKeyConnector {
    /// Create a connector from a hex-encoded private key (with or without `0x`).
    pub fn from_private_key(
        private_key_hex: &str,
        rpc_url: &str,
        activation_timeout: Duration,
    ) -> WalletResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);
        let signer: PrivateKeySigner = key_hex.parse().map_err(|e| {
            WalletError::ConnectorUnavailable(format!("Invalid private key format: {}", e))
        })?;

        Ok(Self {
            signer: Some(signer),
            rpc_url: parse_rpc_url(rpc_url)?,
            activation_timeout,
        })
    }

    /// Load the key from the environment variable named in `config`.
    ///
    /// A missing variable is not an error here; `activate` reports it.
    pub fn from_env(config: &WalletConfig) -> WalletResult<Self> {
        let activation_timeout = Duration::from_secs(config.activation_timeout_secs);
        match std::env::var(&config.private_key_env) {
            Ok(key) => Self::from_private_key(&key, &config.rpc_url, activation_timeout),
            Err(_) => {
                tracing::debug!(
                    env_var = %config.private_key_env,
                    "No private key in environment, connector will be unavailable"
                );
                Ok(Self {
                    signer: None,
                    rpc_url: parse_rpc_url(&config.rpc_url)?,
                    activation_timeout,
                })
            }
        }
    }

    /// Address of the configured key, if any.
    pub fn address(&self) -> Option<Address> {
        self.signer.as_ref().map(|signer| signer.address())
    }
}

fn parse_rpc_url(rpc_url: &str) -> WalletResult<url::Url> {
    rpc_url
        .parse()
        .map_err(|e| WalletError::Config(format!("Invalid RPC URL '{}': {}", rpc_url, e)))
}

#[async_trait]
impl WalletConnector for LocalKeyConnector {
    fn name(&self) -> &str {
        "local-key"
    }

    async fn activate(&self) -> WalletResult<Activation> {
        let signer = self.signer.clone().ok_or_else(|| {
            WalletError::ConnectorUnavailable("no private key configured".to_string())
        })?;
        let account = signer.address();

        let provider: Arc<dyn Provider + Send + Sync> = Arc::new(
            ProviderBuilder::new()
                .wallet(signer)
                .connect_http(self.rpc_url.clone()),
        );

        let chain_id = match timeout(self.activation_timeout, provider.get_chain_id()).await {
            Ok(Ok(id)) => ChainId(id),
            Ok(Err(e)) => return Err(ProviderError::from(e).into()),
            Err(_) => {
                return Err(WalletError::ConnectorUnavailable(format!(
                    "RPC endpoint {} did not answer within {} seconds",
                    self.rpc_url,
                    self.activation_timeout.as_secs()
                )))
            }
        };

        Ok(Activation {
            account,
            chain_id,
            provider: ProviderHandle::new(
                ProviderKind::EthersLike,
                Arc::new(SigningRpcProvider { provider }),
            ),
        })
    }

    async fn deactivate(&self) -> WalletResult<()> {
        // Nothing is held open between requests.
        Ok(())
    }
}

/// Wallet provider over an alloy provider with a local signer attached.
struct SigningRpcProvider {
    provider: Arc<dyn Provider + Send + Sync>,
}

#[async_trait]
impl WalletProvider for SigningRpcProvider {
    async fn get_balance(&self, address: Address) -> Result<U256, ProviderError> {
        Ok(self.provider.get_balance(address).await?)
    }

    async fn send_transaction(&self, tx: TransferTx) -> Result<TxHash, ProviderError> {
        let request = TransactionRequest::default()
            .with_to(tx.to)
            .with_value(tx.value)
            .with_input(tx.data)
            .with_gas_limit(tx.gas_limit);

        let pending = self.provider.send_transaction(request).await?;
        Ok(*pending.tx_hash())
    }

    async fn get_receipt(&self, tx_hash: TxHash) -> Result<Option<TransferReceipt>, ProviderError> {
        let receipt = self.provider.get_transaction_receipt(tx_hash).await?;
        Ok(receipt.map(|receipt| TransferReceipt {
            success: receipt.status(),
            block_number: receipt.block_number,
        }))
    }
}
