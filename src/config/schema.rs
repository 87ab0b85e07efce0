//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::connection::local::PRIVATE_KEY_ENV_VAR;

/// Root configuration for the wallet client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ClientConfig {
    /// Logging settings.
    pub observability: ObservabilityConfig,

    /// Local wallet connector settings.
    pub wallet: WalletConfig,

    /// Balance lookup settings.
    pub balance: BalanceConfig,

    /// Transaction building settings.
    pub transfer: TransferConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Settings for the local-key connector.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WalletConfig {
    /// JSON-RPC endpoint the signer sends through.
    pub rpc_url: String,

    /// Name of the environment variable holding the private key.
    pub private_key_env: String,

    /// Bound on the chain-id handshake during activation, in seconds.
    pub activation_timeout_secs: u64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://localhost:8545".to_string(),
            private_key_env: PRIVATE_KEY_ENV_VAR.to_string(),
            activation_timeout_secs: 10,
        }
    }
}

/// A fallback read-only endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Identifier for logs/metrics.
    pub name: String,

    /// JSON-RPC URL.
    pub url: String,

    /// Chain served by this endpoint; other chains skip it.
    #[serde(default)]
    pub chain_id: Option<u64>,
}

/// Balance lookup configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BalanceConfig {
    /// Fallback endpoints, tried in order.
    pub endpoints: Vec<EndpointConfig>,

    /// Timeout for each individual attempt, in milliseconds.
    pub timeout_ms: u64,

    /// Decimal places in displayed balances.
    pub display_decimals: u8,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self {
            endpoints: vec![
                EndpointConfig {
                    name: "tenderly-sepolia".to_string(),
                    url: "https://sepolia.gateway.tenderly.co".to_string(),
                    chain_id: Some(11155111),
                },
                EndpointConfig {
                    name: "sepolia-org".to_string(),
                    url: "https://rpc2.sepolia.org".to_string(),
                    chain_id: Some(11155111),
                },
            ],
            timeout_ms: 5_000,
            display_decimals: 4,
        }
    }
}

/// Transaction building configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TransferConfig {
    /// Gas for a plain value transfer.
    pub base_gas: u64,

    /// Gas added per payload byte.
    pub per_byte_gas: u64,

    /// Receipt polling interval in milliseconds.
    pub poll_interval_ms: u64,

    /// Give up waiting for a receipt after this many seconds.
    pub confirmation_timeout_secs: u64,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            base_gas: 21_000,
            per_byte_gas: 68,
            poll_interval_ms: 2_000,
            confirmation_timeout_secs: 600,
        }
    }
}
