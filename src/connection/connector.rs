//! Capabilities exchanged between the client and an external wallet.
//!
//! A connector activates a wallet and hands back a [`ProviderHandle`]; the
//! handle is the only way the rest of the crate reads chain state or asks for
//! a transaction to be signed and sent.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::error::WalletResult;
use crate::network::ChainId;

/// EIP-1193 "user rejected request" error code.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Errors raised by a wallet provider or read endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("user rejected the request")]
    UserRejected,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// Raw provider message, kept verbatim.
    #[error("{0}")]
    Rpc(String),
}

impl ProviderError {
    /// Classify a provider error from its JSON-RPC code and message.
    pub fn classify(code: Option<i64>, message: &str) -> Self {
        let lowered = message.to_ascii_lowercase();
        if code == Some(USER_REJECTED_CODE)
            || lowered.contains("user rejected")
            || lowered.contains("user denied")
            || lowered.contains("action_rejected")
        {
            ProviderError::UserRejected
        } else if lowered.contains("insufficient funds") || lowered.contains("insufficient_funds") {
            ProviderError::InsufficientFunds
        } else {
            ProviderError::Rpc(message.to_string())
        }
    }
}

impl From<alloy::transports::TransportError> for ProviderError {
    fn from(err: alloy::transports::TransportError) -> Self {
        match err.as_error_resp() {
            Some(payload) => ProviderError::classify(Some(payload.code), &payload.message),
            None => ProviderError::classify(None, &err.to_string()),
        }
    }
}

/// Shape of the provider behind a handle, fixed at connection time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// A typed client with balance/signing helpers (alloy, ethers).
    EthersLike,
    /// A bare EIP-1193 `request` object.
    RawEip1193,
    /// A wallet injected by the host environment.
    Injected,
}

/// Transaction handed to the provider for signing and broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferTx {
    pub to: Address,
    /// Value in minimal units.
    pub value: U256,
    pub data: Bytes,
    /// Heuristic upper bound computed by the builder; providers must not replace it.
    pub gas_limit: u64,
}

/// The subset of a receipt the client cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    pub success: bool,
    pub block_number: Option<u64>,
}

/// Read and write capability of a connected wallet.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Balance in minimal units.
    async fn get_balance(&self, address: Address) -> Result<U256, ProviderError>;

    /// Sign and broadcast; returns once the wallet has accepted the transaction.
    async fn send_transaction(&self, tx: TransferTx) -> Result<TxHash, ProviderError>;

    /// `None` while the transaction is not yet included.
    async fn get_receipt(&self, tx_hash: TxHash) -> Result<Option<TransferReceipt>, ProviderError>;
}

/// Opaque, tagged provider capability.
#[derive(Clone)]
pub struct ProviderHandle {
    kind: ProviderKind,
    inner: Arc<dyn WalletProvider>,
}

impl ProviderHandle {
    pub fn new(kind: ProviderKind, provider: Arc<dyn WalletProvider>) -> Self {
        Self {
            kind,
            inner: provider,
        }
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub async fn get_balance(&self, address: Address) -> Result<U256, ProviderError> {
        self.inner.get_balance(address).await
    }

    pub async fn send_transaction(&self, tx: TransferTx) -> Result<TxHash, ProviderError> {
        self.inner.send_transaction(tx).await
    }

    pub async fn get_receipt(&self, tx_hash: TxHash) -> Result<Option<TransferReceipt>, ProviderError> {
        self.inner.get_receipt(tx_hash).await
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHandle").field("kind", &self.kind).finish()
    }
}

/// Result of a successful wallet activation.
#[derive(Debug, Clone)]
pub struct Activation {
    pub account: Address,
    pub chain_id: ChainId,
    pub provider: ProviderHandle,
}

/// Notifications emitted by the wallet after activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// New account list; the first entry is the active account.
    AccountsChanged(Vec<Address>),
    ChainChanged(ChainId),
    /// The wallet dropped the connection on its side.
    Disconnected,
}

/// Bridge between the client and a wallet.
///
/// Activation failures map to `ConnectorUnavailable` (no wallet),
/// `UserRejected`, or `ProviderFailure`.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Human-readable connector name for logs.
    fn name(&self) -> &str;

    async fn activate(&self) -> WalletResult<Activation>;

    /// Best-effort teardown; errors are logged by the caller and ignored.
    async fn deactivate(&self) -> WalletResult<()>;

    /// Event stream, if the wallet emits account/chain changes.
    fn subscribe(&self) -> Option<broadcast::Receiver<WalletEvent>> {
        None
    }
}
