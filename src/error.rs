//! Error taxonomy surfaced to the UI layer.
//!
//! Every variant leaves the client in a retryable state; nothing here is fatal.

use thiserror::Error;

use crate::connection::ProviderError;

/// Errors produced by the wallet client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No wallet connector is present (e.g. missing extension or key).
    #[error("No wallet connector available: {0}")]
    ConnectorUnavailable(String),

    /// The user declined the connection request.
    #[error("Request rejected by user")]
    UserRejected,

    /// A connection attempt is already running.
    ///
    /// `ConnectionManager::connect` joins the running attempt instead of
    /// returning this, so it never reaches the UI from that path.
    #[error("Connection attempt already in progress")]
    AlreadyConnecting,

    /// Every balance source failed.
    #[error("Balance unavailable: {attempted} source(s) failed")]
    BalanceUnavailable { attempted: usize },

    /// Payload or hex input is not an even-length hex digit sequence.
    #[error("Malformed hex: {0}")]
    MalformedHex(String),

    /// Recipient is not a well-formed account address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A required transfer field is empty.
    #[error("Incomplete transfer request: {0} is required")]
    IncompleteRequest(&'static str),

    /// Amount is not a non-negative decimal representable in minimal units.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The account cannot cover value plus fees.
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// The operation needs a connected wallet.
    #[error("Wallet not connected")]
    NotConnected,

    /// Catch-all carrying the provider's message verbatim.
    #[error("Provider failure: {message}")]
    ProviderFailure { message: String },

    /// Configuration could not be turned into a working component.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WalletError {
    /// Stable machine-readable kind, paired with the `Display` message.
    pub fn kind(&self) -> &'static str {
        match self {
            WalletError::ConnectorUnavailable(_) => "connector_unavailable",
            WalletError::UserRejected => "user_rejected",
            WalletError::AlreadyConnecting => "already_connecting",
            WalletError::BalanceUnavailable { .. } => "balance_unavailable",
            WalletError::MalformedHex(_) => "malformed_hex",
            WalletError::InvalidAddress(_) => "invalid_address",
            WalletError::IncompleteRequest(_) => "incomplete_request",
            WalletError::InvalidAmount(_) => "invalid_amount",
            WalletError::InsufficientFunds => "insufficient_funds",
            WalletError::NotConnected => "not_connected",
            WalletError::ProviderFailure { .. } => "provider_failure",
            WalletError::Config(_) => "config",
        }
    }
}

impl From<ProviderError> for WalletError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::UserRejected => WalletError::UserRejected,
            ProviderError::InsufficientFunds => WalletError::InsufficientFunds,
            other => WalletError::ProviderFailure {
                message: other.to_string(),
            },
        }
    }
}

/// Result type for wallet client operations.
pub type WalletResult<T> = Result<T, WalletError>;
