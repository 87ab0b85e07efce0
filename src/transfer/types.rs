//! Transfer request and outcome types.

use alloy::primitives::TxHash;
use serde::{Deserialize, Serialize};

use crate::connection::{ProviderError, ProviderHandle, TransferTx};

/// User input for one transfer attempt. Built fresh per attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransferRequest {
    /// Recipient address string.
    pub recipient: String,
    /// Amount in major units, as typed.
    pub amount: String,
    /// Plain text, or `0x`-prefixed hex taken literally.
    pub payload: String,
}

impl TransferRequest {
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
            payload: String::new(),
        }
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = payload.into();
        self
    }
}

/// Outcome of a submitted transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TransferOutcome {
    /// Accepted by the wallet, not yet included.
    Pending { tx_hash: TxHash },
    /// Included with a successful receipt.
    Confirmed {
        tx_hash: TxHash,
        block_number: Option<u64>,
    },
    /// The user declined to sign.
    Rejected { reason: String },
    Failed { reason: String },
}

impl TransferOutcome {
    /// Classify a provider error raised while dispatching.
    pub fn from_provider_error(err: ProviderError) -> Self {
        match err {
            ProviderError::UserRejected => TransferOutcome::Rejected {
                reason: "user cancelled".to_string(),
            },
            ProviderError::InsufficientFunds => TransferOutcome::Failed {
                reason: "insufficient funds".to_string(),
            },
            other => TransferOutcome::Failed {
                reason: other.to_string(),
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransferOutcome::Pending { .. })
    }

    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            TransferOutcome::Pending { tx_hash } | TransferOutcome::Confirmed { tx_hash, .. } => {
                Some(*tx_hash)
            }
            _ => None,
        }
    }

    /// Short label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            TransferOutcome::Pending { .. } => "pending",
            TransferOutcome::Confirmed { .. } => "confirmed",
            TransferOutcome::Rejected { .. } => "rejected",
            TransferOutcome::Failed { .. } => "failed",
        }
    }
}

/// A validated transaction ready for dispatch.
#[derive(Debug, Clone)]
pub struct PreparedTransfer {
    pub tx: TransferTx,
    pub provider: ProviderHandle,
}

/// Display data for a payload before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayloadPreview {
    /// Hex that will be attached.
    pub hex: String,
    pub byte_len: usize,
    /// Input text, or the best-effort decoding of literal hex input.
    pub text: String,
    /// True when the input was taken as literal hex.
    pub literal_hex: bool,
}
