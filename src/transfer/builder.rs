//! Transfer validation, gas allowance and dispatch.

use alloy::primitives::{Bytes, TxHash};
use std::time::Duration;
use tracing::{info, warn};

use crate::codec::{address, hex, parse_units, NATIVE_DECIMALS};
use crate::config::schema::TransferConfig;
use crate::connection::{ConnectionState, TransferTx};
use crate::error::{WalletError, WalletResult};
use crate::observability::metrics;
use crate::transfer::confirmation::ConfirmationTracker;
use crate::transfer::types::{PayloadPreview, PreparedTransfer, TransferOutcome, TransferRequest};

/// Resolve user payload input into the hex that will be attached.
///
/// Blank input gives `"0x"`. Input starting with `0x` is taken literally and
/// must be well-formed; anything else is UTF-8 encoded.
pub fn resolve_payload(raw: &str) -> WalletResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok("0x".to_string());
    }
    if trimmed.starts_with("0x") {
        if !hex::is_well_formed(trimmed) {
            return Err(WalletError::MalformedHex(trimmed.to_string()));
        }
        return Ok(trimmed.to_string());
    }
    Ok(hex::encode(raw))
}

/// Describe what a payload will look like on chain.
pub fn preview_payload(raw: &str) -> WalletResult<PayloadPreview> {
    let resolved = resolve_payload(raw)?;
    let literal_hex = raw.trim().starts_with("0x");
    let text = if literal_hex {
        hex::decode(&resolved)?
    } else {
        raw.to_string()
    };

    Ok(PayloadPreview {
        byte_len: (resolved.len() - 2) / 2,
        hex: resolved,
        text,
        literal_hex,
    })
}

/// Floor for the receipt polling interval; `tokio::time::interval` rejects zero.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Builds and dispatches transfers from the connected wallet.
#[derive(Debug, Clone)]
pub struct TransferBuilder {
    base_gas: u64,
    per_byte_gas: u64,
    poll_interval: Duration,
    confirmation_timeout: Duration,
}

impl Default for TransferBuilder {
    fn default() -> Self {
        Self::from_config(&TransferConfig::default())
    }
}

impl TransferBuilder {
    pub fn new(
        base_gas: u64,
        per_byte_gas: u64,
        poll_interval: Duration,
        confirmation_timeout: Duration,
    ) -> Self {
        Self {
            base_gas,
            per_byte_gas,
            poll_interval: poll_interval.max(MIN_POLL_INTERVAL),
            confirmation_timeout,
        }
    }

    pub fn from_config(config: &TransferConfig) -> Self {
        Self::new(
            config.base_gas,
            config.per_byte_gas,
            Duration::from_millis(config.poll_interval_ms),
            Duration::from_secs(config.confirmation_timeout_secs),
        )
    }

    /// Gas limit attached to a transfer carrying `payload_len` bytes.
    pub fn gas_allowance(&self, payload_len: usize) -> u64 {
        self.base_gas
            .saturating_add((payload_len as u64).saturating_mul(self.per_byte_gas))
    }

    /// Validate a request against the current connection.
    ///
    /// Checks run in a fixed order and the first failure wins; no provider
    /// call is made on any error.
    pub fn prepare(
        &self,
        request: &TransferRequest,
        connection: &ConnectionState,
    ) -> WalletResult<PreparedTransfer> {
        if !connection.is_connected() {
            return Err(WalletError::NotConnected);
        }
        let provider = connection
            .provider()
            .cloned()
            .ok_or(WalletError::NotConnected)?;

        let recipient = request.recipient.trim();
        let amount = request.amount.trim();
        if recipient.is_empty() {
            return Err(WalletError::IncompleteRequest("recipient"));
        }
        if amount.is_empty() {
            return Err(WalletError::IncompleteRequest("amount"));
        }

        let to = address::parse(recipient)
            .ok_or_else(|| WalletError::InvalidAddress(recipient.to_string()))?;
        let value = parse_units(amount, NATIVE_DECIMALS)?;

        let payload = resolve_payload(&request.payload)?;
        let data = Bytes::from(hex::decode_bytes(&payload)?);
        let gas_limit = self.gas_allowance(data.len());

        Ok(PreparedTransfer {
            tx: TransferTx {
                to,
                value,
                data,
                gas_limit,
            },
            provider,
        })
    }

    /// Validate and hand the transfer to the wallet for signing.
    ///
    /// Validation failures come back as `Err`; once the wallet has been asked
    /// the result is always an outcome.
    pub async fn submit(
        &self,
        request: &TransferRequest,
        connection: &ConnectionState,
    ) -> WalletResult<TransferOutcome> {
        let prepared = self.prepare(request, connection)?;
        info!(
            to = %prepared.tx.to,
            value = %prepared.tx.value,
            gas_limit = prepared.tx.gas_limit,
            payload_bytes = prepared.tx.data.len(),
            "Submitting transfer"
        );

        let outcome = match prepared.provider.send_transaction(prepared.tx).await {
            Ok(tx_hash) => {
                info!(tx_hash = %tx_hash, "Transfer accepted by wallet");
                TransferOutcome::Pending { tx_hash }
            }
            Err(e) => {
                let outcome = TransferOutcome::from_provider_error(e);
                match &outcome {
                    TransferOutcome::Rejected { reason } => info!(reason = %reason, "Transfer rejected"),
                    TransferOutcome::Failed { reason } => warn!(reason = %reason, "Transfer failed"),
                    _ => {}
                }
                outcome
            }
        };

        metrics::record_transfer_outcome(outcome.label());
        Ok(outcome)
    }

    /// Start polling for the receipt of a submitted transfer.
    ///
    /// Tracking stops when the session that produced `connection` ends.
    pub fn track(
        &self,
        tx_hash: TxHash,
        connection: &ConnectionState,
    ) -> WalletResult<ConfirmationTracker> {
        if !connection.is_connected() {
            return Err(WalletError::NotConnected);
        }
        let provider = connection
            .provider()
            .cloned()
            .ok_or(WalletError::NotConnected)?;
        let session = connection
            .session()
            .cloned()
            .ok_or(WalletError::NotConnected)?;

        Ok(ConfirmationTracker::spawn(
            provider,
            tx_hash,
            session,
            self.poll_interval,
            self.confirmation_timeout,
        ))
    }
}
