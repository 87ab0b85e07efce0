//! Background receipt polling for submitted transfers.

use alloy::primitives::TxHash;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, timeout};

use crate::connection::{ProviderHandle, SessionWatch};
use crate::observability::metrics;
use crate::transfer::types::TransferOutcome;

/// Handle to a running confirmation poll.
///
/// The outcome starts as `Pending` and moves to `Confirmed` or `Failed` once a
/// receipt is seen. It stays `Pending` if the session ends or the deadline
/// passes first.
#[derive(Debug)]
pub struct ConfirmationTracker {
    tx_hash: TxHash,
    outcome: watch::Receiver<TransferOutcome>,
    handle: JoinHandle<TransferOutcome>,
}

impl ConfirmationTracker {
    pub(crate) fn spawn(
        provider: ProviderHandle,
        tx_hash: TxHash,
        session: SessionWatch,
        poll_interval: Duration,
        deadline: Duration,
    ) -> Self {
        let (tx, rx) = watch::channel(TransferOutcome::Pending { tx_hash });
        let handle = tokio::spawn(poll_receipt(
            provider,
            tx_hash,
            session,
            poll_interval,
            deadline,
            tx,
        ));

        Self {
            tx_hash,
            outcome: rx,
            handle,
        }
    }

    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    /// Latest known outcome.
    pub fn current(&self) -> TransferOutcome {
        self.outcome.borrow().clone()
    }

    /// Receiver that observes the outcome as it changes.
    pub fn subscribe(&self) -> watch::Receiver<TransferOutcome> {
        self.outcome.clone()
    }

    /// Stop polling. The outcome is left as it was.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Wait for polling to stop and return the final outcome.
    pub async fn wait(self) -> TransferOutcome {
        match self.handle.await {
            Ok(outcome) => outcome,
            Err(_) => self.outcome.borrow().clone(),
        }
    }
}

async fn poll_receipt(
    provider: ProviderHandle,
    tx_hash: TxHash,
    mut session: SessionWatch,
    poll_interval: Duration,
    deadline: Duration,
    outcome_tx: watch::Sender<TransferOutcome>,
) -> TransferOutcome {
    let polling = async {
        let mut ticker = interval(poll_interval);

        loop {
            ticker.tick().await;

            match provider.get_receipt(tx_hash).await {
                Ok(Some(receipt)) if receipt.success => {
                    return TransferOutcome::Confirmed {
                        tx_hash,
                        block_number: receipt.block_number,
                    };
                }
                Ok(Some(_)) => {
                    return TransferOutcome::Failed {
                        reason: "transaction reverted".to_string(),
                    };
                }
                Ok(None) => {
                    tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                }
                Err(e) => {
                    tracing::warn!(tx_hash = %tx_hash, error = %e, "Receipt query failed, retrying");
                }
            }
        }
    };

    let outcome = tokio::select! {
        result = timeout(deadline, polling) => match result {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::warn!(
                    tx_hash = %tx_hash,
                    timeout_secs = deadline.as_secs(),
                    "Gave up waiting for receipt"
                );
                TransferOutcome::Pending { tx_hash }
            }
        },
        _ = session.ended() => {
            tracing::info!(tx_hash = %tx_hash, "Session ended, confirmation tracking stopped");
            TransferOutcome::Pending { tx_hash }
        }
    };

    if outcome.is_terminal() {
        tracing::info!(tx_hash = %tx_hash, outcome = outcome.label(), "Transfer settled");
        metrics::record_transfer_outcome(outcome.label());
        outcome_tx.send_replace(outcome.clone());
    }
    outcome
}
