//! Client metrics.
//!
//! # Metrics
//! - `wallet_balance_attempts_total` (counter): per source, by outcome
//!   (`ok`, `error`, `timeout`)
//! - `wallet_transfers_total` (counter): submissions by outcome
//!   (`pending`, `confirmed`, `rejected`, `failed`)
//!
//! Calls are no-ops until the host installs a recorder.

/// Record one balance attempt against a source.
pub fn record_balance_attempt(source: &str, outcome: &'static str) {
    ::metrics::counter!(
        "wallet_balance_attempts_total",
        "source" => source.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Record a transfer outcome transition.
pub fn record_transfer_outcome(outcome: &'static str) {
    ::metrics::counter!("wallet_transfers_total", "outcome" => outcome).increment(1);
}
