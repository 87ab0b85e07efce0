//! Balance retrieval with multi-endpoint fallback.
//!
//! # Data Flow
//! ```text
//! ConnectionManager::balance_ticket (account, chain, generation)
//!     → fetcher.rs
//!         1. preferred provider handle (wallet's own provider)
//!         2. endpoint.rs fallback list, in order, each once
//!            (bounded timeout per attempt, log + continue on failure)
//!     → Balance (U256 + fixed-precision decimal)
//!     → ConnectionManager::apply_balance (dropped if generation moved on)
//! ```
//!
//! # Design Decisions
//! - Failures are recovered locally; only exhaustion is surfaced
//! - Endpoints pinned to another chain are skipped, not queried
//! - No float arithmetic; formatting happens at the last step

pub mod endpoint;
pub mod fetcher;
pub mod types;

pub use endpoint::{BalanceSource, RpcEndpoint};
pub use fetcher::BalanceFetcher;
pub use types::{Balance, BalanceTicket};
