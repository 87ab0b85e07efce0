//! Transfer construction, submission and confirmation tracking.
//!
//! # Data Flow
//! ```text
//! TransferRequest (recipient, amount, payload) + ConnectionState snapshot
//!     → builder.rs prepare
//!         NotConnected → IncompleteRequest → InvalidAddress → InvalidAmount
//!         → payload resolution (text → hex, or literal hex) → gas allowance
//!     → provider handle send_transaction
//!     → TransferOutcome::Pending | Rejected | Failed   (returned immediately)
//!     → confirmation.rs (optional, background)
//!         receipt polling → Confirmed | Failed, stops on disconnect
//! ```
//!
//! # Design Decisions
//! - `submit` never mutates connection state; retries need no reset
//! - Gas allowance is computed here and attached, never left to the wallet
//! - No client-side timeout on submission; the wallet UI may take arbitrarily long

pub mod builder;
pub mod confirmation;
pub mod types;

pub use builder::{preview_payload, resolve_payload, TransferBuilder};
pub use confirmation::ConfirmationTracker;
pub use types::{PayloadPreview, PreparedTransfer, TransferOutcome, TransferRequest};
