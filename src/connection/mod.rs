//! Wallet connection subsystem.
//!
//! # Data Flow
//! ```text
//! WalletConnector (injected wallet, local key, test double)
//!     → manager.rs  activate / deactivate, coalesced connects
//!     → state.rs    ConnectionState (owned by the manager only)
//!     → snapshots   read-only clones for balance/ and transfer/
//!
//! Wallet events (accountsChanged / chainChanged):
//!     connector broadcast → manager.handle_event
//!     → pair updated in place, generation bumped, balance cleared
//! ```
//!
//! # Design Decisions
//! - No global connector; the application owns one `ConnectionManager`
//! - Provider shape is a tag chosen once at activation, never re-probed
//! - Disconnect is best-effort towards the connector but always resets state
//! - Each connected session carries a cancellation watch (session.rs)

pub mod connector;
pub mod local;
pub mod manager;
pub mod session;
pub mod state;

pub use connector::{
    Activation, ProviderError, ProviderHandle, ProviderKind, TransferReceipt, TransferTx,
    WalletConnector, WalletEvent, WalletProvider,
};
pub use local::LocalKeyConnector;
pub use manager::ConnectionManager;
pub use session::{SessionSignal, SessionWatch};
pub use state::{ConnectionState, ConnectionStatus};
