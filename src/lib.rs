//! Wallet client library: connection lifecycle, balance display and native
//! token transfers for EVM-compatible chains.

pub mod balance;
pub mod codec;
pub mod config;
pub mod connection;
pub mod error;
pub mod network;
pub mod observability;
pub mod transfer;

pub use balance::{Balance, BalanceFetcher};
pub use config::schema::ClientConfig;
pub use connection::{ConnectionManager, ConnectionState, ConnectionStatus, LocalKeyConnector};
pub use error::{WalletError, WalletResult};
pub use network::{ChainId, NetworkInfo};
pub use transfer::{TransferBuilder, TransferOutcome, TransferRequest};
