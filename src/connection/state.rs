//! Connection state snapshot.
//!
//! # States
//! - Disconnected: no wallet; initial state
//! - Connecting: activation in flight
//! - Connected: account, chain and provider available
//! - Error: last activation failed; `connect()` may be retried
//!
//! # State Transitions
//! ```text
//! Disconnected → Connecting: connect()
//! Error → Connecting: connect() (retry)
//! Connecting → Connected: activation succeeded
//! Connecting → Error: rejection, missing wallet, connector failure
//! Connected | Error → Disconnected: disconnect()
//! Connected → Connected: account/chain change event (generation bumped)
//! ```

use alloy::primitives::Address;
use serde::Serialize;

use crate::balance::Balance;
use crate::connection::connector::ProviderHandle;
use crate::connection::session::SessionWatch;
use crate::network::ChainId;

/// Lifecycle status of the wallet connection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Error,
}

/// Read-only view of the connection.
///
/// Only `ConnectionManager` constructs or mutates these; everyone else gets
/// clones through `ConnectionManager::state`.
#[derive(Debug, Clone, Default)]
pub struct ConnectionState {
    pub(crate) status: ConnectionStatus,
    pub(crate) account: Option<Address>,
    pub(crate) chain_id: Option<ChainId>,
    pub(crate) error_message: Option<String>,
    pub(crate) balance: Option<Balance>,
    pub(crate) provider: Option<ProviderHandle>,
    pub(crate) session: Option<SessionWatch>,
    /// Bumped on every account/chain identity change.
    pub(crate) generation: u64,
}

impl ConnectionState {
    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }

    pub fn account(&self) -> Option<Address> {
        self.account
    }

    pub fn chain_id(&self) -> Option<ChainId> {
        self.chain_id
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Last balance applied for the current account/chain pair.
    pub fn balance(&self) -> Option<&Balance> {
        self.balance.as_ref()
    }

    pub fn provider(&self) -> Option<&ProviderHandle> {
        self.provider.as_ref()
    }

    pub fn session(&self) -> Option<&SessionWatch> {
        self.session.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop everything tied to the wallet identity, keeping the generation
    /// counter monotonic.
    pub(crate) fn reset(&mut self, status: ConnectionStatus) {
        *self = ConnectionState {
            status,
            generation: self.generation + 1,
            ..ConnectionState::default()
        };
    }

    /// Invalidate balance work keyed to the previous account/chain pair.
    pub(crate) fn invalidate_identity(&mut self) {
        self.generation += 1;
        self.balance = None;
    }
}
