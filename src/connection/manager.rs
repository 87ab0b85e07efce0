//! Connection lifecycle owner.
//!
//! # Responsibilities
//! - Drive the connector through activate / deactivate
//! - Coalesce concurrent `connect()` calls into one activation
//! - Apply wallet account/chain events in place
//! - Gate balance results on the identity they were fetched for

use futures_util::future::{BoxFuture, FutureExt, Shared};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

use crate::balance::{Balance, BalanceFetcher, BalanceTicket};
use crate::connection::connector::{WalletConnector, WalletEvent};
use crate::connection::session::SessionSignal;
use crate::connection::state::{ConnectionState, ConnectionStatus};
use crate::error::{WalletError, WalletResult};

type ConnectFuture = Shared<BoxFuture<'static, WalletResult<ConnectionState>>>;

#[derive(Clone)]
struct InFlight {
    id: u64,
    future: ConnectFuture,
}

struct Inner {
    connector: Arc<dyn WalletConnector>,
    state: RwLock<ConnectionState>,
    session: Mutex<Option<SessionSignal>>,
    /// Cleared by the activation future itself when it finishes.
    in_flight: Mutex<Option<InFlight>>,
    /// Serialises activation against disconnect.
    lifecycle: tokio::sync::Mutex<()>,
}

impl Inner {
    async fn activate(inner: Arc<Inner>, id: u64) -> WalletResult<ConnectionState> {
        let _lifecycle = inner.lifecycle.lock().await;
        tracing::info!(
            connector = inner.connector.name(),
            attempt = id,
            "Activating wallet connector"
        );

        let outcome = match inner.connector.activate().await {
            Ok(activation) => {
                let session = SessionSignal::new();
                let watch = session.subscribe();
                inner.replace_session(Some(session));

                let mut state = inner.state.write();
                state.reset(ConnectionStatus::Connected);
                state.account = Some(activation.account);
                state.chain_id = Some(activation.chain_id);
                state.provider = Some(activation.provider);
                state.session = Some(watch);

                tracing::info!(
                    account = %activation.account,
                    chain_id = %activation.chain_id,
                    "Wallet connected"
                );
                Ok(state.clone())
            }
            Err(e) => {
                tracing::warn!(error = %e, kind = e.kind(), "Wallet activation failed");
                let mut state = inner.state.write();
                state.reset(ConnectionStatus::Error);
                state.error_message = Some(e.to_string());
                Err(e)
            }
        };

        let mut in_flight = inner.in_flight.lock();
        if in_flight.as_ref().is_some_and(|pending| pending.id == id) {
            *in_flight = None;
        }
        outcome
    }

    /// Install a new session signal, ending any previous one.
    fn replace_session(&self, next: Option<SessionSignal>) {
        let previous = std::mem::replace(&mut *self.session.lock(), next);
        if let Some(previous) = previous {
            previous.trigger();
        }
    }
}

/// Owns the single [`ConnectionState`] of the application.
pub struct ConnectionManager {
    inner: Arc<Inner>,
    attempts: AtomicU64,
}

impl ConnectionManager {
    pub fn new(connector: Arc<dyn WalletConnector>) -> Self {
        Self {
            inner: Arc::new(Inner {
                connector,
                state: RwLock::new(ConnectionState::default()),
                session: Mutex::new(None),
                in_flight: Mutex::new(None),
                lifecycle: tokio::sync::Mutex::new(()),
            }),
            attempts: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current connection.
    pub fn state(&self) -> ConnectionState {
        self.inner.state.read().clone()
    }

    /// Connect the wallet.
    ///
    /// Joins the running attempt if one is in flight; returns the current
    /// snapshot without activating if already connected.
    pub async fn connect(&self) -> WalletResult<ConnectionState> {
        let attempt = {
            let mut in_flight = self.inner.in_flight.lock();
            match in_flight.as_ref() {
                Some(pending) => {
                    tracing::debug!(attempt = pending.id, "Connect already in flight, joining it");
                    pending.clone()
                }
                None => {
                    {
                        let mut state = self.inner.state.write();
                        if state.status == ConnectionStatus::Connected {
                            return Ok(state.clone());
                        }
                        state.status = ConnectionStatus::Connecting;
                        state.error_message = None;
                    }

                    let id = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
                    let future = Inner::activate(self.inner.clone(), id).boxed().shared();
                    let pending = InFlight { id, future };
                    *in_flight = Some(pending.clone());
                    pending
                }
            }
        };

        attempt.future.await
    }

    /// Disconnect the wallet.
    ///
    /// Waits for an in-flight connect first. The state reads `Disconnected`
    /// before the connector is torn down, so a `connect()` issued meanwhile
    /// queues a fresh activation behind the teardown. Connector teardown
    /// failures are logged and never prevent the reset.
    pub async fn disconnect(&self) {
        let pending = self.inner.in_flight.lock().clone();
        if let Some(pending) = pending {
            tracing::debug!(attempt = pending.id, "Waiting for in-flight connect before disconnecting");
            let _ = pending.future.await;
        }

        let _lifecycle = self.inner.lifecycle.lock().await;
        {
            let mut state = self.inner.state.write();
            if state.status == ConnectionStatus::Disconnected {
                tracing::debug!("Disconnect requested while already disconnected");
                return;
            }
            state.reset(ConnectionStatus::Disconnected);
        }
        self.inner.replace_session(None);

        if let Err(e) = self.inner.connector.deactivate().await {
            tracing::warn!(error = %e, "Connector deactivation failed, state already reset");
        }
        tracing::info!("Wallet disconnected");
    }

    /// Apply a notification from the wallet.
    pub fn handle_event(&self, event: WalletEvent) {
        let mut state = self.inner.state.write();
        if state.status != ConnectionStatus::Connected {
            tracing::debug!(?event, "Ignoring wallet event while not connected");
            return;
        }

        let session_over = match event {
            WalletEvent::AccountsChanged(accounts) => match accounts.first().copied() {
                Some(account) => {
                    if state.account != Some(account) {
                        tracing::info!(account = %account, "Active account changed");
                        state.account = Some(account);
                        state.invalidate_identity();
                    }
                    false
                }
                None => true,
            },
            WalletEvent::ChainChanged(chain_id) => {
                if state.chain_id != Some(chain_id) {
                    tracing::info!(chain_id = %chain_id, "Active chain changed");
                    state.chain_id = Some(chain_id);
                    state.invalidate_identity();
                }
                false
            }
            WalletEvent::Disconnected => true,
        };

        if session_over {
            tracing::info!("Wallet ended the session");
            state.reset(ConnectionStatus::Disconnected);
            drop(state);
            self.inner.replace_session(None);
        }
    }

    /// Forward the connector's event stream into [`handle_event`].
    ///
    /// Returns `None` if the connector emits no events.
    ///
    /// [`handle_event`]: ConnectionManager::handle_event
    pub fn spawn_event_listener(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let mut events = self.inner.connector.subscribe()?;
        let manager = Arc::downgrade(self);

        Some(tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => match manager.upgrade() {
                        Some(manager) => manager.handle_event(event),
                        None => break,
                    },
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped = skipped, "Wallet event listener lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
            tracing::debug!("Wallet event listener stopped");
        }))
    }

    /// Identity a balance fetch should be keyed to, if connected.
    pub fn balance_ticket(&self) -> Option<BalanceTicket> {
        let state = self.inner.state.read();
        if state.status != ConnectionStatus::Connected {
            return None;
        }
        Some(BalanceTicket {
            account: state.account?,
            chain_id: state.chain_id?,
            generation: state.generation,
        })
    }

    /// Store a fetched balance unless its ticket has been superseded.
    pub fn apply_balance(&self, ticket: &BalanceTicket, balance: Balance) -> bool {
        let mut state = self.inner.state.write();
        if state.status != ConnectionStatus::Connected || state.generation != ticket.generation {
            tracing::debug!(
                ticket_generation = ticket.generation,
                current_generation = state.generation,
                "Discarding stale balance"
            );
            return false;
        }
        state.balance = Some(balance);
        true
    }

    /// Fetch and apply the balance of the active account.
    ///
    /// `Ok(None)` means the result arrived for a superseded account/chain and
    /// was dropped.
    pub async fn refresh_balance(&self, fetcher: &BalanceFetcher) -> WalletResult<Option<Balance>> {
        let ticket = self.balance_ticket().ok_or(WalletError::NotConnected)?;
        let provider = self.inner.state.read().provider.clone();

        let balance = fetcher
            .fetch(ticket.account, ticket.chain_id, provider.as_ref())
            .await?;

        if self.apply_balance(&ticket, balance.clone()) {
            Ok(Some(balance))
        } else {
            Ok(None)
        }
    }
}

impl fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.read();
        f.debug_struct("ConnectionManager")
            .field("connector", &self.inner.connector.name())
            .field("status", &state.status)
            .field("account", &state.account)
            .field("chain_id", &state.chain_id)
            .finish()
    }
}
