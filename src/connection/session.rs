//! End-of-session signalling for a connected wallet.

use tokio::sync::watch;

/// Coordinator for the end of a connected session.
///
/// Background work tied to a session (receipt polling) holds a
/// [`SessionWatch`] and stops once the session ends.
#[derive(Debug)]
pub struct SessionSignal {
    tx: watch::Sender<bool>,
}

impl SessionSignal {
    /// Create a signal for a fresh session.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Subscribe to the end of this session.
    pub fn subscribe(&self) -> SessionWatch {
        SessionWatch {
            rx: self.tx.subscribe(),
        }
    }

    /// End the session.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

impl Default for SessionSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver side of a [`SessionSignal`].
#[derive(Debug, Clone)]
pub struct SessionWatch {
    rx: watch::Receiver<bool>,
}

impl SessionWatch {
    /// True once the session has ended or its signal was dropped.
    pub fn is_ended(&self) -> bool {
        *self.rx.borrow() || self.rx.has_changed().is_err()
    }

    /// Resolves when the session ends.
    pub async fn ended(&mut self) {
        // A dropped sender also means the session is over.
        let _ = self.rx.wait_for(|ended| *ended).await;
    }
}
