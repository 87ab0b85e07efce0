//! Shared test doubles for integration tests.

#![allow(dead_code)]

use alloy::primitives::{address, Address, TxHash, U256};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Notify};
use wallet_client::connection::{
    Activation, ConnectionManager, ProviderError, ProviderHandle, ProviderKind, TransferReceipt,
    TransferTx, WalletConnector, WalletEvent, WalletProvider,
};
use wallet_client::error::{WalletError, WalletResult};
use wallet_client::network::ChainId;

pub const ACCOUNT_A: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const ACCOUNT_B: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
pub const SEPOLIA: ChainId = ChainId(11_155_111);

/// 1.25 in minimal units of an 18-decimal token.
pub fn one_and_a_quarter() -> U256 {
    U256::from(1_250_000_000_000_000_000u128)
}

/// Scriptable wallet provider that records what it was asked to send.
pub struct MockProvider {
    tx_hash: TxHash,
    balance: Mutex<Result<U256, ProviderError>>,
    balance_gate: Mutex<Option<Arc<Notify>>>,
    send_error: Mutex<Option<ProviderError>>,
    receipt: Mutex<Option<TransferReceipt>>,
    sent: Mutex<Vec<TransferTx>>,
    receipt_queries: AtomicU32,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            tx_hash: TxHash::repeat_byte(0xab),
            balance: Mutex::new(Ok(U256::ZERO)),
            balance_gate: Mutex::new(None),
            send_error: Mutex::new(None),
            receipt: Mutex::new(None),
            sent: Mutex::new(Vec::new()),
            receipt_queries: AtomicU32::new(0),
        }
    }

    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }

    pub fn set_balance(&self, balance: Result<U256, ProviderError>) {
        *self.balance.lock() = balance;
    }

    /// Hold balance queries until the returned gate is notified.
    pub fn gate_balance(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.balance_gate.lock() = Some(gate.clone());
        gate
    }

    pub fn fail_sends_with(&self, err: ProviderError) {
        *self.send_error.lock() = Some(err);
    }

    pub fn set_receipt(&self, receipt: Option<TransferReceipt>) {
        *self.receipt.lock() = receipt;
    }

    pub fn sent(&self) -> Vec<TransferTx> {
        self.sent.lock().clone()
    }

    pub fn receipt_queries(&self) -> u32 {
        self.receipt_queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn get_balance(&self, _address: Address) -> Result<U256, ProviderError> {
        let gate = self.balance_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.balance.lock().clone()
    }

    async fn send_transaction(&self, tx: TransferTx) -> Result<TxHash, ProviderError> {
        if let Some(err) = self.send_error.lock().clone() {
            return Err(err);
        }
        self.sent.lock().push(tx);
        Ok(self.tx_hash)
    }

    async fn get_receipt(&self, _tx_hash: TxHash) -> Result<Option<TransferReceipt>, ProviderError> {
        self.receipt_queries.fetch_add(1, Ordering::SeqCst);
        Ok(*self.receipt.lock())
    }
}

/// Scriptable connector backed by a [`MockProvider`].
pub struct MockConnector {
    pub provider: Arc<MockProvider>,
    account: Address,
    chain_id: ChainId,
    delay: Duration,
    deactivate_delay: Duration,
    failures: Mutex<VecDeque<WalletError>>,
    deactivate_error: Option<WalletError>,
    activations: AtomicU32,
    deactivations: AtomicU32,
    events: broadcast::Sender<WalletEvent>,
}

impl MockConnector {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            provider: Arc::new(MockProvider::new()),
            account: ACCOUNT_A,
            chain_id: SEPOLIA,
            delay: Duration::ZERO,
            deactivate_delay: Duration::ZERO,
            failures: Mutex::new(VecDeque::new()),
            deactivate_error: None,
            activations: AtomicU32::new(0),
            deactivations: AtomicU32::new(0),
            events,
        }
    }

    /// Make each activation take `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Make each deactivation take `delay`.
    pub fn with_deactivate_delay(mut self, delay: Duration) -> Self {
        self.deactivate_delay = delay;
        self
    }

    pub fn with_failing_deactivate(mut self) -> Self {
        self.deactivate_error = Some(WalletError::ProviderFailure {
            message: "extension went away".to_string(),
        });
        self
    }

    /// Fail the next activation with `err`.
    pub fn fail_next(&self, err: WalletError) {
        self.failures.lock().push_back(err);
    }

    pub fn emit(&self, event: WalletEvent) {
        let _ = self.events.send(event);
    }

    pub fn activations(&self) -> u32 {
        self.activations.load(Ordering::SeqCst)
    }

    pub fn deactivations(&self) -> u32 {
        self.deactivations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletConnector for MockConnector {
    fn name(&self) -> &str {
        "mock"
    }

    async fn activate(&self) -> WalletResult<Activation> {
        self.activations.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let failure = self.failures.lock().pop_front();
        if let Some(err) = failure {
            return Err(err);
        }

        Ok(Activation {
            account: self.account,
            chain_id: self.chain_id,
            provider: ProviderHandle::new(ProviderKind::EthersLike, self.provider.clone()),
        })
    }

    async fn deactivate(&self) -> WalletResult<()> {
        self.deactivations.fetch_add(1, Ordering::SeqCst);
        if !self.deactivate_delay.is_zero() {
            tokio::time::sleep(self.deactivate_delay).await;
        }
        match &self.deactivate_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn subscribe(&self) -> Option<broadcast::Receiver<WalletEvent>> {
        Some(self.events.subscribe())
    }
}

pub fn manager_for(connector: &Arc<MockConnector>) -> Arc<ConnectionManager> {
    Arc::new(ConnectionManager::new(connector.clone()))
}

/// Poll `condition` until it holds or a second has passed.
pub async fn eventually<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
