//! Scripted ledger
//!
//! Wraps [`InMemoryLedger`] with knobs for adversarial tests:
//!
//! - transfer and receive hooks that run counterparty code while a movement
//!   is in progress, before value is posted, used to model re-entrant payees
//!   and payers
//! - sets of recipients and payers whose movements are refused

use parking_lot::Mutex;
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use core_kernel::{Amount, DomainPort, Identity, PortError};
use domain_treasury::{InMemoryLedger, LedgerEntry, LedgerPort};

/// Counterparty code run during a movement
pub type MovementHook = Arc<dyn Fn(Identity, Amount) + Send + Sync>;

/// Ledger with failure injection and re-entrant movement hooks
#[derive(Default)]
pub struct ScriptedLedger {
    inner: InMemoryLedger,
    transfer_hook: Mutex<Option<MovementHook>>,
    receive_hook: Mutex<Option<MovementHook>>,
    refused: Mutex<HashSet<Identity>>,
    refused_payers: Mutex<HashSet<Identity>>,
    transfer_attempts: AtomicUsize,
    receive_attempts: AtomicUsize,
}

impl fmt::Debug for ScriptedLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedLedger")
            .field("inner", &self.inner)
            .field("refused", &self.refused.lock().len())
            .field("refused_payers", &self.refused_payers.lock().len())
            .field("transfer_attempts", &self.transfer_attempts())
            .field("receive_attempts", &self.receive_attempts())
            .finish()
    }
}

impl ScriptedLedger {
    /// Creates an empty ledger with no scripting
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style account funding
    pub fn with_account(self, account: Identity, amount: impl Into<Amount>) -> Self {
        self.credit_account(account, amount);
        self
    }

    /// Mints value into an external account
    pub fn credit_account(&self, account: Identity, amount: impl Into<Amount>) {
        self.inner
            .credit_account(account, amount.into())
            .expect("Test account balance overflowed");
    }

    /// Balance of an external account
    pub fn balance_of(&self, account: Identity) -> Amount {
        self.inner.balance_of(account)
    }

    /// Movements the ledger accepted
    pub fn journal(&self) -> Vec<LedgerEntry> {
        self.inner.journal()
    }

    /// Number of `transfer` calls, accepted or not
    pub fn transfer_attempts(&self) -> usize {
        self.transfer_attempts.load(Ordering::SeqCst)
    }

    /// Number of `receive` calls, accepted or not
    pub fn receive_attempts(&self) -> usize {
        self.receive_attempts.load(Ordering::SeqCst)
    }

    /// Runs `hook` inside every subsequent transfer
    pub fn on_transfer(&self, hook: impl Fn(Identity, Amount) + Send + Sync + 'static) {
        *self.transfer_hook.lock() = Some(Arc::new(hook));
    }

    /// Runs `hook` inside every subsequent receive, with the payer
    pub fn on_receive(&self, hook: impl Fn(Identity, Amount) + Send + Sync + 'static) {
        *self.receive_hook.lock() = Some(Arc::new(hook));
    }

    /// Removes both movement hooks
    pub fn clear_hook(&self) {
        *self.transfer_hook.lock() = None;
        *self.receive_hook.lock() = None;
    }

    /// Makes every transfer to `recipient` fail
    pub fn refuse_transfers_to(&self, recipient: Identity) {
        self.refused.lock().insert(recipient);
    }

    /// Undoes [`ScriptedLedger::refuse_transfers_to`]
    pub fn accept_transfers_to(&self, recipient: Identity) {
        self.refused.lock().remove(&recipient);
    }

    /// Makes every receive from `payer` fail
    pub fn refuse_receipts_from(&self, payer: Identity) {
        self.refused_payers.lock().insert(payer);
    }

    /// Undoes [`ScriptedLedger::refuse_receipts_from`]
    pub fn accept_receipts_from(&self, payer: Identity) {
        self.refused_payers.lock().remove(&payer);
    }
}

impl DomainPort for ScriptedLedger {}

impl LedgerPort for ScriptedLedger {
    fn receive(&self, from: Identity, amount: Amount) -> Result<(), PortError> {
        self.receive_attempts.fetch_add(1, Ordering::SeqCst);

        let hook = self.receive_hook.lock().clone();
        if let Some(hook) = hook {
            hook(from, amount);
        }

        if self.refused_payers.lock().contains(&from) {
            return Err(PortError::rejected(from, "payer withholds value"));
        }
        self.inner.receive(from, amount)
    }

    fn transfer(&self, to: Identity, amount: Amount) -> Result<(), PortError> {
        self.transfer_attempts.fetch_add(1, Ordering::SeqCst);

        let hook = self.transfer_hook.lock().clone();
        if let Some(hook) = hook {
            hook(to, amount);
        }

        if self.refused.lock().contains(&to) {
            return Err(PortError::rejected(to, "recipient refuses value"));
        }
        self.inner.transfer(to, amount)
    }

    fn custody_balance(&self) -> Amount {
        self.inner.custody_balance()
    }
}
