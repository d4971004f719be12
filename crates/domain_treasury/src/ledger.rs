//! In-memory ledger adapter
//!
//! A reference [`LedgerPort`] that keeps one custody balance plus a balance
//! per external account, and journals every movement it accepts. Each call
//! is all-or-nothing: balances are checked before anything is posted.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use core_kernel::{Amount, AmountError, DomainPort, Identity, PortError};

use crate::ports::LedgerPort;

/// A movement accepted by the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEntry {
    /// Value moved from an account into custody
    Receipt { from: Identity, amount: Amount },
    /// Value moved from custody to an account
    Transfer { to: Identity, amount: Amount },
}

#[derive(Debug, Default)]
struct LedgerState {
    custody: Amount,
    accounts: HashMap<Identity, Amount>,
    journal: Vec<LedgerEntry>,
}

/// Ledger held entirely in process memory
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    state: Mutex<LedgerState>,
}

impl InMemoryLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style account funding; an overflowing credit is logged and
    /// leaves the account as it was
    pub fn with_account(self, account: Identity, amount: Amount) -> Self {
        if let Err(err) = self.credit_account(account, amount) {
            tracing::warn!(%account, %amount, error = %err, "Account credit dropped");
        }
        self
    }

    /// Mints `amount` into an external account
    ///
    /// # Returns
    ///
    /// The account's new balance
    ///
    /// # Errors
    ///
    /// Returns [`AmountError::Overflow`] if the balance would overflow; the
    /// account is left unchanged.
    pub fn credit_account(&self, account: Identity, amount: Amount) -> Result<Amount, AmountError> {
        let mut state = self.state.lock();
        let balance = state.accounts.entry(account).or_default();
        *balance = balance.checked_add(amount)?;
        Ok(*balance)
    }

    /// Balance of an external account; zero for unknown accounts
    pub fn balance_of(&self, account: Identity) -> Amount {
        self.state
            .lock()
            .accounts
            .get(&account)
            .copied()
            .unwrap_or_default()
    }

    /// Snapshot of every accepted movement, oldest first
    pub fn journal(&self) -> Vec<LedgerEntry> {
        self.state.lock().journal.clone()
    }
}

impl DomainPort for InMemoryLedger {}

impl LedgerPort for InMemoryLedger {
    fn receive(&self, from: Identity, amount: Amount) -> Result<(), PortError> {
        let mut state = self.state.lock();
        let available = state.accounts.get(&from).copied().unwrap_or_default();

        let remaining = available
            .checked_sub(amount)
            .map_err(|e| PortError::insufficient_balance(from, e.to_string()))?;
        let custody = state
            .custody
            .checked_add(amount)
            .map_err(|e| PortError::internal(e.to_string()))?;

        state.accounts.insert(from, remaining);
        state.custody = custody;
        state.journal.push(LedgerEntry::Receipt { from, amount });

        tracing::trace!(%from, %amount, "Ledger receipt posted");
        Ok(())
    }

    fn transfer(&self, to: Identity, amount: Amount) -> Result<(), PortError> {
        let mut state = self.state.lock();

        let custody = state
            .custody
            .checked_sub(amount)
            .map_err(|e| PortError::insufficient_balance("custody", e.to_string()))?;
        let current = state.accounts.get(&to).copied().unwrap_or_default();
        let credited = current
            .checked_add(amount)
            .map_err(|e| PortError::internal(e.to_string()))?;

        state.custody = custody;
        state.accounts.insert(to, credited);
        state.journal.push(LedgerEntry::Transfer { to, amount });

        tracing::trace!(%to, %amount, "Ledger transfer posted");
        Ok(())
    }

    fn custody_balance(&self) -> Amount {
        self.state.lock().custody
    }
}
