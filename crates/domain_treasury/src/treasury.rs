//! Custody operations on top of the ledger port
//!
//! The treasury holds no balance of its own. Every figure it reports comes
//! from the [`LedgerPort`], so there is nothing to reconcile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use core_kernel::{Amount, Identity, Timestamp};

use crate::error::TreasuryError;
use crate::events::TreasuryEvent;
use crate::ports::LedgerPort;

/// How a deposit entered custody
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepositKind {
    /// Insurer top-up
    Funding,
    /// Unrestricted deposit by any caller
    Open,
}

/// Custody of claim-paying funds
#[derive(Clone)]
pub struct Treasury {
    ledger: Arc<dyn LedgerPort>,
}

impl fmt::Debug for Treasury {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Treasury")
            .field("balance", &self.balance())
            .finish()
    }
}

impl Treasury {
    /// Creates a treasury backed by `ledger`
    pub fn new(ledger: Arc<dyn LedgerPort>) -> Self {
        Self { ledger }
    }

    /// Value currently in custody
    pub fn balance(&self) -> Amount {
        self.ledger.custody_balance()
    }

    /// Fails unless custody holds at least `amount`
    pub fn ensure_covers(&self, amount: Amount) -> Result<(), TreasuryError> {
        let available = self.balance();
        if available < amount {
            return Err(TreasuryError::InsufficientFunds {
                available,
                requested: amount,
            });
        }
        Ok(())
    }

    /// Moves a premium payment into custody
    pub fn collect(&self, from: Identity, amount: Amount) -> Result<(), TreasuryError> {
        self.ledger
            .receive(from, amount)
            .map_err(TreasuryError::DepositFailed)
    }

    /// Adds value to custody
    ///
    /// # Errors
    ///
    /// - [`TreasuryError::ZeroAmount`] for an empty deposit
    /// - [`TreasuryError::DepositFailed`] if the ledger refuses
    pub fn deposit(
        &self,
        from: Identity,
        kind: DepositKind,
        amount: Amount,
        at: Timestamp,
    ) -> Result<TreasuryEvent, TreasuryError> {
        if amount.is_zero() {
            return Err(TreasuryError::ZeroAmount);
        }
        self.collect(from, amount)?;

        Ok(TreasuryEvent::Deposited {
            from,
            kind,
            amount,
            timestamp: at,
        })
    }

    /// Sends value out of custody
    ///
    /// The ledger may run recipient code before this returns.
    pub fn pay_out(&self, to: Identity, amount: Amount) -> Result<(), TreasuryError> {
        self.ledger
            .transfer(to, amount)
            .map_err(TreasuryError::TransferFailed)
    }

    /// Returns custodied value to `to`
    ///
    /// # Errors
    ///
    /// - [`TreasuryError::ZeroAmount`] for an empty withdrawal
    /// - [`TreasuryError::InsufficientFunds`] if custody is short
    /// - [`TreasuryError::TransferFailed`] if the ledger refuses
    pub fn withdraw(
        &self,
        to: Identity,
        amount: Amount,
        at: Timestamp,
    ) -> Result<TreasuryEvent, TreasuryError> {
        if amount.is_zero() {
            return Err(TreasuryError::ZeroAmount);
        }
        self.ensure_covers(amount)?;
        self.pay_out(to, amount)?;

        Ok(TreasuryEvent::Withdrawn {
            to,
            amount,
            timestamp: at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::InMemoryLedger;

    #[test]
    fn test_zero_deposit_rejected() {
        let treasury = Treasury::new(Arc::new(InMemoryLedger::new()));
        let err = treasury
            .deposit(Identity::new(), DepositKind::Open, Amount::ZERO, Timestamp::ZERO)
            .unwrap_err();
        assert!(matches!(err, TreasuryError::ZeroAmount));
    }

    #[test]
    fn test_ensure_covers_boundary() {
        let funder = Identity::new();
        let ledger = Arc::new(InMemoryLedger::new().with_account(funder, Amount::from(500)));
        let treasury = Treasury::new(ledger);
        treasury
            .deposit(funder, DepositKind::Funding, Amount::from(500), Timestamp::ZERO)
            .unwrap();

        assert!(treasury.ensure_covers(Amount::from(500)).is_ok());
        assert!(matches!(
            treasury.ensure_covers(Amount::from(501)),
            Err(TreasuryError::InsufficientFunds { .. })
        ));
    }
}
