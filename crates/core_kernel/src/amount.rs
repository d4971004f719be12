//! Value amounts with precise decimal arithmetic
//!
//! The core accounts in a single asset, so an [`Amount`] carries no currency.
//! It is always non-negative; subtraction that would go below zero is an
//! error rather than a wrap or a silent clamp.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during amount arithmetic
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Negative amount: {0}")]
    Negative(Decimal),

    #[error("Insufficient amount: {available} < {requested}")]
    Underflow { available: Decimal, requested: Decimal },

    #[error("Amount {value} has more than {max_scale} decimal places")]
    Precision { value: Decimal, max_scale: u32 },

    #[error("Overflow during calculation")]
    Overflow,

    #[error("Division by zero")]
    DivisionByZero,
}

/// A non-negative quantity of the custodied asset
///
/// At most [`Amount::SCALE`] decimal places; finer values are refused rather
/// than rounded, so two amounts compare equal only if they were equal as
/// given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    /// Maximum number of decimal places
    pub const SCALE: u32 = 4;

    /// Creates an amount, rejecting negative values and values finer than
    /// [`Amount::SCALE`]
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative(value));
        }
        if value.normalize().scale() > Self::SCALE {
            return Err(AmountError::Precision {
                value,
                max_scale: Self::SCALE,
            });
        }
        Ok(Self(value))
    }

    /// Creates an amount from whole units
    pub fn from_units(units: u64) -> Self {
        Self(Decimal::from(units))
    }

    /// Returns the decimal value
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition
    pub fn checked_add(&self, other: Amount) -> Result<Amount, AmountError> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    /// Checked subtraction that refuses to go below zero
    pub fn checked_sub(&self, other: Amount) -> Result<Amount, AmountError> {
        if other.0 > self.0 {
            return Err(AmountError::Underflow {
                available: self.0,
                requested: other.0,
            });
        }
        Ok(Amount(self.0 - other.0))
    }

    /// Remainder of dividing this amount by `divisor`
    pub fn checked_rem(&self, divisor: Amount) -> Result<Amount, AmountError> {
        if divisor.is_zero() {
            return Err(AmountError::DivisionByZero);
        }
        self.0
            .checked_rem(divisor.0)
            .map(Amount)
            .ok_or(AmountError::Overflow)
    }

    /// Returns true if this amount is an exact whole multiple of `unit`
    pub fn is_multiple_of(&self, unit: Amount) -> bool {
        matches!(self.checked_rem(unit), Ok(rem) if rem.is_zero())
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self::from_units(units)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Decimal {
        amount.0
    }
}
