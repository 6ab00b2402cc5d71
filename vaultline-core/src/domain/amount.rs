//! Amount validation and per-operation limits

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// Per-operation amount cap
///
/// The maxima are fixed policy, not configuration: callers depend on the
/// exact thresholds when matching rejection reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Limit {
    Deposit,
    Withdrawal,
    Transfer,
}

impl Limit {
    /// Maximum amount permitted in a single operation of this kind
    pub fn max(&self) -> Decimal {
        match self {
            Limit::Deposit => Decimal::new(100_000, 0),
            Limit::Withdrawal => Decimal::new(10_000, 0),
            Limit::Transfer => Decimal::new(5_000, 0),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Limit::Deposit => "deposit",
            Limit::Withdrawal => "withdrawal",
            Limit::Transfer => "transfer",
        };
        f.write_str(name)
    }
}

/// Reject non-positive amounts
///
/// `Decimal` cannot encode NaN or infinities, so sign and range are the
/// only checks left at this layer; malformed text never reaches the core.
pub fn ensure_valid(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(amount));
    }
    Ok(())
}

/// Reject amounts over the per-operation cap
pub fn ensure_within(limit: Limit, amount: Decimal) -> Result<()> {
    if amount > limit.max() {
        return Err(Error::LimitExceeded { limit, amount });
    }
    Ok(())
}
