//! Account domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::amount::{self, Limit};
use crate::domain::result::{Error, Result};

/// A bank account held by a named customer
///
/// The balance is private state: it only moves through the guarded
/// operations below, each of which enforces the amount, sufficiency, and
/// limit rules before mutating. `balance() >= 0` holds at all times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Assigned by the bank at creation, immutable afterwards
    pub account_number: String,
    pub holder_name: String,
    balance: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a validated holder name and opening balance
    pub fn new(
        account_number: impl Into<String>,
        holder_name: &str,
        initial_balance: Decimal,
    ) -> Result<Self> {
        let holder_name = Self::normalize_holder_name(holder_name)?;
        Self::ensure_opening_balance(initial_balance)?;

        Ok(Self {
            account_number: account_number.into(),
            holder_name,
            balance: initial_balance,
            created_at: Utc::now(),
        })
    }

    /// Validate and trim a holder name
    pub fn normalize_holder_name(name: &str) -> Result<String> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidName);
        }
        Ok(trimmed.to_string())
    }

    /// Reject negative opening balances (zero is allowed)
    pub fn ensure_opening_balance(balance: Decimal) -> Result<()> {
        if balance < Decimal::ZERO {
            return Err(Error::InvalidInitialBalance(balance));
        }
        Ok(())
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposit into the account
    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        amount::ensure_valid(amount)?;
        amount::ensure_within(Limit::Deposit, amount)?;
        self.balance += amount;
        Ok(())
    }

    /// Withdraw from the account
    ///
    /// The sufficiency check runs before the limit check: an amount that
    /// violates both reports `InsufficientFunds`.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        amount::ensure_valid(amount)?;
        self.ensure_funds(amount)?;
        amount::ensure_within(Limit::Withdrawal, amount)?;
        self.balance -= amount;
        Ok(())
    }

    /// Check that the balance covers `amount`
    pub(crate) fn ensure_funds(&self, amount: Decimal) -> Result<()> {
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Debit leg of a transfer; the bank validates before calling
    pub(crate) fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
    }

    /// Credit leg of a transfer
    pub(crate) fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }
}
