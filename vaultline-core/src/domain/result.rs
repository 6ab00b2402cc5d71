//! Result and error types for the core library

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::amount::Limit;

/// Core library error type
///
/// The business variants are expected outcomes, not faults: every bank
/// operation reports its rejection reason as a typed variant so callers can
/// branch on it rather than parse a message. A rejected operation never
/// leaves a partial effect behind.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid amount: {0} (amount must be positive)")]
    InvalidAmount(Decimal),

    #[error("account holder name cannot be empty")]
    InvalidName,

    #[error("initial balance cannot be negative: {0}")]
    InvalidInitialBalance(Decimal),

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("{limit} limit exceeded: {amount} is over the {max} maximum", max = .limit.max())]
    LimitExceeded { limit: Limit, amount: Decimal },

    #[error("invalid transfer target")]
    InvalidTarget,

    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an account-not-found error
    pub fn account_not_found(account_number: impl Into<String>) -> Self {
        Self::AccountNotFound(account_number.into())
    }

    /// Create an internal error
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
