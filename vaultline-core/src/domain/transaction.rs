//! Transaction record domain model

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What kind of event a transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferIn,
    TransferOut,
    BalanceInquiry,
}

impl TransactionKind {
    /// Display label ("TRANSFER IN" rather than "TRANSFER_IN")
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdrawal => "WITHDRAWAL",
            TransactionKind::TransferIn => "TRANSFER IN",
            TransactionKind::TransferOut => "TRANSFER OUT",
            TransactionKind::BalanceInquiry => "BALANCE INQUIRY",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An immutable record of one completed account event
///
/// Records are created once, appended to the log, and never edited or
/// removed. `balance_after` snapshots the account balance immediately after
/// the event; balance inquiries carry an amount of zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Assigned by the bank from its own sequence, independent of account
    /// numbers
    pub id: String,
    /// The account this record belongs to (a lookup key, not an ownership
    /// reference)
    pub account_number: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
    pub timestamp: DateTime<Utc>,
    /// Free-text annotation, empty when none was given
    pub description: String,
}

impl Transaction {
    /// Create a new record; the timestamp is assigned here
    pub fn new(
        id: impl Into<String>,
        account_number: impl Into<String>,
        kind: TransactionKind,
        amount: Decimal,
        balance_after: Decimal,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            account_number: account_number.into(),
            kind,
            amount,
            balance_after,
            timestamp: Utc::now(),
            description: description.into(),
        }
    }
}
