//! Append-only transaction log

use serde::{Deserialize, Serialize};

use crate::domain::transaction::Transaction;

/// The ordered record of every completed event across all accounts
///
/// Insertion order is the authoritative recency ordering; timestamps are
/// informational only, so two records created in the same millisecond still
/// sort by insertion. Appending is the only mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionLog {
    entries: Vec<Transaction>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; always succeeds
    pub fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// All records, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.entries.iter()
    }

    /// Records belonging to one account, in insertion order
    ///
    /// Lazy and restartable: call again to traverse from the start.
    pub fn history_for<'a>(
        &'a self,
        account_number: &'a str,
    ) -> impl Iterator<Item = &'a Transaction> + 'a {
        self.entries
            .iter()
            .filter(move |t| t.account_number == account_number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
