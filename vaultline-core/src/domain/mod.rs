//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod account;
pub mod amount;
mod ledger;
pub mod result;
mod transaction;

pub use account::Account;
pub use amount::Limit;
pub use ledger::TransactionLog;
pub use transaction::{Transaction, TransactionKind};
