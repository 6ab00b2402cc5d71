//! Vaultline Core - Business logic for the terminal banking sandbox
//!
//! This crate implements the core domain logic:
//!
//! - **domain**: Core business entities (Account, Transaction, TransactionLog)
//! - **bank**: The aggregate owning the account directory, the transaction
//!   log, and both identifier sequences
//! - **config**: Application settings (settings.json)
//!
//! The simulation is in-memory and single-user: one `Bank` per process,
//! alive for the process lifetime, no persistence of bank state.

pub mod bank;
pub mod config;
pub mod domain;

// Re-export commonly used types at crate root
pub use bank::{AccountOpening, Bank, BankSummary, TransferReceipt};
pub use config::Config;
pub use domain::result::{Error, Result};
pub use domain::{Account, Limit, Transaction, TransactionKind, TransactionLog};
