//! Bank aggregate - account directory, transaction log, and ID sequences
//!
//! This is the primary entry point for all business logic. The bank owns
//! its state explicitly (no statics), so multiple independent banks can
//! coexist and tests stay deterministic. Every mutation appends its own
//! transaction records before returning: the log cannot drift from the
//! balances it describes.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use crate::domain::amount::{self, Limit};
use crate::domain::result::{Error, Result};
use crate::domain::{Account, Transaction, TransactionKind, TransactionLog};

/// Identifier sequences start above this offset; the first issued values
/// are ACC1001 and TXN1001.
const SEQUENCE_BASE: u64 = 1000;

const ACCOUNT_PREFIX: &str = "ACC";
const TRANSACTION_PREFIX: &str = "TXN";

/// Mutable bank state, reachable only through the bank's lock
#[derive(Debug)]
struct BankState {
    accounts: BTreeMap<String, Account>,
    ledger: TransactionLog,
    account_seq: u64,
    transaction_seq: u64,
}

impl BankState {
    fn next_account_number(&mut self) -> String {
        self.account_seq += 1;
        format!("{}{}", ACCOUNT_PREFIX, self.account_seq)
    }

    fn next_transaction_id(&mut self) -> String {
        self.transaction_seq += 1;
        format!("{}{}", TRANSACTION_PREFIX, self.transaction_seq)
    }

    fn account(&self, account_number: &str) -> Result<&Account> {
        self.accounts
            .get(account_number)
            .ok_or_else(|| Error::account_not_found(account_number))
    }

    fn account_mut(&mut self, account_number: &str) -> Result<&mut Account> {
        self.accounts
            .get_mut(account_number)
            .ok_or_else(|| Error::account_not_found(account_number))
    }

    /// Build a record from the next transaction ID and append it
    fn record(
        &mut self,
        account_number: &str,
        kind: TransactionKind,
        amount: Decimal,
        balance_after: Decimal,
        description: impl Into<String>,
    ) -> Transaction {
        let id = self.next_transaction_id();
        let tx = Transaction::new(id, account_number, kind, amount, balance_after, description);
        self.ledger.append(tx.clone());
        tx
    }
}

/// The bank aggregate
///
/// State sits behind a single mutex (one lock, so no ordering concerns):
/// each operation - including both legs of a transfer and their two log
/// appends - is one atomic unit relative to any other caller, and a
/// rejected operation releases the lock with nothing changed.
#[derive(Debug)]
pub struct Bank {
    state: Mutex<BankState>,
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

impl Bank {
    /// Create an empty bank
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BankState {
                accounts: BTreeMap::new(),
                ledger: TransactionLog::new(),
                account_seq: SEQUENCE_BASE,
                transaction_seq: SEQUENCE_BASE,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BankState>> {
        self.state
            .lock()
            .map_err(|_| Error::other("bank state lock poisoned"))
    }

    /// Open a new account
    ///
    /// A positive opening balance is recorded as an initial deposit; a zero
    /// opening balance appends nothing.
    pub fn open_account(
        &self,
        holder_name: &str,
        initial_balance: Decimal,
    ) -> Result<AccountOpening> {
        let mut state = self.lock()?;

        // Validate before a number is issued: a rejected opening must not
        // consume a sequence value.
        let holder = Account::normalize_holder_name(holder_name)?;
        Account::ensure_opening_balance(initial_balance)?;

        let account_number = state.next_account_number();
        let account = Account::new(account_number.clone(), &holder, initial_balance)?;

        let initial_deposit = if initial_balance > Decimal::ZERO {
            Some(state.record(
                &account_number,
                TransactionKind::Deposit,
                initial_balance,
                initial_balance,
                "Initial deposit",
            ))
        } else {
            None
        };

        let snapshot = account.clone();
        state.accounts.insert(account_number.clone(), account);

        info!(account = %account_number, "account opened");
        Ok(AccountOpening {
            account: snapshot,
            initial_deposit,
        })
    }

    /// Deposit into an account and record the event
    pub fn deposit(
        &self,
        account_number: &str,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transaction> {
        let mut state = self.lock()?;

        let account = state.account_mut(account_number)?;
        account.deposit(amount)?;
        let balance_after = account.balance();

        let tx = state.record(
            account_number,
            TransactionKind::Deposit,
            amount,
            balance_after,
            description.unwrap_or(""),
        );
        info!(account = %account_number, %amount, "deposit completed");
        Ok(tx)
    }

    /// Withdraw from an account and record the event
    pub fn withdraw(
        &self,
        account_number: &str,
        amount: Decimal,
        description: Option<&str>,
    ) -> Result<Transaction> {
        let mut state = self.lock()?;

        let account = state.account_mut(account_number)?;
        account.withdraw(amount)?;
        let balance_after = account.balance();

        let tx = state.record(
            account_number,
            TransactionKind::Withdrawal,
            amount,
            balance_after,
            description.unwrap_or(""),
        );
        info!(account = %account_number, %amount, "withdrawal completed");
        Ok(tx)
    }

    /// Move funds between two accounts and record both legs
    ///
    /// Check order: target validity (absent target and self-transfer are
    /// both `InvalidTarget`), then amount validity, then sufficiency, then
    /// the transfer limit. All checks pass before either balance moves, so
    /// there is no observable state with only one side changed.
    pub fn transfer(&self, from: &str, to: &str, amount: Decimal) -> Result<TransferReceipt> {
        let mut state = self.lock()?;

        state.account(from)?;
        if from == to || !state.accounts.contains_key(to) {
            return Err(Error::InvalidTarget);
        }

        {
            let source = state.account(from)?;
            amount::ensure_valid(amount)?;
            source.ensure_funds(amount)?;
            amount::ensure_within(Limit::Transfer, amount)?;
        }

        let source_holder = state.account(from)?.holder_name.clone();
        let target_holder = state.account(to)?.holder_name.clone();

        let source = state.account_mut(from)?;
        source.debit(amount);
        let source_balance = source.balance();

        let target = state.account_mut(to)?;
        target.credit(amount);
        let target_balance = target.balance();

        let outgoing = state.record(
            from,
            TransactionKind::TransferOut,
            amount,
            source_balance,
            format!("Transfer to {}", target_holder),
        );
        let incoming = state.record(
            to,
            TransactionKind::TransferIn,
            amount,
            target_balance,
            format!("Transfer from {}", source_holder),
        );

        info!(%from, %to, %amount, "transfer completed");
        Ok(TransferReceipt { outgoing, incoming })
    }

    /// Read the balance and record the inquiry
    ///
    /// The returned record carries the balance in `balance_after` and an
    /// amount of zero.
    pub fn check_balance(&self, account_number: &str) -> Result<Transaction> {
        let mut state = self.lock()?;

        let balance = state.account(account_number)?.balance();
        let tx = state.record(
            account_number,
            TransactionKind::BalanceInquiry,
            Decimal::ZERO,
            balance,
            "Balance inquiry",
        );
        Ok(tx)
    }

    /// Snapshot of one account; unlike `check_balance` this records nothing
    pub fn account(&self, account_number: &str) -> Result<Account> {
        Ok(self.lock()?.account(account_number)?.clone())
    }

    /// Directory listing, ordered by account number
    pub fn accounts(&self) -> Result<Vec<Account>> {
        Ok(self.lock()?.accounts.values().cloned().collect())
    }

    /// One account's records in original insertion order; records nothing
    pub fn history(&self, account_number: &str) -> Result<Vec<Transaction>> {
        let state = self.lock()?;
        state.account(account_number)?;
        Ok(state.ledger.history_for(account_number).cloned().collect())
    }

    /// Whole-bank totals
    pub fn summary(&self) -> Result<BankSummary> {
        let state = self.lock()?;
        Ok(BankSummary {
            total_accounts: state.accounts.len() as i64,
            total_transactions: state.ledger.len() as i64,
            total_balance: state.accounts.values().map(|a| a.balance()).sum(),
        })
    }

    /// Seed the demonstration accounts used by demo mode
    pub fn seed_demo_accounts(&self) -> Result<Vec<Account>> {
        let seeds = [
            ("Rakshitha", Decimal::new(150_000, 2)),
            ("Chitra", Decimal::new(250_000, 2)),
            ("Sanvi", Decimal::new(50_000, 2)),
        ];

        let mut opened = Vec::with_capacity(seeds.len());
        for (name, balance) in seeds {
            opened.push(self.open_account(name, balance)?.account);
        }
        Ok(opened)
    }
}

/// Result of opening an account
#[derive(Debug, Clone, Serialize)]
pub struct AccountOpening {
    pub account: Account,
    pub initial_deposit: Option<Transaction>,
}

/// The two records produced by a completed transfer
#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub outgoing: Transaction,
    pub incoming: Transaction,
}

/// Whole-bank totals
#[derive(Debug, Serialize)]
pub struct BankSummary {
    pub total_accounts: i64,
    pub total_transactions: i64,
    pub total_balance: Decimal,
}
