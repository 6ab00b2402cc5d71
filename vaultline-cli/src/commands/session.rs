//! Session command - the interactive banking loop
//!
//! The menus here are the only caller of the core: select or create an
//! account, then run operations against it. Amount text is parsed to
//! `Decimal` at this boundary, so malformed input never reaches the bank;
//! business rejections print in red and drop back to the menu.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use rust_decimal::Decimal;

use vaultline_core::{Account, Bank, Transaction};

use super::get_config;
use crate::output;

/// How many history records a page shows, newest first
const HISTORY_PAGE_SIZE: usize = 10;

/// Minimum opening deposit, enforced at the counter rather than by the core
fn min_opening_deposit() -> Decimal {
    Decimal::new(100, 0)
}

pub fn run(force_demo: bool) -> Result<()> {
    let config = get_config()?;
    let bank = Bank::new();

    println!("{}", "Welcome to Vaultline".bold());

    if force_demo || config.demo_mode {
        let seeded = bank.seed_demo_accounts()?;
        output::info("Sample accounts created for this session:");
        for account in &seeded {
            println!("  {} - {}", account.account_number, account.holder_name);
        }
    }

    let mut session = Session {
        bank,
        current: None,
    };
    session.run()
}

struct Session {
    bank: Bank,
    /// Account number of the logged-in account, if any
    current: Option<String>,
}

impl Session {
    fn run(&mut self) -> Result<()> {
        loop {
            let keep_going = match self.current.clone() {
                Some(number) => self.operations_menu(&number)?,
                None => self.account_menu()?,
            };
            if !keep_going {
                break;
            }
        }

        println!("\n{}", "Thank you for using Vaultline!".bold());
        Ok(())
    }

    fn account_menu(&mut self) -> Result<bool> {
        println!();
        let choice = Select::new()
            .with_prompt("Account management")
            .items(&[
                "Log in to an account",
                "Create a new account",
                "List accounts",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => self.login()?,
            1 => self.create_account()?,
            2 => self.list_accounts()?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn login(&mut self) -> Result<()> {
        let number: String = Input::new()
            .with_prompt("Account number")
            .interact_text()?;
        let number = number.trim().to_uppercase();

        match self.bank.account(&number) {
            Ok(account) => {
                self.current = Some(account.account_number.clone());
                output::success(&format!("Welcome back, {}!", account.holder_name));
            }
            Err(e) => output::error(&e.to_string()),
        }
        Ok(())
    }

    fn create_account(&mut self) -> Result<()> {
        let name: String = Input::new()
            .with_prompt("Account holder name")
            .interact_text()?;

        let Some(amount) = prompt_amount("Opening deposit")? else {
            return Ok(());
        };
        if amount < min_opening_deposit() {
            output::error(&format!(
                "Minimum opening deposit is {}",
                output::format_amount(min_opening_deposit())
            ));
            return Ok(());
        }

        match self.bank.open_account(&name, amount) {
            Ok(opening) => {
                output::success("Account created");
                print_account_info(&opening.account);

                if Confirm::new()
                    .with_prompt("Log in to this account now?")
                    .default(true)
                    .interact()?
                {
                    self.current = Some(opening.account.account_number.clone());
                }
            }
            Err(e) => output::error(&e.to_string()),
        }
        Ok(())
    }

    fn list_accounts(&self) -> Result<()> {
        let accounts = self.bank.accounts()?;
        if accounts.is_empty() {
            output::warning("No accounts yet");
            return Ok(());
        }

        let mut table = output::create_table();
        table.set_header(vec!["Account", "Holder", "Balance"]);
        for account in &accounts {
            table.add_row(vec![
                account.account_number.clone(),
                account.holder_name.clone(),
                output::format_amount(account.balance()),
            ]);
        }
        println!("{}", table);
        Ok(())
    }

    fn operations_menu(&mut self, number: &str) -> Result<bool> {
        let account = self.bank.account(number)?;
        println!();
        println!(
            "Logged in as: {} ({})",
            account.holder_name.bold(),
            account.account_number
        );

        let choice = Select::new()
            .with_prompt("Banking operations")
            .items(&[
                "Check balance",
                "Deposit",
                "Withdraw",
                "Transfer",
                "Transaction history",
                "Account information",
                "Log out",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => self.check_balance(number)?,
            1 => self.deposit(number)?,
            2 => self.withdraw(number)?,
            3 => self.transfer(number)?,
            4 => self.history(number)?,
            5 => print_account_info(&self.bank.account(number)?),
            6 => {
                output::info(&format!("Goodbye, {}!", account.holder_name));
                self.current = None;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn check_balance(&self, number: &str) -> Result<()> {
        match self.bank.check_balance(number) {
            Ok(tx) => println!(
                "Current balance: {}",
                output::format_amount(tx.balance_after).bold()
            ),
            Err(e) => output::error(&e.to_string()),
        }
        Ok(())
    }

    fn deposit(&self, number: &str) -> Result<()> {
        let Some(amount) = prompt_amount("Deposit amount")? else {
            return Ok(());
        };

        match self.bank.deposit(number, amount, Some("Cash deposit")) {
            Ok(tx) => output::success(&format!(
                "Deposited {}. New balance: {}",
                output::format_amount(tx.amount),
                output::format_amount(tx.balance_after)
            )),
            Err(e) => output::error(&e.to_string()),
        }
        Ok(())
    }

    fn withdraw(&self, number: &str) -> Result<()> {
        let Some(amount) = prompt_amount("Withdrawal amount")? else {
            return Ok(());
        };

        match self.bank.withdraw(number, amount, Some("Cash withdrawal")) {
            Ok(tx) => output::success(&format!(
                "Withdrew {}. New balance: {}",
                output::format_amount(tx.amount),
                output::format_amount(tx.balance_after)
            )),
            Err(e) => output::error(&e.to_string()),
        }
        Ok(())
    }

    fn transfer(&self, number: &str) -> Result<()> {
        let target: String = Input::new()
            .with_prompt("Target account number")
            .interact_text()?;
        let target = target.trim().to_uppercase();

        match self.bank.account(&target) {
            Ok(account) => println!(
                "Transfer to: {} ({})",
                account.holder_name, account.account_number
            ),
            Err(e) => {
                output::error(&e.to_string());
                return Ok(());
            }
        }

        let Some(amount) = prompt_amount("Transfer amount")? else {
            return Ok(());
        };

        match self.bank.transfer(number, &target, amount) {
            Ok(receipt) => output::success(&format!(
                "Transferred {}. Your new balance: {}",
                output::format_amount(receipt.outgoing.amount),
                output::format_amount(receipt.outgoing.balance_after)
            )),
            Err(e) => output::error(&e.to_string()),
        }
        Ok(())
    }

    fn history(&self, number: &str) -> Result<()> {
        let history = self.bank.history(number)?;
        if history.is_empty() {
            output::warning("No transactions yet");
            return Ok(());
        }

        let (recent, omitted) = history_window(&history, HISTORY_PAGE_SIZE);

        println!("{}", "Recent transactions (newest first)".bold());
        let mut table = output::create_table();
        table.set_header(vec![
            "ID",
            "Time",
            "Type",
            "Amount",
            "Balance",
            "Description",
        ]);
        for tx in recent {
            table.add_row(vec![
                tx.id.clone(),
                tx.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                tx.kind.label().to_string(),
                output::format_amount(tx.amount),
                output::format_amount(tx.balance_after),
                tx.description.clone(),
            ]);
        }
        println!("{}", table);

        if omitted > 0 {
            println!("... and {} more transactions", omitted);
        }
        println!("Total transactions: {}", history.len());
        Ok(())
    }
}

/// The most recent `limit` records, newest first, plus how many older
/// records were left out
fn history_window(history: &[Transaction], limit: usize) -> (Vec<&Transaction>, usize) {
    let recent: Vec<&Transaction> = history.iter().rev().take(limit).collect();
    let omitted = history.len().saturating_sub(limit);
    (recent, omitted)
}

/// Prompt for an amount; malformed or negative input is rejected here,
/// before the core is invoked
fn prompt_amount(prompt: &str) -> Result<Option<Decimal>> {
    let text: String = Input::new().with_prompt(prompt).interact_text()?;

    match text.trim().parse::<Decimal>() {
        Ok(amount) if amount >= Decimal::ZERO => Ok(Some(amount)),
        Ok(_) => {
            output::error("Amount cannot be negative");
            Ok(None)
        }
        Err(_) => {
            output::error("Invalid number format. Please enter a valid amount.");
            Ok(None)
        }
    }
}

fn print_account_info(account: &Account) {
    println!("{}", "=== Account Information ===".bold());
    println!("Account number: {}", account.account_number);
    println!("Account holder: {}", account.holder_name);
    println!(
        "Current balance: {}",
        output::format_amount(account.balance())
    );
}
