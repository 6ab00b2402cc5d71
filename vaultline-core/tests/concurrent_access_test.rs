//! Concurrent bank access tests
//!
//! The simulation is single-threaded by design, but the bank guards its
//! state with one lock so that concurrent callers cannot observe a
//! half-applied transfer. These tests drive crossing transfers and mixed
//! operations from multiple threads and verify that funds are conserved,
//! no balance goes negative, and nothing deadlocks.
//!
//! Run with: cargo test --test concurrent_access_test -- --nocapture

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use rust_decimal::Decimal;

use vaultline_core::Bank;

/// Number of concurrent threads for stress tests
const THREAD_COUNT: usize = 6;

/// Number of iterations per thread
const ITERATIONS_PER_THREAD: usize = 50;

/// Test: transfers crossing in opposite directions between two accounts.
///
/// With a per-account-lock scheme this is the classic deadlock shape; with
/// the bank's single lock it must serialize. Total funds are conserved and
/// exactly two records exist per successful transfer.
#[test]
fn test_crossing_transfers_conserve_funds() {
    let bank = Arc::new(Bank::new());
    let alice = bank
        .open_account("Alice", Decimal::new(100_000, 2))
        .unwrap()
        .account
        .account_number;
    let bob = bank
        .open_account("Bob", Decimal::new(100_000, 2))
        .unwrap()
        .account
        .account_number;

    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let success_count = Arc::new(AtomicUsize::new(0));
    let mut handles = vec![];

    for thread_id in 0..THREAD_COUNT {
        let bank = Arc::clone(&bank);
        let barrier = Arc::clone(&barrier);
        let success_count = Arc::clone(&success_count);
        let alice = alice.clone();
        let bob = bob.clone();

        let handle = thread::spawn(move || {
            // Half the threads transfer one way, half the other.
            let (from, to) = if thread_id % 2 == 0 {
                (alice, bob)
            } else {
                (bob, alice)
            };

            barrier.wait();
            for _ in 0..ITERATIONS_PER_THREAD {
                if bank.transfer(&from, &to, Decimal::new(100, 2)).is_ok() {
                    success_count.fetch_add(1, Ordering::SeqCst);
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let alice_balance = bank.account(&alice).unwrap().balance();
    let bob_balance = bank.account(&bob).unwrap().balance();

    assert!(alice_balance >= Decimal::ZERO);
    assert!(bob_balance >= Decimal::ZERO);
    assert_eq!(
        alice_balance + bob_balance,
        Decimal::new(200_000, 2),
        "Crossing transfers must conserve total funds"
    );

    // 2 opening records + 2 per successful transfer.
    let successes = success_count.load(Ordering::SeqCst) as i64;
    assert_eq!(
        bank.summary().unwrap().total_transactions,
        2 + 2 * successes
    );
}

/// Test: mixed deposits and withdrawals on one account from many threads.
///
/// Each success is counted; the final balance must equal the opening
/// balance plus the net of the successful operations.
#[test]
fn test_concurrent_deposits_and_withdrawals_reconcile() {
    let bank = Arc::new(Bank::new());
    let number = bank
        .open_account("Shared", Decimal::new(50_000, 2)) // 500.00
        .unwrap()
        .account
        .account_number;

    let barrier = Arc::new(Barrier::new(THREAD_COUNT));
    let deposits = Arc::new(AtomicUsize::new(0));
    let withdrawals = Arc::new(AtomicUsize::new(0));
    let mut handles = vec![];

    for thread_id in 0..THREAD_COUNT {
        let bank = Arc::clone(&bank);
        let barrier = Arc::clone(&barrier);
        let deposits = Arc::clone(&deposits);
        let withdrawals = Arc::clone(&withdrawals);
        let number = number.clone();

        let handle = thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS_PER_THREAD {
                if thread_id % 2 == 0 {
                    if bank.deposit(&number, Decimal::new(250, 2), None).is_ok() {
                        deposits.fetch_add(1, Ordering::SeqCst);
                    }
                } else if bank.withdraw(&number, Decimal::new(250, 2), None).is_ok() {
                    withdrawals.fetch_add(1, Ordering::SeqCst);
                }
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().expect("Thread panicked");
    }

    let net = Decimal::new(250, 2)
        * (Decimal::from(deposits.load(Ordering::SeqCst))
            - Decimal::from(withdrawals.load(Ordering::SeqCst)));
    let balance = bank.account(&number).unwrap().balance();

    assert!(balance >= Decimal::ZERO);
    assert_eq!(balance, Decimal::new(50_000, 2) + net);
}
