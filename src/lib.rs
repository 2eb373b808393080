//! Ledger Engine Library
//! # Overview
//!
//! This library provides a fixed-size in-memory ledger of numbered accounts
//! supporting concurrent reads, single-account mutation, and atomic
//! two-account transfers, with no lost updates, no overflow or underflow, and
//! no deadlock.
//!
//! # Architecture
//!
//! The system is organized into two layers:
//!
//! - [`types`] - Core data types (Amount, the balance cap, errors)
//! - [`core`] - The concurrency-control protocol:
//!   - [`core::ledger`] - Per-account locking and the lock-ordering discipline
//!   - [`core::traits`] - The `Bank` operation protocol as a trait
//!
//! # Concurrency Protocol
//!
//! Every account carries its own exclusive lock; there is no global lock.
//! Operations that need more than one lock (transfer, whole-ledger total)
//! acquire them in ascending account-index order, always: a single total
//! order over all locks that rules out circular wait and therefore deadlock.
//! Validation happens after the necessary locks are held and before any
//! mutation, so failed operations leave every balance untouched.
//!
//! # Operations
//!
//! - **balance**: linearizable single-account read
//! - **total_balance**: exact whole-ledger snapshot (holds all locks)
//! - **deposit** / **withdraw**: single-account mutation with overflow and
//!   underflow checks against [`MAX_AMOUNT`](types::MAX_AMOUNT)
//! - **transfer**: atomic two-account move; no observer can see the debit
//!   without the matching credit
//!
//! # Example
//!
//! ```
//! use ledger_engine::Ledger;
//!
//! let ledger = Ledger::new(4);
//! ledger.deposit(0, 100)?;
//! ledger.transfer(0, 3, 25)?;
//! assert_eq!(ledger.balance(3)?, 25);
//! assert_eq!(ledger.total_balance(), 100);
//! # Ok::<(), ledger_engine::LedgerError>(())
//! ```

// Module declarations
pub mod core;
pub mod types;

pub use self::core::{Bank, Ledger};
pub use self::types::{Amount, LedgerError, MAX_AMOUNT};
