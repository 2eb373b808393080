//! Core trait for the ledger operation protocol
//!
//! This module defines the `Bank` trait: the full operation set over a
//! fixed-size collection of numbered accounts. [`Ledger`](super::Ledger) is
//! the lock-per-account implementation; callers that only need the operation
//! set (tests, drivers, future alternative implementations) can take the
//! trait instead of the concrete type.

use crate::types::{Amount, LedgerError};

/// The operation protocol over a fixed-size set of numbered accounts
///
/// All operations are safe to call concurrently from multiple threads.
/// Implementations must guarantee:
/// - per-account linearizability for single-account reads and writes,
/// - atomic visibility for transfers (no observer sees a debit without the
///   matching credit),
/// - an exact snapshot for the whole-ledger total,
/// - deadlock freedom among any mix of concurrent operations.
pub trait Bank {
    /// Number of accounts in the ledger, fixed at construction
    fn account_count(&self) -> usize;

    /// Current balance of one account
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is not in `[0, account_count)`.
    fn balance(&self, index: usize) -> Result<Amount, LedgerError>;

    /// Sum of all account balances at a single instant
    ///
    /// Widened to `i128` because a valid total (every balance at most
    /// [`MAX_AMOUNT`](crate::types::MAX_AMOUNT)) can still exceed `i64`.
    fn total_balance(&self) -> i128;

    /// Credit an account, returning the new balance
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad index, `InvalidArgument` if
    /// `amount <= 0`, or `Overflow` if the new balance would exceed
    /// [`MAX_AMOUNT`](crate::types::MAX_AMOUNT). On error nothing is mutated.
    fn deposit(&self, index: usize, amount: Amount) -> Result<Amount, LedgerError>;

    /// Debit an account, returning the new balance
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad index, `InvalidArgument` if
    /// `amount <= 0`, or `Underflow` if `amount` exceeds the current balance.
    /// On error nothing is mutated.
    fn withdraw(&self, index: usize, amount: Amount) -> Result<Amount, LedgerError>;

    /// Atomically move `amount` from one account to another
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` for a bad index, `InvalidArgument` if
    /// `amount <= 0` or `from == to`, `Underflow` if the source cannot cover
    /// the amount, or `Overflow` if the destination would exceed
    /// [`MAX_AMOUNT`](crate::types::MAX_AMOUNT). On error neither balance
    /// changes.
    fn transfer(&self, from: usize, to: usize, amount: Amount) -> Result<(), LedgerError>;
}
