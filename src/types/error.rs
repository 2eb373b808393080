//! Error types for the ledger engine
//!
//! This module defines all errors that an operation on the ledger can report.
//! Every failure is returned to the caller immediately; nothing is retried or
//! silently absorbed, and a failing operation never leaves a balance modified
//! or a lock held.
//!
//! # Error Categories
//!
//! - **Contract errors**: an account index outside the ledger, detected
//!   before any lock is taken.
//! - **Argument errors**: non-positive amounts, self-transfers.
//! - **Balance errors**: underflow (draining below zero) and overflow
//!   (exceeding the system-wide balance cap).

use super::account::Amount;
use thiserror::Error;

/// Main error type for ledger operations
///
/// Each variant carries the context needed to diagnose the failure: the
/// offending index, the balance at the time of the check, and the requested
/// amount where applicable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Account index outside `[0, count)`
    ///
    /// Detected before any lock is acquired or any balance is touched.
    #[error("Account index {index} out of range for ledger of {count} accounts")]
    IndexOutOfRange {
        /// The out-of-range index
        index: usize,
        /// Number of accounts in the ledger
        count: usize,
    },

    /// A request that is malformed independent of any balance
    ///
    /// Raised for non-positive amounts and for transfers where source and
    /// destination are the same account.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of what was wrong with the request
        reason: String,
    },

    /// The source account cannot cover the requested amount
    ///
    /// The balance is left exactly as it was.
    #[error("Underflow on account {index}: balance {balance}, requested {requested}")]
    Underflow {
        /// Account being debited
        index: usize,
        /// Balance at the time of the check
        balance: Amount,
        /// Requested debit amount
        requested: Amount,
    },

    /// The resulting balance would exceed [`MAX_AMOUNT`](super::MAX_AMOUNT)
    ///
    /// Also raised when the requested amount itself exceeds the cap. The
    /// balance is left exactly as it was.
    #[error("Overflow on account {index}: balance {balance}, requested {requested}")]
    Overflow {
        /// Account being credited
        index: usize,
        /// Balance at the time of the check
        balance: Amount,
        /// Requested credit amount
        requested: Amount,
    },
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an IndexOutOfRange error
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        LedgerError::IndexOutOfRange { index, count }
    }

    /// Create an InvalidArgument error for a zero or negative amount
    pub fn non_positive_amount(amount: Amount) -> Self {
        LedgerError::InvalidArgument {
            reason: format!("amount must be positive, got {}", amount),
        }
    }

    /// Create an InvalidArgument error for a transfer with equal endpoints
    pub fn self_transfer(index: usize) -> Self {
        LedgerError::InvalidArgument {
            reason: format!("cannot transfer from account {} to itself", index),
        }
    }

    /// Create an Underflow error
    pub fn underflow(index: usize, balance: Amount, requested: Amount) -> Self {
        LedgerError::Underflow {
            index,
            balance,
            requested,
        }
    }

    /// Create an Overflow error
    pub fn overflow(index: usize, balance: Amount, requested: Amount) -> Self {
        LedgerError::Overflow {
            index,
            balance,
            requested,
        }
    }
}
