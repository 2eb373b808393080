//! Account-related types for the ledger engine
//!
//! This module defines the balance type, the system-wide balance cap, and the
//! per-account lock cell that the ledger's concurrency protocol is built on.

use parking_lot::Mutex;

/// Balance and amount type used throughout the ledger
///
/// Signed so that invalid (negative) requests are representable and can be
/// rejected explicitly rather than wrapping.
pub type Amount = i64;

/// System-wide upper bound on any single account balance
///
/// Every crediting operation checks against this cap before mutating.
/// `MAX_AMOUNT` is well below `i64::MAX / 2`, so the checked sum of two
/// in-range values can never wrap.
pub const MAX_AMOUNT: Amount = 1_000_000_000_000_000_000;

/// A single ledger account: one balance guarded by one exclusive lock
///
/// Accounts are created once at ledger construction with a zero balance and
/// live exactly as long as the ledger. They are identified by their position
/// in the ledger's account sequence and are never handed out by reference;
/// every read or write goes through the ledger's operation protocol, which
/// decides lock acquisition order.
#[derive(Debug)]
pub(crate) struct Account {
    /// Current balance, readable or writable only while the lock is held
    pub(crate) balance: Mutex<Amount>,
}

impl Account {
    /// Create a new account with a zero balance
    pub(crate) fn new() -> Self {
        Account {
            balance: Mutex::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account_starts_at_zero() {
        let account = Account::new();
        assert_eq!(*account.balance.lock(), 0);
    }

    #[test]
    fn test_max_amount_cannot_wrap_when_doubled() {
        // Overflow checks compare `balance + amount` against the cap; both
        // operands are at most MAX_AMOUNT, so the sum must fit in an i64.
        assert!(MAX_AMOUNT.checked_add(MAX_AMOUNT).is_some());
    }
}
