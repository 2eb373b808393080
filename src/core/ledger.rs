//! Fixed-size concurrent ledger
//!
//! This module provides the `Ledger` struct: a fixed-size array of accounts,
//! each guarded by its own exclusive lock, together with the operation
//! protocol that decides how those locks are acquired, ordered, and released.
//!
//! # Design
//!
//! There is no global lock. Single-account operations (balance, deposit,
//! withdraw) take exactly one lock. Operations that need more than one lock
//! (transfer and the whole-ledger total) acquire locks in ascending account
//! index order, always. That single total order over all locks is what makes
//! the system deadlock-free: every multi-lock acquisition follows the same
//! ranking, so no circular wait can form, even between transfers running in
//! opposite directions over the same pair of accounts.
//!
//! # Thread Safety
//!
//! All operations take `&self` and are safe to call concurrently. Validation
//! runs after the necessary locks are held and before any mutation, so a
//! failing operation leaves every balance exactly as it was. Lock guards are
//! RAII; every exit path, error paths included, releases every lock taken.
//!
//! # Cost Model
//!
//! `total_balance` holds all `n` locks simultaneously for the duration of the
//! scan and therefore serializes against every concurrent mutator. Callers
//! should treat it as comparatively expensive at high account counts and keep
//! it off latency-sensitive hot paths.

use crate::core::traits::Bank;
use crate::types::{Account, Amount, LedgerError, MAX_AMOUNT};
use tracing::trace;

/// A fixed-size collection of lockable accounts plus the operation protocol
///
/// The ledger exclusively owns its accounts; balances are only reachable
/// through the operations below, never by reference. The account count is
/// fixed at construction and every account starts at balance zero.
pub struct Ledger {
    /// Accounts by index; the index order doubles as the global lock order
    accounts: Vec<Account>,
}

impl Ledger {
    /// Create a ledger with `count` accounts, all with balance zero
    ///
    /// # Arguments
    ///
    /// * `count` - Number of accounts, numbered `0..count`. May be zero.
    pub fn new(count: usize) -> Self {
        let accounts = (0..count).map(|_| Account::new()).collect();
        Ledger { accounts }
    }

    /// Number of accounts in the ledger
    ///
    /// Immutable after construction, so no locking is involved.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Current balance of account `index`
    ///
    /// Takes the account's lock for the read, so the returned value is a
    /// balance the account actually held at a single instant.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is not in `[0, account_count)`.
    pub fn balance(&self, index: usize) -> Result<Amount, LedgerError> {
        let account = self.account(index)?;
        let balance = account.balance.lock();
        Ok(*balance)
    }

    /// Sum of all balances at a single instant
    ///
    /// Acquires every account's lock in ascending index order, holds all of
    /// them while summing, then releases them all. Holding the full lock set
    /// is what makes the snapshot exact despite the absence of a global lock;
    /// the cost is that this call serializes with every concurrent mutator.
    ///
    /// The sum is accumulated as `i128`: every ledger with more than nine
    /// accounts at `MAX_AMOUNT` holds a valid total that an `i64` cannot
    /// represent, and account counts are bounded by `usize`, so the widened
    /// accumulator cannot wrap.
    pub fn total_balance(&self) -> i128 {
        // Ascending acquisition keeps the scan in the same global lock order
        // as transfer, so the two cannot deadlock against each other.
        let guards: Vec<_> = self
            .accounts
            .iter()
            .map(|account| account.balance.lock())
            .collect();
        guards.iter().map(|balance| i128::from(**balance)).sum()
    }

    /// Credit `amount` to account `index`, returning the new balance
    ///
    /// # Arguments
    ///
    /// * `index` - Account to credit
    /// * `amount` - Amount to add; must be positive and at most `MAX_AMOUNT`
    ///
    /// # Errors
    ///
    /// * `IndexOutOfRange` - `index` is outside the ledger (checked before
    ///   any lock is taken)
    /// * `InvalidArgument` - `amount <= 0`
    /// * `Overflow` - `amount > MAX_AMOUNT` or the new balance would exceed
    ///   `MAX_AMOUNT`
    ///
    /// On error the balance is untouched.
    pub fn deposit(&self, index: usize, amount: Amount) -> Result<Amount, LedgerError> {
        let account = self.account(index)?;
        let mut balance = account.balance.lock();

        check_positive(amount)?;
        let current = *balance;
        let next = current
            .checked_add(amount)
            .filter(|next| amount <= MAX_AMOUNT && *next <= MAX_AMOUNT)
            .ok_or_else(|| LedgerError::overflow(index, current, amount))?;

        *balance = next;
        trace!(index, amount, balance = next, "deposit applied");
        Ok(next)
    }

    /// Debit `amount` from account `index`, returning the new balance
    ///
    /// # Arguments
    ///
    /// * `index` - Account to debit
    /// * `amount` - Amount to remove; must be positive and covered by the
    ///   current balance
    ///
    /// # Errors
    ///
    /// * `IndexOutOfRange` - `index` is outside the ledger (checked before
    ///   any lock is taken)
    /// * `InvalidArgument` - `amount <= 0`
    /// * `Underflow` - `amount` exceeds the current balance
    ///
    /// On error the balance is untouched.
    pub fn withdraw(&self, index: usize, amount: Amount) -> Result<Amount, LedgerError> {
        let account = self.account(index)?;
        let mut balance = account.balance.lock();

        check_positive(amount)?;
        let current = *balance;
        let next = current
            .checked_sub(amount)
            .filter(|next| *next >= 0)
            .ok_or_else(|| LedgerError::underflow(index, current, amount))?;

        *balance = next;
        trace!(index, amount, balance = next, "withdrawal applied");
        Ok(next)
    }

    /// Atomically move `amount` from account `from` to account `to`
    ///
    /// Both locks are acquired in ascending index order regardless of the
    /// transfer direction, so a concurrent transfer running the opposite way
    /// over the same pair contends on the same first lock instead of
    /// deadlocking. Both new balances are validated before either account is
    /// written, and both writes happen under both locks, so no other
    /// operation can ever observe the debit without the credit.
    ///
    /// # Arguments
    ///
    /// * `from` - Source account index
    /// * `to` - Destination account index; must differ from `from`
    /// * `amount` - Amount to move; must be positive
    ///
    /// # Errors
    ///
    /// * `IndexOutOfRange` - either index is outside the ledger (checked
    ///   before any lock is taken)
    /// * `InvalidArgument` - `from == to` (checked before acquisition; the
    ///   locks are not reentrant) or `amount <= 0`
    /// * `Underflow` - `amount` exceeds the source balance
    /// * `Overflow` - `amount > MAX_AMOUNT` or the destination balance would
    ///   exceed `MAX_AMOUNT`
    ///
    /// On error neither balance changes and both locks are released.
    pub fn transfer(&self, from: usize, to: usize, amount: Amount) -> Result<(), LedgerError> {
        let source = self.account(from)?;
        let dest = self.account(to)?;
        if from == to {
            return Err(LedgerError::self_transfer(from));
        }

        // Global lock order: lower index first, whichever direction the
        // transfer runs.
        let (mut from_balance, mut to_balance) = if from < to {
            let f = source.balance.lock();
            let t = dest.balance.lock();
            (f, t)
        } else {
            let t = dest.balance.lock();
            let f = source.balance.lock();
            (f, t)
        };

        check_positive(amount)?;
        let debited = *from_balance;
        let credited = *to_balance;
        let new_from = debited
            .checked_sub(amount)
            .filter(|next| *next >= 0)
            .ok_or_else(|| LedgerError::underflow(from, debited, amount))?;
        let new_to = credited
            .checked_add(amount)
            .filter(|next| amount <= MAX_AMOUNT && *next <= MAX_AMOUNT)
            .ok_or_else(|| LedgerError::overflow(to, credited, amount))?;

        *from_balance = new_from;
        *to_balance = new_to;
        trace!(from, to, amount, "transfer applied");
        Ok(())
    }

    /// Look up an account, rejecting out-of-range indices before any locking
    fn account(&self, index: usize) -> Result<&Account, LedgerError> {
        self.accounts
            .get(index)
            .ok_or_else(|| LedgerError::index_out_of_range(index, self.accounts.len()))
    }
}

impl Bank for Ledger {
    fn account_count(&self) -> usize {
        Ledger::account_count(self)
    }

    fn balance(&self, index: usize) -> Result<Amount, LedgerError> {
        Ledger::balance(self, index)
    }

    fn total_balance(&self) -> i128 {
        Ledger::total_balance(self)
    }

    fn deposit(&self, index: usize, amount: Amount) -> Result<Amount, LedgerError> {
        Ledger::deposit(self, index, amount)
    }

    fn withdraw(&self, index: usize, amount: Amount) -> Result<Amount, LedgerError> {
        Ledger::withdraw(self, index, amount)
    }

    fn transfer(&self, from: usize, to: usize, amount: Amount) -> Result<(), LedgerError> {
        Ledger::transfer(self, from, to, amount)
    }
}

/// Reject zero and negative amounts
fn check_positive(amount: Amount) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::non_positive_amount(amount));
    }
    Ok(())
}
