//! Types module
//!
//! Contains core data structures used throughout the ledger engine.
//! This module organizes types into logical submodules:
//! - `account`: balance type, balance cap, and the per-account lock cell
//! - `error`: error types for ledger operations

pub mod account;
pub mod error;

pub(crate) use account::Account;
pub use account::{Amount, MAX_AMOUNT};
pub use error::LedgerError;
