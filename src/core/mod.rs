//! Core ledger logic module
//!
//! This module contains the concurrency-control protocol:
//! - `traits` - the `Bank` operation protocol as a trait seam
//! - `ledger` - the lock-per-account `Ledger` implementation

pub mod ledger;
pub mod traits;

pub use ledger::Ledger;
pub use traits::Bank;
