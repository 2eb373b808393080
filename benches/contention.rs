//! Benchmark suite for ledger lock contention
//!
//! This benchmark measures the cost profile of the locking protocol using the
//! divan benchmarking framework: uncontended single-account mutation,
//! two-lock transfers, and the full-scan total that serializes the whole
//! ledger.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use ledger_engine::Ledger;

fn main() {
    divan::main();
}

/// Benchmark single-account deposits with no other lock holders
#[divan::bench]
fn uncontended_deposits(bencher: divan::Bencher) {
    let ledger = Ledger::new(1);
    bencher.bench_local(|| {
        ledger.deposit(0, 1).expect("deposit failed");
        ledger.withdraw(0, 1).expect("withdraw failed");
    });
}

/// Benchmark transfers between a fixed account pair (two-lock path)
#[divan::bench]
fn paired_transfers(bencher: divan::Bencher) {
    let ledger = Ledger::new(2);
    ledger.deposit(0, 1_000_000).expect("seed failed");
    bencher.bench_local(|| {
        ledger.transfer(0, 1, 1).expect("transfer failed");
        ledger.transfer(1, 0, 1).expect("transfer failed");
    });
}

/// Benchmark the full-scan total at several ledger sizes
#[divan::bench(args = [16, 256, 4096])]
fn total_balance_scan(bencher: divan::Bencher, accounts: usize) {
    let ledger = Ledger::new(accounts);
    for i in 0..accounts {
        ledger.deposit(i, 100).expect("seed failed");
    }
    bencher.bench_local(|| ledger.total_balance());
}
