//! Report module: aggregates trial timings and prints the comparison.

use std::time::Duration;

/// Aggregated results of one benchmark run.
///
/// Per-trial timings are folded into the running totals as they arrive;
/// nothing per-trial is retained. The per-backend lookup counters are equal
/// to the trial count by construction and exist so the pairing invariant is
/// observable.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub corpus_size: usize,
    pub store_lookups: usize,
    pub index_lookups: usize,
    store_total: Duration,
    index_total: Duration,
}

impl BenchResult {
    pub fn new(corpus_size: usize) -> Self {
        Self {
            corpus_size,
            store_lookups: 0,
            index_lookups: 0,
            store_total: Duration::ZERO,
            index_total: Duration::ZERO,
        }
    }

    pub fn add_trial(&mut self, store_elapsed: Duration, index_elapsed: Duration) {
        self.store_total += store_elapsed;
        self.store_lookups += 1;
        self.index_total += index_elapsed;
        self.index_lookups += 1;
    }

    pub fn trials(&self) -> usize {
        debug_assert_eq!(self.store_lookups, self.index_lookups);
        self.store_lookups
    }

    /// Mean persistent-store lookup latency in seconds (0.0 with no trials).
    pub fn store_mean_secs(&self) -> f64 {
        if self.store_lookups == 0 {
            return 0.0;
        }
        self.store_total.as_secs_f64() / self.store_lookups as f64
    }

    /// Mean hash-set lookup latency in seconds (0.0 with no trials).
    pub fn index_mean_secs(&self) -> f64 {
        if self.index_lookups == 0 {
            return 0.0;
        }
        self.index_total.as_secs_f64() / self.index_lookups as f64
    }

    /// How many times slower the store lookup is than the hash-set lookup.
    pub fn slowdown(&self) -> f64 {
        let index_mean = self.index_mean_secs();
        if index_mean <= 0.0 {
            return 0.0;
        }
        self.store_mean_secs() / index_mean
    }
}

/// Print the formatted comparison report.
pub fn print_report(result: &BenchResult) {
    println!("\n{}", "=".repeat(60));
    println!("  Token Lookup Latency Report");
    println!("{}", "=".repeat(60));
    println!("  Corpus size:     {:>12}", result.corpus_size);
    println!("  Trials:          {:>12}", result.trials());
    println!("  {}", "-".repeat(40));
    println!("  SQLite mean:     {:>12.6} s", result.store_mean_secs());
    println!("  Hash set mean:   {:>12.6} s", result.index_mean_secs());
    if result.trials() > 0 && result.slowdown() > 0.0 {
        println!("  SQLite/hash set: {:>11.1}x", result.slowdown());
    }
    println!("{}", "=".repeat(60));
}
