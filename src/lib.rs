//! Token Lookup Latency Benchmark
//!
//! Measures point-lookup latency for a membership-test workload, comparing a
//! disk-backed SQLite table (token as primary key) against an in-memory hash
//! set built from the same data. The corpus is generated deterministically,
//! bulk-loaded into SQLite, read back in full to build the hash set, and then
//! both backends are queried in lockstep with the same sampled token per
//! trial.
//!
//! Run the benchmark: `cargo run --release`
//! Run tests: `cargo test`

pub mod config;
pub mod error;
pub mod index;
pub mod report;
pub mod runner;
pub mod store;
pub mod token;
