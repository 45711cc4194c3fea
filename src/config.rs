//! Command-line configuration for the benchmark binary.

use crate::token::DEFAULT_TOKEN_LENGTH;
use clap::Parser;
use std::path::PathBuf;

/// Default RNG seed. Fixed so repeated runs generate the same corpus and
/// the same sampled-token sequence.
pub const DEFAULT_SEED: u64 = 0x70AD_5EED_CAFE_1042;

#[derive(Debug, Parser)]
#[command(
    name = "token-bench",
    about = "Point-lookup latency: disk-backed SQLite vs in-memory hash set"
)]
pub struct BenchConfig {
    /// Number of token records to generate and load.
    #[arg(long, default_value_t = 1_000_000)]
    pub corpus_size: usize,

    /// Number of paired lookup trials to run.
    #[arg(long, default_value_t = 10_000)]
    pub trials: usize,

    /// Character length of generated tokens.
    #[arg(long, default_value_t = DEFAULT_TOKEN_LENGTH)]
    pub token_length: usize,

    /// RNG seed for corpus generation and trial sampling.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Path of the SQLite database file.
    #[arg(long, default_value = "tokens.db")]
    pub db_path: PathBuf,
}
