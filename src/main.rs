//! Benchmark binary: populates the store, builds the hash-set index, runs
//! the paired lookup trials, and prints the report.
//!
//! Usage:
//!   cargo run --release
//!   cargo run --release -- --corpus-size 100000 --trials 5000

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use token_bench::config::BenchConfig;
use token_bench::index::TokenIndex;
use token_bench::report::print_report;
use token_bench::runner::run_trials;
use token_bench::store::TokenStore;
use token_bench::token::TokenGenerator;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = BenchConfig::parse();
    log::info!(
        "corpus_size={} trials={} token_length={} seed={:#x} db={}",
        config.corpus_size,
        config.trials,
        config.token_length,
        config.seed,
        config.db_path.display()
    );

    let mut store = TokenStore::open(&config.db_path).context("open token store")?;
    store.initialize().context("initialize schema")?;

    println!(
        "Populating {} with {} tokens...",
        config.db_path.display(),
        config.corpus_size
    );
    let mut generator = TokenGenerator::new(config.seed, config.token_length);
    let inserted = store
        .repopulate(config.corpus_size, &mut generator)
        .context("populate corpus")?;
    println!("Store populated with {inserted} records.");

    println!("Loading hash set...");
    let tokens = store.load_all_tokens().context("load token snapshot")?;
    let index = TokenIndex::build(tokens.iter().cloned());
    println!("Hash set loaded with {} records.", index.len());

    println!("Running {} paired lookup trials...", config.trials);
    // Sampling RNG is derived from the corpus seed so the sampled-token
    // sequence is reproducible too.
    let mut rng = StdRng::seed_from_u64(config.seed ^ 0xBEEF);
    let result =
        run_trials(&store, &index, &tokens, config.trials, &mut rng).context("run benchmark")?;

    print_report(&result);
    Ok(())
}
