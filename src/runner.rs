//! Benchmark runner: paired lookups against both backends.

use crate::error::{BenchError, Result};
use crate::index::TokenIndex;
use crate::report::BenchResult;
use crate::store::TokenStore;
use rand::rngs::StdRng;
use rand::Rng;

/// Run `trial_count` paired lookups.
///
/// Each trial samples one token uniformly from `tokens` and measures the
/// store lookup first, then the index lookup for the same token. The
/// store-then-index ordering is fixed; reference numbers were taken with
/// this ordering, so do not randomize it.
///
/// Fails fast with [`BenchError::EmptyCorpus`] when the sample list is
/// empty. `trial_count = 0` is valid and yields an empty (all-zero) result.
pub fn run_trials(
    store: &TokenStore,
    index: &TokenIndex,
    tokens: &[String],
    trial_count: usize,
    rng: &mut StdRng,
) -> Result<BenchResult> {
    run_trials_observed(store, index, tokens, trial_count, rng, |_| {})
}

/// [`run_trials`] with a per-trial hook receiving each sampled token, so the
/// sampled sequence itself is observable. The hook runs outside both timing
/// brackets.
pub fn run_trials_observed(
    store: &TokenStore,
    index: &TokenIndex,
    tokens: &[String],
    trial_count: usize,
    rng: &mut StdRng,
    mut observe: impl FnMut(&str),
) -> Result<BenchResult> {
    if tokens.is_empty() {
        return Err(BenchError::EmptyCorpus);
    }

    let mut result = BenchResult::new(tokens.len());
    for _ in 0..trial_count {
        let token = &tokens[rng.gen_range(0..tokens.len())];
        observe(token);
        let (_, store_elapsed) = store.lookup(token)?;
        let (_, index_elapsed) = index.lookup(token);
        result.add_trial(store_elapsed, index_elapsed);
    }
    Ok(result)
}
