//! Criterion benchmark harness: measures the two lookup paths head-to-head
//! at multiple corpus sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use token_bench::index::TokenIndex;
use token_bench::store::TokenStore;
use token_bench::token::{TokenGenerator, DEFAULT_TOKEN_LENGTH};

const SEED: u64 = 0x70AD_5EED_CAFE_1042;

/// Corpus sizes to benchmark.
fn corpus_sizes() -> Vec<usize> {
    vec![10_000, 100_000]
}

/// Create a store, populate it, and return it with its token snapshot.
fn setup_store(size: usize) -> (TokenStore, Vec<String>) {
    let mut store = TokenStore::open_in_memory().expect("open in-memory store");
    store.initialize().expect("initialize schema");

    let mut generator = TokenGenerator::new(SEED, DEFAULT_TOKEN_LENGTH);
    store.repopulate(size, &mut generator).expect("repopulate");

    let tokens = store.load_all_tokens().expect("load tokens");
    (store, tokens)
}

fn bench_point_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_lookup");
    group.sample_size(50);

    for size in corpus_sizes() {
        let (store, tokens) = setup_store(size);
        let index = TokenIndex::build(tokens.iter().cloned());
        let mut rng = StdRng::seed_from_u64(SEED ^ 0xBEEF);

        group.bench_with_input(BenchmarkId::new("sqlite", size), &size, |b, _| {
            b.iter(|| {
                let token = &tokens[rng.gen_range(0..tokens.len())];
                store.lookup(token).expect("store lookup")
            })
        });

        group.bench_with_input(BenchmarkId::new("hash_set", size), &size, |b, _| {
            b.iter(|| {
                let token = &tokens[rng.gen_range(0..tokens.len())];
                index.lookup(token)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_point_lookup);
criterion_main!(benches);
