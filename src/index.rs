//! In-memory index: a hash-set snapshot of the persisted corpus.

use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Membership index built once from the store's full token snapshot and
/// never mutated afterwards. Holds the whole corpus in memory; the footprint
/// scales linearly with corpus size.
pub struct TokenIndex {
    set: HashSet<String>,
}

impl TokenIndex {
    /// Build from the token snapshot. O(n), paid once outside the timed
    /// benchmark loop.
    pub fn build<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            set: tokens.into_iter().collect(),
        }
    }

    /// Single containment check with its own timing. Absence is a normal
    /// `false`, not a failure.
    pub fn lookup(&self, token: &str) -> (bool, Duration) {
        let start = Instant::now();
        let found = self.set.contains(token);
        (found, start.elapsed())
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}
