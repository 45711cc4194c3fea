//! Token generation: fixed-length random alphanumeric identifiers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The 62-character alphabet tokens are drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default token length, matching the reference workload.
pub const DEFAULT_TOKEN_LENGTH: usize = 16;

/// Deterministic token source.
///
/// Characters are drawn uniformly and independently, so uniqueness across a
/// corpus is probabilistic, not enforced here. The store's primary key is
/// what catches the (statistically rare) collision.
pub struct TokenGenerator {
    rng: StdRng,
    length: usize,
}

impl TokenGenerator {
    pub fn new(seed: u64, length: usize) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            length,
        }
    }

    /// Produce one token of the configured length.
    pub fn next_token(&mut self) -> String {
        (0..self.length)
            .map(|_| ALPHABET[self.rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }

    pub fn length(&self) -> usize {
        self.length
    }
}
