//! Shared helpers for deterministic tests.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::raffle::POOL_SIZE;

/// Reproducible generator for tests that exercise randomized behavior.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A full set of distinct ticket names.
pub fn sample_names() -> Vec<String> {
    (1..=POOL_SIZE).map(|n| format!("Nome {:02}", n)).collect()
}
