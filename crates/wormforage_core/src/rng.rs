//! Seeded random sources.
//!
//! A run owns exactly one generator. Batch drivers derive a fresh one per run
//! so that parallel runs never share a stream.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Large odd constant spreading consecutive run indices across the seed space.
const RUN_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic generator for a single run.
#[must_use]
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generator for run `run_index` of a batch seeded with `base_seed`.
#[must_use]
pub fn derive_run_rng(base_seed: u64, run_index: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(base_seed.wrapping_add(run_index.wrapping_mul(RUN_SEED_STRIDE)))
}
