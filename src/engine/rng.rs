//! Deterministic random number generation.
//!
//! PCG-backed RNG in the same spirit as a simulation engine: given the
//! same master seed, the O(1) probe indices and O(log n) search targets
//! are identical across runs and platforms. Each demo derives its own
//! stream from the master seed so the demos stay independent.

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoRng {
    /// Master seed for reproducibility.
    seed: u64,
    /// Stream index this generator was derived with.
    stream: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl DemoRng {
    /// Create a new RNG seeded directly from the master seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_stream(seed, 0)
    }

    /// Derive an independent stream from the master seed.
    ///
    /// Streams are decorrelated by mixing the stream index with a
    /// golden-ratio constant before seeding.
    #[must_use]
    pub fn with_stream(seed: u64, stream: u64) -> Self {
        let mixed = seed.wrapping_add(stream.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            seed,
            stream,
            rng: Pcg64::seed_from_u64(mixed),
        }
    }

    /// Get the master seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the stream index.
    #[must_use]
    pub const fn stream(&self) -> u64 {
        self.stream
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate a uniform index in [0, n).
    ///
    /// Returns 0 for an empty range.
    pub fn gen_index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}
