// ABOUTME: Injectable random source for scoring jitter and bounded swap choices
// ABOUTME: Thread, seeded ChaCha, and constant implementations of a single next_float capability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform floats in `[0, 1)`
///
/// Scoring is deliberately impure; everything random flows through this trait
/// so tests can pin exact scores.
pub trait RandomSource {
    /// Next uniform float in `[0, 1)`
    fn next_float(&mut self) -> f64;

    /// Uniform index in `0..len`, `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        let index = (self.next_float() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }
}

/// Operating-system seeded thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_float(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible generator for a given seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Create a generator from a seed
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_float(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always returns the same value, clamped into `[0, 1)`
#[derive(Debug, Clone, Copy)]
pub struct ConstantRandom(f64);

impl ConstantRandom {
    /// Create a constant source
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0 - f64::EPSILON))
    }

    /// A source that always yields zero, removing all jitter
    #[must_use]
    pub const fn zero() -> Self {
        Self(0.0)
    }
}

impl RandomSource for ConstantRandom {
    fn next_float(&mut self) -> f64 {
        self.0
    }
}
