//! Weight-list generators for benchmark instances.
//!
//! A catalogue of instance shapes used to probe the solvers: monotone
//! ramps, uniform noise at several magnitudes and spans, and half/half
//! mixtures. Random generators are seeded for reproducibility;
//! deterministic ones ignore the seed.
//!
//! Generators only produce inputs; feeding each solver in the order its
//! contract requires remains the caller's job.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::Weight;

/// Weights 1, 2, …, n.
pub fn increasing(n: usize) -> Vec<Weight> {
    (1..=n as Weight).collect()
}

/// Weights n, n−1, …, 1.
pub fn decreasing(n: usize) -> Vec<Weight> {
    (1..=n as Weight).rev().collect()
}

/// Uniform weights in 1..100.
pub fn small_random(n: usize, seed: u64) -> Vec<Weight> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(1..100)).collect()
}

/// Small-span weights shifted far from zero: small_random + 100 000.
pub fn small_span_large(n: usize, seed: u64) -> Vec<Weight> {
    small_random(n, seed)
        .into_iter()
        .map(|w| w + 100_000)
        .collect()
}

/// Uniform weights in 10 000..1 000 000.
pub fn large_span_large(n: usize, seed: u64) -> Vec<Weight> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(10_000..1_000_000)).collect()
}

/// Random low weights in the first half, the second half shifted +900.
pub fn low_then_high(n: usize, seed: u64) -> Vec<Weight> {
    let mut weights = small_random(n, seed);
    for w in &mut weights[n / 2..] {
        *w += 900;
    }
    weights
}

/// Reverse of [`low_then_high`]: the high half first.
pub fn high_then_low(n: usize, seed: u64) -> Vec<Weight> {
    let mut weights = low_then_high(n, seed);
    weights.reverse();
    weights
}

/// Uniform weights in 1..100 000, sorted ascending.
pub fn large_span_random_increasing(n: usize, seed: u64) -> Vec<Weight> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut weights: Vec<Weight> = (0..n).map(|_| rng.random_range(1..100_000)).collect();
    weights.sort_unstable();
    weights
}

/// Uniform weights in 1..100 000, sorted descending.
pub fn large_span_random_decreasing(n: usize, seed: u64) -> Vec<Weight> {
    let mut weights = large_span_random_increasing(n, seed);
    weights.reverse();
    weights
}

/// A named catalogue entry.
#[derive(Debug, Clone)]
pub struct WeightGenerator {
    name: &'static str,
    random: bool,
    generate: fn(usize, u64) -> Vec<Weight>,
}

impl WeightGenerator {
    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the generator depends on the seed.
    pub fn is_random(&self) -> bool {
        self.random
    }

    /// Generates one weight list. Deterministic generators ignore `seed`.
    pub fn generate(&self, n: usize, seed: u64) -> Vec<Weight> {
        (self.generate)(n, seed)
    }

    /// Generates one list per seed, or a single list for deterministic
    /// generators, which would repeat themselves.
    pub fn generate_seeded(&self, n: usize, seeds: &[u64]) -> Vec<Vec<Weight>> {
        if !self.random {
            return vec![(self.generate)(n, 0)];
        }
        seeds.iter().map(|&seed| (self.generate)(n, seed)).collect()
    }
}

fn increasing_seeded(n: usize, _seed: u64) -> Vec<Weight> {
    increasing(n)
}

fn decreasing_seeded(n: usize, _seed: u64) -> Vec<Weight> {
    decreasing(n)
}

/// The full generator catalogue.
pub fn catalog() -> Vec<WeightGenerator> {
    vec![
        WeightGenerator {
            name: "+1 Increasing Weights",
            random: false,
            generate: increasing_seeded,
        },
        WeightGenerator {
            name: "-1 Decreasing Weights",
            random: false,
            generate: decreasing_seeded,
        },
        WeightGenerator {
            name: "Small Random Weights",
            random: true,
            generate: small_random,
        },
        WeightGenerator {
            name: "Small Span Large Weights",
            random: true,
            generate: small_span_large,
        },
        WeightGenerator {
            name: "Large Span Large Weights",
            random: true,
            generate: large_span_large,
        },
        WeightGenerator {
            name: "Random Half Low, then Half High Weights",
            random: true,
            generate: low_then_high,
        },
        WeightGenerator {
            name: "Random Half High, then Half Low Weights",
            random: true,
            generate: high_then_low,
        },
        WeightGenerator {
            name: "Increasingly Sorted Large Span Random Weights",
            random: true,
            generate: large_span_random_increasing,
        },
        WeightGenerator {
            name: "Decreasingly Sorted Large Span Random Weights",
            random: true,
            generate: large_span_random_decreasing,
        },
    ]
}
