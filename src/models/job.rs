//! Job model and the shared sequence cost function.
//!
//! All solvers agree on one cost semantics: for a single machine running
//! jobs of unit processing time, the completion time of the job at position
//! i (1-indexed) is i, so the machine's contribution to the objective is
//! Σ position·weight. The order minimizing that sum is non-increasing
//! weight.
//!
//! # Reference
//! Smith (1956), "Various optimizers for single-stage production",
//! weighted-shortest-processing-time rule, specialized to unit times.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Job weight. Also the domain of total costs.
pub type Weight = u64;

/// Total weighted completion time.
///
/// Costs are sums of weight × position products; the arithmetic assumes
/// n² · max(weight) fits in 64 bits. Inputs beyond that bound are out of
/// contract.
pub type Cost = u64;

/// A job: its position in the caller's weight list plus its weight.
///
/// The original index only serves as a stable tie-breaker when two jobs
/// share a weight; it never influences cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Position in the caller's original weight list.
    pub index: usize,
    /// Weight (unit processing time assumed).
    pub weight: Weight,
}

impl Job {
    /// Creates a job from its original index and weight.
    pub fn new(index: usize, weight: Weight) -> Self {
        Self { index, weight }
    }

    /// Completion-order comparison: heavier jobs first, ties by ascending
    /// original index.
    pub fn completion_order(&self, other: &Job) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then(self.index.cmp(&other.index))
    }
}

/// Decorates a weight list with original indices and sorts it into
/// completion order (non-increasing weight, stable on ties).
pub fn decorate_sorted(weights: &[Weight]) -> Vec<Job> {
    let mut jobs: Vec<Job> = weights
        .iter()
        .enumerate()
        .map(|(index, &weight)| Job::new(index, weight))
        .collect();
    jobs.sort_by(Job::completion_order);
    jobs
}

/// Total weighted completion time of a sequence already in completion
/// order: Σ (i+1)·wᵢ with 0-indexed positions. O(k).
pub fn sequence_cost<I>(weights: I) -> Cost
where
    I: IntoIterator<Item = Weight>,
{
    weights
        .into_iter()
        .enumerate()
        .map(|(i, w)| (i as Cost + 1) * w)
        .sum()
}
