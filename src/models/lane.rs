//! Lane (machine) model.
//!
//! A lane is the ordered set of jobs assigned to one machine. It keeps its
//! jobs in completion order (non-increasing weight, ties by original index)
//! and maintains its total weighted completion time incrementally, so
//! insertion-heavy heuristics never recompute a whole sequence to learn the
//! marginal effect of one more job.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{Cost, Job};

/// Jobs assigned to one machine, kept in completion order.
///
/// The cost of a lane is a pure function of its job multiset: the optimal
/// internal order of a fixed job set on one machine is non-increasing
/// weight, and the lane maintains exactly that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lane {
    jobs: Vec<Job>,
    cost: Cost,
}

impl Lane {
    /// Creates an empty lane.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of jobs on this lane.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the lane holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Jobs in completion order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Total weighted completion time of this lane.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Removes all jobs and resets the cost.
    pub fn clear(&mut self) {
        self.jobs.clear();
        self.cost = 0;
    }

    /// Marginal cost of inserting `job` at its completion-order position p
    /// (0-indexed): the job itself completes at position p+1, and every job
    /// after it shifts one position later, adding its own weight once.
    ///
    /// Δ = w·(p+1) + Σ weights after p. O(k), no full recompute.
    pub fn insertion_cost(&self, job: Job) -> Cost {
        let p = self.insertion_point(&job);
        let suffix: Cost = self.jobs[p..].iter().map(|j| j.weight).sum();
        job.weight * (p as Cost + 1) + suffix
    }

    /// Inserts `job` at its completion-order position and updates the lane
    /// cost incrementally. Returns the marginal cost of the insertion.
    pub fn insert(&mut self, job: Job) -> Cost {
        let p = self.insertion_point(&job);
        let suffix: Cost = self.jobs[p..].iter().map(|j| j.weight).sum();
        let delta = job.weight * (p as Cost + 1) + suffix;
        self.jobs.insert(p, job);
        self.cost += delta;
        delta
    }

    fn insertion_point(&self, job: &Job) -> usize {
        self.jobs
            .partition_point(|j| j.completion_order(job) == Ordering::Less)
    }
}
