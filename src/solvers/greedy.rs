//! Priority-queue greedy solvers.
//!
//! Each incoming job, in caller order, goes to the machine whose next
//! position is cheapest right now. Machines live in a min-heap keyed by
//! (accumulated cost, job count, machine index); the index makes
//! tie-breaking deterministic: equal costs resolve to the smaller count,
//! then the lower machine index. O(n log m).
//!
//! [`Greedy`] and [`LeastLoaded`] are the family's two interchangeable
//! instantiations of the same machine-queue core; they produce identical
//! results and exist so callers can benchmark both labels side by side.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{Fit, Solver};
use crate::models::{Cost, Weight};
use crate::validation::{check_fitted, check_job_count, check_machine_count, SolveResult};

/// Min-heap of per-machine (accumulated cost, job count, index) entries,
/// rebuilt from the fitted machine count on every run.
#[derive(Debug, Clone, Copy, Default)]
struct MachineQueue {
    fitted: Option<Fit>,
}

impl MachineQueue {
    fn fit(&mut self, jobs: usize, machines: usize) -> SolveResult<()> {
        check_machine_count(machines)?;
        self.fitted = Some(Fit { jobs, machines });
        Ok(())
    }

    fn run(&self, weights: &[Weight]) -> SolveResult<Cost> {
        let fit = check_fitted(self.fitted)?;
        check_job_count(fit.jobs, weights.len())?;

        let mut queue: BinaryHeap<Reverse<(Cost, u32, u32)>> = (0..fit.machines)
            .map(|machine| Reverse((0, 0, machine as u32)))
            .collect();

        for &weight in weights {
            let Reverse((cost, count, machine)) = queue
                .pop()
                .expect("machine queue always holds one entry per machine");
            let position = count + 1;
            queue.push(Reverse((cost + Cost::from(position) * weight, position, machine)));
        }

        Ok(queue.into_iter().map(|Reverse((cost, _, _))| cost).sum())
    }
}

/// Greedy assignment to the machine with the cheapest next increment.
///
/// A heuristic, not exact: each job takes the locally best slot, so the
/// total is always ≥ the exact DP's result.
#[derive(Debug, Clone, Default)]
pub struct Greedy {
    queue: MachineQueue,
}

impl Greedy {
    /// Creates an unfitted solver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for Greedy {
    fn name(&self) -> &'static str {
        "Greedy"
    }

    fn fit(&mut self, jobs: usize, machines: usize) -> SolveResult<()> {
        self.queue.fit(jobs, machines)
    }

    fn transform(&mut self, weights: &[Weight]) -> SolveResult<Cost> {
        self.queue.run(weights)
    }

    fn description(&self) -> &'static str {
        "Priority-queue greedy, cheapest next increment"
    }
}

/// Least-loaded assignment: the second instantiation of the machine queue.
#[derive(Debug, Clone, Default)]
pub struct LeastLoaded {
    queue: MachineQueue,
}

impl LeastLoaded {
    /// Creates an unfitted solver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for LeastLoaded {
    fn name(&self) -> &'static str {
        "Least Loaded"
    }

    fn fit(&mut self, jobs: usize, machines: usize) -> SolveResult<()> {
        self.queue.fit(jobs, machines)
    }

    fn transform(&mut self, weights: &[Weight]) -> SolveResult<Cost> {
        self.queue.run(weights)
    }

    fn description(&self) -> &'static str {
        "Priority-queue greedy, least accumulated cost first"
    }
}
