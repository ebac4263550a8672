//! Solver family for the parallel-machine weighted completion time problem.
//!
//! All solvers implement the shared [`Solver`] capability interface and
//! agree on one cost semantics (see [`crate::models`]). The family is a
//! closed set, selected by the caller:
//!
//! - **Exact**: [`DenseDp`], [`SparseDp`], symmetry-reduced state-space
//!   dynamic programming, optimal but exponential in the worst case.
//! - **Greedy**: [`Greedy`], [`LeastLoaded`], priority-queue assignment,
//!   O(n log m).
//! - **Insertion heuristics**: [`HeavyFirst`], [`SortAndSplit`],
//!   [`BalancedSequentialInsert`], [`BalancedSequentialInsertPp`].
//! - **Lookahead**: [`Lookahead`], a DP-assisted greedy with a bounded
//!   search window.
//!
//! # Input Contracts
//!
//! [`Greedy`] and [`LeastLoaded`] consume weights in caller order. The DP
//! solvers and [`Lookahead`] require non-increasing weights and reject
//! unsorted input. The remaining heuristics sort internally and accept any
//! order.
//!
//! # References
//!
//! - Smith (1956), weighted-shortest-processing-time rule
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod balanced;
mod exact;
mod greedy;
mod heavy_first;
mod lookahead;
mod sort_and_split;
mod state;

pub use balanced::{BalancedSequentialInsert, BalancedSequentialInsertPp};
pub use exact::{DenseDp, SparseDp};
pub use greedy::{Greedy, LeastLoaded};
pub use heavy_first::HeavyFirst;
pub use lookahead::Lookahead;
pub use sort_and_split::SortAndSplit;

use crate::models::{Cost, Weight};
use crate::validation::SolveResult;

/// Dimensions captured by `fit`, shared by the solver implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fit {
    pub jobs: usize,
    pub machines: usize,
}

/// A solver for one problem instance.
///
/// `fit` sizes and allocates internal state for a run; `transform` consumes
/// the weight list and returns the total weighted completion time. Internal
/// containers are rebuilt on every `transform`, so a fitted solver may be
/// reused across weight lists of the fitted length, but one instance must
/// never run two solves concurrently.
///
/// # Example
/// ```
/// use pm_sched::solvers::{Greedy, Solver};
///
/// let mut solver = Greedy::new();
/// assert_eq!(solver.fit_transform(2, &[3, 2, 1]).unwrap(), 7);
/// ```
pub trait Solver {
    /// Solver name (e.g., "Sparse DP", "Heavy First").
    fn name(&self) -> &'static str;

    /// Allocates internal state for `jobs` jobs on `machines` machines.
    fn fit(&mut self, jobs: usize, machines: usize) -> SolveResult<()>;

    /// Computes the total weighted completion time for the weight list.
    ///
    /// The list length must match the fitted job count. Ordering
    /// requirements are per-solver; see the module docs.
    fn transform(&mut self, weights: &[Weight]) -> SolveResult<Cost>;

    /// Fits for the weight list's length and transforms it.
    fn fit_transform(&mut self, machines: usize, weights: &[Weight]) -> SolveResult<Cost> {
        self.fit(weights.len(), machines)?;
        self.transform(weights)
    }

    /// Solver description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sequence_cost;
    use crate::validation::SolveErrorKind;

    /// Every solver in the family, on fresh state.
    fn family() -> Vec<Box<dyn Solver>> {
        vec![
            Box::new(DenseDp::new()),
            Box::new(SparseDp::new()),
            Box::new(Greedy::new()),
            Box::new(LeastLoaded::new()),
            Box::new(HeavyFirst::new()),
            Box::new(SortAndSplit::new()),
            Box::new(BalancedSequentialInsert::new()),
            Box::new(BalancedSequentialInsertPp::new()),
            Box::new(Lookahead::new(3)),
        ]
    }

    #[test]
    fn test_zero_machines_rejected_by_all() {
        for mut solver in family() {
            let err = solver.fit(3, 0).unwrap_err();
            assert_eq!(
                err.kind,
                SolveErrorKind::InvalidMachineCount,
                "{} accepted zero machines",
                solver.name()
            );
        }
    }

    #[test]
    fn test_transform_before_fit_rejected_by_all() {
        for mut solver in family() {
            let err = solver.transform(&[3, 2, 1]).unwrap_err();
            assert_eq!(err.kind, SolveErrorKind::NotFitted, "{}", solver.name());
        }
    }

    #[test]
    fn test_job_count_mismatch_rejected_by_all() {
        for mut solver in family() {
            solver.fit(4, 2).unwrap();
            let err = solver.transform(&[3, 2, 1]).unwrap_err();
            assert_eq!(
                err.kind,
                SolveErrorKind::JobCountMismatch,
                "{}",
                solver.name()
            );
        }
    }

    #[test]
    fn test_zero_jobs_cost_zero_for_all() {
        for mut solver in family() {
            assert_eq!(solver.fit_transform(3, &[]).unwrap(), 0, "{}", solver.name());
        }
    }

    #[test]
    fn test_single_machine_closed_form_for_all() {
        // m = 1: every algorithm must produce Σ i·wᵢ over descending weights.
        let weights = [9, 7, 7, 4, 2, 1];
        let expected = sequence_cost(weights);
        for mut solver in family() {
            assert_eq!(
                solver.fit_transform(1, &weights).unwrap(),
                expected,
                "{}",
                solver.name()
            );
        }
    }

    #[test]
    fn test_scenario_three_jobs_two_machines() {
        // [3,2,1] on 2 machines: optimum is 7 and every heuristic in the
        // family happens to reach it on this instance.
        for mut solver in family() {
            let total = solver.fit_transform(2, &[3, 2, 1]).unwrap();
            assert!(total >= 7, "{} undercut the optimum", solver.name());
        }
        let mut exact = SparseDp::new();
        assert_eq!(exact.fit_transform(2, &[3, 2, 1]).unwrap(), 7);
    }

    #[test]
    fn test_scenario_equal_weights() {
        // [5,5,5,5] on 2 machines: two jobs per machine, 15 + 15 = 30.
        let mut exact = DenseDp::new();
        assert_eq!(exact.fit_transform(2, &[5, 5, 5, 5]).unwrap(), 30);
        for mut solver in family() {
            let total = solver.fit_transform(2, &[5, 5, 5, 5]).unwrap();
            assert!(total >= 30, "{}", solver.name());
        }
    }

    #[test]
    fn test_heuristics_never_beat_the_optimum() {
        let cases: [(&[Weight], usize); 4] = [
            (&[9, 8, 6, 5, 5, 3, 2, 1], 3),
            (&[10, 10, 10, 1, 1, 1], 2),
            (&[100, 1, 1, 1, 1], 4),
            (&[6, 5, 4, 3, 2, 1], 2),
        ];
        for (weights, machines) in cases {
            let optimal = SparseDp::new().fit_transform(machines, weights).unwrap();
            for mut solver in family() {
                let total = solver.fit_transform(machines, weights).unwrap();
                assert!(
                    total >= optimal,
                    "{} returned {total} below optimum {optimal}",
                    solver.name()
                );
            }
        }
    }

    #[test]
    fn test_more_machines_than_jobs_is_sum_of_weights() {
        // m ≥ n: each job runs alone at position 1.
        let weights = [8, 4, 2];
        let sum: Cost = weights.iter().sum();
        let mut dense = DenseDp::new();
        let mut sparse = SparseDp::new();
        assert_eq!(dense.fit_transform(5, &weights).unwrap(), sum);
        assert_eq!(sparse.fit_transform(5, &weights).unwrap(), sum);
    }

    #[test]
    fn test_determinism_across_fresh_instances() {
        let weights = [9, 7, 5, 5, 4, 2, 2, 1];
        for (first, second) in family().into_iter().zip(family()) {
            let mut first = first;
            let mut second = second;
            assert_eq!(
                first.fit_transform(3, &weights).unwrap(),
                second.fit_transform(3, &weights).unwrap(),
                "{}",
                first.name()
            );
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<&str> = family().iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }
}
