//! Lookahead: DP-assisted greedy with a bounded search window.
//!
//! Keeps a single live canonical state. For each job it expands the state
//! one step, then scores every candidate by running the sparse DP forward
//! through the next k−1 jobs from that candidate alone, and commits to the
//! candidate with the lowest projected cost. Depth k trades solution
//! quality against runtime; k = 1 degenerates to pure greedy extension,
//! while k ≥ n makes the projection exact.
//!
//! Shares the DP solvers' ordering precondition: weights must be
//! non-increasing.

use std::collections::HashMap;

use super::state::{self, State};
use super::{Fit, Solver};
use crate::models::{Cost, Weight};
use crate::validation::{
    check_fitted, check_job_count, check_lookahead_depth, check_machine_count,
    check_non_increasing, SolveResult,
};

/// Bounded-depth DP-assisted greedy.
#[derive(Debug, Clone)]
pub struct Lookahead {
    depth: usize,
    fitted: Option<Fit>,
}

impl Lookahead {
    /// Creates an unfitted solver looking ahead `depth` jobs (including
    /// the one being placed). Depth is validated at `fit`.
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            fitted: None,
        }
    }

    /// Configured lookahead depth.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Solver for Lookahead {
    fn name(&self) -> &'static str {
        "Lookahead"
    }

    fn fit(&mut self, jobs: usize, machines: usize) -> SolveResult<()> {
        check_machine_count(machines)?;
        check_lookahead_depth(self.depth)?;
        self.fitted = Some(Fit { jobs, machines });
        Ok(())
    }

    fn transform(&mut self, weights: &[Weight]) -> SolveResult<Cost> {
        let fit = check_fitted(self.fitted)?;
        check_job_count(fit.jobs, weights.len())?;
        check_non_increasing(weights)?;

        let mut current: State = state::root(fit.machines);
        let mut cost: Cost = 0;

        for (i, &weight) in weights.iter().enumerate() {
            let window = &weights[i + 1..(i + self.depth).min(weights.len())];

            // Candidates come out in machine order, so the first strict
            // minimum deterministically prefers the lower coordinate.
            let mut best: Option<(Cost, State, Cost)> = None;
            for (candidate, position) in state::extensions(&current) {
                let committed = cost + Cost::from(position) * weight;

                let mut layer: HashMap<State, Cost> =
                    HashMap::from([(candidate.clone(), committed)]);
                for &future in window {
                    layer = state::expand_layer(&layer, future);
                }
                let projected = layer.values().copied().min().unwrap_or(committed);

                if best.as_ref().is_none_or(|(b, _, _)| projected < *b) {
                    best = Some((projected, candidate, committed));
                }
            }

            let (_, next_state, next_cost) =
                best.expect("a canonical state always has at least one extension");
            current = next_state;
            cost = next_cost;
        }

        Ok(cost)
    }

    fn description(&self) -> &'static str {
        "Greedy with DP-based lookahead window"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::SparseDp;
    use crate::validation::SolveErrorKind;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_two_machines() {
        // Depth 2 already separates [3,2,1] optimally: 7.
        assert_eq!(Lookahead::new(2).fit_transform(2, &[3, 2, 1]).unwrap(), 7);
    }

    #[test]
    fn test_single_machine_closed_form() {
        assert_eq!(Lookahead::new(3).fit_transform(1, &[4, 3, 1]).unwrap(), 13);
    }

    #[test]
    fn test_zero_depth_rejected() {
        let err = Lookahead::new(0).fit(3, 2).unwrap_err();
        assert_eq!(err.kind, SolveErrorKind::InvalidLookaheadDepth);
    }

    #[test]
    fn test_unsorted_input_rejected() {
        let err = Lookahead::new(2).fit_transform(2, &[1, 3, 2]).unwrap_err();
        assert_eq!(err.kind, SolveErrorKind::UnsortedWeights);
    }

    #[test]
    fn test_zero_jobs() {
        assert_eq!(Lookahead::new(4).fit_transform(2, &[]).unwrap(), 0);
    }

    #[test]
    fn test_full_depth_matches_exact() {
        // With k ≥ n every projection is the exact completion cost, so the
        // committed path is optimal.
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..20 {
            let jobs = rng.random_range(0..=8);
            let machines = rng.random_range(1..=3);
            let mut weights: Vec<Weight> =
                (0..jobs).map(|_| rng.random_range(1..40)).collect();
            weights.sort_unstable_by(|a, b| b.cmp(a));

            let exact = SparseDp::new().fit_transform(machines, &weights).unwrap();
            let full = Lookahead::new(weights.len().max(1))
                .fit_transform(machines, &weights)
                .unwrap();
            assert_eq!(full, exact, "weights {weights:?}, {machines} machines");
        }
    }

    #[test]
    fn test_every_depth_stays_above_optimum() {
        let weights = [9, 8, 6, 5, 5, 3, 2, 1];
        let exact = SparseDp::new().fit_transform(3, &weights).unwrap();
        for depth in 1..=weights.len() {
            let total = Lookahead::new(depth).fit_transform(3, &weights).unwrap();
            assert!(total >= exact, "depth {depth}");
        }
    }

    #[test]
    fn test_depth_accessor() {
        assert_eq!(Lookahead::new(5).depth(), 5);
    }
}
