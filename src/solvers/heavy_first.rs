//! Heavy First: best-machine insertion in weight order.
//!
//! Jobs are taken heaviest first; each one is appended to whichever lane
//! charges the smallest marginal cost. Because incoming jobs never out-
//! weigh jobs already placed, appending at the end of a lane is that
//! lane's optimal slot, and the marginal cost is weight × (lane length + 1)
//! (evaluated through [`Lane::insertion_cost`] so no lane is recomputed).

use super::{Fit, Solver};
use crate::models::{decorate_sorted, Cost, Lane, Weight};
use crate::validation::{check_fitted, check_job_count, check_machine_count, SolveResult};

/// Per-job best-machine insertion, heaviest job first.
///
/// Sorts a decorated copy of the input inside `transform`; callers may
/// supply weights in any order.
#[derive(Debug, Clone, Default)]
pub struct HeavyFirst {
    fitted: Option<Fit>,
    lanes: Vec<Lane>,
}

impl HeavyFirst {
    /// Creates an unfitted solver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for HeavyFirst {
    fn name(&self) -> &'static str {
        "Heavy First"
    }

    fn fit(&mut self, jobs: usize, machines: usize) -> SolveResult<()> {
        check_machine_count(machines)?;
        self.fitted = Some(Fit { jobs, machines });
        self.lanes = vec![Lane::new(); machines];
        Ok(())
    }

    fn transform(&mut self, weights: &[Weight]) -> SolveResult<Cost> {
        let fit = check_fitted(self.fitted)?;
        check_job_count(fit.jobs, weights.len())?;

        for lane in &mut self.lanes {
            lane.clear();
        }

        for job in decorate_sorted(weights) {
            let mut best_index = 0;
            let mut best_delta = self.lanes[0].insertion_cost(job);
            for (index, lane) in self.lanes.iter().enumerate().skip(1) {
                let delta = lane.insertion_cost(job);
                // Strictly-less keeps the lowest machine index on ties.
                if delta < best_delta {
                    best_delta = delta;
                    best_index = index;
                }
            }
            self.lanes[best_index].insert(job);
        }

        Ok(self.lanes.iter().map(Lane::cost).sum())
    }

    fn description(&self) -> &'static str {
        "Sort decreasing, insert each job on its cheapest machine"
    }
}
