//! Sort & Split: static partition of the sorted weight list.
//!
//! Sort descending, cut into m contiguous chunks whose sizes differ by at
//! most one (the first n mod m chunks take the extra job), give chunk i to
//! machine i. Non-adaptive (the partition ignores the weights beyond
//! their order), which makes it a fast O(n log n) baseline. Within a
//! machine a chunk would be re-sorted by original index for presentation
//! only; the cost is computed on the chunk as received, already in
//! completion order.

use super::{Fit, Solver};
use crate::models::{decorate_sorted, sequence_cost, Cost, Weight};
use crate::validation::{check_fitted, check_job_count, check_machine_count, SolveResult};

/// Static sorted partition into as-equal-as-possible chunks.
#[derive(Debug, Clone, Default)]
pub struct SortAndSplit {
    fitted: Option<Fit>,
}

impl SortAndSplit {
    /// Creates an unfitted solver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for SortAndSplit {
    fn name(&self) -> &'static str {
        "Sort & Split"
    }

    fn fit(&mut self, jobs: usize, machines: usize) -> SolveResult<()> {
        check_machine_count(machines)?;
        self.fitted = Some(Fit { jobs, machines });
        Ok(())
    }

    fn transform(&mut self, weights: &[Weight]) -> SolveResult<Cost> {
        let fit = check_fitted(self.fitted)?;
        check_job_count(fit.jobs, weights.len())?;

        let jobs = decorate_sorted(weights);
        let base = jobs.len() / fit.machines;
        let extra = jobs.len() % fit.machines;

        let mut total = 0;
        let mut start = 0;
        for machine in 0..fit.machines {
            let size = base + usize::from(machine < extra);
            let chunk = &jobs[start..start + size];
            total += sequence_cost(chunk.iter().map(|job| job.weight));
            start += size;
        }

        Ok(total)
    }

    fn description(&self) -> &'static str {
        "Sort decreasing, split into equal contiguous chunks"
    }
}
