//! Exact dynamic-programming solvers.
//!
//! Both variants explore the full canonicalized state space of per-machine
//! job counts (see [`super::state`]) and return the minimum achievable
//! total weighted completion time. They differ only in cost-table storage:
//!
//! - [`DenseDp`]: a fixed multidimensional array covering every canonical
//!   state, O(state-space) memory regardless of how many states are live.
//! - [`SparseDp`]: a map holding live states only.
//!
//! The two must agree exactly on every input.
//!
//! # Ordering Precondition
//!
//! Weights must arrive in non-increasing order: the transition cost
//! position × weight prices the job placed at a machine's next position,
//! which is only the optimal per-machine order when heavier jobs are placed
//! first. Unsorted input is rejected, never re-sorted.

use std::collections::{HashMap, HashSet};

use super::state::{self, State};
use super::{Fit, Solver};
use crate::models::{Cost, Weight};
use crate::validation::{
    check_fitted, check_job_count, check_machine_count, check_non_increasing, SolveResult,
};

/// Cell value for states no transition has reached yet. Compared against,
/// never fed into cost arithmetic: transitions read only frontier states,
/// which are reached by construction.
const UNREACHED: Cost = Cost::MAX;

/// Exact DP over a dense multidimensional cost table.
///
/// Rank r (1-based) of a canonical state can hold at most ⌊n/r⌋ jobs, so
/// the table allocates ⌊n/r⌋ + 1 cells per rank and flattens them with
/// precomputed strides. Memory does not depend on how many states are
/// actually reachable; prefer [`SparseDp`] when n/m is large.
#[derive(Debug, Clone, Default)]
pub struct DenseDp {
    table: Option<DenseTable>,
}

impl DenseDp {
    /// Creates an unfitted solver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for DenseDp {
    fn name(&self) -> &'static str {
        "Dense DP"
    }

    fn fit(&mut self, jobs: usize, machines: usize) -> SolveResult<()> {
        check_machine_count(machines)?;
        self.table = Some(DenseTable::new(jobs, machines));
        Ok(())
    }

    fn transform(&mut self, weights: &[Weight]) -> SolveResult<Cost> {
        let table = check_fitted(self.table.as_mut())?;
        check_job_count(table.fit.jobs, weights.len())?;
        check_non_increasing(weights)?;

        table.reset();
        let origin = state::root(table.fit.machines);
        table.relax(&origin, 0);

        let mut frontier: Vec<State> = vec![origin];
        for &weight in weights {
            let mut next: HashSet<State> = HashSet::with_capacity(frontier.len() * 2);
            for current in &frontier {
                let base = table.get(current);
                debug_assert_ne!(base, UNREACHED);
                for (successor, position) in state::extensions(current) {
                    table.relax(&successor, base + Cost::from(position) * weight);
                    next.insert(successor);
                }
            }
            frontier = next.into_iter().collect();
        }

        Ok(frontier
            .iter()
            .map(|terminal| table.get(terminal))
            .min()
            .unwrap_or(0))
    }

    fn description(&self) -> &'static str {
        "Exact DP, dense-array cost table"
    }
}

/// Exact DP over a sparse cost table: live states only.
#[derive(Debug, Clone, Default)]
pub struct SparseDp {
    fitted: Option<Fit>,
}

impl SparseDp {
    /// Creates an unfitted solver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for SparseDp {
    fn name(&self) -> &'static str {
        "Sparse DP"
    }

    fn fit(&mut self, jobs: usize, machines: usize) -> SolveResult<()> {
        check_machine_count(machines)?;
        self.fitted = Some(Fit { jobs, machines });
        Ok(())
    }

    fn transform(&mut self, weights: &[Weight]) -> SolveResult<Cost> {
        let fit = check_fitted(self.fitted)?;
        check_job_count(fit.jobs, weights.len())?;
        check_non_increasing(weights)?;

        let mut layer: HashMap<State, Cost> = HashMap::from([(state::root(fit.machines), 0)]);
        for &weight in weights {
            layer = state::expand_layer(&layer, weight);
        }

        Ok(layer.values().copied().min().unwrap_or(0))
    }

    fn description(&self) -> &'static str {
        "Exact DP, sparse-map cost table"
    }
}

/// Flattened multidimensional cost table with one cell per canonical state.
#[derive(Debug, Clone)]
struct DenseTable {
    fit: Fit,
    strides: Vec<usize>,
    cells: Vec<Cost>,
}

impl DenseTable {
    fn new(jobs: usize, machines: usize) -> Self {
        let dims: Vec<usize> = (1..=machines).map(|rank| jobs / rank + 1).collect();
        let mut strides = vec![0; machines];
        let mut stride = 1;
        for j in (0..machines).rev() {
            strides[j] = stride;
            stride *= dims[j];
        }
        Self {
            fit: Fit { jobs, machines },
            strides,
            cells: vec![UNREACHED; stride],
        }
    }

    fn reset(&mut self) {
        self.cells.fill(UNREACHED);
    }

    fn index(&self, state: &State) -> usize {
        state
            .iter()
            .zip(&self.strides)
            .map(|(&count, &stride)| count as usize * stride)
            .sum()
    }

    fn get(&self, state: &State) -> Cost {
        self.cells[self.index(state)]
    }

    fn relax(&mut self, state: &State, candidate: Cost) {
        let idx = self.index(state);
        let cell = &mut self.cells[idx];
        if candidate < *cell {
            *cell = candidate;
        }
    }
}
