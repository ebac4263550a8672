//! Balanced Sequential Insert and its threshold-search variant.
//!
//! Both variants share one simulation: sort descending, give machine 0 the
//! `threshold` heaviest jobs, then fill machines 1..m sequentially. Each
//! takes jobs until its running cost first reaches or exceeds the previous
//! machine's final cost, or the jobs run out. A threshold is feasible iff
//! the whole list is consumed.
//!
//! - [`BalancedSequentialInsert`] scans thresholds 1, 2, … and returns the
//!   first feasible one. Threshold n puts everything on machine 0, so a
//!   feasible threshold always exists.
//! - [`BalancedSequentialInsertPp`] ternary-searches the threshold domain
//!   [1, ⌈n/m⌉], treating infeasible simulations as +∞ in comparisons.
//!   The cost-vs-threshold function is not guaranteed unimodal, so the
//!   search can settle on a local minimum: BSI++ approximates BSI, and the
//!   two may diverge.

use std::collections::HashMap;

use super::{Fit, Solver};
use crate::models::{decorate_sorted, Cost, Job, Lane, Weight};
use crate::validation::{
    check_fitted, check_job_count, check_machine_count, SolveError, SolveErrorKind, SolveResult,
};

/// Simulates the distribution for one threshold. Returns the total cost
/// when the whole job list is consumed, `None` when jobs remain after the
/// last machine (an infeasible threshold, a normal rejected candidate).
fn simulate(jobs: &[Job], machines: usize, threshold: usize) -> Option<Cost> {
    let mut cursor = threshold.min(jobs.len());

    let mut first = Lane::new();
    for &job in &jobs[..cursor] {
        first.insert(job);
    }
    let mut previous = first.cost();
    let mut total = first.cost();

    for _ in 1..machines {
        let mut lane = Lane::new();
        while lane.cost() < previous && cursor < jobs.len() {
            lane.insert(jobs[cursor]);
            cursor += 1;
        }
        previous = lane.cost();
        total += lane.cost();
    }

    (cursor == jobs.len()).then_some(total)
}

/// First feasible threshold, scanning 1..=n. The final threshold n is
/// always feasible; exhausting the scan means the distribution invariant
/// broke.
fn first_feasible(jobs: &[Job], machines: usize) -> SolveResult<Cost> {
    for threshold in 1..=jobs.len() {
        if let Some(total) = simulate(jobs, machines, threshold) {
            return Ok(total);
        }
    }
    Err(SolveError::new(
        SolveErrorKind::NoFeasibleThreshold,
        "no threshold consumed the job list",
    ))
}

/// Balanced Sequential Insert: linear threshold scan, first feasible wins.
///
/// Correctness-first O(n²) worst case: every trial threshold replays the
/// whole distribution.
#[derive(Debug, Clone, Default)]
pub struct BalancedSequentialInsert {
    fitted: Option<Fit>,
}

impl BalancedSequentialInsert {
    /// Creates an unfitted solver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for BalancedSequentialInsert {
    fn name(&self) -> &'static str {
        "Balanced Sequential Insert"
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
        if jobs.is_empty() {
            return Ok(0);
        }
        first_feasible(&jobs, fit.machines)
    }

    fn description(&self) -> &'static str {
        "Sequential balancing, linear threshold scan"
    }
}

/// Memoized threshold evaluation shared by the ternary probes.
struct ThresholdCosts<'a> {
    jobs: &'a [Job],
    machines: usize,
    cache: HashMap<usize, Option<Cost>>,
}

impl<'a> ThresholdCosts<'a> {
    fn new(jobs: &'a [Job], machines: usize) -> Self {
        Self {
            jobs,
            machines,
            cache: HashMap::new(),
        }
    }

    fn eval(&mut self, threshold: usize) -> Option<Cost> {
        let (jobs, machines) = (self.jobs, self.machines);
        *self
            .cache
            .entry(threshold)
            .or_insert_with(|| simulate(jobs, machines, threshold))
    }
}

/// Sort key placing infeasible simulations after every feasible cost.
/// Comparison only; no sentinel value enters cost arithmetic.
fn infeasible_last(cost: Option<Cost>) -> (bool, Cost) {
    match cost {
        Some(total) => (false, total),
        None => (true, 0),
    }
}

/// Balanced Sequential Insert++: ternary threshold search.
///
/// Evaluates O(log n) thresholds instead of O(n), assuming the
/// cost-vs-threshold function is unimodal. That assumption is known to
/// fail on some instances, so this is a best-effort approximation of
/// [`BalancedSequentialInsert`]; never assert equality between the two.
#[derive(Debug, Clone, Default)]
pub struct BalancedSequentialInsertPp {
    fitted: Option<Fit>,
}

impl BalancedSequentialInsertPp {
    /// Creates an unfitted solver.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for BalancedSequentialInsertPp {
    fn name(&self) -> &'static str {
        "Balanced Sequential Insert++"
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
        if jobs.is_empty() {
            return Ok(0);
        }

        let mut costs = ThresholdCosts::new(&jobs, fit.machines);
        let mut lo = 1;
        let mut hi = jobs.len().div_ceil(fit.machines);

        while hi - lo > 2 {
            let mid1 = lo + (hi - lo) / 3;
            let mid2 = hi - (hi - lo) / 3;
            if infeasible_last(costs.eval(mid1)) < infeasible_last(costs.eval(mid2)) {
                hi = mid2;
            } else {
                lo = mid1;
            }
        }

        let best = (lo..=hi).filter_map(|threshold| costs.eval(threshold)).min();
        match best {
            Some(total) => Ok(total),
            // Every bracket candidate infeasible: fall back to the linear
            // scan so an infeasible sentinel never escapes.
            None => first_feasible(&jobs, fit.machines),
        }
    }

    fn description(&self) -> &'static str {
        "Sequential balancing, ternary threshold search"
    }
}
