//! Heuristic quality evaluation against the exact optimum.
//!
//! The quality of a heuristic on an instance is its total divided by the
//! exact DP total: 1.0 means optimal, and every correct heuristic scores
//! ≥ 1.0. Collaborating benchmark harnesses call these functions per
//! instance and aggregate the serializable reports; nothing here persists
//! or plots anything.

use serde::{Deserialize, Serialize};

use crate::models::Weight;
use crate::solvers::{Solver, SparseDp};
use crate::validation::SolveResult;

/// Quality of one solver on one instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Solver name.
    pub algorithm: String,
    /// Machine count the instance was solved for.
    pub machines: usize,
    /// Solver total divided by the exact optimum (≥ 1.0).
    pub ratio: f64,
}

fn descending(weights: &[Weight]) -> Vec<Weight> {
    let mut sorted = weights.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted
}

/// Ratio of the solver's total to the exact optimum on one weight list.
///
/// Weights are sorted descending before either solve, which satisfies
/// every solver's input contract. A zero optimum (all weights zero) can
/// only be matched by a zero total, so it reports 1.0.
pub fn quality_ratio(
    solver: &mut dyn Solver,
    machines: usize,
    weights: &[Weight],
) -> SolveResult<f64> {
    let sorted = descending(weights);
    let achieved = solver.fit_transform(machines, &sorted)?;
    let optimal = SparseDp::new().fit_transform(machines, &sorted)?;
    if optimal == 0 {
        return Ok(1.0);
    }
    Ok(achieved as f64 / optimal as f64)
}

/// Mean quality ratio across several weight lists. An empty instance set
/// reports the neutral 1.0.
pub fn average_quality(
    solver: &mut dyn Solver,
    machines: usize,
    instances: &[Vec<Weight>],
) -> SolveResult<f64> {
    if instances.is_empty() {
        return Ok(1.0);
    }
    let mut sum = 0.0;
    for weights in instances {
        sum += quality_ratio(solver, machines, weights)?;
    }
    Ok(sum / instances.len() as f64)
}

/// Evaluates one solver on one instance into a report.
pub fn evaluate(
    solver: &mut dyn Solver,
    machines: usize,
    weights: &[Weight],
) -> SolveResult<QualityReport> {
    let ratio = quality_ratio(solver, machines, weights)?;
    Ok(QualityReport {
        algorithm: solver.name().to_string(),
        machines,
        ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;
    use crate::solvers::{Greedy, HeavyFirst, SortAndSplit, SparseDp};

    #[test]
    fn test_exact_solver_scores_one() {
        let mut exact = SparseDp::new();
        let ratio = quality_ratio(&mut exact, 2, &[3, 2, 1]).unwrap();
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_heuristics_score_at_least_one() {
        let weights = generator::small_random(12, 1);
        for machines in 1..=3 {
            let mut greedy = Greedy::new();
            let mut heavy = HeavyFirst::new();
            let mut split = SortAndSplit::new();
            assert!(quality_ratio(&mut greedy, machines, &weights).unwrap() >= 1.0);
            assert!(quality_ratio(&mut heavy, machines, &weights).unwrap() >= 1.0);
            assert!(quality_ratio(&mut split, machines, &weights).unwrap() >= 1.0);
        }
    }

    #[test]
    fn test_single_machine_is_trivially_optimal() {
        // m = 1 leaves no assignment choice: every solver is optimal.
        let weights = generator::small_random(10, 4);
        let mut split = SortAndSplit::new();
        let ratio = quality_ratio(&mut split, 1, &weights).unwrap();
        assert!((ratio - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_average_quality() {
        let instances = vec![
            generator::small_random(8, 0),
            generator::small_random(8, 1),
            generator::small_random(8, 2),
        ];
        let mut greedy = Greedy::new();
        let average = average_quality(&mut greedy, 2, &instances).unwrap();
        assert!(average >= 1.0);
    }

    #[test]
    fn test_average_quality_empty() {
        let mut greedy = Greedy::new();
        assert_eq!(average_quality(&mut greedy, 2, &[]).unwrap(), 1.0);
    }

    #[test]
    fn test_report_serializes() {
        let mut heavy = HeavyFirst::new();
        let report = evaluate(&mut heavy, 2, &[3, 2, 1]).unwrap();
        assert_eq!(report.algorithm, "Heavy First");

        let json = serde_json::to_string(&report).unwrap();
        let back: QualityReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.algorithm, report.algorithm);
        assert_eq!(back.machines, 2);
        assert!((back.ratio - report.ratio).abs() < 1e-12);
    }
}
