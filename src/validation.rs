//! Input validation for solver configuration and weight lists.
//!
//! Solvers fail fast on caller errors: an invalid machine count, a
//! transform without a fit, a weight list that does not match the fitted
//! job count, or unsorted input where a solver's contract requires
//! non-increasing weights. A solve either fully succeeds or aborts here;
//! there are no partial results.

use crate::models::Weight;

/// Result of a solver operation.
pub type SolveResult<T> = Result<T, SolveError>;

/// A solver configuration or contract error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveError {
    /// Error category.
    pub kind: SolveErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of solver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveErrorKind {
    /// Machine count is zero.
    InvalidMachineCount,
    /// Lookahead depth is zero.
    InvalidLookaheadDepth,
    /// `transform` was called before `fit`.
    NotFitted,
    /// Weight list length differs from the fitted job count.
    JobCountMismatch,
    /// The solver requires non-increasing weights and the input is not.
    UnsortedWeights,
    /// No feasible threshold exists; an internal distribution invariant
    /// was violated.
    NoFeasibleThreshold,
}

impl SolveError {
    pub(crate) fn new(kind: SolveErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Rejects a zero machine count.
pub fn check_machine_count(machines: usize) -> SolveResult<()> {
    if machines == 0 {
        return Err(SolveError::new(
            SolveErrorKind::InvalidMachineCount,
            "machine count must be at least 1",
        ));
    }
    Ok(())
}

/// Rejects a zero lookahead depth.
pub fn check_lookahead_depth(depth: usize) -> SolveResult<()> {
    if depth == 0 {
        return Err(SolveError::new(
            SolveErrorKind::InvalidLookaheadDepth,
            "lookahead depth must be at least 1",
        ));
    }
    Ok(())
}

/// Rejects a weight list whose length differs from the fitted job count.
pub fn check_job_count(fitted: usize, actual: usize) -> SolveResult<()> {
    if fitted != actual {
        return Err(SolveError::new(
            SolveErrorKind::JobCountMismatch,
            format!("fitted for {fitted} jobs, got {actual} weights"),
        ));
    }
    Ok(())
}

/// Whether the weights are in non-increasing order.
pub fn is_non_increasing(weights: &[Weight]) -> bool {
    weights.windows(2).all(|pair| pair[0] >= pair[1])
}

/// Rejects a weight list that is not in non-increasing order.
pub fn check_non_increasing(weights: &[Weight]) -> SolveResult<()> {
    if !is_non_increasing(weights) {
        return Err(SolveError::new(
            SolveErrorKind::UnsortedWeights,
            "weights must be presented in non-increasing order",
        ));
    }
    Ok(())
}

/// Unwraps fitted state, rejecting a transform without a prior fit.
pub(crate) fn check_fitted<T>(fitted: Option<T>) -> SolveResult<T> {
    fitted.ok_or_else(|| SolveError::new(SolveErrorKind::NotFitted, "transform called before fit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_count() {
        assert!(check_machine_count(1).is_ok());
        assert!(check_machine_count(64).is_ok());
        let err = check_machine_count(0).unwrap_err();
        assert_eq!(err.kind, SolveErrorKind::InvalidMachineCount);
    }

    #[test]
    fn test_lookahead_depth() {
        assert!(check_lookahead_depth(1).is_ok());
        let err = check_lookahead_depth(0).unwrap_err();
        assert_eq!(err.kind, SolveErrorKind::InvalidLookaheadDepth);
    }

    #[test]
    fn test_job_count() {
        assert!(check_job_count(3, 3).is_ok());
        let err = check_job_count(3, 2).unwrap_err();
        assert_eq!(err.kind, SolveErrorKind::JobCountMismatch);
        assert!(err.message.contains('3'));
    }

    #[test]
    fn test_non_increasing() {
        assert!(is_non_increasing(&[]));
        assert!(is_non_increasing(&[5]));
        assert!(is_non_increasing(&[5, 5, 3, 1]));
        assert!(!is_non_increasing(&[1, 2]));

        assert!(check_non_increasing(&[9, 4, 4]).is_ok());
        let err = check_non_increasing(&[4, 9]).unwrap_err();
        assert_eq!(err.kind, SolveErrorKind::UnsortedWeights);
    }

    #[test]
    fn test_check_fitted() {
        assert_eq!(check_fitted(Some(7)).unwrap(), 7);
        let err = check_fitted::<usize>(None).unwrap_err();
        assert_eq!(err.kind, SolveErrorKind::NotFitted);
    }
}
