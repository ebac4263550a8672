//! Solvers for parallel-machine scheduling under total weighted completion
//! time.
//!
//! Given n jobs of unit processing time with weights w and m identical
//! machines, assign every job to a machine and a position so that
//! Σ wⱼ·Cⱼ is minimized. This crate provides the exact symmetry-reduced
//! state-space DP together with a family of polynomial-time heuristics,
//! all behind one `fit`/`transform` interface so callers can treat them
//! polymorphically.
//!
//! # Modules
//!
//! - **`models`**: `Job`, `Lane` (a machine's sorted job list with
//!   incremental cost), and the shared sequence cost function
//! - **`solvers`**: the solver family: `DenseDp`, `SparseDp`, `Greedy`,
//!   `LeastLoaded`, `HeavyFirst`, `SortAndSplit`,
//!   `BalancedSequentialInsert`, `BalancedSequentialInsertPp`, `Lookahead`
//! - **`generator`**: seeded weight-list generators for benchmark instances
//! - **`quality`**: heuristic-vs-optimal quality ratios and reports
//! - **`validation`**: configuration checks and the solver error type
//!
//! # Example
//!
//! ```
//! use pm_sched::solvers::{Solver, SparseDp};
//!
//! let mut exact = SparseDp::new();
//! assert_eq!(exact.fit_transform(2, &[3, 2, 1]).unwrap(), 7);
//! ```
//!
//! # References
//!
//! - Smith (1956), "Various optimizers for single-stage production"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5
//! - Bruno, Coffman & Sethi (1974), "Scheduling independent tasks to
//!   reduce mean finishing time"

pub mod generator;
pub mod models;
pub mod quality;
pub mod solvers;
pub mod validation;
