//! Scheduling domain models.
//!
//! Core data types shared by every solver: jobs, per-machine lanes, and
//! the sequence cost function they all agree on.
//!
//! # Domain Mappings
//!
//! | pm-sched | Manufacturing | Computing |
//! |----------|---------------|-----------|
//! | Job | Order of unit length | Task |
//! | Lane | Machine | Core/Worker |
//! | Cost | Σ weight × completion position | Weighted flow time |

mod job;
mod lane;

pub use job::{decorate_sorted, sequence_cost, Cost, Job, Weight};
pub use lane::Lane;
