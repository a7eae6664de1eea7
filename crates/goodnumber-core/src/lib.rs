//! Good Number Core - nearest special numbers and the moves to reach them
//!
//! This crate provides:
//! - [`TargetFinder`]: nearest round, repeated-digit, sequential-digit or
//!   pi-digit number above a score
//! - [`GapSolver`]: fewest fixed-value increments summing exactly to a gap
//! - [`Planner`]: both of the above in sequence
//!
//! Nothing here fails at solve time: unreachable or oversized gaps yield an
//! all-zero [`Combination`], inapplicable families are skipped.

pub mod digits;
pub mod error;
pub mod finder;
pub mod increment;
pub mod planner;
pub mod solver;

pub use digits::num_digits;
pub use error::GoodNumberError;
pub use finder::{Candidate, Family, TargetFinder};
pub use increment::{Increment, IncrementSet};
pub use planner::{Plan, Planner};
pub use solver::{Combination, GapSolver, DEFAULT_GAP_LIMIT};
