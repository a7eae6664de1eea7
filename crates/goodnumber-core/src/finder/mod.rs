//! Target finder: the nearest special number above a score.
//!
//! Four families are evaluated independently and the smallest applicable
//! value wins:
//!
//! - [`Family::Round`] - `1000`, `5000`, `70000`
//! - [`Family::RepDigit`] - `555`, `7777`
//! - [`Family::SeqDigit`] - `123`, `12345678901`
//! - [`Family::PiDigit`] - `314`, `31415`
//!
//! Logging levels:
//! - **INFO**: chosen target
//! - **TRACE**: every family candidate

mod family;

#[cfg(test)]
mod tests;

use std::fmt;

use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{info, trace};

pub use family::{next_pidigit, next_repdigit, next_round, next_seqdigit, PI_DIGITS};

/// A family of aesthetically distinguished numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Family {
    /// Leading digit followed by zeros.
    Round,
    /// One digit repeated.
    RepDigit,
    /// `1234567890` cycling.
    SeqDigit,
    /// Leading digits of pi.
    PiDigit,
}

impl Family {
    /// All families in declaration order.
    pub const ALL: [Family; 4] = [
        Family::Round,
        Family::RepDigit,
        Family::SeqDigit,
        Family::PiDigit,
    ];

    /// Smallest member of this family strictly greater than `ap`.
    #[inline]
    pub fn next_after(self, ap: u64) -> Option<u64> {
        match self {
            Family::Round => next_round(ap),
            Family::RepDigit => next_repdigit(ap),
            Family::SeqDigit => next_seqdigit(ap),
            Family::PiDigit => next_pidigit(ap),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Family::Round => "round",
            Family::RepDigit => "rep_digit",
            Family::SeqDigit => "seq_digit",
            Family::PiDigit => "pi_digit",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One family's next value above a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    // Field order gives value-then-family ordering.
    pub value: u64,
    pub family: Family,
}

/// Finds the nearest special number above a score.
///
/// # Examples
///
/// ```
/// use goodnumber_core::TargetFinder;
///
/// let finder = TargetFinder::new();
/// assert_eq!(finder.target(999), Some(1000));
/// assert_eq!(finder.target(50), Some(55));
/// assert_eq!(finder.target(100), Some(111));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFinder {
    families: Vec<Family>,
    parallel: bool,
}

impl TargetFinder {
    /// Creates a finder over all four families, evaluated in parallel.
    pub fn new() -> Self {
        Self {
            families: Family::ALL.to_vec(),
            parallel: true,
        }
    }

    /// Restricts the finder to the given families.
    ///
    /// Duplicates are dropped; an empty list makes every lookup return `None`.
    pub fn with_families(mut self, families: impl IntoIterator<Item = Family>) -> Self {
        let mut selected: Vec<Family> = families.into_iter().collect();
        selected.sort();
        selected.dedup();
        self.families = selected;
        self
    }

    /// Switches between parallel and sequential evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn families(&self) -> &[Family] {
        &self.families
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Returns every applicable candidate, sorted ascending by value.
    pub fn candidates(&self, ap: u64) -> Vec<Candidate> {
        let evaluate = |&family: &Family| candidate_for(family, ap);

        let mut candidates: Vec<Candidate> = if self.parallel {
            self.families.par_iter().filter_map(evaluate).collect()
        } else {
            self.families.iter().filter_map(evaluate).collect()
        };
        candidates.sort();
        candidates
    }

    /// Returns the smallest applicable candidate.
    pub fn nearest(&self, ap: u64) -> Option<Candidate> {
        let evaluate = |&family: &Family| candidate_for(family, ap);

        let nearest = if self.parallel {
            self.families.par_iter().filter_map(evaluate).min()
        } else {
            self.families.iter().filter_map(evaluate).min()
        };

        if let Some(c) = nearest {
            info!(ap, target = c.value, family = c.family.name(), "Target found");
        }
        nearest
    }

    /// Returns the nearest special number strictly greater than `ap`.
    pub fn target(&self, ap: u64) -> Option<u64> {
        self.nearest(ap).map(|c| c.value)
    }
}

fn candidate_for(family: Family, ap: u64) -> Option<Candidate> {
    let value = family.next_after(ap);
    trace!(ap, family = family.name(), value = ?value, "Family candidate");
    value.map(|value| Candidate { value, family })
}

impl Default for TargetFinder {
    fn default() -> Self {
        Self::new()
    }
}
