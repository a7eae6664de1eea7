//! Planner: target lookup followed by gap solving.

use crate::finder::{Family, TargetFinder};
use crate::increment::IncrementSet;
use crate::solver::{Combination, GapSolver};

/// The result of planning from one score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Score the plan starts from.
    pub ap: u64,
    /// Nearest special number above `ap`.
    pub target: u64,
    /// Family `target` belongs to.
    pub family: Family,
    /// Increments reaching `target`; all zero when none do.
    pub combination: Combination,
}

impl Plan {
    pub fn gap(&self) -> u64 {
        self.target - self.ap
    }

    /// Returns true if the combination actually reaches the target.
    pub fn is_reachable(&self) -> bool {
        !self.combination.is_empty()
    }
}

/// Runs a [`TargetFinder`] and then a [`GapSolver`] on its result.
///
/// # Examples
///
/// ```
/// use goodnumber_core::Planner;
///
/// let planner = Planner::default();
/// let plan = planner.plan(1091).unwrap();
/// assert_eq!(plan.target, 1111);
/// assert_eq!(plan.combination.count(10), 2);
/// assert_eq!(plan.combination.total_value(), 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Planner {
    finder: TargetFinder,
    solver: GapSolver,
}

impl Planner {
    pub fn new(finder: TargetFinder, solver: GapSolver) -> Self {
        Self { finder, solver }
    }

    pub fn finder(&self) -> &TargetFinder {
        &self.finder
    }

    pub fn solver(&self) -> &GapSolver {
        &self.solver
    }

    pub fn increments(&self) -> &IncrementSet {
        self.solver.increments()
    }

    /// Plans from `ap`; `None` when no enabled family has a value above it.
    pub fn plan(&self, ap: u64) -> Option<Plan> {
        let nearest = self.finder.nearest(ap)?;
        let combination = self.solver.solve(ap, nearest.value);
        Some(Plan {
            ap,
            target: nearest.value,
            family: nearest.family,
            combination,
        })
    }
}
