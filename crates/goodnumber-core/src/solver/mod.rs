//! Gap solver: fewest increments summing exactly to a gap.
//!
//! Unbounded coin change over `[0, gap]` with a forward (push) sweep and
//! predecessor tracking for reconstruction. Cost is `O(gap * |increments|)`
//! time and `O(gap)` memory, so gaps above [`GapSolver::gap_limit`] are
//! refused up front.
//!
//! Logging levels:
//! - **INFO**: solved gaps with part count and timing
//! - **WARN**: gaps refused by the limit
//! - **DEBUG**: unreachable gaps

mod combination;


use std::num::NonZeroU32;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::increment::IncrementSet;

pub use combination::Combination;

/// Default largest gap the solver will sweep.
pub const DEFAULT_GAP_LIMIT: u64 = 100_000_000;

// Sums and part counts are stored as u32, and a cell holds parts + 1.
const MAX_GAP_LIMIT: u64 = u32::MAX as u64 - 1;

/// DP cell: fewest parts known to reach a sum, `None` while unreached.
///
/// Stored as `parts + 1` so the niche keeps a cell at four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Reach(Option<NonZeroU32>);

impl Reach {
    const UNREACHED: Reach = Reach(None);

    #[inline]
    fn parts(parts: u32) -> Self {
        Reach(NonZeroU32::new(parts + 1))
    }

    #[inline]
    fn count(self) -> Option<u32> {
        self.0.map(|n| n.get() - 1)
    }

    /// Returns true if reaching this cell with `parts` is a strict improvement.
    #[inline]
    fn improved_by(self, parts: u32) -> bool {
        self.count().map_or(true, |current| parts < current)
    }
}

/// Solves minimal-part decompositions of a gap over an [`IncrementSet`].
///
/// Ties between equally short combinations go to the first one found while
/// sweeping sums upward. Since every sum is final before it is swept, this
/// always takes the smallest optimal predecessor, so the reconstruction
/// peels off the largest usable increment first and the declared order of
/// the set does not change the result.
///
/// # Examples
///
/// ```
/// use goodnumber_core::{GapSolver, IncrementSet};
///
/// let solver = GapSolver::new(IncrementSet::ingress());
/// let combination = solver.solve(0, 20);
/// assert_eq!(combination.count(10), 2);
/// assert_eq!(combination.total_parts(), 2);
///
/// // Gaps no combination can reach come back all zero.
/// assert!(solver.solve(0, 5).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapSolver {
    increments: IncrementSet,
    gap_limit: u64,
}

impl GapSolver {
    /// Creates a solver with the default gap limit.
    pub fn new(increments: IncrementSet) -> Self {
        Self {
            increments,
            gap_limit: DEFAULT_GAP_LIMIT,
        }
    }

    /// Sets the largest gap the solver will sweep, capped at `u32::MAX - 1`.
    ///
    /// A sweep costs eight bytes per unit of gap.
    pub fn with_gap_limit(mut self, gap_limit: u64) -> Self {
        self.gap_limit = gap_limit.min(MAX_GAP_LIMIT);
        self
    }

    pub fn increments(&self) -> &IncrementSet {
        &self.increments
    }

    pub fn gap_limit(&self) -> u64 {
        self.gap_limit
    }

    /// Solves the gap from `ap` up to `target`.
    ///
    /// A target at or below `ap` yields the zero-filled combination.
    pub fn solve(&self, ap: u64, target: u64) -> Combination {
        self.solve_gap(target.saturating_sub(ap))
    }

    /// Solves a bare gap.
    pub fn solve_gap(&self, gap: u64) -> Combination {
        let mut combination = Combination::zeroed(&self.increments);
        if gap == 0 {
            return combination;
        }
        if gap > self.gap_limit {
            warn!(gap, gap_limit = self.gap_limit, "Gap over limit");
            return combination;
        }
        // gap < u32::MAX here
        let Ok(gap) = u32::try_from(gap) else {
            return combination;
        };

        let start = Instant::now();
        let Some(track) = self.sweep(gap) else {
            debug!(gap, "Gap unreachable");
            return combination;
        };

        let mut p = gap;
        while p > 0 {
            let prev = track[p as usize];
            let value = u64::from(p - prev);
            // Every step in the track is one of our increments.
            if let Some(index) = self.increments.index_of(value) {
                combination.bump(index);
            }
            p = prev;
        }

        info!(
            gap,
            parts = combination.total_parts(),
            duration_us = start.elapsed().as_micros() as u64,
            "Gap solved"
        );
        combination
    }

    /// Fewest parts for `gap`, or `None` when unreachable or over the limit.
    pub fn min_parts(&self, gap: u64) -> Option<u64> {
        if gap == 0 {
            return Some(0);
        }
        let combination = self.solve_gap(gap);
        (!combination.is_empty()).then(|| combination.total_parts())
    }

    // Forward sweep; returns the predecessor table when `gap` is reachable.
    fn sweep(&self, gap: u32) -> Option<Vec<u32>> {
        let values: Vec<u32> = self
            .increments
            .values()
            .filter_map(|v| u32::try_from(v).ok())
            .collect();

        let len = gap as usize + 1;
        let mut dp = vec![Reach::UNREACHED; len];
        let mut track = vec![0u32; len];
        dp[0] = Reach::parts(0);

        for i in 0..gap {
            let Some(parts) = dp[i as usize].count() else {
                continue;
            };
            let next = parts + 1;
            for &n in &values {
                let Some(j) = i.checked_add(n).filter(|&j| j <= gap) else {
                    continue;
                };
                let j = j as usize;
                if dp[j].improved_by(next) {
                    dp[j] = Reach::parts(next);
                    track[j] = i;
                }
            }
        }

        dp[gap as usize].count().map(|_| track)
    }
}

impl Default for GapSolver {
    fn default() -> Self {
        Self::new(IncrementSet::default())
    }
}
