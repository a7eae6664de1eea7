//! Per-increment counts of one optimal solution.

use std::fmt;

use crate::increment::{Increment, IncrementSet};

/// How many times each increment of a set is used.
///
/// Every increment of the set has an entry, zero-filled when unused. An
/// all-zero combination is also how "no solution" is represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    entries: Vec<(Increment, u64)>,
}

impl Combination {
    /// A zero-filled combination over `increments`.
    pub fn zeroed(increments: &IncrementSet) -> Self {
        Self {
            entries: increments.iter().map(|inc| (inc.clone(), 0)).collect(),
        }
    }

    /// Adds one use of the increment at `index` in set order.
    pub(crate) fn bump(&mut self, index: usize) {
        self.entries[index].1 += 1;
    }

    /// Count for an increment value; 0 when the value is not in the set.
    pub fn count(&self, value: u64) -> u64 {
        self.entries
            .iter()
            .find(|(inc, _)| inc.value == value)
            .map_or(0, |(_, count)| *count)
    }

    /// Count for an increment name; 0 when the name is not in the set.
    pub fn count_by_name(&self, name: &str) -> u64 {
        self.entries
            .iter()
            .find(|(inc, _)| inc.name == name)
            .map_or(0, |(_, count)| *count)
    }

    /// Total number of parts used.
    pub fn total_parts(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Sum of `count * value` over all increments.
    pub fn total_value(&self) -> u64 {
        self.entries
            .iter()
            .map(|(inc, count)| inc.value * count)
            .sum()
    }

    /// Returns true if no increment is used.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, count)| *count == 0)
    }

    /// Entries in increment set order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (&Increment, u64)> {
        self.entries.iter().map(|(inc, count)| (inc, *count))
    }

    /// Entries with a non-zero count.
    pub fn used(&self) -> impl Iterator<Item = (&Increment, u64)> {
        self.iter().filter(|(_, count)| *count > 0)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for (inc, count) in self.used() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{count}x {}", inc.name)?;
            first = false;
        }
        Ok(())
    }
}
