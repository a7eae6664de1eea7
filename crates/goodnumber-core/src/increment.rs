//! Increment denominations used to close a gap.

use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GoodNumberError, Result};

/// A single fixed-value step, labelled by the action that earns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Increment {
    /// Points gained by one occurrence.
    pub value: u64,
    /// Descriptive action name, used as the output field name.
    pub name: String,
}

impl Increment {
    pub fn new(value: u64, name: impl Into<String>) -> Self {
        Self {
            value,
            name: name.into(),
        }
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.value)
    }
}

/// Ingress AP gains, largest first.
const INGRESS_GAINS: [(u64, &str); 12] = [
    (1750, "full deploy"),
    (1563, "create control field"),
    (1199, "destroy control field"),
    (625, "capture portal"),
    (375, "complete portal"),
    (313, "create link"),
    (262, "destroy link"),
    (125, "place resonator"),
    (100, "hack portal"),
    (75, "destroy resonator"),
    (65, "upgrade resonator"),
    (10, "recharge"),
];

/// An ordered, validated set of increments.
///
/// Values are positive and distinct, names are non-blank and distinct.
/// The declared order is kept: it drives the solver's iteration order and
/// the order of [`Combination`](crate::Combination) entries.
///
/// # Examples
///
/// ```
/// use goodnumber_core::{Increment, IncrementSet};
///
/// let set = IncrementSet::new(vec![
///     Increment::new(5, "five"),
///     Increment::new(2, "two"),
/// ]).unwrap();
/// assert_eq!(set.values().collect::<Vec<_>>(), vec![5, 2]);
///
/// assert!(IncrementSet::new(vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementSet {
    increments: Vec<Increment>,
}

impl IncrementSet {
    /// Creates a set, validating every invariant.
    pub fn new(increments: Vec<Increment>) -> Result<Self> {
        if increments.is_empty() {
            return Err(GoodNumberError::EmptyIncrementSet);
        }

        let mut values = HashSet::with_capacity(increments.len());
        let mut names = HashSet::with_capacity(increments.len());
        for inc in &increments {
            if inc.value == 0 {
                return Err(GoodNumberError::ZeroIncrement {
                    name: inc.name.clone(),
                });
            }
            if inc.name.trim().is_empty() {
                return Err(GoodNumberError::BlankName { value: inc.value });
            }
            if !values.insert(inc.value) {
                return Err(GoodNumberError::DuplicateValue { value: inc.value });
            }
            if !names.insert(inc.name.as_str()) {
                return Err(GoodNumberError::DuplicateName {
                    name: inc.name.clone(),
                });
            }
        }

        Ok(Self { increments })
    }

    /// Creates a set from bare values, naming each increment after its value.
    ///
    /// Handy for synthetic sets in tests and experiments.
    pub fn from_values(values: &[u64]) -> Result<Self> {
        Self::new(
            values
                .iter()
                .map(|&v| Increment::new(v, v.to_string()))
                .collect(),
        )
    }

    /// The twelve Ingress AP gains.
    pub fn ingress() -> Self {
        Self {
            increments: INGRESS_GAINS
                .iter()
                .map(|&(value, name)| Increment::new(value, name))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.increments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.increments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Increment> {
        self.increments.iter()
    }

    /// Increment values in declared order.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.increments.iter().map(|inc| inc.value)
    }

    /// Position of `value` in declared order.
    pub fn index_of(&self, value: u64) -> Option<usize> {
        self.increments.iter().position(|inc| inc.value == value)
    }

    /// Looks up an increment by value.
    pub fn get(&self, value: u64) -> Option<&Increment> {
        self.increments.iter().find(|inc| inc.value == value)
    }

    /// Looks up an increment by name.
    pub fn by_name(&self, name: &str) -> Option<&Increment> {
        self.increments.iter().find(|inc| inc.name == name)
    }
}

impl Default for IncrementSet {
    fn default() -> Self {
        Self::ingress()
    }
}

impl<'a> IntoIterator for &'a IncrementSet {
    type Item = &'a Increment;
    type IntoIter = std::slice::Iter<'a, Increment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
