//! Brute-force reference for minimal decompositions.
//!
//! Breadth-first search over sums: the first layer that lands exactly on
//! the gap is the minimal part count. Only meant for small gaps.

use std::collections::HashSet;

/// Fewest values (with repetition) summing to `gap`, or `None`.
///
/// # Examples
///
/// ```
/// use goodnumber_test::brute_force_min_parts;
///
/// assert_eq!(brute_force_min_parts(&[1, 3, 4], 6), Some(2));
/// assert_eq!(brute_force_min_parts(&[4, 6], 7), None);
/// assert_eq!(brute_force_min_parts(&[4, 6], 0), Some(0));
/// ```
pub fn brute_force_min_parts(values: &[u64], gap: u64) -> Option<u64> {
    let mut frontier: HashSet<u64> = HashSet::from([0]);
    let mut seen: HashSet<u64> = HashSet::from([0]);
    let mut depth = 0;

    loop {
        if frontier.contains(&gap) {
            return Some(depth);
        }
        let next: HashSet<u64> = frontier
            .iter()
            .flat_map(|&sum| values.iter().map(move |&v| sum + v))
            .filter(|&sum| sum <= gap && !seen.contains(&sum))
            .collect();
        if next.is_empty() {
            return None;
        }
        seen.extend(next.iter().copied());
        frontier = next;
        depth += 1;
    }
}

/// Returns true if some combination of `values` sums to `gap`.
pub fn is_reachable(values: &[u64], gap: u64) -> bool {
    brute_force_min_parts(values, gap).is_some()
}
