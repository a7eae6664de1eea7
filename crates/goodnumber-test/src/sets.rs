//! Increment values for tests.

/// Ingress AP gains, largest first.
pub const INGRESS_VALUES: [u64; 12] = [1750, 1563, 1199, 625, 375, 313, 262, 125, 100, 75, 65, 10];

/// Small synthetic sets where greedy choice and declared order matter.
pub const SYNTHETIC_SETS: &[&[u64]] = &[
    &[1],
    &[4, 3, 1],
    &[1, 3, 4],
    &[6, 9, 20],
    &[7, 5],
    &[25, 10, 5, 1],
    &[11, 13],
];
