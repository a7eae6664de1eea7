//! Generators for the four special number families.
//!
//! Each generator returns the smallest member of its family strictly greater
//! than `ap`, or `None` when that member does not fit in a `u64`.

use crate::digits::{num_digits, repunit};

/// Leading digits of pi, the largest such prefix below `i64::MAX`.
pub const PI_DIGITS: u64 = 3_141_592_653_589_793_238;

/// Next multiple of `10^num_digits(ap)`.
///
/// ```
/// use goodnumber_core::finder::next_round;
///
/// assert_eq!(next_round(999), Some(1000));
/// assert_eq!(next_round(4321), Some(5000));
/// ```
pub fn next_round(ap: u64) -> Option<u64> {
    let round = 10u64.checked_pow(num_digits(ap))?;
    (ap / round + 1).checked_mul(round)
}

/// Next number made of one repeated digit.
///
/// ```
/// use goodnumber_core::finder::next_repdigit;
///
/// assert_eq!(next_repdigit(50), Some(55));
/// assert_eq!(next_repdigit(99), Some(111));
/// ```
pub fn next_repdigit(ap: u64) -> Option<u64> {
    let len = num_digits(ap) + 1;
    let unit = repunit(len)?;
    for k in 1..=9u64 {
        match unit.checked_mul(k) {
            Some(candidate) if candidate > ap => return Some(candidate),
            Some(_) => {}
            None => return None,
        }
    }
    // ap is the all-nines value of its length.
    repunit(len + 1)
}

/// Next prefix of `1234567890123...`.
///
/// ```
/// use goodnumber_core::finder::next_seqdigit;
///
/// assert_eq!(next_seqdigit(100), Some(123));
/// assert_eq!(next_seqdigit(123), Some(1234));
/// ```
pub fn next_seqdigit(ap: u64) -> Option<u64> {
    let mut num: u64 = 1;
    let mut index: u64 = 0;
    while num <= ap {
        num = num.checked_mul(10)?.checked_add((index + 2) % 10)?;
        index += 1;
    }
    Some(num)
}

/// Next truncation of [`PI_DIGITS`].
///
/// Returns `None` once `ap` reaches the constant itself; the sequence is not
/// extended past 19 digits.
///
/// ```
/// use goodnumber_core::finder::next_pidigit;
///
/// assert_eq!(next_pidigit(0), Some(3));
/// assert_eq!(next_pidigit(300), Some(314));
/// assert_eq!(next_pidigit(314), Some(3141));
/// ```
pub fn next_pidigit(ap: u64) -> Option<u64> {
    let mut num = PI_DIGITS;
    while num / 10 > ap {
        num /= 10;
    }
    (num > ap).then_some(num)
}
