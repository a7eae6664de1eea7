//! Decimal digit helpers shared by the number families.

/// Returns the number of decimal digits of `n` minus one.
///
/// This is `floor(log10(n))` for positive `n`, and 0 for `n == 0`.
///
/// # Examples
///
/// ```
/// use goodnumber_core::num_digits;
///
/// assert_eq!(num_digits(0), 0);
/// assert_eq!(num_digits(7), 0);
/// assert_eq!(num_digits(999), 2);
/// assert_eq!(num_digits(1000), 3);
/// ```
pub const fn num_digits(mut n: u64) -> u32 {
    let mut digit = 0;
    n /= 10;
    while n != 0 {
        n /= 10;
        digit += 1;
    }
    digit
}

/// Returns the repunit with `len` ones (`len >= 1`), or `None` on overflow.
pub fn repunit(len: u32) -> Option<u64> {
    let mut num: u64 = 1;
    for _ in 1..len {
        num = num.checked_mul(10)?.checked_add(1)?;
    }
    Some(num)
}

/// Returns the decimal digits of `n`, most significant first.
pub fn digits_of(n: u64) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}
