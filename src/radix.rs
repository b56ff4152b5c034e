//! Integer to string conversion in power-of-two bases

#[cfg(not(feature = "std"))]
use alloc::string::String;

use crate::{error::Error, stack::Stack};

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Write `num` in base `n`, where `n` is a power of two between 2 and 16.
///
/// Digit values 10 to 15 are written `A` to `F`. Zero has no digits and yields an empty
/// string.
///
/// ```
/// # use shunting::divide_by_n;
/// assert_eq!(Ok("1F".to_string()), divide_by_n(31, 16));
/// assert_eq!(Ok(String::new()), divide_by_n(0, 2));
/// assert!(divide_by_n(10, 10).is_err());
/// ```
pub fn divide_by_n(num: u64, n: u32) -> Result<String, Error> {
    if !(2..=16).contains(&n) {
        return Err(Error::invalid_argument("n must be between 2 and 16"));
    }
    if !n.is_power_of_two() {
        return Err(Error::invalid_argument("n must be a power of two"));
    }

    let base = u64::from(n);
    let mut remainders: Stack<u8> = Stack::new();
    let mut rest = num;
    while rest > 0 {
        remainders.push((rest % base) as u8);
        rest /= base;
    }

    let mut digits = String::with_capacity(remainders.size());
    while let Ok(remainder) = remainders.pop() {
        digits.push(char::from(DIGITS[usize::from(remainder)]));
    }
    Ok(digits)
}
