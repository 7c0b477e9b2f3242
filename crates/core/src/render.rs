// crates/core/src/render.rs
use alloc::string::String;
use alloc::vec::Vec;

use crate::digit::Digit;

/// Sort digits ascending and render them as a sum expression.
///
/// Stability is immaterial for single-digit values, so the unstable sort is
/// used.
#[must_use]
pub fn sorted_sum(mut digits: Vec<Digit>) -> String {
    digits.sort_unstable();
    join_digits(&digits)
}

/// Join digits with a single `+` between consecutive values, none leading
/// or trailing.
#[must_use]
pub fn join_digits(digits: &[Digit]) -> String {
    // n digits plus n-1 separators.
    let mut out = String::with_capacity(digits.len() * 2);
    let mut iter = digits.iter();
    if let Some(first) = iter.next() {
        out.push(first.as_char());
    }
    for digit in iter {
        out.push('+');
        out.push(digit.as_char());
    }
    out
}
