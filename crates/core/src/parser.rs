// crates/core/src/parser.rs
use alloc::vec::Vec;

use crate::digit::Digit;
use crate::error::ParseError;

/// Scan a sum expression into its digits.
///
/// `+` separators carry no data and are skipped without inspecting their
/// neighbors; every other non-digit character is rejected with its byte
/// position.
///
/// # Errors
///
/// `ParseError::Empty` for an empty string, `ParseError::NoDigits` when the
/// input holds only separators, `ParseError::InvalidCharacter` otherwise.
pub fn parse_sum(input: &str) -> Result<Vec<Digit>, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    // Roughly every other character is a separator.
    let mut digits = Vec::with_capacity(input.len() / 2 + 1);

    for (position, ch) in input.char_indices() {
        if ch == '+' {
            continue;
        }
        let digit =
            Digit::try_from(ch).map_err(|ch| ParseError::InvalidCharacter { ch, position })?;
        digits.push(digit);
    }

    if digits.is_empty() {
        return Err(ParseError::NoDigits);
    }

    Ok(digits)
}
