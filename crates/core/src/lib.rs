#![no_std]
#![allow(clippy::cargo_common_metadata)]

extern crate alloc;

pub mod digit;
pub mod error;
pub mod parser;
pub mod render;

use alloc::string::String;

pub use digit::Digit;
pub use error::ParseError;

/// Normalize a `+`-separated sum of single digits.
///
/// This is the core entry point for the library.
/// Scans the input, sorts the digits ascending, and re-joins them with `+`.
///
/// # Errors
///
/// Returns `ParseError` when the input is empty, holds no digits, or
/// contains a character that is neither a digit nor `+`.
pub fn normalize(input: &str) -> Result<String, ParseError> {
    let digits = parser::parse_sum(input)?;
    Ok(render::sorted_sum(digits))
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use crate::error::ParseError;

    #[test]
    fn sorts_addends_ascending() {
        assert_eq!(normalize("3+2+1").unwrap(), "1+2+3");
        assert_eq!(normalize("9+8+1+2").unwrap(), "1+2+8+9");
    }

    #[test]
    fn single_digit_passes_through() {
        assert_eq!(normalize("5").unwrap(), "5");
    }

    #[test]
    fn duplicates_are_preserved() {
        assert_eq!(normalize("0+0+1").unwrap(), "0+0+1");
        assert_eq!(normalize("1+0+0").unwrap(), "0+0+1");
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(normalize(""), Err(ParseError::Empty));
    }
}
