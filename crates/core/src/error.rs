// crates/core/src/error.rs
use thiserror::Error;

/// Errors produced while scanning a sum expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("input contains no digits")]
    NoDigits,

    #[error("invalid character '{ch}' at byte {position}")]
    InvalidCharacter { ch: char, position: usize },
}
