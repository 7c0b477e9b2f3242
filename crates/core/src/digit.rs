// crates/core/src/digit.rs
use core::fmt::{self, Write as _};

/// A single decimal digit.
///
/// The value is guaranteed to be in `0..=9`; the only way to build one is
/// from an ASCII digit character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    /// Fails with the offending character when it is not `0`..=`9`.
    fn try_from(ch: char) -> Result<Self, char> {
        match ch {
            '0'..='9' => Ok(Self(ch as u8 - b'0')),
            other => Err(other),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.as_char())
    }
}
