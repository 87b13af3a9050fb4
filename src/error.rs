use thiserror::Error;

/// Reasons decimal text can be rejected by [`BigInt`](crate::BigInt)'s `FromStr`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBigIntError {
    /// A character outside `0..=9` appeared after the optional leading sign.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },
}

impl ParseBigIntError {
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ParseBigIntError::InvalidDigit { .. })
    }
}

pub type Result<T> = std::result::Result<T, ParseBigIntError>;
