use thiserror::Error;

/// Coarse classification of a [`Base64UrlError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input has the wrong shape (not a number, not decimal text, not UTF-8).
    InvalidArgument,
    /// A length or numeric bound was violated.
    RangeViolation,
    /// A character or byte has no place in the alphabet.
    FormatError,
}

/// Error type for base64url operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64UrlError {
    /// The input has the wrong shape for the operation.
    #[error("{0}")]
    InvalidArgument(String),
    /// The alphabet is not exactly 64 characters long.
    #[error("The length of the alphabet must be equal to 64, got {0}")]
    AlphabetLength(usize),
    /// The integer is below the minimum safe integer.
    #[error("The value must be greater than or equal to the minimum safe integer")]
    BelowMinSafeInteger,
    /// The integer is above the maximum safe integer.
    #[error("The value must be less than or equal to the maximum safe integer")]
    AboveMaxSafeInteger,
    /// The alphabet contains a character outside the URL-safe set.
    #[error("Invalid character \"{character}\" at index {index} for the Base64URL alphabet")]
    InvalidAlphabetCharacter { character: char, index: usize },
    /// The alphabet contains a character twice.
    #[error("The character \"{character}\" at index {index} is already in the alphabet")]
    DuplicateAlphabetCharacter { character: char, index: usize },
    /// The input string contains a character outside the alphabet.
    #[error("Invalid character \"{character}\" at index {index} for Base64URL encoding")]
    InvalidCharacter { character: char, index: usize },
    /// The input bytes contain a byte outside the alphabet.
    #[error("Invalid byte \"{byte:x}\" at index {index} for Base64URL encoding")]
    InvalidByte { byte: u8, index: usize },
}

impl Base64UrlError {
    /// Returns which of the three error kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::AlphabetLength(_) | Self::BelowMinSafeInteger | Self::AboveMaxSafeInteger => {
                ErrorKind::RangeViolation
            }
            Self::InvalidAlphabetCharacter { .. }
            | Self::DuplicateAlphabetCharacter { .. }
            | Self::InvalidCharacter { .. }
            | Self::InvalidByte { .. } => ErrorKind::FormatError,
        }
    }

    /// Position of the offending unit, for format errors.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidAlphabetCharacter { index, .. }
            | Self::DuplicateAlphabetCharacter { index, .. }
            | Self::InvalidCharacter { index, .. }
            | Self::InvalidByte { index, .. } => Some(*index),
            _ => None,
        }
    }
}
