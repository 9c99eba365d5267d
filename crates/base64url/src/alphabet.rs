//! Alphabet validation and the forward/reverse lookup tables built from it.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ALPHABET, ALPHABET_BYTES};
use crate::Base64UrlError;

/// Builds a byte -> digit table for a 64-byte alphabet.
const fn build_digits(bytes: &[u8; 64]) -> [Option<u8>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < 64 {
        table[bytes[i] as usize] = Some(i as u8);
        i += 1;
    }
    table
}

/// Reference set every custom alphabet must be drawn from.
const REFERENCE_DIGITS: [Option<u8>; 256] = build_digits(ALPHABET_BYTES);

fn in_reference_set(character: char) -> bool {
    u8::try_from(character).is_ok_and(|byte| REFERENCE_DIGITS[byte as usize].is_some())
}

/// An ordered set of 64 distinct characters mapping digits `0..64` to output units.
///
/// Holds the forward tables (digit -> char, digit -> byte) and a 256-entry
/// reverse table keyed by character code. Every accepted character is
/// single-byte ASCII, so the character code and the byte value coincide and
/// one reverse table serves both text and byte lookups.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: String,
    chars: [char; 64],
    bytes: [u8; 64],
    digits: [Option<u8>; 256],
}

impl Alphabet {
    /// Validates `value` and builds the lookup tables for it.
    ///
    /// # Errors
    ///
    /// - [`Base64UrlError::AlphabetLength`] if `value` is not exactly 64 characters.
    /// - [`Base64UrlError::InvalidAlphabetCharacter`] if a character is outside the
    ///   default alphabet's character set.
    /// - [`Base64UrlError::DuplicateAlphabetCharacter`] if a character repeats.
    ///
    /// # Example
    ///
    /// ```
    /// use base64url::Alphabet;
    ///
    /// let reversed: String = base64url::ALPHABET.chars().rev().collect();
    /// let alphabet = Alphabet::new(&reversed).unwrap();
    /// assert_eq!(alphabet.char_at(0), '_');
    /// assert_eq!(alphabet.digit_of_char('A'), Some(63));
    /// ```
    pub fn new(value: &str) -> Result<Self, Base64UrlError> {
        validate_alphabet(value)?;
        Ok(Self::from_validated(value))
    }

    /// Like [`Alphabet::new`], for alphabets held as raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidArgument`] if `value` is not UTF-8, otherwise
    /// the same errors as [`Alphabet::new`].
    pub fn from_bytes(value: &[u8]) -> Result<Self, Base64UrlError> {
        let value = std::str::from_utf8(value).map_err(|_| {
            Base64UrlError::InvalidArgument("The alphabet must be a string".to_string())
        })?;
        Self::new(value)
    }

    // Caller guarantees `value` passed `validate_alphabet` (64 ASCII characters).
    fn from_validated(value: &str) -> Self {
        let mut chars = ['\0'; 64];
        let mut bytes = [0u8; 64];
        let mut digits = [None; 256];
        for (i, &byte) in value.as_bytes().iter().take(64).enumerate() {
            chars[i] = char::from(byte);
            bytes[i] = byte;
            digits[byte as usize] = Some(i as u8);
        }
        Self {
            symbols: value.to_string(),
            chars,
            bytes,
            digits,
        }
    }

    /// The alphabet as a 64-character string.
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// Character for `digit`. Only the low 6 bits of `digit` are used.
    #[inline]
    pub fn char_at(&self, digit: u8) -> char {
        self.chars[(digit & 0x3f) as usize]
    }

    /// Byte for `digit`. Only the low 6 bits of `digit` are used.
    #[inline]
    pub fn byte_at(&self, digit: u8) -> u8 {
        self.bytes[(digit & 0x3f) as usize]
    }

    /// Digit value of `character`, or `None` if it is not part of this alphabet.
    #[inline]
    pub fn digit_of_char(&self, character: char) -> Option<u8> {
        u8::try_from(character)
            .ok()
            .and_then(|byte| self.digits[byte as usize])
    }

    /// Digit value of `byte`, or `None` if it is not part of this alphabet.
    #[inline]
    pub fn digit_of_byte(&self, byte: u8) -> Option<u8> {
        self.digits[byte as usize]
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::from_validated(ALPHABET)
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.symbols).finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbols)
    }
}

impl FromStr for Alphabet {
    type Err = Base64UrlError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Alphabet {
    type Error = Base64UrlError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl AsRef<str> for Alphabet {
    fn as_ref(&self) -> &str {
        &self.symbols
    }
}

/// Checks that `value` is a usable alphabet: 64 distinct characters, each taken
/// from the default alphabet's character set.
///
/// # Errors
///
/// Returns the first violation found, scanning left to right.
pub fn validate_alphabet(value: &str) -> Result<(), Base64UrlError> {
    let length = value.chars().count();
    if length != 64 {
        return Err(Base64UrlError::AlphabetLength(length));
    }
    let mut seen = [false; 256];
    for (index, character) in value.chars().enumerate() {
        if !in_reference_set(character) {
            return Err(Base64UrlError::InvalidAlphabetCharacter { character, index });
        }
        let slot = &mut seen[character as usize];
        if *slot {
            return Err(Base64UrlError::DuplicateAlphabetCharacter { character, index });
        }
        *slot = true;
    }
    Ok(())
}

/// Non-failing form of [`validate_alphabet`].
///
/// # Example
///
/// ```
/// use base64url::is_alphabet;
///
/// assert!(is_alphabet(base64url::ALPHABET));
/// assert!(!is_alphabet("ABC"));
/// ```
pub fn is_alphabet(value: &str) -> bool {
    validate_alphabet(value).is_ok()
}
