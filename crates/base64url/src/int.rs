//! Signed safe-integer encoding as positional base-64 numerals.

use crate::codec::Base64Url;
use crate::constants::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use crate::numeral::{format_numeral, parse_numeral};
use crate::Base64UrlError;

impl Base64Url {
    /// Encodes a safe integer, most significant digit first. Negative values
    /// get a `~` prefix; zero is the alphabet's first character.
    ///
    /// # Errors
    ///
    /// Returns a range error if `value` is outside `[MIN_SAFE_INTEGER, MAX_SAFE_INTEGER]`.
    ///
    /// # Example
    ///
    /// ```
    /// use base64url::Base64Url;
    ///
    /// let codec = Base64Url::default();
    /// assert_eq!(codec.encode_int(0).unwrap(), "A");
    /// assert_eq!(codec.encode_int(64).unwrap(), "BA");
    /// assert_eq!(codec.encode_int(-1).unwrap(), "~B");
    /// ```
    pub fn encode_int(&self, value: i64) -> Result<String, Base64UrlError> {
        if value < MIN_SAFE_INTEGER {
            return Err(Base64UrlError::BelowMinSafeInteger);
        }
        if value > MAX_SAFE_INTEGER {
            return Err(Base64UrlError::AboveMaxSafeInteger);
        }
        let mut magnitude = value.unsigned_abs();
        let mut digits = Vec::with_capacity(9);
        while magnitude > 0 {
            digits.push((magnitude % 64) as u8);
            magnitude /= 64;
        }
        Ok(format_numeral(self.alphabet_table(), value < 0, &digits))
    }

    /// Truncates `value` toward zero and encodes it like [`Base64Url::encode_int`].
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidArgument`] for NaN, and a range error for
    /// infinities or values outside the safe-integer range.
    pub fn encode_number(&self, value: f64) -> Result<String, Base64UrlError> {
        if value.is_nan() {
            return Err(Base64UrlError::InvalidArgument(
                "The value must be a number".to_string(),
            ));
        }
        let value = value.trunc();
        if value < MIN_SAFE_INTEGER as f64 {
            return Err(Base64UrlError::BelowMinSafeInteger);
        }
        if value > MAX_SAFE_INTEGER as f64 {
            return Err(Base64UrlError::AboveMaxSafeInteger);
        }
        self.encode_int(value as i64)
    }

    /// Decodes a numeral produced by [`Base64Url::encode_int`].
    ///
    /// An empty string decodes to zero, and `~` followed by zero digits decodes to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidCharacter`] for a character outside the
    /// alphabet, and a range error if the value leaves the safe-integer range.
    pub fn decode_int(&self, input: &str) -> Result<i64, Base64UrlError> {
        let numeral = parse_numeral(input);
        let mut result: i64 = 0;
        for digit in numeral.digits(self.alphabet_table()) {
            result = result * 64 + i64::from(digit?);
            if result > MAX_SAFE_INTEGER {
                return Err(if numeral.negative {
                    Base64UrlError::BelowMinSafeInteger
                } else {
                    Base64UrlError::AboveMaxSafeInteger
                });
            }
        }
        Ok(if numeral.negative { -result } else { result })
    }
}
