//! Arbitrary-precision integer encoding, same numeral layout as the safe-integer one.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

use crate::codec::Base64Url;
use crate::numeral::{format_numeral, parse_numeral};
use crate::Base64UrlError;

impl Base64Url {
    /// Encodes an integer of any magnitude.
    ///
    /// ```
    /// use base64url::{Base64Url, BigInt};
    ///
    /// let codec = Base64Url::default();
    /// let value: BigInt = "-18446744073709551616".parse().unwrap();
    /// let encoded = codec.encode_big_int(&value);
    /// assert!(encoded.starts_with('~'));
    /// assert_eq!(codec.decode_big_int(&encoded).unwrap(), value);
    /// ```
    pub fn encode_big_int(&self, value: &BigInt) -> String {
        let magnitude = value.magnitude();
        let digits = if magnitude.is_zero() {
            Vec::new()
        } else {
            magnitude.to_radix_le(64)
        };
        format_numeral(
            self.alphabet_table(),
            value.sign() == Sign::Minus,
            &digits,
        )
    }

    /// Parses decimal text as an integer and encodes it.
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidArgument`] if `value` is not a decimal integer.
    pub fn encode_big_int_str(&self, value: &str) -> Result<String, Base64UrlError> {
        let invalid =
            || Base64UrlError::InvalidArgument(format!("Cannot convert {value} to a BigInt"));
        let text = value.trim();
        // `from_str_radix` also accepts `_` separators, which are not decimal text.
        let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }
        let parsed: BigInt = text.parse().map_err(|_| invalid())?;
        Ok(self.encode_big_int(&parsed))
    }

    /// Decodes a numeral produced by [`Base64Url::encode_big_int`].
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidCharacter`] for a character outside the alphabet.
    pub fn decode_big_int(&self, input: &str) -> Result<BigInt, Base64UrlError> {
        let numeral = parse_numeral(input);
        let magnitude = numeral
            .digits(self.alphabet_table())
            .try_fold(BigUint::zero(), |acc, digit| {
                Ok::<_, Base64UrlError>(acc * 64u32 + u32::from(digit?))
            })?;
        let sign = if numeral.negative {
            Sign::Minus
        } else {
            Sign::Plus
        };
        Ok(BigInt::from_biguint(sign, magnitude))
    }
}
