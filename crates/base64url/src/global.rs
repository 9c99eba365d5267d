//! Free functions bound to a process-wide default-alphabet codec.

use std::any::Any;
use std::sync::OnceLock;

use num_bigint::BigInt;

use crate::codec::Base64Url;
use crate::Base64UrlError;

static DEFAULT: OnceLock<Base64Url> = OnceLock::new();

/// The shared codec for the default alphabet.
pub fn default_codec() -> &'static Base64Url {
    DEFAULT.get_or_init(Base64Url::default)
}

/// Whether `value` is a [`Base64Url`] codec.
///
/// ```
/// use base64url::{is_base64url, Base64Url};
///
/// assert!(is_base64url(&Base64Url::default()));
/// assert!(!is_base64url(&"aGVsbG8"));
/// ```
pub fn is_base64url(value: &dyn Any) -> bool {
    value.is::<Base64Url>()
}

/// Whether every character of `value` belongs to the default alphabet.
/// The empty string is valid.
pub fn is_base64url_string(value: &str) -> bool {
    default_codec().is_valid_string(value)
}

/// [`Base64Url::encode`] with the default alphabet.
pub fn encode(input: &[u8]) -> Vec<u8> {
    default_codec().encode(input)
}

/// [`Base64Url::encode_range`] with the default alphabet.
pub fn encode_range(input: &[u8], start: Option<isize>, end: Option<isize>) -> Vec<u8> {
    default_codec().encode_range(input, start, end)
}

/// [`Base64Url::decode`] with the default alphabet.
pub fn decode(input: &[u8]) -> Result<Vec<u8>, Base64UrlError> {
    default_codec().decode(input)
}

/// [`Base64Url::decode_range`] with the default alphabet.
pub fn decode_range(
    input: &[u8],
    start: Option<isize>,
    end: Option<isize>,
) -> Result<Vec<u8>, Base64UrlError> {
    default_codec().decode_range(input, start, end)
}

/// [`Base64Url::encode_to_string`] with the default alphabet.
pub fn encode_to_string(input: &[u8]) -> String {
    default_codec().encode_to_string(input)
}

/// [`Base64Url::encode_to_string_range`] with the default alphabet.
pub fn encode_to_string_range(input: &[u8], start: Option<isize>, end: Option<isize>) -> String {
    default_codec().encode_to_string_range(input, start, end)
}

/// [`Base64Url::decode_from_string`] with the default alphabet.
pub fn decode_from_string(input: &str) -> Result<Vec<u8>, Base64UrlError> {
    default_codec().decode_from_string(input)
}

/// [`Base64Url::decode_from_string_range`] with the default alphabet.
pub fn decode_from_string_range(
    input: &str,
    start: Option<isize>,
    end: Option<isize>,
) -> Result<Vec<u8>, Base64UrlError> {
    default_codec().decode_from_string_range(input, start, end)
}

/// [`Base64Url::encode_text`] with the default alphabet.
pub fn encode_text(text: &str) -> String {
    default_codec().encode_text(text)
}

/// [`Base64Url::decode_text`] with the default alphabet.
pub fn decode_text(input: &str) -> Result<String, Base64UrlError> {
    default_codec().decode_text(input)
}

/// [`Base64Url::encode_int`] with the default alphabet.
pub fn encode_int(value: i64) -> Result<String, Base64UrlError> {
    default_codec().encode_int(value)
}

/// [`Base64Url::encode_number`] with the default alphabet.
pub fn encode_number(value: f64) -> Result<String, Base64UrlError> {
    default_codec().encode_number(value)
}

/// [`Base64Url::decode_int`] with the default alphabet.
pub fn decode_int(input: &str) -> Result<i64, Base64UrlError> {
    default_codec().decode_int(input)
}

/// [`Base64Url::encode_big_int`] with the default alphabet.
pub fn encode_big_int(value: &BigInt) -> String {
    default_codec().encode_big_int(value)
}

/// [`Base64Url::encode_big_int_str`] with the default alphabet.
pub fn encode_big_int_str(value: &str) -> Result<String, Base64UrlError> {
    default_codec().encode_big_int_str(value)
}

/// [`Base64Url::decode_big_int`] with the default alphabet.
pub fn decode_big_int(input: &str) -> Result<BigInt, Base64UrlError> {
    default_codec().decode_big_int(input)
}
