//! URL-safe base64 encoding and decoding.
//!
//! This crate provides an unpadded base64url codec with support for:
//! - Custom 64-character alphabets drawn from the URL-safe character set
//! - Encoding to alphabet bytes or to `String`, over optional `[start, end)` ranges
//! - UTF-8 text round-trips
//! - Signed integers and big integers as positional base-64 numerals
//!
//! # Example
//!
//! ```
//! use base64url::{decode_from_string, encode_to_string};
//!
//! let data = b"hello world";
//! let encoded = encode_to_string(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ");
//! let decoded = decode_from_string(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod big_int;
mod codec;
mod constants;
mod decode;
mod encode;
mod error;
mod global;
mod int;
mod numeral;
mod range;

pub use alphabet::{is_alphabet, validate_alphabet, Alphabet};
pub use codec::Base64Url;
pub use constants::{ALPHABET, ALPHABET_BYTES, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER, NEGATIVE_SIGN};
pub use error::{Base64UrlError, ErrorKind};
pub use global::{
    decode, decode_big_int, decode_from_string, decode_from_string_range, decode_int,
    decode_range, decode_text, default_codec, encode, encode_big_int, encode_big_int_str,
    encode_int, encode_number, encode_range, encode_text, encode_to_string,
    encode_to_string_range, is_base64url, is_base64url_string,
};
pub use num_bigint::BigInt;
