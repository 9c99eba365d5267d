//! The `Base64Url` codec: one alphabet plus the byte, string and text operations over it.

use std::fmt;

use log::debug;

use crate::alphabet::Alphabet;
use crate::constants::ALPHABET;
use crate::decode::decode_units;
use crate::encode::encode_into;
use crate::range::resolve_range;
use crate::Base64UrlError;

/// URL-safe, unpadded base64 codec over a configurable alphabet.
///
/// Lookup tables are built once at construction and only read afterwards, so a
/// codec can be shared freely between threads.
///
/// # Example
///
/// ```
/// use base64url::Base64Url;
///
/// let codec = Base64Url::default();
/// assert_eq!(codec.encode_to_string(b"hello world"), "aGVsbG8gd29ybGQ");
/// assert_eq!(codec.decode_from_string("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Base64Url {
    alphabet: Alphabet,
}

impl Base64Url {
    /// The default alphabet: `A-Z a-z 0-9 - _`.
    pub const ALPHABET: &'static str = ALPHABET;

    /// Creates a codec for `alphabet`, or for the default alphabet when `None`.
    ///
    /// # Errors
    ///
    /// Returns the validation error from [`Alphabet::new`] for a bad alphabet.
    pub fn new(alphabet: Option<&str>) -> Result<Self, Base64UrlError> {
        match alphabet {
            None => Ok(Self::default()),
            Some(value) => {
                let alphabet = Alphabet::new(value)?;
                debug!("built base64url codec for custom alphabet {value}");
                Ok(Self::with_alphabet(alphabet))
            }
        }
    }

    /// Creates a codec from an already validated alphabet.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    /// The alphabet as a 64-character string.
    pub fn alphabet(&self) -> &str {
        self.alphabet.as_str()
    }

    /// The alphabet together with its lookup tables.
    pub fn alphabet_table(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Encodes `input` into alphabet bytes.
    pub fn encode(&self, input: &[u8]) -> Vec<u8> {
        encode_into(&self.alphabet, input)
    }

    /// Encodes `input[start..end]` into alphabet bytes.
    ///
    /// Negative bounds count from the end of `input`; both are clamped into
    /// `[0, input.len()]` and `end < start` yields an empty result.
    ///
    /// ```
    /// use base64url::Base64Url;
    ///
    /// let codec = Base64Url::default();
    /// assert_eq!(codec.encode_range(b"xxhello", Some(2), None), b"aGVsbG8");
    /// assert_eq!(codec.encode_range(b"hello", Some(3), Some(1)), b"");
    /// ```
    pub fn encode_range(&self, input: &[u8], start: Option<isize>, end: Option<isize>) -> Vec<u8> {
        let range = resolve_range(input.len(), start, end);
        encode_into(&self.alphabet, &input[range])
    }

    /// Decodes alphabet bytes back into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidByte`] for the first byte outside the alphabet.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>, Base64UrlError> {
        self.decode_range(input, None, None)
    }

    /// Decodes `input[start..end]`, with the same bound rules as [`Base64Url::encode_range`].
    ///
    /// Error indices are positions in `input`, not in the selected range.
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidByte`] for the first byte outside the alphabet.
    pub fn decode_range(
        &self,
        input: &[u8],
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<Vec<u8>, Base64UrlError> {
        let range = resolve_range(input.len(), start, end);
        let offset = range.start;
        let units = &input[range];
        decode_units(&self.alphabet, units.iter().copied(), units.len(), offset)
    }

    /// Encodes `input` into a string.
    pub fn encode_to_string(&self, input: &[u8]) -> String {
        encode_into(&self.alphabet, input)
    }

    /// Encodes `input[start..end]` into a string.
    pub fn encode_to_string_range(
        &self,
        input: &[u8],
        start: Option<isize>,
        end: Option<isize>,
    ) -> String {
        let range = resolve_range(input.len(), start, end);
        encode_into(&self.alphabet, &input[range])
    }

    /// Decodes a string into raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidCharacter`] for the first character outside the alphabet.
    pub fn decode_from_string(&self, input: &str) -> Result<Vec<u8>, Base64UrlError> {
        self.decode_from_string_range(input, None, None)
    }

    /// Decodes the characters `[start, end)` of `input`.
    ///
    /// Bounds and error indices count characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidCharacter`] for the first character outside the alphabet.
    pub fn decode_from_string_range(
        &self,
        input: &str,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<Vec<u8>, Base64UrlError> {
        let length = if input.is_ascii() {
            input.len()
        } else {
            input.chars().count()
        };
        let range = resolve_range(length, start, end);
        let units = input.chars().skip(range.start).take(range.len());
        decode_units(&self.alphabet, units, range.len(), range.start)
    }

    /// Encodes the UTF-8 bytes of `text`.
    ///
    /// ```
    /// use base64url::Base64Url;
    ///
    /// let codec = Base64Url::default();
    /// let encoded = codec.encode_text("żółw");
    /// assert_eq!(codec.decode_text(&encoded).unwrap(), "żółw");
    /// ```
    pub fn encode_text(&self, text: &str) -> String {
        encode_into(&self.alphabet, text.as_bytes())
    }

    /// Decodes `input` and interprets the bytes as UTF-8, replacing invalid
    /// sequences with U+FFFD.
    ///
    /// # Errors
    ///
    /// Returns [`Base64UrlError::InvalidCharacter`] for the first character outside the alphabet.
    pub fn decode_text(&self, input: &str) -> Result<String, Base64UrlError> {
        let bytes = self.decode_from_string(input)?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        })
    }

    /// Whether every character of `value` belongs to this codec's alphabet.
    pub fn is_valid_string(&self, value: &str) -> bool {
        value
            .chars()
            .all(|character| self.alphabet.digit_of_char(character).is_some())
    }
}

impl fmt::Debug for Base64Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Base64Url")
            .field("alphabet", &self.alphabet.as_str())
            .finish()
    }
}

impl fmt::Display for Base64Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base64URL({})", self.alphabet)
    }
}
