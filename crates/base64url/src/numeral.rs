//! Positional base-64 numerals: the digit layout shared by the integer encodings.

use crate::alphabet::Alphabet;
use crate::constants::NEGATIVE_SIGN;
use crate::Base64UrlError;

/// Renders little-endian base-64 digits most significant first, with an
/// optional sign prefix. An empty digit list renders as the zero digit.
pub(crate) fn format_numeral(alphabet: &Alphabet, negative: bool, digits_le: &[u8]) -> String {
    let mut out = String::with_capacity(digits_le.len() + 1);
    if negative {
        out.push(NEGATIVE_SIGN);
    }
    if digits_le.is_empty() {
        out.push(alphabet.char_at(0));
    }
    out.extend(digits_le.iter().rev().map(|&digit| alphabet.char_at(digit)));
    out
}

/// A numeral split into its sign and digit characters.
pub(crate) struct Numeral<'a> {
    pub(crate) negative: bool,
    body: &'a str,
    offset: usize,
}

/// Splits off a leading sign. A lone sign character is not a sign: it is left
/// in the body and rejected as a digit.
pub(crate) fn parse_numeral(input: &str) -> Numeral<'_> {
    match input.strip_prefix(NEGATIVE_SIGN) {
        Some(body) if !body.is_empty() => Numeral {
            negative: true,
            body,
            offset: 1,
        },
        _ => Numeral {
            negative: false,
            body: input,
            offset: 0,
        },
    }
}

impl<'a> Numeral<'a> {
    /// Digit values, most significant first; the first unknown character fails
    /// with its index in the original input.
    pub(crate) fn digits(
        &self,
        alphabet: &'a Alphabet,
    ) -> impl Iterator<Item = Result<u8, Base64UrlError>> + 'a {
        let offset = self.offset;
        self.body
            .chars()
            .enumerate()
            .map(move |(position, character)| {
                alphabet
                    .digit_of_char(character)
                    .ok_or(Base64UrlError::InvalidCharacter {
                        character,
                        index: offset + position,
                    })
            })
    }
}
