//! Byte-packing decoder: 4 input units -> 3 output bytes, unpadded tail.

use log::trace;

use crate::alphabet::Alphabet;
use crate::Base64UrlError;

/// One encoded input unit: a byte from a binary buffer or a character from text.
pub(crate) trait Unit: Copy {
    fn digit(self, alphabet: &Alphabet) -> Option<u8>;
    fn invalid(self, index: usize) -> Base64UrlError;
}

impl Unit for u8 {
    #[inline]
    fn digit(self, alphabet: &Alphabet) -> Option<u8> {
        alphabet.digit_of_byte(self)
    }

    fn invalid(self, index: usize) -> Base64UrlError {
        Base64UrlError::InvalidByte { byte: self, index }
    }
}

impl Unit for char {
    #[inline]
    fn digit(self, alphabet: &Alphabet) -> Option<u8> {
        alphabet.digit_of_char(self)
    }

    fn invalid(self, index: usize) -> Base64UrlError {
        Base64UrlError::InvalidCharacter {
            character: self,
            index,
        }
    }
}

/// Number of whole bytes carried by `length` units: `floor(3 * length / 4)`.
pub(crate) fn decoded_len(length: usize) -> usize {
    let tail = match length % 4 {
        2 => 1,
        3 => 2,
        _ => 0,
    };
    length / 4 * 3 + tail
}

/// Decodes `units`, reporting positions as `offset + i`.
///
/// Every unit is validated, including a lone trailing one that contributes no
/// output byte.
pub(crate) fn decode_units<U, I>(
    alphabet: &Alphabet,
    units: I,
    length: usize,
    offset: usize,
) -> Result<Vec<u8>, Base64UrlError>
where
    U: Unit + std::fmt::Debug,
    I: IntoIterator<Item = U>,
{
    let mut out = Vec::with_capacity(decoded_len(length));
    let mut block = [0u32; 4];
    let mut pending = 0;

    for (position, unit) in units.into_iter().enumerate() {
        let Some(digit) = unit.digit(alphabet) else {
            let index = offset + position;
            trace!("rejecting {unit:?} at index {index}");
            return Err(unit.invalid(index));
        };
        block[pending] = u32::from(digit);
        pending += 1;
        if pending == 4 {
            let number = (block[0] << 18) | (block[1] << 12) | (block[2] << 6) | block[3];
            out.extend_from_slice(&[(number >> 16) as u8, (number >> 8) as u8, number as u8]);
            pending = 0;
        }
    }

    match pending {
        // Aligned, or a lone unit that carries no complete byte.
        0 | 1 => {}
        2 => {
            let number = (block[0] << 2) | (block[1] >> 4);
            out.push(number as u8);
        }
        3 => {
            let number = (block[0] << 10) | (block[1] << 4) | (block[2] >> 2);
            out.push((number >> 8) as u8);
            out.push(number as u8);
        }
        _ => unreachable!("a block is flushed as soon as it holds 4 digits"),
    }

    Ok(out)
}
