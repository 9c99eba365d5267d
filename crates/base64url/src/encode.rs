//! Byte-packing encoder: 3 input bytes -> 4 output units, unpadded tail.

use crate::alphabet::Alphabet;

/// Output container for encoded units.
pub(crate) trait Sink {
    fn with_capacity(capacity: usize) -> Self;
    fn push_digit(&mut self, alphabet: &Alphabet, digit: u8);
}

impl Sink for Vec<u8> {
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn push_digit(&mut self, alphabet: &Alphabet, digit: u8) {
        self.push(alphabet.byte_at(digit));
    }
}

impl Sink for String {
    fn with_capacity(capacity: usize) -> Self {
        String::with_capacity(capacity)
    }

    #[inline]
    fn push_digit(&mut self, alphabet: &Alphabet, digit: u8) {
        self.push(alphabet.char_at(digit));
    }
}

#[inline]
fn sextet(number: u32, shift: u32) -> u8 {
    ((number >> shift) & 0x3f) as u8
}

/// Number of output units for `length` input bytes: `ceil(4 * length / 3)`.
pub(crate) fn encoded_len(length: usize) -> usize {
    let tail = match length % 3 {
        0 => 0,
        1 => 2,
        _ => 3,
    };
    length / 3 * 4 + tail
}

pub(crate) fn encode_into<S: Sink>(alphabet: &Alphabet, input: &[u8]) -> S {
    let mut out = S::with_capacity(encoded_len(input.len()));
    let mut blocks = input.chunks_exact(3);

    for block in &mut blocks {
        let number =
            (u32::from(block[0]) << 16) | (u32::from(block[1]) << 8) | u32::from(block[2]);
        out.push_digit(alphabet, sextet(number, 18));
        out.push_digit(alphabet, sextet(number, 12));
        out.push_digit(alphabet, sextet(number, 6));
        out.push_digit(alphabet, sextet(number, 0));
    }

    match *blocks.remainder() {
        [o1] => {
            let number = u32::from(o1);
            out.push_digit(alphabet, sextet(number, 2));
            out.push_digit(alphabet, sextet(number << 4, 0));
        }
        [o1, o2] => {
            let number = (u32::from(o1) << 8) | u32::from(o2);
            out.push_digit(alphabet, sextet(number, 10));
            out.push_digit(alphabet, sextet(number, 4));
            out.push_digit(alphabet, sextet(number << 2, 0));
        }
        // Block aligned.
        _ => {}
    }

    out
}
