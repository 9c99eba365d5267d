//! Tests for byte encoding (encode, encode_to_string and their range forms).

use base64url::{encode, encode_range, encode_to_string, encode_to_string_range, Base64Url};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    for _ in 0..100 {
        let blob = generate_blob();
        let expected = base64url_encode(&blob);
        assert_eq!(
            encode_to_string(&blob),
            expected,
            "Failed for blob of length {}",
            blob.len()
        );
        assert_eq!(encode(&blob), expected.as_bytes());
    }
}

#[test]
fn empty_input() {
    assert_eq!(encode(b""), b"");
    assert_eq!(encode_to_string(b""), "");
}

#[test]
fn single_byte() {
    assert_eq!(encode_to_string(b"f"), "Zg");
}

#[test]
fn two_bytes() {
    assert_eq!(encode_to_string(b"fo"), "Zm8");
}

#[test]
fn three_bytes() {
    assert_eq!(encode_to_string(b"foo"), "Zm9v");
}

#[test]
fn hello_world() {
    assert_eq!(encode_to_string(b"hello world"), "aGVsbG8gd29ybGQ");
}

#[test]
fn url_safe_chars() {
    assert_eq!(encode_to_string(&[0xfb, 0xff, 0xfe]), "-__-");
    assert_eq!(encode_to_string(&[0xfb, 0xff]), "-_8");
}

#[test]
fn never_pads() {
    for length in 0..10 {
        let encoded = encode_to_string(&vec![0xab; length]);
        assert!(!encoded.contains('='));
        assert_eq!(encoded.len(), (4 * length).div_ceil(3));
    }
}

#[test]
fn with_range() {
    let data = b"xxhelloyy";
    assert_eq!(encode_range(data, Some(2), Some(7)), b"aGVsbG8");
    assert_eq!(encode_to_string_range(data, Some(2), Some(-2)), "aGVsbG8");
    assert_eq!(encode_to_string_range(data, None, None), encode_to_string(data));
}

#[test]
fn range_is_clamped() {
    let data = b"hello";
    assert_eq!(
        encode_range(data, Some(-2), Some(1_000_000)),
        encode(&data[3..])
    );
    assert_eq!(encode_range(data, Some(-100), None), encode(data));
    assert_eq!(encode_range(data, Some(10), Some(20)), b"");
}

#[test]
fn end_before_start_is_empty() {
    assert_eq!(encode_range(b"hello", Some(4), Some(1)), b"");
    assert_eq!(encode_to_string_range(b"hello", Some(-1), Some(-3)), "");
}

#[test]
fn custom_alphabet_output_is_permuted() {
    let reversed: String = base64url::ALPHABET.chars().rev().collect();
    let codec = Base64Url::new(Some(&reversed)).unwrap();
    let expected: String = "aGVsbG8gd29ybGQ"
        .chars()
        .map(|c| {
            let digit = base64url::ALPHABET.find(c).unwrap();
            reversed.as_bytes()[digit] as char
        })
        .collect();
    assert_eq!(codec.encode_to_string(b"hello world"), expected);
    assert_eq!(codec.encode(b"hello world"), expected.as_bytes());
}

/// Simple base64url encoding for test verification (no external dependency)
fn base64url_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

    let mut result = String::new();
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);

        result.push(ALPHABET[(b0 >> 2) as usize] as char);
        result.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);
        if chunk.len() > 1 {
            result.push(ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        }
        if chunk.len() > 2 {
            result.push(ALPHABET[(b2 & 0x3f) as usize] as char);
        }
    }
    result
}
