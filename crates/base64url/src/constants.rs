/// Default URL-safe base64 alphabet (`-` and `_` instead of `+` and `/`).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Default alphabet as a byte array (used for building the reference lookup at compile time).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Prefix marking a negative integer encoding.
pub const NEGATIVE_SIGN: char = '~';

/// Largest integer exactly representable as an IEEE-754 double (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Smallest integer exactly representable as an IEEE-754 double (`-(2^53 - 1)`).
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;
