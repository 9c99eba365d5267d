//! Tests for alphabet validation and codec construction.

use base64url::{
    is_alphabet, is_base64url, is_base64url_string, validate_alphabet, Alphabet, Base64Url,
    Base64UrlError, ErrorKind, ALPHABET,
};

fn replace_at(index: usize, character: char) -> String {
    ALPHABET
        .chars()
        .enumerate()
        .map(|(i, c)| if i == index { character } else { c })
        .collect()
}

#[test]
fn default_alphabet() {
    let codec = Base64Url::default();
    assert_eq!(codec.alphabet(), ALPHABET);
    assert_eq!(Base64Url::ALPHABET, ALPHABET);
    assert_eq!(Base64Url::new(None).unwrap(), codec);
    assert_eq!(Alphabet::default().as_str(), ALPHABET);
}

#[test]
fn lookup_tables() {
    let alphabet = Alphabet::default();
    assert_eq!(alphabet.char_at(0), 'A');
    assert_eq!(alphabet.char_at(63), '_');
    assert_eq!(alphabet.byte_at(62), b'-');
    assert_eq!(alphabet.digit_of_char('a'), Some(26));
    assert_eq!(alphabet.digit_of_byte(b'9'), Some(61));
    assert_eq!(alphabet.digit_of_char('+'), None);
    assert_eq!(alphabet.digit_of_char('ł'), None);
    assert_eq!(alphabet.digit_of_byte(0xff), None);
}

#[test]
fn too_short() {
    let err = Base64Url::new(Some(&ALPHABET[..63])).unwrap_err();
    assert_eq!(err, Base64UrlError::AlphabetLength(63));
    assert_eq!(err.kind(), ErrorKind::RangeViolation);
}

#[test]
fn too_long() {
    let value = format!("{ALPHABET}A");
    assert_eq!(
        validate_alphabet(&value),
        Err(Base64UrlError::AlphabetLength(65))
    );
}

#[test]
fn length_counts_characters() {
    // 63 ASCII characters plus one two-byte character: 64 characters, 65 bytes.
    let value = format!("{}é", &ALPHABET[..63]);
    assert_eq!(
        validate_alphabet(&value),
        Err(Base64UrlError::InvalidAlphabetCharacter {
            character: 'é',
            index: 63
        })
    );
}

#[test]
fn duplicate_character() {
    let err = Alphabet::new(&replace_at(63, 'A')).unwrap_err();
    assert_eq!(
        err,
        Base64UrlError::DuplicateAlphabetCharacter {
            character: 'A',
            index: 63
        }
    );
    assert_eq!(err.kind(), ErrorKind::FormatError);
    assert_eq!(
        err.to_string(),
        "The character \"A\" at index 63 is already in the alphabet"
    );
}

#[test]
fn character_outside_reference_set() {
    let err = Alphabet::new(&replace_at(0, '+')).unwrap_err();
    assert_eq!(
        err,
        Base64UrlError::InvalidAlphabetCharacter {
            character: '+',
            index: 0
        }
    );
    assert_eq!(err.kind(), ErrorKind::FormatError);
}

#[test]
fn from_bytes() {
    assert!(Alphabet::from_bytes(ALPHABET.as_bytes()).is_ok());
    let mut bytes = ALPHABET.as_bytes().to_vec();
    bytes[10] = 0xff;
    let err = Alphabet::from_bytes(&bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn parse() {
    let reversed: String = ALPHABET.chars().rev().collect();
    let alphabet: Alphabet = reversed.parse().unwrap();
    assert_eq!(alphabet.as_str(), reversed);
    assert_eq!(alphabet.to_string(), reversed);
    assert!(Alphabet::try_from("short").is_err());

    let codec = Base64Url::with_alphabet(alphabet);
    assert_eq!(codec.alphabet(), reversed);
    assert_eq!(codec.to_string(), format!("Base64URL({reversed})"));
}

#[test]
fn predicates() {
    assert!(is_alphabet(ALPHABET));
    assert!(!is_alphabet(&ALPHABET[..63]));
    assert!(!is_alphabet(&replace_at(5, 'A')));
    assert!(!is_alphabet(&replace_at(5, '/')));

    assert!(is_base64url_string(""));
    assert!(is_base64url_string("aGVsbG8gd29ybGQ"));
    assert!(is_base64url_string("-_"));
    assert!(!is_base64url_string("Zg=="));
    assert!(!is_base64url_string("a+b"));

    assert!(is_base64url(&Base64Url::default()));
    assert!(!is_base64url(&ALPHABET));
    assert!(!is_base64url(&Alphabet::default()));
}

#[test]
fn instance_validity_uses_own_alphabet() {
    let codec = Base64Url::default();
    assert!(codec.is_valid_string("abc"));
    assert!(!codec.is_valid_string("ab c"));
}

#[test]
fn codec_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Base64Url>();
    assert_eq!(
        base64url::default_codec() as *const Base64Url,
        base64url::default_codec() as *const Base64Url
    );
}
