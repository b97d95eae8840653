use avm_common::{
    base32::{decode, decode_address, encode, encode_address},
    constants::ADDRESS_TEXT_LENGTH,
};

macro_rules! test_round_trip {
    ($input:expr, $expected:expr) => {
        assert_eq!(encode($input), $expected);
        assert_eq!(decode($expected).unwrap(), $input);
    };
}

#[test]
fn test_rfc4648_round_trips() {
    test_round_trip!(b"", "");
    test_round_trip!(b"f", "MY");
    test_round_trip!(b"fo", "MZXQ");
    test_round_trip!(b"foo", "MZXW6");
    test_round_trip!(b"foob", "MZXW6YQ");
    test_round_trip!(b"fooba", "MZXW6YTB");
    test_round_trip!(b"foobar", "MZXW6YTBOI");
}

#[test]
fn test_impossible_lengths_are_rejected() {
    for text in ["M", "MYA", "MZXW6Y", "MZXW6YTBA"] {
        assert!(decode(text).is_err(), "{text} decoded");
    }
}

#[test]
fn test_address_text() {
    for seed in [0u8, 1, 0x7f, 0xff] {
        let key = [seed; 32];
        let text = encode_address(&key);
        assert_eq!(text.len(), ADDRESS_TEXT_LENGTH);
        assert_eq!(decode_address(&text).unwrap(), key);
    }
    assert!(decode_address(&"A".repeat(ADDRESS_TEXT_LENGTH)).is_err());
}
