use avm_common::{AvmError, Bytes, constants::MAX_BYTES_SIZE};

fn bytes(value: &[u8]) -> Bytes {
    Bytes::from_slice(value).unwrap()
}

#[test]
fn length_limit() {
    assert_eq!(Bytes::new(vec![0u8; MAX_BYTES_SIZE]).unwrap().len(), MAX_BYTES_SIZE);
    assert_eq!(
        Bytes::new(vec![0u8; MAX_BYTES_SIZE + 1]),
        Err(AvmError::LengthExceeded {
            len: MAX_BYTES_SIZE + 1,
            max: MAX_BYTES_SIZE
        })
    );
    let half = bytes(&[1; MAX_BYTES_SIZE / 2]);
    assert!(half.concat(&half).is_ok());
    assert!(half.concat(&half).unwrap().concat(&bytes(&[1])).is_err());
}

#[test]
fn python_like_slicing() {
    let value = bytes(b"hello, world");
    assert_eq!(value.slice(Some(0), Some(5)).unwrap(), bytes(b"hello"));
    assert_eq!(value.slice(Some(-5), None).unwrap(), bytes(b"world"));
    assert_eq!(value.slice(None, Some(-7)).unwrap(), bytes(b"hello"));
    assert_eq!(value.slice(Some(5), Some(2)).unwrap(), Bytes::empty());
    assert!(value.slice(Some(0), Some(13)).is_err());
    assert_eq!(value.at(-1).unwrap(), bytes(b"d"));
    assert!(matches!(value.at(12), Err(AvmError::IndexOutOfBounds { .. })));
}

#[test]
fn bitwise_ops_align_right() {
    let a = bytes(&[0x0f, 0xf0]);
    let b = bytes(&[0xff]);
    assert_eq!(a.bitwise_and(&b), bytes(&[0x00, 0xf0]));
    assert_eq!(a.bitwise_or(&b), bytes(&[0x0f, 0xff]));
    assert_eq!(a.bitwise_xor(&b), bytes(&[0x0f, 0x0f]));
    assert_eq!(bytes(&[0x01]).bitwise_invert(), bytes(&[0xfe]));
}

#[test]
fn hex_and_text() {
    assert_eq!(Bytes::from_hex("0xdead").unwrap(), bytes(&[0xde, 0xad]));
    assert_eq!(Bytes::from_hex("beef").unwrap().to_hex(), "beef");
    assert!(Bytes::from_hex("xyz").is_err());
    assert_eq!(Bytes::try_from("hi").unwrap().as_str().unwrap(), "hi");
    assert!(bytes(&[0xff]).as_str().is_err());
}
