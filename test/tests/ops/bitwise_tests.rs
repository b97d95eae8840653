use avm_common::{AvmError, Bytes, Uint64, types::StackValue};
use avm_ops::{bitwise_and, bitwise_invert, bitwise_or, bitwise_xor, getbit, getbyte, setbit, setbyte};

fn bytes(value: &[u8]) -> Bytes {
    Bytes::from_slice(value).unwrap()
}

#[test]
fn bit_order_differs_between_stack_types() {
    // uint64 bit 0 is the least significant bit
    assert_eq!(getbit(1u64, 0u64).unwrap(), Uint64::ONE);
    assert_eq!(getbit(1u64, 63u64).unwrap(), Uint64::ZERO);
    // byte array bit 0 is the leftmost bit
    assert_eq!(getbit(bytes(&[0x01]), 7u64).unwrap(), Uint64::ONE);
    assert_eq!(getbit(bytes(&[0x01]), 0u64).unwrap(), Uint64::ZERO);
    assert_eq!(getbit(bytes(&[0x80, 0x00]), 0u64).unwrap(), Uint64::ONE);
}

#[test]
fn bit_indices_are_bounded() {
    assert!(matches!(
        getbit(1u64, 64u64),
        Err(AvmError::IndexOutOfBounds { .. })
    ));
    assert!(matches!(
        getbit(bytes(&[0xff]), 8u64),
        Err(AvmError::IndexOutOfBounds { .. })
    ));
}

#[test]
fn setbit_keeps_stack_type() {
    assert_eq!(
        setbit(0u64, 3u64, 1u64).unwrap(),
        StackValue::Uint64(Uint64::new(8))
    );
    assert_eq!(
        setbit(bytes(&[0x00, 0x00]), 3u64, 1u64).unwrap(),
        StackValue::Bytes(bytes(&[0x10, 0x00]))
    );
    assert_eq!(
        setbit(bytes(&[0xff]), 0u64, 0u64).unwrap(),
        StackValue::Bytes(bytes(&[0x7f]))
    );
    assert_eq!(
        setbit(0u64, 0u64, 2u64).unwrap_err().to_string(),
        "setbit value > 1"
    );
}

#[test]
fn byte_access() {
    assert_eq!(getbyte("abc", 1u64).unwrap(), Uint64::new(u64::from(b'b')));
    assert!(getbyte("abc", 3u64).is_err());
    assert_eq!(setbyte("abc", 0u64, u64::from(b'x')).unwrap(), bytes(b"xbc"));
    assert_eq!(
        setbyte("abc", 0u64, 256u64).unwrap_err().to_string(),
        "setbyte value > 255"
    );
}

#[test]
fn byte_logic_pads_shorter_operand() {
    assert_eq!(bitwise_invert(bytes(&[0x01])).unwrap(), bytes(&[0xfe]));
    assert_eq!(
        bitwise_and(bytes(&[0xff, 0x0f]), bytes(&[0xf0])).unwrap(),
        bytes(&[0x00, 0x00])
    );
    assert_eq!(
        bitwise_or(bytes(&[0xf0, 0x00]), bytes(&[0x0f])).unwrap(),
        bytes(&[0xf0, 0x0f])
    );
    assert_eq!(
        bitwise_xor(bytes(&[0xff]), bytes(&[0x0f])).unwrap(),
        bytes(&[0xf0])
    );
}
