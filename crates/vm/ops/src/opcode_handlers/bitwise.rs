//! # Bit and byte access
//!
//! Includes the following opcodes:
//!   - `getbit`, `setbit`
//!   - `getbyte`, `setbyte`
//!   - `b&`, `b|`, `b^`, `b~`
//!
//! Bit indices run in opposite directions for the two stack types. On a
//! `uint64`, bit 0 is the least significant bit. On a byte array, bit 0 is the
//! most significant bit of the first byte.

use avm_common::{
    AvmError, Bytes, Uint64,
    constants::BITS_IN_BYTE,
    types::{BytesCompat, StackValue},
};

/// Byte offset and mask of bit `index` of a byte array.
fn bit_position(bytes: &Bytes, index: u64) -> Result<(usize, u8), AvmError> {
    let bit_len = bytes.len() * BITS_IN_BYTE;
    let position = usize::try_from(index)
        .ok()
        .filter(|position| *position < bit_len)
        .ok_or_else(|| AvmError::index_out_of_bounds(index, bit_len))?;
    Ok((position / BITS_IN_BYTE, 0x80 >> (position % BITS_IN_BYTE)))
}

fn uint64_bit_mask(index: u64) -> Result<u64, AvmError> {
    if index >= u64::from(u64::BITS) {
        return Err(AvmError::index_out_of_bounds(index, u64::BITS as usize));
    }
    Ok(1 << index)
}

fn byte_index(bytes: &Bytes, index: Uint64) -> Result<usize, AvmError> {
    usize::try_from(index.as_u64())
        .ok()
        .filter(|index| *index < bytes.len())
        .ok_or_else(|| AvmError::index_out_of_bounds(index.as_u64(), bytes.len()))
}

pub fn getbit(value: impl Into<StackValue>, index: impl Into<Uint64>) -> Result<Uint64, AvmError> {
    let index = index.into().as_u64();
    match value.into() {
        StackValue::Uint64(value) => {
            let mask = uint64_bit_mask(index)?;
            Ok(Uint64::from(value.as_u64() & mask != 0))
        }
        StackValue::Bytes(bytes) => {
            let (offset, mask) = bit_position(&bytes, index)?;
            Ok(Uint64::from(bytes.as_slice()[offset] & mask != 0))
        }
    }
}

/// Returns `value` with bit `index` set to `bit`, keeping its stack type.
pub fn setbit(
    value: impl Into<StackValue>,
    index: impl Into<Uint64>,
    bit: impl Into<Uint64>,
) -> Result<StackValue, AvmError> {
    let index = index.into().as_u64();
    let set = match bit.into().as_u64() {
        0 => false,
        1 => true,
        _ => return Err(AvmError::ValueTooLarge("setbit value > 1".to_string())),
    };
    match value.into() {
        StackValue::Uint64(value) => {
            let mask = uint64_bit_mask(index)?;
            let updated = if set {
                value.as_u64() | mask
            } else {
                value.as_u64() & !mask
            };
            Ok(StackValue::Uint64(Uint64::new(updated)))
        }
        StackValue::Bytes(bytes) => {
            let (offset, mask) = bit_position(&bytes, index)?;
            let mut updated = bytes.to_vec();
            if set {
                updated[offset] |= mask;
            } else {
                updated[offset] &= !mask;
            }
            Ok(StackValue::Bytes(Bytes::new(updated)?))
        }
    }
}

pub fn getbyte(bytes: impl BytesCompat, index: impl Into<Uint64>) -> Result<Uint64, AvmError> {
    let bytes = bytes.to_avm_bytes()?;
    let index = byte_index(&bytes, index.into())?;
    Ok(Uint64::from(bytes.as_slice()[index]))
}

pub fn setbyte(
    bytes: impl BytesCompat,
    index: impl Into<Uint64>,
    value: impl Into<Uint64>,
) -> Result<Bytes, AvmError> {
    let bytes = bytes.to_avm_bytes()?;
    let index = byte_index(&bytes, index.into())?;
    let value = u8::try_from(value.into().as_u64())
        .map_err(|_| AvmError::ValueTooLarge("setbyte value > 255".to_string()))?;
    let mut updated = bytes.to_vec();
    updated[index] = value;
    Bytes::new(updated)
}

/// `b&`: operands are left padded with zeros to the longer length.
pub fn bitwise_and(a: impl BytesCompat, b: impl BytesCompat) -> Result<Bytes, AvmError> {
    Ok(a.to_avm_bytes()?.bitwise_and(&b.to_avm_bytes()?))
}

/// `b|`
pub fn bitwise_or(a: impl BytesCompat, b: impl BytesCompat) -> Result<Bytes, AvmError> {
    Ok(a.to_avm_bytes()?.bitwise_or(&b.to_avm_bytes()?))
}

/// `b^`
pub fn bitwise_xor(a: impl BytesCompat, b: impl BytesCompat) -> Result<Bytes, AvmError> {
    Ok(a.to_avm_bytes()?.bitwise_xor(&b.to_avm_bytes()?))
}

/// `b~`
pub fn bitwise_invert(a: impl BytesCompat) -> Result<Bytes, AvmError> {
    Ok(a.to_avm_bytes()?.bitwise_invert())
}
