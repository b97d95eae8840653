//! # Byte array operations
//!
//! Includes the following opcodes:
//!   - `extract`, `extract3`
//!   - `extract_uint16`, `extract_uint32`, `extract_uint64`
//!   - `replace`
//!   - `substring`
//!   - `concat`, `len`
//!   - `itob`, `btoi`
//!   - `bzero`
//!   - `select`

use avm_common::{
    AvmError, Bytes, Uint64,
    constants::{MAX_BYTES_SIZE, UINT64_SIZE},
    types::{BytesCompat, StackValue},
};

/// `bytes[start..start + len]`, failing if the range leaves the array.
fn checked_range(bytes: &Bytes, start: u64, len: u64) -> Result<Bytes, AvmError> {
    let end = start
        .checked_add(len)
        .filter(|end| *end <= bytes.len() as u64)
        .ok_or_else(|| AvmError::index_out_of_bounds(start.saturating_add(len), bytes.len()))?;
    bytes.slice(Some(start as i64), Some(end as i64))
}

/// `length` bytes starting at `start`; without a length, everything from
/// `start` to the end.
pub fn extract(
    bytes: impl BytesCompat,
    start: impl Into<Uint64>,
    length: Option<Uint64>,
) -> Result<Bytes, AvmError> {
    let bytes = bytes.to_avm_bytes()?;
    let start = start.into().as_u64();
    let length = match length {
        Some(length) => length.as_u64(),
        None => (bytes.len() as u64)
            .checked_sub(start)
            .ok_or_else(|| AvmError::index_out_of_bounds(start, bytes.len()))?,
    };
    checked_range(&bytes, start, length)
}

fn extract_uint<const N: usize>(
    bytes: impl BytesCompat,
    start: impl Into<Uint64>,
) -> Result<Uint64, AvmError> {
    let bytes = bytes.to_avm_bytes()?;
    let word = checked_range(&bytes, start.into().as_u64(), N as u64)?;
    Uint64::from_bytes(word.as_slice())
}

pub fn extract_uint16(bytes: impl BytesCompat, start: impl Into<Uint64>) -> Result<Uint64, AvmError> {
    extract_uint::<2>(bytes, start)
}

pub fn extract_uint32(bytes: impl BytesCompat, start: impl Into<Uint64>) -> Result<Uint64, AvmError> {
    extract_uint::<4>(bytes, start)
}

pub fn extract_uint64(bytes: impl BytesCompat, start: impl Into<Uint64>) -> Result<Uint64, AvmError> {
    extract_uint::<UINT64_SIZE>(bytes, start)
}

/// Overwrites `bytes` from `start` with `replacement`; the length never
/// changes.
pub fn replace(
    bytes: impl BytesCompat,
    start: impl Into<Uint64>,
    replacement: impl BytesCompat,
) -> Result<Bytes, AvmError> {
    let bytes = bytes.to_avm_bytes()?;
    let replacement = replacement.to_avm_bytes()?;
    let start = start.into().as_u64();
    checked_range(&bytes, start, replacement.len() as u64)?;

    let start = start as usize;
    let mut updated = bytes.to_vec();
    updated[start..start + replacement.len()].copy_from_slice(replacement.as_slice());
    Bytes::new(updated)
}

/// `bytes[start..end]`.
pub fn substring(
    bytes: impl BytesCompat,
    start: impl Into<Uint64>,
    end: impl Into<Uint64>,
) -> Result<Bytes, AvmError> {
    let bytes = bytes.to_avm_bytes()?;
    let (start, end) = (start.into().as_u64(), end.into().as_u64());
    let len = end.checked_sub(start).ok_or_else(|| {
        AvmError::InvalidInput(format!("substring end {end} is before start {start}"))
    })?;
    checked_range(&bytes, start, len)
}

pub fn concat(a: impl BytesCompat, b: impl BytesCompat) -> Result<Bytes, AvmError> {
    a.to_avm_bytes()?.concat(&b.to_avm_bytes()?)
}

pub fn len(bytes: impl BytesCompat) -> Result<Uint64, AvmError> {
    Uint64::try_from(bytes.to_avm_bytes()?.len())
}

/// 8 byte big-endian encoding.
pub fn itob(value: impl Into<Uint64>) -> Bytes {
    value.into().to_bytes()
}

/// Big-endian decoding of at most 8 bytes; an empty array is 0.
pub fn btoi(bytes: impl BytesCompat) -> Result<Uint64, AvmError> {
    Uint64::from_bytes(bytes.to_avm_bytes()?.as_slice())
}

/// `length` zero bytes.
pub fn bzero(length: impl Into<Uint64>) -> Result<Bytes, AvmError> {
    let length = length.into().as_u64();
    if length > MAX_BYTES_SIZE as u64 {
        return Err(AvmError::LengthExceeded {
            len: usize::try_from(length).unwrap_or(usize::MAX),
            max: MAX_BYTES_SIZE,
        });
    }
    Bytes::new(vec![0u8; length as usize])
}

/// `b` when `condition` is non-zero, `a` otherwise. Both candidates must be
/// of the same stack type.
pub fn select(
    a: impl Into<StackValue>,
    b: impl Into<StackValue>,
    condition: impl Into<Uint64>,
) -> Result<StackValue, AvmError> {
    let (a, b) = (a.into(), b.into());
    if a.kind() != b.kind() {
        return Err(AvmError::TypeMismatch("select operands must have the same type"));
    }
    Ok(if condition.into().is_zero() { a } else { b })
}
