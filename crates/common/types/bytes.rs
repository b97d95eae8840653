use std::fmt;

use crate::{constants::MAX_BYTES_SIZE, errors::AvmError};

/// AVM byte array, at most [`MAX_BYTES_SIZE`] bytes long.
///
/// Backed by [`bytes::Bytes`], so clones share the (immutable) buffer.
/// Every constructor and every operation producing a new value checks the
/// length bound.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Bytes(bytes::Bytes);

impl Bytes {
    pub fn new(value: impl Into<bytes::Bytes>) -> Result<Self, AvmError> {
        let value = value.into();
        Self::check_length(value.len())?;
        Ok(Self(value))
    }

    pub const fn empty() -> Self {
        Self(bytes::Bytes::new())
    }

    /// Arrays up to 4096 bytes are always valid.
    pub(crate) fn from_array<const N: usize>(value: [u8; N]) -> Self {
        const { assert!(N <= MAX_BYTES_SIZE) };
        Self(bytes::Bytes::copy_from_slice(&value))
    }

    pub fn from_slice(value: &[u8]) -> Result<Self, AvmError> {
        Self::check_length(value.len())?;
        Ok(Self(bytes::Bytes::copy_from_slice(value)))
    }

    pub fn from_hex(value: &str) -> Result<Self, AvmError> {
        let decoded = hex::decode(value.trim_start_matches("0x"))
            .map_err(|err| AvmError::InvalidInput(err.to_string()))?;
        Self::new(decoded)
    }

    fn check_length(len: usize) -> Result<(), AvmError> {
        if len > MAX_BYTES_SIZE {
            return Err(AvmError::LengthExceeded {
                len,
                max: MAX_BYTES_SIZE,
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    pub fn into_inner(self) -> bytes::Bytes {
        self.0
    }

    /// Interprets the content as UTF-8.
    pub fn as_str(&self) -> Result<&str, AvmError> {
        std::str::from_utf8(&self.0).map_err(|err| AvmError::InvalidInput(err.to_string()))
    }

    /// Resolves a possibly negative index against the current length.
    fn resolve_index(&self, index: i64) -> Result<usize, AvmError> {
        let len = self.len();
        let resolved = if index < 0 {
            i64::try_from(len)
                .ok()
                .and_then(|len| len.checked_add(index))
                .and_then(|resolved| usize::try_from(resolved).ok())
        } else {
            usize::try_from(index).ok()
        };
        match resolved {
            Some(resolved) if resolved <= len => Ok(resolved),
            _ => Err(AvmError::index_out_of_bounds(index.unsigned_abs(), len)),
        }
    }

    /// Sub-range with negative indices counting from the end.
    ///
    /// `start` defaults to 0 and `end` to the length; an `end` before `start`
    /// yields an empty value.
    pub fn slice(&self, start: Option<i64>, end: Option<i64>) -> Result<Self, AvmError> {
        let start = start.map_or(Ok(0), |start| self.resolve_index(start))?;
        let end = end.map_or(Ok(self.len()), |end| self.resolve_index(end))?;
        if end <= start {
            return Ok(Self::empty());
        }
        Ok(Self(self.0.slice(start..end)))
    }

    /// Single byte at `index`, negative indices count from the end.
    pub fn at(&self, index: i64) -> Result<Self, AvmError> {
        let resolved = self.resolve_index(index)?;
        if resolved == self.len() {
            return Err(AvmError::index_out_of_bounds(index.unsigned_abs(), self.len()));
        }
        Ok(Self(self.0.slice(resolved..resolved + 1)))
    }

    pub fn concat(&self, other: &Self) -> Result<Self, AvmError> {
        let len = self.len() + other.len();
        Self::check_length(len)?;
        let mut joined = Vec::with_capacity(len);
        joined.extend_from_slice(&self.0);
        joined.extend_from_slice(&other.0);
        Ok(Self(joined.into()))
    }

    /// Left pads the shorter operand with zeros, so the last bytes line up.
    fn zip_aligned(&self, other: &Self, op: impl Fn(u8, u8) -> u8) -> Self {
        let len = self.len().max(other.len());
        let left = self.left_padded(len);
        let right = other.left_padded(len);
        let result: Vec<u8> = left
            .iter()
            .zip(right.iter())
            .map(|(a, b)| op(*a, *b))
            .collect();
        Self(result.into())
    }

    fn left_padded(&self, len: usize) -> Vec<u8> {
        let mut padded = vec![0u8; len.saturating_sub(self.len())];
        padded.extend_from_slice(&self.0);
        padded
    }

    pub fn bitwise_and(&self, other: &Self) -> Self {
        self.zip_aligned(other, |a, b| a & b)
    }

    pub fn bitwise_or(&self, other: &Self) -> Self {
        self.zip_aligned(other, |a, b| a | b)
    }

    pub fn bitwise_xor(&self, other: &Self) -> Self {
        self.zip_aligned(other, |a, b| a ^ b)
    }

    pub fn bitwise_invert(&self) -> Self {
        let inverted: Vec<u8> = self.0.iter().map(|byte| !byte).collect();
        Self(inverted.into())
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl TryFrom<&[u8]> for Bytes {
    type Error = AvmError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(value)
    }
}

impl TryFrom<Vec<u8>> for Bytes {
    type Error = AvmError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Bytes {
    type Error = AvmError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_slice(value.as_bytes())
    }
}

impl TryFrom<String> for Bytes {
    type Error = AvmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.into_bytes())
    }
}

impl TryFrom<bytes::Bytes> for Bytes {
    type Error = AvmError;

    fn try_from(value: bytes::Bytes) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(value: Bytes) -> Self {
        value.0.to_vec()
    }
}
