use crate::{
    errors::AvmError,
    types::{BigUint, Bytes, Uint64},
};

/// Anything an opcode accepts where the AVM expects a byte array.
///
/// Lets callers pass raw buffers, strings or [`Bytes`] interchangeably; the
/// length bound is enforced by the conversion.
pub trait BytesCompat {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError>;
}

impl BytesCompat for Bytes {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError> {
        Ok(self)
    }
}

impl BytesCompat for &Bytes {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError> {
        Ok(self.clone())
    }
}

impl BytesCompat for &[u8] {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError> {
        Bytes::from_slice(self)
    }
}

impl<const N: usize> BytesCompat for &[u8; N] {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError> {
        Bytes::from_slice(self)
    }
}

impl<const N: usize> BytesCompat for [u8; N] {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError> {
        Bytes::from_slice(&self)
    }
}

impl BytesCompat for Vec<u8> {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError> {
        Bytes::new(self)
    }
}

impl BytesCompat for &str {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError> {
        Bytes::from_slice(self.as_bytes())
    }
}

impl BytesCompat for String {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError> {
        Bytes::new(self.into_bytes())
    }
}

impl BytesCompat for &BigUint {
    fn to_avm_bytes(self) -> Result<Bytes, AvmError> {
        self.to_bytes()
    }
}

/// A value on the AVM stack: either a `uint64` or a byte array.
///
/// Opcodes that are polymorphic over the stack type (`getbit`, `setbit`,
/// `select`, `bitlen`) take this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackValue {
    Uint64(Uint64),
    Bytes(Bytes),
}

impl StackValue {
    pub fn kind(&self) -> &'static str {
        match self {
            StackValue::Uint64(_) => "uint64",
            StackValue::Bytes(_) => "bytes",
        }
    }

    pub fn as_uint64(&self) -> Result<Uint64, AvmError> {
        match self {
            StackValue::Uint64(value) => Ok(*value),
            StackValue::Bytes(_) => Err(AvmError::TypeMismatch("expected uint64, got bytes")),
        }
    }

    pub fn as_bytes(&self) -> Result<&Bytes, AvmError> {
        match self {
            StackValue::Bytes(value) => Ok(value),
            StackValue::Uint64(_) => Err(AvmError::TypeMismatch("expected bytes, got uint64")),
        }
    }
}

impl From<Uint64> for StackValue {
    fn from(value: Uint64) -> Self {
        StackValue::Uint64(value)
    }
}

impl From<u64> for StackValue {
    fn from(value: u64) -> Self {
        StackValue::Uint64(value.into())
    }
}

impl From<Bytes> for StackValue {
    fn from(value: Bytes) -> Self {
        StackValue::Bytes(value)
    }
}

impl From<&Bytes> for StackValue {
    fn from(value: &Bytes) -> Self {
        StackValue::Bytes(value.clone())
    }
}

impl TryFrom<&BigUint> for StackValue {
    type Error = AvmError;

    fn try_from(value: &BigUint) -> Result<Self, Self::Error> {
        Ok(StackValue::Bytes(value.to_bytes()?))
    }
}
