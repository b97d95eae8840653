use avm_common::AvmError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Arc4Error {
    #[error(transparent)]
    Avm(#[from] AvmError),
    #[error("{0}")]
    ValueTooLarge(String),
    #[error("ABI return prefix not found")]
    PrefixNotFound,
    #[error("Invalid ARC4 length decoding {ty}: {reason}")]
    InvalidLength { ty: String, reason: String },
    #[error("Malformed ARC4 data decoding {ty}: {reason}")]
    MalformedData { ty: String, reason: String },
    #[error("Invalid ARC4 type: {0}")]
    InvalidDescriptor(String),
    #[error("Type mismatch: expected {expected}, got {found}")]
    TypeMismatch { expected: String, found: String },
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Index out of bounds: index {index} is beyond length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("Cannot pop from an empty array")]
    EmptyArray,
    #[error("{0} is dynamic and has no static encoded length")]
    DynamicType(String),
    #[error("Unknown field {0}")]
    UnknownField(String),
    #[error("ARC4 codec invariant violated: {0}")]
    InternalInvariant(&'static str),
}

impl Arc4Error {
    pub fn invalid_length(ty: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidLength {
            ty: ty.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed_data(ty: impl ToString, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            ty: ty.to_string(),
            reason: reason.into(),
        }
    }

    pub fn type_mismatch(expected: impl ToString, found: impl ToString) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
