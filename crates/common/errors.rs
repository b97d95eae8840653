use std::fmt;

/// Numeric domain an overflow was detected in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericDomain {
    Uint64,
    BigUint,
}

impl fmt::Display for NumericDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericDomain::Uint64 => write!(f, "Uint64"),
            NumericDomain::BigUint => write!(f, "BigUint"),
        }
    }
}

/// Failure of a value operation or opcode emulation.
///
/// Messages follow the reference VM wording, callers assert on them.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum AvmError {
    #[error("{0} overflow or underflow")]
    Overflow(NumericDomain),
    #[error("{0} overflow")]
    OpcodeOverflow(&'static str),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("expected shift <= {max}, got {shift}")]
    ShiftTooLarge { shift: u64, max: u64 },
    #[error("{0}")]
    UndefinedOperation(&'static str),
    #[error("Index out of bounds: index {index} is beyond length {len}")]
    IndexOutOfBounds { index: u64, len: usize },
    #[error("Bytes length {len} exceeds maximum length {max}")]
    LengthExceeded { len: usize, max: usize },
    #[error("{0}")]
    ValueTooLarge(String),
    #[error("illegal base64 data")]
    IllegalBase64,
    #[error("Type mismatch: {0}")]
    TypeMismatch(&'static str),
    #[error("{0} is not supported")]
    NotSupported(&'static str),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AvmError {
    pub fn uint64_overflow() -> Self {
        Self::Overflow(NumericDomain::Uint64)
    }

    pub fn biguint_overflow() -> Self {
        Self::Overflow(NumericDomain::BigUint)
    }

    pub fn index_out_of_bounds(index: impl TryInto<u64>, len: usize) -> Self {
        Self::IndexOutOfBounds {
            index: index.try_into().unwrap_or(u64::MAX),
            len,
        }
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_) | Self::OpcodeOverflow(_))
    }
}
