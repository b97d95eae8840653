use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::{
    constants::{BITS_IN_BYTE, UINT64_SIZE},
    errors::AvmError,
    types::Bytes,
};

/// AVM `uint64`.
///
/// Fallible arithmetic is exposed as `try_*` methods that compute in a wider
/// domain first and only then check the result fits in 64 bits, the same
/// order the AVM uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uint64(u64);

const UINT64_BITS: u64 = (UINT64_SIZE * BITS_IN_BYTE) as u64;

impl Uint64 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Validates a widened intermediate result.
    fn check(value: u128) -> Result<Self, AvmError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| AvmError::uint64_overflow())
    }

    /// Same as [`check`](Self::check) for signed intermediates (subtraction).
    fn check_signed(value: i128) -> Result<Self, AvmError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| AvmError::uint64_overflow())
    }

    pub fn try_add(self, other: impl Into<Self>) -> Result<Self, AvmError> {
        Self::check(u128::from(self.0) + u128::from(other.into().0))
    }

    pub fn try_sub(self, other: impl Into<Self>) -> Result<Self, AvmError> {
        Self::check_signed(i128::from(self.0) - i128::from(other.into().0))
    }

    pub fn try_mul(self, other: impl Into<Self>) -> Result<Self, AvmError> {
        Self::check(u128::from(self.0) * u128::from(other.into().0))
    }

    pub fn try_div(self, other: impl Into<Self>) -> Result<Self, AvmError> {
        let divisor = other.into().0;
        if divisor == 0 {
            return Err(AvmError::DivisionByZero);
        }
        Ok(Self(self.0 / divisor))
    }

    pub fn try_rem(self, other: impl Into<Self>) -> Result<Self, AvmError> {
        let divisor = other.into().0;
        if divisor == 0 {
            return Err(AvmError::DivisionByZero);
        }
        Ok(Self(self.0 % divisor))
    }

    /// `self ** exponent`. `0 ** 0` is undefined on the AVM.
    pub fn try_pow(self, exponent: impl Into<Self>) -> Result<Self, AvmError> {
        let exponent = exponent.into().0;
        if self.0 == 0 && exponent == 0 {
            return Err(AvmError::UndefinedOperation("0 ** 0 is undefined"));
        }
        match self.0 {
            0 | 1 => Ok(self),
            base => u32::try_from(exponent)
                .ok()
                .and_then(|exponent| base.checked_pow(exponent))
                .map(Self)
                .ok_or_else(AvmError::uint64_overflow),
        }
    }

    pub fn try_shl(self, shift: impl Into<Self>) -> Result<Self, AvmError> {
        let shift = Self::check_shift(shift.into())?;
        // bits shifted past the top are discarded, as `shl` does
        Ok(Self(self.0 << shift))
    }

    pub fn try_shr(self, shift: impl Into<Self>) -> Result<Self, AvmError> {
        let shift = Self::check_shift(shift.into())?;
        Ok(Self(self.0 >> shift))
    }

    fn check_shift(shift: Self) -> Result<u32, AvmError> {
        if shift.0 >= UINT64_BITS {
            return Err(AvmError::ShiftTooLarge {
                shift: shift.0,
                max: UINT64_BITS - 1,
            });
        }
        u32::try_from(shift.0).map_err(|_| AvmError::uint64_overflow())
    }

    /// Number of bits of the minimal binary representation, 0 for 0.
    pub const fn bit_len(self) -> u64 {
        (u64::BITS - self.0.leading_zeros()) as u64
    }

    /// `itob`: exactly 8 bytes, big-endian.
    pub fn to_bytes(self) -> Bytes {
        Bytes::from_array(self.0.to_be_bytes())
    }

    pub const fn to_be_bytes(self) -> [u8; UINT64_SIZE] {
        self.0.to_be_bytes()
    }

    /// `btoi`: big-endian, at most 8 bytes, empty input is 0.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AvmError> {
        if bytes.len() > UINT64_SIZE {
            return Err(AvmError::ValueTooLarge(format!(
                "btoi arg too long, got [{}] bytes",
                bytes.len()
            )));
        }
        let mut padded = [0u8; UINT64_SIZE];
        padded[UINT64_SIZE - bytes.len()..].copy_from_slice(bytes);
        Ok(Self(u64::from_be_bytes(padded)))
    }

    /// Converts into a native machine word, failing if it does not fit.
    pub fn to_usize(self) -> Result<usize, AvmError> {
        usize::try_from(self.0).map_err(|_| AvmError::uint64_overflow())
    }
}

impl fmt::Display for Uint64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl BitAnd for Uint64 {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Uint64 {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Uint64 {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for Uint64 {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl From<u64> for Uint64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<u32> for Uint64 {
    fn from(value: u32) -> Self {
        Self(value.into())
    }
}

impl From<u16> for Uint64 {
    fn from(value: u16) -> Self {
        Self(value.into())
    }
}

impl From<u8> for Uint64 {
    fn from(value: u8) -> Self {
        Self(value.into())
    }
}

impl From<bool> for Uint64 {
    fn from(value: bool) -> Self {
        Self(value.into())
    }
}

impl From<Uint64> for u64 {
    fn from(value: Uint64) -> Self {
        value.0
    }
}

impl TryFrom<usize> for Uint64 {
    type Error = AvmError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| AvmError::uint64_overflow())
    }
}

impl TryFrom<u128> for Uint64 {
    type Error = AvmError;

    fn try_from(value: u128) -> Result<Self, Self::Error> {
        Self::check(value)
    }
}

impl TryFrom<i128> for Uint64 {
    type Error = AvmError;

    fn try_from(value: i128) -> Result<Self, Self::Error> {
        Self::check_signed(value)
    }
}

impl TryFrom<i64> for Uint64 {
    type Error = AvmError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::check_signed(value.into())
    }
}
