use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint as Natural;
use num_traits::{One, ToPrimitive, Zero};

use crate::{
    constants::{BIGUINT_BITS, BIGUINT_MAX_BYTES},
    errors::AvmError,
    types::{Bytes, Uint64},
};

/// AVM byte-math integer, bounded to 512 bits.
///
/// The bound is a property of the *value*: a BigUint built from a byte array
/// longer than 64 bytes is accepted as long as it is never used, and fails
/// with `BigUint overflow or underflow` when it reaches an arithmetic
/// operation. Results are computed in the unbounded domain and checked
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BigUint(Natural);

impl BigUint {
    pub fn zero() -> Self {
        Self(Natural::zero())
    }

    pub fn one() -> Self {
        Self(Natural::one())
    }

    /// `2^512 - 1`.
    pub fn max_value() -> Self {
        Self((Natural::one() << BIGUINT_BITS) - Natural::one())
    }

    /// Checked construction from an unbounded natural.
    pub fn from_natural(value: Natural) -> Result<Self, AvmError> {
        Self::check(value)
    }

    /// Interprets `bytes` as a big-endian magnitude. Never fails: the domain
    /// is checked when the value is used.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(Natural::from_bytes_be(bytes))
    }

    pub fn from_dec_str(value: &str) -> Result<Self, AvmError> {
        let parsed = Natural::parse_bytes(value.as_bytes(), 10)
            .ok_or_else(|| AvmError::InvalidInput(format!("invalid BigUint literal {value:?}")))?;
        Self::check(parsed)
    }

    fn check(value: Natural) -> Result<Self, AvmError> {
        if value.bits() > BIGUINT_BITS {
            return Err(AvmError::biguint_overflow());
        }
        Ok(Self(value))
    }

    /// Fails if the held value is outside the 512-bit domain.
    pub fn ensure_in_domain(&self) -> Result<&Natural, AvmError> {
        if self.0.bits() > BIGUINT_BITS {
            return Err(AvmError::biguint_overflow());
        }
        Ok(&self.0)
    }

    fn operands<'a>(&'a self, other: &'a Self) -> Result<(&'a Natural, &'a Natural), AvmError> {
        Ok((self.ensure_in_domain()?, other.ensure_in_domain()?))
    }

    pub fn as_natural(&self) -> &Natural {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn bit_len(&self) -> u64 {
        self.0.bits()
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, AvmError> {
        let (a, b) = self.operands(other)?;
        Self::check(a + b)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, AvmError> {
        let (a, b) = self.operands(other)?;
        if a < b {
            return Err(AvmError::biguint_overflow());
        }
        Self::check(a - b)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self, AvmError> {
        let (a, b) = self.operands(other)?;
        Self::check(a * b)
    }

    pub fn try_div(&self, other: &Self) -> Result<Self, AvmError> {
        let (a, b) = self.operands(other)?;
        if b.is_zero() {
            return Err(AvmError::DivisionByZero);
        }
        Self::check(a / b)
    }

    pub fn try_rem(&self, other: &Self) -> Result<Self, AvmError> {
        let (a, b) = self.operands(other)?;
        if b.is_zero() {
            return Err(AvmError::DivisionByZero);
        }
        Self::check(a % b)
    }

    pub fn try_pow(&self, exponent: &Self) -> Result<Self, AvmError> {
        let (base, exponent) = self.operands(exponent)?;
        if base.is_zero() && exponent.is_zero() {
            return Err(AvmError::UndefinedOperation("0 ** 0 is undefined"));
        }
        if base.is_zero() || base.is_one() {
            return Ok(self.clone());
        }
        // any base >= 2 raised past the bit width cannot fit
        match exponent.to_u32() {
            Some(exponent) if u64::from(exponent) <= BIGUINT_BITS => {
                Self::check(base.pow(exponent))
            }
            _ => Err(AvmError::biguint_overflow()),
        }
    }

    pub fn try_shl(&self, shift: impl Into<Uint64>) -> Result<Self, AvmError> {
        let value = self.ensure_in_domain()?;
        let shift = Self::check_shift(shift.into())?;
        Self::check(value << shift)
    }

    pub fn try_shr(&self, shift: impl Into<Uint64>) -> Result<Self, AvmError> {
        let value = self.ensure_in_domain()?;
        let shift = Self::check_shift(shift.into())?;
        Self::check(value >> shift)
    }

    fn check_shift(shift: Uint64) -> Result<usize, AvmError> {
        if shift.as_u64() >= BIGUINT_BITS {
            return Err(AvmError::ShiftTooLarge {
                shift: shift.as_u64(),
                max: BIGUINT_BITS - 1,
            });
        }
        shift.to_usize()
    }

    pub fn try_bitand(&self, other: &Self) -> Result<Self, AvmError> {
        let (a, b) = self.operands(other)?;
        Self::check(a & b)
    }

    pub fn try_bitor(&self, other: &Self) -> Result<Self, AvmError> {
        let (a, b) = self.operands(other)?;
        Self::check(a | b)
    }

    pub fn try_bitxor(&self, other: &Self) -> Result<Self, AvmError> {
        let (a, b) = self.operands(other)?;
        Self::check(a ^ b)
    }

    /// Complement over the full 512-bit width.
    pub fn try_not(&self) -> Result<Self, AvmError> {
        let value = self.ensure_in_domain()?;
        Self::check(Self::max_value().0 - value)
    }

    /// Comparison of two in-domain values.
    pub fn try_cmp(&self, other: &Self) -> Result<Ordering, AvmError> {
        let (a, b) = self.operands(other)?;
        Ok(a.cmp(b))
    }

    /// Minimal big-endian encoding; zero encodes as the empty array, as
    /// byte-math results do on the AVM.
    pub fn to_bytes(&self) -> Result<Bytes, AvmError> {
        if self.is_zero() {
            return Ok(Bytes::empty());
        }
        Bytes::new(self.0.to_bytes_be())
    }

    /// Big-endian encoding left padded with zeros to exactly `len` bytes.
    pub fn to_bytes_padded(&self, len: usize) -> Result<Bytes, AvmError> {
        let minimal = if self.is_zero() {
            Vec::new()
        } else {
            self.0.to_bytes_be()
        };
        if minimal.len() > len {
            return Err(AvmError::ValueTooLarge(format!(
                "value needs {} bytes, at most {len} allowed",
                minimal.len()
            )));
        }
        let mut padded = vec![0u8; len - minimal.len()];
        padded.extend_from_slice(&minimal);
        Bytes::new(padded)
    }

    /// The 64 byte form used by wide byte-math results.
    pub fn to_bytes_full_width(&self) -> Result<Bytes, AvmError> {
        self.ensure_in_domain()?;
        self.to_bytes_padded(BIGUINT_MAX_BYTES)
    }

    /// Narrows to a `Uint64`, failing if the value needs more than 64 bits.
    pub fn to_uint64(&self) -> Result<Uint64, AvmError> {
        self.0
            .to_u64()
            .map(Uint64::new)
            .ok_or_else(AvmError::uint64_overflow)
    }
}

impl fmt::Display for BigUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BigUint {
    type Err = AvmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dec_str(s)
    }
}

impl From<u64> for BigUint {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<u128> for BigUint {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl From<Uint64> for BigUint {
    fn from(value: Uint64) -> Self {
        Self(value.as_u64().into())
    }
}

impl From<&Bytes> for BigUint {
    fn from(value: &Bytes) -> Self {
        Self::from_bytes(value.as_slice())
    }
}

impl TryFrom<Natural> for BigUint {
    type Error = AvmError;

    fn try_from(value: Natural) -> Result<Self, Self::Error> {
        Self::check(value)
    }
}

impl From<BigUint> for Natural {
    fn from(value: BigUint) -> Self {
        value.0
    }
}
