//! # Arithmetic operations
//!
//! Includes the following opcodes:
//!   - `addw`, `mulw`
//!   - `divw`, `divmodw`
//!   - `exp`, `expw`
//!   - `sqrt`, `bsqrt`
//!   - `bitlen`
//!   - `shl`, `shr`
//!
//! Wide results are returned as `(high, low)` word pairs, matching the order
//! the VM pushes them.

use avm_common::{
    AvmError, BigUint, Uint64,
    constants::BITS_IN_BYTE,
    types::StackValue,
};

const UNDEFINED_ZERO_POW: &str = "0 ** 0 is undefined";

fn split_wide(value: u128) -> (Uint64, Uint64) {
    let high = (value >> u64::BITS) as u64;
    let low = value as u64;
    (Uint64::new(high), Uint64::new(low))
}

fn join_wide(high: Uint64, low: Uint64) -> u128 {
    (u128::from(high.as_u64()) << u64::BITS) | u128::from(low.as_u64())
}

/// `a + b` as a 128 bit `(carry, sum)` pair.
pub fn addw(a: impl Into<Uint64>, b: impl Into<Uint64>) -> (Uint64, Uint64) {
    let sum = u128::from(a.into().as_u64()) + u128::from(b.into().as_u64());
    split_wide(sum)
}

/// `a * b` as a 128 bit `(high, low)` pair.
pub fn mulw(a: impl Into<Uint64>, b: impl Into<Uint64>) -> (Uint64, Uint64) {
    let product = u128::from(a.into().as_u64()) * u128::from(b.into().as_u64());
    split_wide(product)
}

/// Divides the 128 bit `(a_high, a_low)` by `b`; the quotient must fit in 64
/// bits.
pub fn divw(
    a_high: impl Into<Uint64>,
    a_low: impl Into<Uint64>,
    b: impl Into<Uint64>,
) -> Result<Uint64, AvmError> {
    let dividend = join_wide(a_high.into(), a_low.into());
    let divisor = u128::from(b.into().as_u64());
    let quotient = dividend
        .checked_div(divisor)
        .ok_or(AvmError::DivisionByZero)?;
    u64::try_from(quotient)
        .map(Uint64::new)
        .map_err(|_| AvmError::OpcodeOverflow("divw"))
}

/// 128 bit division with remainder: `(q_high, q_low, r_high, r_low)`.
pub fn divmodw(
    a_high: impl Into<Uint64>,
    a_low: impl Into<Uint64>,
    b_high: impl Into<Uint64>,
    b_low: impl Into<Uint64>,
) -> Result<(Uint64, Uint64, Uint64, Uint64), AvmError> {
    let dividend = join_wide(a_high.into(), a_low.into());
    let divisor = join_wide(b_high.into(), b_low.into());
    if divisor == 0 {
        return Err(AvmError::DivisionByZero);
    }
    let (q_high, q_low) = split_wide(dividend / divisor);
    let (r_high, r_low) = split_wide(dividend % divisor);
    Ok((q_high, q_low, r_high, r_low))
}

pub fn exp(base: impl Into<Uint64>, exponent: impl Into<Uint64>) -> Result<Uint64, AvmError> {
    base.into().try_pow(exponent)
}

/// `base ** exponent` as a 128 bit `(high, low)` pair.
pub fn expw(
    base: impl Into<Uint64>,
    exponent: impl Into<Uint64>,
) -> Result<(Uint64, Uint64), AvmError> {
    let (base, exponent) = (base.into().as_u64(), exponent.into().as_u64());
    let power = match (base, exponent) {
        (0, 0) => return Err(AvmError::UndefinedOperation(UNDEFINED_ZERO_POW)),
        (0 | 1, _) => Some(u128::from(base)),
        _ => u32::try_from(exponent)
            .ok()
            .and_then(|exponent| u128::from(base).checked_pow(exponent)),
    };
    power
        .map(split_wide)
        .ok_or(AvmError::OpcodeOverflow("expw"))
}

/// Integer square root, rounded down.
pub fn sqrt(value: impl Into<Uint64>) -> Uint64 {
    Uint64::new(value.into().as_u64().isqrt())
}

/// Integer square root of a byte-math value, rounded down.
pub fn bsqrt(value: &BigUint) -> Result<BigUint, AvmError> {
    let natural = value.ensure_in_domain()?;
    BigUint::from_natural(natural.sqrt())
}

/// Number of bits needed to represent the value; byte arrays are read as
/// big-endian integers of any length. Zero has bit length 0.
pub fn bitlen(value: impl Into<StackValue>) -> Uint64 {
    match value.into() {
        StackValue::Uint64(value) => Uint64::new(value.bit_len()),
        StackValue::Bytes(bytes) => {
            let Some((index, lead)) = bytes
                .as_slice()
                .iter()
                .enumerate()
                .find(|(_, byte)| **byte != 0)
            else {
                return Uint64::ZERO;
            };
            let trailing_bytes = (bytes.len() - index - 1) as u64;
            Uint64::new(
                u64::from(u8::BITS - lead.leading_zeros()) + trailing_bytes * BITS_IN_BYTE as u64,
            )
        }
    }
}

pub fn shl(value: impl Into<Uint64>, shift: impl Into<Uint64>) -> Result<Uint64, AvmError> {
    value.into().try_shl(shift)
}

pub fn shr(value: impl Into<Uint64>, shift: impl Into<Uint64>) -> Result<Uint64, AvmError> {
    value.into().try_shr(shift)
}
