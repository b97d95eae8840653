//! Decimal text conversions for `ufixedNxM` values.
//!
//! A `ufixedNxM` holds the integer `value * 10^M` in an N bit unsigned slot,
//! so `"1.5"` as `ufixed64x2` is stored as `150`.

use avm_common::BigUint;
use num_bigint::BigUint as Natural;

use crate::{descriptor::TypeDescriptor, error::Arc4Error};

/// Parses decimal notation into the raw scaled integer.
///
/// Accepts digits with an optional single `.`; at most `precision` digits may
/// follow it. Fails when the scaled value does not fit in `bits`.
pub fn ufixed_from_str(bits: u16, precision: u8, text: &str) -> Result<BigUint, Arc4Error> {
    let ty = TypeDescriptor::ufixed(bits, precision)?;
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if integer.is_empty() || !is_digits(integer) || !is_digits(fraction) || text.ends_with('.') {
        return Err(Arc4Error::malformed_data(
            &ty,
            format!("{text:?} is not a decimal number"),
        ));
    }
    if fraction.len() > usize::from(precision) {
        return Err(Arc4Error::malformed_data(
            &ty,
            format!("{text:?} has more than {precision} decimal places"),
        ));
    }

    let mut digits = String::with_capacity(integer.len() + usize::from(precision));
    digits.push_str(integer);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat_n('0', usize::from(precision) - fraction.len()));

    let scaled = Natural::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| Arc4Error::malformed_data(&ty, format!("{text:?} is not a decimal number")))?;
    if scaled.bits() > u64::from(bits) {
        return Err(Arc4Error::ValueTooLarge(format!("{text} is out of range for {ty}")));
    }
    Ok(BigUint::from_natural(scaled)?)
}

/// Renders the raw scaled integer with exactly `precision` decimal places.
pub fn ufixed_to_string(value: &BigUint, precision: u8) -> String {
    let precision = usize::from(precision);
    let digits = value.to_string();
    let digits = format!("{digits:0>width$}", width = precision + 1);
    let (integer, fraction) = digits.split_at(digits.len() - precision);
    format!("{integer}.{fraction}")
}
