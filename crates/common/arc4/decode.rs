use avm_common::{BigUint, constants::ABI_RETURN_VALUE_LOG_PREFIX, constants::BITS_IN_BYTE};
use tracing::trace;

use crate::{
    address::Address,
    constants::{ARC4_FALSE, ARC4_TRUE, LENGTH_PREFIX_SIZE, OFFSET_SIZE},
    descriptor::TypeDescriptor,
    error::Arc4Error,
    native::Arc4Native,
};

/// Decodes `bytes` as a complete encoding of `ty`.
///
/// Static types must match their encoded length exactly. Dynamic types must
/// be well formed: offsets start right after the head, never point backwards
/// and never past the end of the buffer. Bools must be canonical: `0x00` or
/// `0x80`, with zero padding bits in packed bytes.
pub fn decode(ty: &TypeDescriptor, bytes: &[u8]) -> Result<Arc4Native, Arc4Error> {
    ty.validate()?;
    decode_value(ty, bytes)
}

fn decode_value(ty: &TypeDescriptor, bytes: &[u8]) -> Result<Arc4Native, Arc4Error> {
    if !ty.is_dynamic() {
        let expected = ty.head_length()?;
        if bytes.len() != expected {
            return Err(Arc4Error::invalid_length(
                ty,
                format!("expected {expected} bytes, got {}", bytes.len()),
            ));
        }
    }
    match ty {
        TypeDescriptor::Bool => match bytes {
            [ARC4_FALSE] => Ok(Arc4Native::Bool(false)),
            [ARC4_TRUE] => Ok(Arc4Native::Bool(true)),
            _ => Err(Arc4Error::malformed_data(
                ty,
                format!("non-canonical bool encoding {bytes:02x?}"),
            )),
        },
        TypeDescriptor::UintN { .. } | TypeDescriptor::UFixed { .. } | TypeDescriptor::Byte => {
            Ok(Arc4Native::Uint(BigUint::from_bytes(bytes)))
        }
        TypeDescriptor::Address => Address::try_from(bytes).map(Arc4Native::Address),
        TypeDescriptor::Str => {
            let payload = length_prefixed_payload(ty, bytes)?;
            String::from_utf8(payload.to_vec())
                .map(Arc4Native::Str)
                .map_err(|e| Arc4Error::malformed_data(ty, e.to_string()))
        }
        TypeDescriptor::DynamicBytes => {
            length_prefixed_payload(ty, bytes).map(|payload| Arc4Native::Bytes(payload.to_vec()))
        }
        TypeDescriptor::StaticBytes { .. } => Ok(Arc4Native::Bytes(bytes.to_vec())),
        TypeDescriptor::FixedArray { elem, len } => {
            // static arrays were length checked above
            if elem.is_dynamic() && len.saturating_mul(OFFSET_SIZE) > bytes.len() {
                return Err(Arc4Error::invalid_length(
                    ty,
                    format!("{len} offsets do not fit in {} bytes", bytes.len()),
                ));
            }
            let types = vec![elem.as_ref(); *len];
            decode_sequence(ty, &types, bytes).map(Arc4Native::Array)
        }
        TypeDescriptor::DynArray { elem } => {
            let (count, body) = split_length_prefix(ty, bytes)?;
            let types = vec![elem.as_ref(); count];
            decode_sequence(ty, &types, body).map(Arc4Native::Array)
        }
        TypeDescriptor::Tuple { fields } => {
            let types: Vec<_> = fields.iter().collect();
            decode_sequence(ty, &types, bytes).map(Arc4Native::Tuple)
        }
        TypeDescriptor::Struct { fields, .. } => {
            let types: Vec<_> = fields.iter().map(|(_, ty)| ty).collect();
            decode_sequence(ty, &types, bytes).map(Arc4Native::Tuple)
        }
    }
}

/// Decodes a value logged as an ABI return: the 4 byte return prefix
/// followed by the encoding.
pub fn decode_from_log(ty: &TypeDescriptor, bytes: &[u8]) -> Result<Arc4Native, Arc4Error> {
    let payload = bytes
        .strip_prefix(&ABI_RETURN_VALUE_LOG_PREFIX[..])
        .ok_or(Arc4Error::PrefixNotFound)?;
    trace!(ty = %ty, len = payload.len(), "Stripped ABI return prefix");
    decode(ty, payload)
}

/// Unpacks `count` bools, most significant bit first. The bits after the
/// last bool must be zero.
fn decode_bools(ty: &TypeDescriptor, packed: &[u8], count: usize) -> Result<Vec<bool>, Arc4Error> {
    let padding = (packed.len() * BITS_IN_BYTE).saturating_sub(count);
    let padding_mask = ((1u16 << padding.min(BITS_IN_BYTE)) - 1) as u8;
    if let Some(last) = packed.last().filter(|last| *last & padding_mask != 0) {
        return Err(Arc4Error::malformed_data(
            ty,
            format!("non-canonical bool byte {last:#04x}"),
        ));
    }
    Ok((0..count)
        .map(|bit| {
            packed
                .get(bit / BITS_IN_BYTE)
                .is_some_and(|byte| byte & (ARC4_TRUE >> (bit % BITS_IN_BYTE)) != 0)
        })
        .collect())
}

fn split_length_prefix<'a>(
    ty: &TypeDescriptor,
    bytes: &'a [u8],
) -> Result<(usize, &'a [u8]), Arc4Error> {
    let Some((prefix, rest)) = bytes.split_first_chunk::<LENGTH_PREFIX_SIZE>() else {
        return Err(Arc4Error::invalid_length(ty, "missing length prefix"));
    };
    Ok((usize::from(u16::from_be_bytes(*prefix)), rest))
}

fn length_prefixed_payload<'a>(
    ty: &TypeDescriptor,
    bytes: &'a [u8],
) -> Result<&'a [u8], Arc4Error> {
    let (len, payload) = split_length_prefix(ty, bytes)?;
    if payload.len() != len {
        return Err(Arc4Error::invalid_length(
            ty,
            format!("length prefix is {len} but {} bytes follow", payload.len()),
        ));
    }
    Ok(payload)
}

fn take<'a>(
    ty: &TypeDescriptor,
    bytes: &'a [u8],
    start: usize,
    len: usize,
) -> Result<&'a [u8], Arc4Error> {
    let end = start.saturating_add(len);
    bytes.get(start..end).ok_or_else(|| {
        Arc4Error::invalid_length(
            ty,
            format!("head needs {end} bytes, buffer has {}", bytes.len()),
        )
    })
}

/// Reverses the head/tail layout of a sequence whose element types are
/// `types`. `owner` is only used in error messages.
fn decode_sequence(
    owner: &TypeDescriptor,
    types: &[&TypeDescriptor],
    bytes: &[u8],
) -> Result<Vec<Arc4Native>, Arc4Error> {
    let mut values: Vec<Option<Arc4Native>> = (0..types.len()).map(|_| None).collect();
    let mut dynamic_fields: Vec<(usize, usize)> = Vec::new();
    let mut position = 0;
    let mut index = 0;

    while let Some(ty) = types.get(index) {
        if ty.is_bool() {
            let run = types[index..].iter().take_while(|ty| ty.is_bool()).count();
            let packed = take(owner, bytes, position, run.div_ceil(BITS_IN_BYTE))?;
            for (bit, value) in decode_bools(owner, packed, run)?.into_iter().enumerate() {
                values[index + bit] = Some(Arc4Native::Bool(value));
            }
            position += packed.len();
            index += run;
            continue;
        }
        if ty.is_dynamic() {
            let raw = take(owner, bytes, position, OFFSET_SIZE)?;
            let offset = usize::from(u16::from_be_bytes([raw[0], raw[1]]));
            dynamic_fields.push((index, offset));
            position += OFFSET_SIZE;
        } else {
            let chunk = take(owner, bytes, position, ty.head_length()?)?;
            values[index] = Some(decode_value(ty, chunk)?);
            position += chunk.len();
        }
        index += 1;
    }

    let head_length = position;
    match dynamic_fields.first() {
        None if head_length != bytes.len() => {
            return Err(Arc4Error::invalid_length(
                owner,
                format!(
                    "expected {head_length} bytes, got {}",
                    bytes.len()
                ),
            ));
        }
        Some((_, first)) if *first != head_length => {
            return Err(Arc4Error::invalid_length(
                owner,
                format!("first dynamic offset is {first}, head is {head_length} bytes"),
            ));
        }
        _ => {}
    }

    for (i, (field, start)) in dynamic_fields.iter().enumerate() {
        let end = dynamic_fields
            .get(i + 1)
            .map_or(bytes.len(), |(_, next)| *next);
        trace!(owner = %owner, field, start, end, "Decoding dynamic field");
        let payload = bytes.get(*start..end).ok_or_else(|| {
            Arc4Error::invalid_length(
                owner,
                format!(
                    "dynamic field {field} spans {start}..{end} in a buffer of {} bytes",
                    bytes.len()
                ),
            )
        })?;
        values[*field] = Some(decode_value(types[*field], payload)?);
    }

    values
        .into_iter()
        .map(|value| value.ok_or(Arc4Error::InternalInvariant("head slot left undecoded")))
        .collect()
}
