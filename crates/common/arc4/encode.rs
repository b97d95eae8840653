use avm_common::constants::BITS_IN_BYTE;

use crate::{
    constants::{ARC4_FALSE, ARC4_TRUE, MAX_LENGTH_PREFIX, OFFSET_SIZE},
    descriptor::TypeDescriptor,
    error::Arc4Error,
    native::Arc4Native,
};

/// Encodes `native` as a value of type `ty`, validating it against the type
/// on the way.
pub fn encode(ty: &TypeDescriptor, native: &Arc4Native) -> Result<Vec<u8>, Arc4Error> {
    match (ty, native) {
        (TypeDescriptor::Bool, Arc4Native::Bool(value)) => Ok(vec![encode_bool(*value)]),
        (TypeDescriptor::UintN { bits } | TypeDescriptor::UFixed { bits, .. }, Arc4Native::Uint(value)) => {
            encode_uint(ty, value, usize::from(*bits) / BITS_IN_BYTE)
        }
        (TypeDescriptor::Byte, Arc4Native::Uint(value)) => encode_uint(ty, value, 1),
        (TypeDescriptor::Address, Arc4Native::Address(address)) => Ok(address.as_bytes().to_vec()),
        (TypeDescriptor::Str, Arc4Native::Str(value)) => length_prefixed(value.as_bytes()),
        (TypeDescriptor::DynamicBytes, Arc4Native::Bytes(value)) => length_prefixed(value),
        (TypeDescriptor::StaticBytes { len }, Arc4Native::Bytes(value)) => {
            if value.len() != *len {
                return Err(Arc4Error::invalid_length(
                    ty,
                    format!("expected {len} bytes, got {}", value.len()),
                ));
            }
            Ok(value.clone())
        }
        (TypeDescriptor::FixedArray { elem, len }, Arc4Native::Array(items)) => {
            if items.len() != *len {
                return Err(Arc4Error::invalid_length(
                    ty,
                    format!("expected {len} elements, got {}", items.len()),
                ));
            }
            encode_sequence(items.iter().map(|item| (elem.as_ref(), item)))
        }
        (TypeDescriptor::DynArray { elem }, Arc4Native::Array(items)) => {
            let count = length_prefix(items.len())?;
            let mut encoded = count.to_vec();
            encoded.extend(encode_sequence(items.iter().map(|item| (elem.as_ref(), item)))?);
            Ok(encoded)
        }
        (TypeDescriptor::Tuple { fields }, Arc4Native::Tuple(items)) => {
            check_field_count(ty, fields.len(), items.len())?;
            encode_sequence(fields.iter().zip(items))
        }
        (TypeDescriptor::Struct { fields, .. }, Arc4Native::Tuple(items)) => {
            check_field_count(ty, fields.len(), items.len())?;
            encode_sequence(fields.iter().map(|(_, ty)| ty).zip(items))
        }
        (ty, native) => Err(Arc4Error::type_mismatch(ty, native.kind())),
    }
}

pub(crate) fn encode_bool(value: bool) -> u8 {
    if value { ARC4_TRUE } else { ARC4_FALSE }
}

fn encode_uint(
    ty: &TypeDescriptor,
    value: &avm_common::BigUint,
    byte_len: usize,
) -> Result<Vec<u8>, Arc4Error> {
    let natural = value.as_natural();
    if natural.bits() > (byte_len * BITS_IN_BYTE) as u64 {
        return Err(Arc4Error::ValueTooLarge(format!(
            "{value} is out of range for {ty}"
        )));
    }
    let minimal = natural.to_bytes_be();
    // to_bytes_be renders zero as a single byte
    let minimal = if value.is_zero() { &[][..] } else { &minimal[..] };
    let mut encoded = vec![0u8; byte_len - minimal.len()];
    encoded.extend_from_slice(minimal);
    Ok(encoded)
}

fn length_prefix(len: usize) -> Result<[u8; 2], Arc4Error> {
    u16::try_from(len)
        .map(u16::to_be_bytes)
        .map_err(|_| {
            Arc4Error::ValueTooLarge(format!(
                "length {len} exceeds the maximum of {MAX_LENGTH_PREFIX}"
            ))
        })
}

fn length_prefixed(payload: &[u8]) -> Result<Vec<u8>, Arc4Error> {
    let mut encoded = length_prefix(payload.len())?.to_vec();
    encoded.extend_from_slice(payload);
    Ok(encoded)
}

fn check_field_count(ty: &TypeDescriptor, expected: usize, got: usize) -> Result<(), Arc4Error> {
    if expected != got {
        return Err(Arc4Error::invalid_length(
            ty,
            format!("expected {expected} fields, got {got}"),
        ));
    }
    Ok(())
}

/// Packs bools 8 per byte, most significant bit first.
pub(crate) fn pack_bools(values: &[bool]) -> Vec<u8> {
    let mut packed = vec![0u8; values.len().div_ceil(BITS_IN_BYTE)];
    for (i, value) in values.iter().enumerate() {
        if *value {
            if let Some(byte) = packed.get_mut(i / BITS_IN_BYTE) {
                *byte |= ARC4_TRUE >> (i % BITS_IN_BYTE);
            }
        }
    }
    packed
}

/// Head/tail layout of a sequence. Static elements are written inline,
/// dynamic ones leave a 2 byte placeholder that [`HeadTail::finish`] fills
/// with the absolute offset of their payload.
#[derive(Default)]
struct HeadTail {
    head: Vec<u8>,
    tail: Vec<u8>,
    /// (position of the placeholder in the head, offset of the payload in the tail)
    placeholders: Vec<(usize, usize)>,
    bool_run: Vec<bool>,
}

impl HeadTail {
    fn push_bool(&mut self, value: bool) {
        self.bool_run.push(value);
    }

    fn flush_bools(&mut self) {
        if !self.bool_run.is_empty() {
            self.head.extend(pack_bools(&self.bool_run));
            self.bool_run.clear();
        }
    }

    fn push_static(&mut self, encoded: &[u8]) {
        self.flush_bools();
        self.head.extend_from_slice(encoded);
    }

    fn push_dynamic(&mut self, encoded: Vec<u8>) {
        self.flush_bools();
        self.placeholders.push((self.head.len(), self.tail.len()));
        self.head.extend_from_slice(&[0; OFFSET_SIZE]);
        self.tail.extend(encoded);
    }

    fn finish(mut self) -> Result<Vec<u8>, Arc4Error> {
        self.flush_bools();
        let head_len = self.head.len();
        for (position, tail_offset) in self.placeholders {
            let offset = length_prefix(head_len + tail_offset)?;
            self.head
                .get_mut(position..position + OFFSET_SIZE)
                .ok_or(Arc4Error::InternalInvariant("offset placeholder outside the head"))?
                .copy_from_slice(&offset);
        }
        self.head.extend(self.tail);
        Ok(self.head)
    }
}

fn encode_sequence<'a>(
    items: impl Iterator<Item = (&'a TypeDescriptor, &'a Arc4Native)>,
) -> Result<Vec<u8>, Arc4Error> {
    let mut layout = HeadTail::default();
    for (ty, native) in items {
        match (ty, native) {
            (TypeDescriptor::Bool, Arc4Native::Bool(value)) => layout.push_bool(*value),
            (ty, native) if ty.is_dynamic() => layout.push_dynamic(encode(ty, native)?),
            (ty, native) => layout.push_static(&encode(ty, native)?),
        }
    }
    layout.finish()
}
