use avm_common::{BigUint, Bytes, Uint64, constants::ABI_RETURN_VALUE_LOG_PREFIX};

use crate::{
    address::Address,
    decode::{decode, decode_from_log},
    descriptor::TypeDescriptor,
    encode::{encode, encode_bool},
    error::Arc4Error,
    native::Arc4Native,
    typed::Arc4Type,
    ufixed::{ufixed_from_str, ufixed_to_string},
};

/// A typed ARC4 value together with its encoding.
///
/// `encoded` is always `encode(ty, native)`. Mutators work on a copy of the
/// native tree, re-encode the whole value and only then commit, so a failed
/// mutation leaves the value untouched and a successful one is byte-identical
/// to building the mutated value from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arc4Value {
    ty: TypeDescriptor,
    native: Arc4Native,
    encoded: bytes::Bytes,
}

impl Arc4Value {
    pub fn new(ty: TypeDescriptor, native: Arc4Native) -> Result<Self, Arc4Error> {
        ty.validate()?;
        let encoded = encode(&ty, &native)?;
        Ok(Self {
            ty,
            native,
            encoded: encoded.into(),
        })
    }

    /// Zero value of `ty`.
    pub fn default_for(ty: TypeDescriptor) -> Result<Self, Arc4Error> {
        ty.validate()?;
        let native = Arc4Native::default_for(&ty);
        Self::new(ty, native)
    }

    /// Zero value of a statically known type.
    pub fn default_of<T: Arc4Type>() -> Result<Self, Arc4Error> {
        Self::default_for(T::descriptor())
    }

    pub fn from_bytes(ty: TypeDescriptor, bytes: &[u8]) -> Result<Self, Arc4Error> {
        ty.validate()?;
        let native = decode(&ty, bytes)?;
        Self::new(ty, native)
    }

    /// Decodes a logged ABI return value, see [`decode_from_log`].
    pub fn from_log(ty: TypeDescriptor, bytes: &[u8]) -> Result<Self, Arc4Error> {
        ty.validate()?;
        let native = decode_from_log(&ty, bytes)?;
        Self::new(ty, native)
    }

    // === Scalars ===

    pub fn bool(value: bool) -> Self {
        Self::from_parts(
            TypeDescriptor::Bool,
            Arc4Native::Bool(value),
            vec![encode_bool(value)],
        )
    }

    pub fn uint(bits: u16, value: impl Into<BigUint>) -> Result<Self, Arc4Error> {
        Self::new(TypeDescriptor::uint(bits)?, Arc4Native::Uint(value.into()))
    }

    pub fn uint64(value: u64) -> Self {
        Self::from_parts(
            TypeDescriptor::UintN { bits: 64 },
            Arc4Native::Uint(BigUint::from(value)),
            value.to_be_bytes().to_vec(),
        )
    }

    /// `raw` is the value already scaled by `10^precision`.
    pub fn ufixed(bits: u16, precision: u8, raw: impl Into<BigUint>) -> Result<Self, Arc4Error> {
        Self::new(
            TypeDescriptor::ufixed(bits, precision)?,
            Arc4Native::Uint(raw.into()),
        )
    }

    pub fn ufixed_from_str(bits: u16, precision: u8, text: &str) -> Result<Self, Arc4Error> {
        let raw = ufixed_from_str(bits, precision, text)?;
        Self::ufixed(bits, precision, raw)
    }

    pub fn byte(value: u8) -> Self {
        Self::from_parts(
            TypeDescriptor::Byte,
            Arc4Native::Uint(BigUint::from(u64::from(value))),
            vec![value],
        )
    }

    pub fn address(value: Address) -> Self {
        Self::from_parts(
            TypeDescriptor::Address,
            Arc4Native::Address(value),
            value.as_bytes().to_vec(),
        )
    }

    pub fn str(value: impl Into<String>) -> Result<Self, Arc4Error> {
        Self::new(TypeDescriptor::Str, Arc4Native::Str(value.into()))
    }

    pub fn dynamic_bytes(value: impl Into<Vec<u8>>) -> Result<Self, Arc4Error> {
        Self::new(TypeDescriptor::DynamicBytes, Arc4Native::Bytes(value.into()))
    }

    /// `byte[N]` with `N` taken from the length of `value`.
    pub fn static_bytes(value: impl Into<Vec<u8>>) -> Self {
        let value = value.into();
        Self::from_parts(
            TypeDescriptor::StaticBytes { len: value.len() },
            Arc4Native::Bytes(value.clone()),
            value,
        )
    }

    /// For leaf values whose encoding is their raw bytes.
    fn from_parts(ty: TypeDescriptor, native: Arc4Native, encoded: Vec<u8>) -> Self {
        Self {
            ty,
            native,
            encoded: encoded.into(),
        }
    }

    // === Composites ===

    pub fn fixed_array(elem: TypeDescriptor, items: Vec<Arc4Value>) -> Result<Self, Arc4Error> {
        let natives = natives_of(&elem, items)?;
        Self::new(TypeDescriptor::fixed_array(elem, natives.len()), Arc4Native::Array(natives))
    }

    pub fn dyn_array(elem: TypeDescriptor, items: Vec<Arc4Value>) -> Result<Self, Arc4Error> {
        let natives = natives_of(&elem, items)?;
        Self::new(TypeDescriptor::dyn_array(elem), Arc4Native::Array(natives))
    }

    pub fn tuple(items: Vec<Arc4Value>) -> Result<Self, Arc4Error> {
        let (fields, natives): (Vec<_>, Vec<_>) = items
            .into_iter()
            .map(|item| (item.ty, item.native))
            .unzip();
        Self::new(TypeDescriptor::tuple(fields), Arc4Native::Tuple(natives))
    }

    pub fn structure(
        name: impl Into<String>,
        fields: Vec<(impl Into<String>, Arc4Value)>,
    ) -> Result<Self, Arc4Error> {
        let (fields, natives): (Vec<_>, Vec<_>) = fields
            .into_iter()
            .map(|(field, value)| ((field.into(), value.ty), value.native))
            .unzip();
        Self::new(
            TypeDescriptor::Struct {
                name: name.into(),
                fields,
            },
            Arc4Native::Tuple(natives),
        )
    }

    // === Accessors ===

    pub fn type_descriptor(&self) -> &TypeDescriptor {
        &self.ty
    }

    pub fn native(&self) -> &Arc4Native {
        &self.native
    }

    pub fn encoded(&self) -> &[u8] {
        &self.encoded
    }

    /// The encoding as an AVM byte value, failing if it exceeds the AVM
    /// byte length limit.
    pub fn bytes(&self) -> Result<Bytes, Arc4Error> {
        Ok(Bytes::new(self.encoded.clone())?)
    }

    /// The encoding prefixed as an ABI return value.
    pub fn encode_for_log(&self) -> Vec<u8> {
        let mut logged = ABI_RETURN_VALUE_LOG_PREFIX.to_vec();
        logged.extend_from_slice(&self.encoded);
        logged
    }

    /// Independent value; later mutations of either side do not affect the
    /// other.
    pub fn copy(&self) -> Self {
        Self {
            ty: self.ty.clone(),
            native: self.native.clone(),
            encoded: bytes::Bytes::copy_from_slice(&self.encoded),
        }
    }

    pub fn as_bool(&self) -> Result<bool, Arc4Error> {
        match &self.native {
            Arc4Native::Bool(value) => Ok(*value),
            _ => Err(Arc4Error::type_mismatch("bool", &self.ty)),
        }
    }

    pub fn as_biguint(&self) -> Result<&BigUint, Arc4Error> {
        match &self.native {
            Arc4Native::Uint(value) => Ok(value),
            _ => Err(Arc4Error::type_mismatch("uintN", &self.ty)),
        }
    }

    pub fn as_uint64(&self) -> Result<Uint64, Arc4Error> {
        Ok(self.as_biguint()?.to_uint64()?)
    }

    pub fn as_str(&self) -> Result<&str, Arc4Error> {
        match &self.native {
            Arc4Native::Str(value) => Ok(value),
            _ => Err(Arc4Error::type_mismatch("string", &self.ty)),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], Arc4Error> {
        match &self.native {
            Arc4Native::Bytes(value) => Ok(value),
            _ => Err(Arc4Error::type_mismatch("byte[]", &self.ty)),
        }
    }

    pub fn as_address(&self) -> Result<Address, Arc4Error> {
        match &self.native {
            Arc4Native::Address(value) => Ok(*value),
            _ => Err(Arc4Error::type_mismatch("address", &self.ty)),
        }
    }

    /// Decimal text of a `ufixedNxM` value.
    pub fn as_ufixed_string(&self) -> Result<String, Arc4Error> {
        match (&self.ty, &self.native) {
            (TypeDescriptor::UFixed { precision, .. }, Arc4Native::Uint(raw)) => {
                Ok(ufixed_to_string(raw, *precision))
            }
            _ => Err(Arc4Error::type_mismatch("ufixed", &self.ty)),
        }
    }

    // === Elements ===

    /// Number of elements of an array, tuple or struct.
    pub fn len(&self) -> Result<usize, Arc4Error> {
        self.native
            .elements()
            .map(<[Arc4Native]>::len)
            .ok_or_else(|| Arc4Error::type_mismatch("array, tuple or struct", &self.ty))
    }

    pub fn is_empty(&self) -> Result<bool, Arc4Error> {
        Ok(self.len()? == 0)
    }

    pub fn get(&self, index: usize) -> Result<Arc4Value, Arc4Error> {
        self.get_path(&[index])
    }

    /// Nested element access, `get_path(&[0, 1])` is `value[0][1]`.
    pub fn get_path(&self, path: &[usize]) -> Result<Arc4Value, Arc4Error> {
        let mut ty = &self.ty;
        let mut native = &self.native;
        for &index in path {
            let items = native
                .elements()
                .ok_or_else(|| Arc4Error::type_mismatch("array, tuple or struct", ty))?;
            native = items.get(index).ok_or(Arc4Error::IndexOutOfBounds {
                index,
                len: items.len(),
            })?;
            ty = ty
                .child(index)
                .ok_or(Arc4Error::InternalInvariant("element without a type"))?;
        }
        Self::new(ty.clone(), native.clone())
    }

    pub fn field(&self, name: &str) -> Result<Arc4Value, Arc4Error> {
        let index = self.ty.field_index(name)?;
        self.get(index)
    }

    pub fn items(&self) -> Result<Vec<Arc4Value>, Arc4Error> {
        (0..self.len()?).map(|index| self.get(index)).collect()
    }

    // === Mutation ===

    pub fn set(&mut self, index: usize, value: Arc4Value) -> Result<(), Arc4Error> {
        self.set_at(&[index], value)
    }

    /// Replaces the element at `path` (`set_at(&[0, 1, 0], x)` is
    /// `value[0][1][0] = x`) and re-encodes the whole value.
    pub fn set_at(&mut self, path: &[usize], value: Arc4Value) -> Result<(), Arc4Error> {
        let mut native = self.native.clone();
        let mut ty = &self.ty;
        let mut slot = &mut native;
        for &index in path {
            let items = slot
                .elements_mut()
                .ok_or_else(|| Arc4Error::type_mismatch("array, tuple or struct", ty))?;
            let len = items.len();
            slot = items
                .get_mut(index)
                .ok_or(Arc4Error::IndexOutOfBounds { index, len })?;
            ty = ty
                .child(index)
                .ok_or(Arc4Error::InternalInvariant("element without a type"))?;
        }
        if value.ty != *ty {
            return Err(Arc4Error::type_mismatch(ty, &value.ty));
        }
        *slot = value.native;
        self.commit(native)
    }

    pub fn set_field(&mut self, name: &str, value: Arc4Value) -> Result<(), Arc4Error> {
        let index = self.ty.field_index(name)?;
        self.set(index, value)
    }

    pub fn push(&mut self, value: Arc4Value) -> Result<(), Arc4Error> {
        self.extend([value])
    }

    pub fn extend(&mut self, values: impl IntoIterator<Item = Arc4Value>) -> Result<(), Arc4Error> {
        let elem = self.dyn_array_elem()?;
        let mut native = self.native.clone();
        let items = native
            .elements_mut()
            .ok_or(Arc4Error::InternalInvariant("dynamic array without elements"))?;
        for value in values {
            if value.ty != *elem {
                return Err(Arc4Error::type_mismatch(elem, &value.ty));
            }
            items.push(value.native);
        }
        self.commit(native)
    }

    pub fn pop(&mut self) -> Result<Arc4Value, Arc4Error> {
        let elem = self.dyn_array_elem()?.clone();
        let mut native = self.native.clone();
        let popped = native
            .elements_mut()
            .ok_or(Arc4Error::InternalInvariant("dynamic array without elements"))?
            .pop()
            .ok_or(Arc4Error::EmptyArray)?;
        self.commit(native)?;
        Self::new(elem, popped)
    }

    fn dyn_array_elem(&self) -> Result<&TypeDescriptor, Arc4Error> {
        match &self.ty {
            TypeDescriptor::DynArray { elem } => Ok(elem),
            other => Err(Arc4Error::type_mismatch("dynamic array", other)),
        }
    }

    fn commit(&mut self, native: Arc4Native) -> Result<(), Arc4Error> {
        self.encoded = encode(&self.ty, &native)?.into();
        self.native = native;
        Ok(())
    }
}

fn natives_of(elem: &TypeDescriptor, items: Vec<Arc4Value>) -> Result<Vec<Arc4Native>, Arc4Error> {
    items
        .into_iter()
        .map(|item| {
            if item.ty != *elem {
                return Err(Arc4Error::type_mismatch(elem, &item.ty));
            }
            Ok(item.native)
        })
        .collect()
}
