use avm_common::BigUint;

use crate::{address::Address, descriptor::TypeDescriptor};

/// Decoded form of an ARC4 value.
///
/// The shape carries no type information of its own: `Uint` backs `uintN`,
/// `ufixedNxM` (raw scaled integer) and `byte`; `Bytes` backs both `byte[]`
/// and `byte[N]`; `Tuple` backs tuples and structs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Arc4Native {
    Bool(bool),
    Uint(BigUint),
    Address(Address),
    Str(String),
    Bytes(Vec<u8>),
    Array(Vec<Arc4Native>),
    Tuple(Vec<Arc4Native>),
}

impl Arc4Native {
    /// Zero value of a type: `false`, `0`, the zero address, empty strings
    /// and dynamic arrays, and fixed sequences of zero values.
    pub fn default_for(ty: &TypeDescriptor) -> Self {
        match ty {
            TypeDescriptor::Bool => Self::Bool(false),
            TypeDescriptor::UintN { .. } | TypeDescriptor::UFixed { .. } | TypeDescriptor::Byte => {
                Self::Uint(BigUint::zero())
            }
            TypeDescriptor::Address => Self::Address(Address::zero()),
            TypeDescriptor::Str => Self::Str(String::new()),
            TypeDescriptor::DynamicBytes => Self::Bytes(Vec::new()),
            TypeDescriptor::StaticBytes { len } => Self::Bytes(vec![0; *len]),
            TypeDescriptor::FixedArray { elem, len } => {
                Self::Array((0..*len).map(|_| Self::default_for(elem)).collect())
            }
            TypeDescriptor::DynArray { .. } => Self::Array(Vec::new()),
            TypeDescriptor::Tuple { fields } => {
                Self::Tuple(fields.iter().map(Self::default_for).collect())
            }
            TypeDescriptor::Struct { fields, .. } => {
                Self::Tuple(fields.iter().map(|(_, ty)| Self::default_for(ty)).collect())
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Uint(_) => "integer",
            Self::Address(_) => "address",
            Self::Str(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Array(_) => "array",
            Self::Tuple(_) => "tuple",
        }
    }

    /// Elements of an array or tuple.
    pub(crate) fn elements_mut(&mut self) -> Option<&mut Vec<Arc4Native>> {
        match self {
            Self::Array(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    pub(crate) fn elements(&self) -> Option<&[Arc4Native]> {
        match self {
            Self::Array(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for Arc4Native {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<BigUint> for Arc4Native {
    fn from(value: BigUint) -> Self {
        Self::Uint(value)
    }
}

impl From<u64> for Arc4Native {
    fn from(value: u64) -> Self {
        Self::Uint(BigUint::from(value))
    }
}

impl From<Address> for Arc4Native {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

impl From<String> for Arc4Native {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Arc4Native {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<Vec<u8>> for Arc4Native {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}
