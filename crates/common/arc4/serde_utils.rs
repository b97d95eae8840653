use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::{address::Address, descriptor::TypeDescriptor};

/// Serializes a value through its `Display` form and parses it back with
/// `FromStr`.
pub mod display_from_str {
    use super::*;

    pub fn deserialize<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = String::deserialize(d)?;
        value.parse().map_err(D::Error::custom)
    }

    pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: std::fmt::Display,
    {
        serializer.collect_str(value)
    }
}

/// Wire form of a [`TypeDescriptor`]. Descriptors without structs are plain
/// type strings; struct names and field names have no type string syntax, so
/// anything containing a struct is spelled out as an object.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum DescriptorRepr {
    TypeString(String),
    Struct {
        name: String,
        fields: Vec<(String, TypeDescriptor)>,
    },
    Tuple {
        tuple: Vec<TypeDescriptor>,
    },
    Array {
        elem: Box<TypeDescriptor>,
        len: Option<usize>,
    },
}

fn contains_struct(ty: &TypeDescriptor) -> bool {
    match ty {
        TypeDescriptor::Struct { .. } => true,
        TypeDescriptor::FixedArray { elem, .. } | TypeDescriptor::DynArray { elem } => {
            contains_struct(elem)
        }
        TypeDescriptor::Tuple { fields } => fields.iter().any(contains_struct),
        _ => false,
    }
}

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !contains_struct(self) {
            return display_from_str::serialize(self, serializer);
        }
        let repr = match self {
            Self::Struct { name, fields } => DescriptorRepr::Struct {
                name: name.clone(),
                fields: fields.clone(),
            },
            Self::Tuple { fields } => DescriptorRepr::Tuple {
                tuple: fields.clone(),
            },
            Self::FixedArray { elem, len } => DescriptorRepr::Array {
                elem: elem.clone(),
                len: Some(*len),
            },
            Self::DynArray { elem } => DescriptorRepr::Array {
                elem: elem.clone(),
                len: None,
            },
            other => DescriptorRepr::TypeString(other.to_string()),
        };
        repr.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TypeDescriptor {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let ty = match DescriptorRepr::deserialize(d)? {
            DescriptorRepr::TypeString(s) => s.parse().map_err(D::Error::custom)?,
            DescriptorRepr::Struct { name, fields } => Self::Struct { name, fields },
            DescriptorRepr::Tuple { tuple } => Self::Tuple { fields: tuple },
            DescriptorRepr::Array { elem, len: Some(len) } => Self::FixedArray { elem, len },
            DescriptorRepr::Array { elem, len: None } => Self::DynArray { elem },
        };
        ty.validate().map_err(D::Error::custom)?;
        Ok(ty)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        display_from_str::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        display_from_str::deserialize(d)
    }
}
