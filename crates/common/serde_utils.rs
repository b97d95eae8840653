use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::types::{BigUint, Bytes, Uint64};

pub mod bytes_hex {
    use super::*;

    pub fn deserialize<'de, D>(d: D) -> Result<Bytes, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(d)?;
        Bytes::from_hex(&value).map_err(|e| D::Error::custom(e.to_string()))
    }

    pub fn serialize<S>(value: &Bytes, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", value.to_hex()))
    }
}

pub mod biguint_dec_str {
    use super::*;

    pub fn deserialize<'de, D>(d: D) -> Result<BigUint, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(d)?;
        BigUint::from_dec_str(&value).map_err(|e| D::Error::custom(e.to_string()))
    }

    pub fn serialize<S>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }
}

/// Accepts both a JSON number and a decimal string, since integers above
/// 2^53 are commonly quoted.
pub mod uint64_num_or_str {
    use super::*;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(u64),
        Str(String),
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Uint64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumOrStr::deserialize(d)? {
            NumOrStr::Num(value) => Ok(Uint64::new(value)),
            NumOrStr::Str(value) => value
                .parse::<u64>()
                .map(Uint64::new)
                .map_err(|_| D::Error::custom("Failed to deserialize uint64 value")),
        }
    }

    pub fn serialize<S>(value: &Uint64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(value.as_u64())
    }
}

impl Serialize for Bytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bytes_hex::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Bytes {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        bytes_hex::deserialize(d)
    }
}

impl Serialize for BigUint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        biguint_dec_str::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for BigUint {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        biguint_dec_str::deserialize(d)
    }
}

impl Serialize for Uint64 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        uint64_num_or_str::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Uint64 {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        uint64_num_or_str::deserialize(d)
    }
}
