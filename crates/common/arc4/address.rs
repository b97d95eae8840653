use std::fmt;
use std::str::FromStr;

use avm_common::{
    base32,
    constants::{ADDRESS_CHECKSUM_LENGTH, ADDRESS_PUBLIC_KEY_LENGTH, ZERO_ADDRESS},
};

use crate::error::Arc4Error;

/// 32 byte account public key, rendered as 58 characters of base32 text
/// including a 4 byte checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; ADDRESS_PUBLIC_KEY_LENGTH]);

impl Address {
    pub const fn new(public_key: [u8; ADDRESS_PUBLIC_KEY_LENGTH]) -> Self {
        Self(public_key)
    }

    pub const fn zero() -> Self {
        Self(ZERO_ADDRESS)
    }

    pub const fn as_bytes(&self) -> &[u8; ADDRESS_PUBLIC_KEY_LENGTH] {
        &self.0
    }

    pub fn checksum(&self) -> [u8; ADDRESS_CHECKSUM_LENGTH] {
        base32::address_checksum(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == ZERO_ADDRESS
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", base32::encode_address(&self.0))
    }
}

impl FromStr for Address {
    type Err = Arc4Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        base32::decode_address(s)
            .map(Self)
            .map_err(|e| Arc4Error::InvalidAddress(e.to_string()))
    }
}

/// Accepts a raw 32 byte key or a 36 byte key followed by its checksum.
impl TryFrom<&[u8]> for Address {
    type Error = Arc4Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if let Ok(public_key) = <[u8; ADDRESS_PUBLIC_KEY_LENGTH]>::try_from(bytes) {
            return Ok(Self(public_key));
        }
        if bytes.len() == ADDRESS_PUBLIC_KEY_LENGTH + ADDRESS_CHECKSUM_LENGTH {
            return base32::split_address_payload(bytes)
                .map(Self)
                .map_err(|e| Arc4Error::InvalidAddress(e.to_string()));
        }
        Err(Arc4Error::InvalidAddress(format!(
            "expected {ADDRESS_PUBLIC_KEY_LENGTH} or {} bytes, got {}",
            ADDRESS_PUBLIC_KEY_LENGTH + ADDRESS_CHECKSUM_LENGTH,
            bytes.len()
        )))
    }
}

impl From<[u8; ADDRESS_PUBLIC_KEY_LENGTH]> for Address {
    fn from(public_key: [u8; ADDRESS_PUBLIC_KEY_LENGTH]) -> Self {
        Self(public_key)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
