//! base32 encoder/decoder using the standard alphabet according to:
//! https://datatracker.ietf.org/doc/html/rfc4648#section-6
//!
//! Encoding never emits padding, which is the form used by textual account
//! addresses. Decoding accepts input with or without trailing '=' and fails on
//! characters outside the alphabet or non-zero trailing bits.

use sha2::{Digest, Sha512_256};

use crate::{
    constants::{ADDRESS_CHECKSUM_LENGTH, ADDRESS_PUBLIC_KEY_LENGTH, ADDRESS_TEXT_LENGTH},
    errors::AvmError,
};

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

fn alphabet_to_value(byte: u8) -> Option<u8> {
    match byte {
        b'A'..=b'Z' => Some(byte - b'A'),
        b'2'..=b'7' => Some(byte - b'2' + 26),
        _ => None,
    }
}

pub fn encode(bytes: &[u8]) -> String {
    let mut result = String::with_capacity(bytes.len().div_ceil(5) * 8);
    let mut buffer: u16 = 0;
    let mut buffered_bits = 0;

    for byte in bytes {
        buffer = (buffer << 8) | u16::from(*byte);
        buffered_bits += 8;
        while buffered_bits >= 5 {
            buffered_bits -= 5;
            let index = (buffer >> buffered_bits) & 0x1f;
            result.push(char::from(ALPHABET[usize::from(index)]));
        }
        buffer &= (1 << buffered_bits) - 1;
    }

    // remaining bits are left aligned into a last character
    if buffered_bits > 0 {
        let index = (buffer << (5 - buffered_bits)) & 0x1f;
        result.push(char::from(ALPHABET[usize::from(index)]));
    }

    result
}

pub fn decode(text: &str) -> Result<Vec<u8>, AvmError> {
    let text = text.trim_end_matches('=');
    let mut result = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u16 = 0;
    let mut buffered_bits = 0;

    for byte in text.bytes() {
        let value = alphabet_to_value(byte).ok_or_else(|| {
            AvmError::InvalidInput(format!("invalid base32 character {:?}", char::from(byte)))
        })?;
        buffer = (buffer << 5) | u16::from(value);
        buffered_bits += 5;
        if buffered_bits >= 8 {
            buffered_bits -= 8;
            let [_, low] = (buffer >> buffered_bits).to_be_bytes();
            result.push(low);
            buffer &= (1 << buffered_bits) - 1;
        }
    }

    // a whole leftover character carries no byte: 1, 3 or 6 trailing characters
    if buffered_bits >= 5 {
        return Err(AvmError::InvalidInput(format!(
            "invalid base32 length {}",
            text.len()
        )));
    }
    if buffer != 0 {
        return Err(AvmError::InvalidInput(
            "non-zero trailing bits in base32 input".to_string(),
        ));
    }

    Ok(result)
}

/// Last 4 bytes of `sha512_256(public_key)`.
pub fn address_checksum(public_key: &[u8; ADDRESS_PUBLIC_KEY_LENGTH]) -> [u8; ADDRESS_CHECKSUM_LENGTH] {
    let digest = Sha512_256::digest(public_key);
    let mut checksum = [0u8; ADDRESS_CHECKSUM_LENGTH];
    checksum.copy_from_slice(&digest[digest.len() - ADDRESS_CHECKSUM_LENGTH..]);
    checksum
}

/// Textual form of an account address: base32 of key and checksum.
pub fn encode_address(public_key: &[u8; ADDRESS_PUBLIC_KEY_LENGTH]) -> String {
    let mut payload = Vec::with_capacity(ADDRESS_PUBLIC_KEY_LENGTH + ADDRESS_CHECKSUM_LENGTH);
    payload.extend_from_slice(public_key);
    payload.extend_from_slice(&address_checksum(public_key));
    encode(&payload)
}

/// Splits a 36 byte key+checksum payload, validating the checksum.
pub fn split_address_payload(payload: &[u8]) -> Result<[u8; ADDRESS_PUBLIC_KEY_LENGTH], AvmError> {
    if payload.len() != ADDRESS_PUBLIC_KEY_LENGTH + ADDRESS_CHECKSUM_LENGTH {
        return Err(AvmError::InvalidInput(format!(
            "address payload must be {} bytes, got {}",
            ADDRESS_PUBLIC_KEY_LENGTH + ADDRESS_CHECKSUM_LENGTH,
            payload.len()
        )));
    }
    let (key, checksum) = payload.split_at(ADDRESS_PUBLIC_KEY_LENGTH);
    let mut public_key = [0u8; ADDRESS_PUBLIC_KEY_LENGTH];
    public_key.copy_from_slice(key);
    if address_checksum(&public_key) != checksum {
        return Err(AvmError::InvalidInput("address checksum mismatch".to_string()));
    }
    Ok(public_key)
}

pub fn decode_address(text: &str) -> Result<[u8; ADDRESS_PUBLIC_KEY_LENGTH], AvmError> {
    if text.len() != ADDRESS_TEXT_LENGTH {
        return Err(AvmError::InvalidInput(format!(
            "address must be {ADDRESS_TEXT_LENGTH} characters, got {}",
            text.len()
        )));
    }
    split_address_payload(&decode(text)?)
}
