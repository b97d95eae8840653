//! # Encoding operations
//!
//! Includes the following opcodes:
//!   - `base64_decode`
//!   - `json_ref` (unsupported)

use avm_common::{AvmError, Bytes, types::BytesCompat};
use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE},
};
use tracing::debug;

/// Alphabet immediate of `base64_decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base64Encoding {
    /// `StdEncoding`: `+` and `/`.
    Std,
    /// `URLEncoding`: `-` and `_`.
    Url,
}

/// Strict base64 decoding: the input must be the canonical padded encoding
/// of its result, so re-encoding the decoded bytes reproduces it exactly.
pub fn base64_decode(encoding: Base64Encoding, data: impl BytesCompat) -> Result<Bytes, AvmError> {
    let data = data.to_avm_bytes()?;
    let engine = match encoding {
        Base64Encoding::Std => &STANDARD,
        Base64Encoding::Url => &URL_SAFE,
    };
    let decoded = engine
        .decode(data.as_slice())
        .map_err(|_| AvmError::IllegalBase64)?;
    if engine.encode(&decoded).as_bytes() != data.as_slice() {
        return Err(AvmError::IllegalBase64);
    }
    Bytes::new(decoded)
}

/// Value types of `json_ref`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonRefType {
    JsonString,
    JsonUint64,
    JsonObject,
}

pub fn json_ref(
    _json: impl BytesCompat,
    _key: impl BytesCompat,
    _ty: JsonRefType,
) -> Result<Bytes, AvmError> {
    debug!(opcode = "json_ref", "Unsupported opcode invoked");
    Err(AvmError::NotSupported("json_ref"))
}
