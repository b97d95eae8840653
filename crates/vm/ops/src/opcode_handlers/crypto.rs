//! # Hashing and signature operations
//!
//! Includes the following opcodes:
//!   - `sha256`, `sha512_256`, `sha3_256`, `keccak256`
//!   - `ed25519verify`, `ed25519verify_bare`, `ecdsa_verify`,
//!     `ecdsa_pk_decompress`, `ecdsa_pk_recover`, `vrf_verify`, `mimc` and
//!     the `ec_*` family, which are not emulated and fail with
//!     [`AvmError::NotSupported`].

use avm_common::{AvmError, Bytes, types::BytesCompat};
use sha2::{Digest, Sha256, Sha512_256};
use sha3::{Keccak256, Sha3_256};
use tracing::debug;

fn digest<D: Digest>(data: impl BytesCompat) -> Result<Bytes, AvmError> {
    let data = data.to_avm_bytes()?;
    Bytes::new(D::digest(data.as_slice()).to_vec())
}

pub fn sha256(data: impl BytesCompat) -> Result<Bytes, AvmError> {
    digest::<Sha256>(data)
}

/// SHA-512/256, the hash behind transaction ids and address checksums.
pub fn sha512_256(data: impl BytesCompat) -> Result<Bytes, AvmError> {
    digest::<Sha512_256>(data)
}

pub fn sha3_256(data: impl BytesCompat) -> Result<Bytes, AvmError> {
    digest::<Sha3_256>(data)
}

pub fn keccak256(data: impl BytesCompat) -> Result<Bytes, AvmError> {
    digest::<Keccak256>(data)
}

fn not_supported<T>(opcode: &'static str) -> Result<T, AvmError> {
    debug!(opcode, "Unsupported opcode invoked");
    Err(AvmError::NotSupported(opcode))
}

/// Curves accepted by the `ecdsa_*` opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecdsa {
    Secp256k1,
    Secp256r1,
}

/// Groups accepted by the `ec_*` opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcGroup {
    Bn254G1,
    Bn254G2,
    Bls12_381G1,
    Bls12_381G2,
}

pub fn ed25519verify(
    _data: impl BytesCompat,
    _signature: impl BytesCompat,
    _public_key: impl BytesCompat,
) -> Result<bool, AvmError> {
    not_supported("ed25519verify")
}

pub fn ed25519verify_bare(
    _data: impl BytesCompat,
    _signature: impl BytesCompat,
    _public_key: impl BytesCompat,
) -> Result<bool, AvmError> {
    not_supported("ed25519verify_bare")
}

pub fn ecdsa_verify(
    _curve: Ecdsa,
    _data: impl BytesCompat,
    _signature_r: impl BytesCompat,
    _signature_s: impl BytesCompat,
    _public_key_x: impl BytesCompat,
    _public_key_y: impl BytesCompat,
) -> Result<bool, AvmError> {
    not_supported("ecdsa_verify")
}

pub fn ecdsa_pk_decompress(
    _curve: Ecdsa,
    _public_key: impl BytesCompat,
) -> Result<(Bytes, Bytes), AvmError> {
    not_supported("ecdsa_pk_decompress")
}

pub fn ecdsa_pk_recover(
    _curve: Ecdsa,
    _data: impl BytesCompat,
    _recovery_id: u64,
    _signature_r: impl BytesCompat,
    _signature_s: impl BytesCompat,
) -> Result<(Bytes, Bytes), AvmError> {
    not_supported("ecdsa_pk_recover")
}

pub fn vrf_verify(
    _message: impl BytesCompat,
    _proof: impl BytesCompat,
    _public_key: impl BytesCompat,
) -> Result<(Bytes, bool), AvmError> {
    not_supported("vrf_verify")
}

pub fn mimc(_data: impl BytesCompat) -> Result<Bytes, AvmError> {
    not_supported("mimc")
}

pub fn ec_add(_group: EcGroup, _a: impl BytesCompat, _b: impl BytesCompat) -> Result<Bytes, AvmError> {
    not_supported("ec_add")
}

pub fn ec_scalar_mul(
    _group: EcGroup,
    _point: impl BytesCompat,
    _scalar: impl BytesCompat,
) -> Result<Bytes, AvmError> {
    not_supported("ec_scalar_mul")
}

pub fn ec_pairing_check(
    _group: EcGroup,
    _a: impl BytesCompat,
    _b: impl BytesCompat,
) -> Result<bool, AvmError> {
    not_supported("ec_pairing_check")
}

pub fn ec_multi_scalar_mul(
    _group: EcGroup,
    _points: impl BytesCompat,
    _scalars: impl BytesCompat,
) -> Result<Bytes, AvmError> {
    not_supported("ec_multi_scalar_mul")
}

pub fn ec_subgroup_check(_group: EcGroup, _point: impl BytesCompat) -> Result<bool, AvmError> {
    not_supported("ec_subgroup_check")
}

pub fn ec_map_to(_group: EcGroup, _field_element: impl BytesCompat) -> Result<Bytes, AvmError> {
    not_supported("ec_map_to")
}
