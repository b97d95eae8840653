//! # avm-common
//!
//! Primitive value types of the AVM emulation core.
//!
//! | Type | AVM stack type | Domain |
//! |------|----------------|--------|
//! | [`Uint64`] | `uint64` | `[0, 2^64 - 1]` |
//! | [`BigUint`] | `bigint` (byte math) | `[0, 2^512 - 1]` |
//! | [`Bytes`] | `[]byte` | at most 4096 bytes |
//!
//! Every operation that can leave the domain of its type returns an
//! [`AvmError`] whose message follows the wording of the reference VM.

pub mod base32;
pub mod constants;
pub mod errors;
#[cfg(feature = "serde")]
pub mod serde_utils;
pub mod types;

pub use errors::{AvmError, NumericDomain};
pub use types::{BigUint, Bytes, Uint64};
