//! ARC4 ABI codec.
//!
//! Types are described by [`TypeDescriptor`], values by [`Arc4Native`], and
//! [`Arc4Value`] keeps the two together with the cached encoding. Composite
//! encodings use the head/tail layout: static fields inline, dynamic fields
//! behind 2 byte offsets into a tail that follows the head.

pub mod address;
pub mod constants;
pub mod decode;
pub mod descriptor;
pub mod encode;
pub mod error;
pub mod native;
#[cfg(feature = "serde")]
pub mod serde_utils;
pub mod typed;
pub mod ufixed;
pub mod value;

pub use address::Address;
pub use decode::{decode, decode_from_log};
pub use descriptor::TypeDescriptor;
pub use encode::encode;
pub use error::Arc4Error;
pub use native::Arc4Native;
pub use typed::{Arc4Type, arc4_encoded_length};
pub use value::Arc4Value;
