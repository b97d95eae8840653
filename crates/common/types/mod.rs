mod biguint;
mod bytes;
mod compat;
mod uint64;

pub use biguint::BigUint;
pub use bytes::Bytes;
pub use compat::{BytesCompat, StackValue};
pub use uint64::Uint64;
