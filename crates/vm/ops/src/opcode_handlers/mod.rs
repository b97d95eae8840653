pub mod arithmetic;
pub mod bitwise;
pub mod bytes;
pub mod crypto;
pub mod encoding;
