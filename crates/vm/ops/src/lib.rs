//! # avm-ops
//!
//! Emulation of the pure AVM opcodes: the instructions whose result depends
//! only on their operands. Each opcode is a plain function taking the operands
//! in stack order and returning the values the VM would push, or the
//! [`AvmError`](avm_common::AvmError) the VM would fail with.
//!
//! Operands accept anything convertible into the AVM types, so `u64`,
//! [`Uint64`](avm_common::Uint64), `&[u8]`, `&str` and
//! [`Bytes`](avm_common::Bytes) can be passed interchangeably.
//!
//! ## Modules
//!
//! | Module | Opcodes |
//! |--------|---------|
//! | [`opcode_handlers::arithmetic`] | `addw`, `mulw`, `divw`, `divmodw`, `exp`, `expw`, `sqrt`, `bsqrt`, `bitlen`, `shl`, `shr` |
//! | [`opcode_handlers::bitwise`] | `getbit`, `setbit`, `getbyte`, `setbyte`, `b&`, `b\|`, `b^`, `b~` |
//! | [`opcode_handlers::bytes`] | `extract`, `extract_uintN`, `replace`, `substring`, `concat`, `len`, `itob`, `btoi`, `bzero`, `select` |
//! | [`opcode_handlers::encoding`] | `base64_decode`, `json_ref` |
//! | [`opcode_handlers::crypto`] | `sha256`, `sha512_256`, `sha3_256`, `keccak256`, unsupported signature and curve opcodes |

pub mod opcode_handlers;

pub use opcode_handlers::{arithmetic::*, bitwise::*, bytes::*, crypto::*, encoding::*};
