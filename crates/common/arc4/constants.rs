/// Encoded `true`: the flag lives in the most significant bit.
pub const ARC4_TRUE: u8 = 0x80;
pub const ARC4_FALSE: u8 = 0x00;

/// Size of a head offset pointer and of the length prefix of dynamic types.
pub const OFFSET_SIZE: usize = 2;
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Largest length or offset a 2-byte prefix can carry.
pub const MAX_LENGTH_PREFIX: usize = u16::MAX as usize;

pub const MAX_UINT_BITS: u16 = 512;
pub const MAX_UFIXED_PRECISION: u8 = 160;
