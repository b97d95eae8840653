// === AVM limits ===

/// Maximum length of a byte array on the AVM stack.
pub const MAX_BYTES_SIZE: usize = 4096;

pub const MAX_UINT64: u64 = u64::MAX;

/// Size in bytes of an `itob` encoded uint64.
pub const UINT64_SIZE: usize = 8;

pub const BITS_IN_BYTE: usize = 8;

/// Byte math operates on at most 512 bit values.
pub const BIGUINT_BITS: u64 = 512;
pub const BIGUINT_MAX_BYTES: usize = 64;

// === ABI ===

/// Prefix the AVM prepends to logged ABI return values (first 4 bytes of `sha512_256("return")`).
pub const ABI_RETURN_VALUE_LOG_PREFIX: [u8; 4] = [0x15, 0x1f, 0x7c, 0x75];

// === Addresses ===

pub const ADDRESS_PUBLIC_KEY_LENGTH: usize = 32;
pub const ADDRESS_CHECKSUM_LENGTH: usize = 4;
/// Length of the base32 textual form of an address (32 byte key + 4 byte checksum).
pub const ADDRESS_TEXT_LENGTH: usize = 58;

/// All-zero address, printed as `AAAA...Y5HFKQ`.
pub const ZERO_ADDRESS: [u8; ADDRESS_PUBLIC_KEY_LENGTH] = [0; ADDRESS_PUBLIC_KEY_LENGTH];
