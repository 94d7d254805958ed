/// Length of the HMAC-SHA256 tag trailing every frame.
pub const HASH_LEN: usize = 32;

/// Flag byte.
pub const FLAG_LEN: usize = 1;

/// Big-endian u16 payload length.
pub const LEN_FIELD_LEN: usize = 2;

/// Offset of the framed payload inside a frame.
pub const PAYLOAD_OFFSET: usize = FLAG_LEN + LEN_FIELD_LEN;

/// Smallest valid frame: flag + length + tag, zero-length payload.
pub const MIN_FRAME_LEN: usize = FLAG_LEN + LEN_FIELD_LEN + HASH_LEN;

/// Largest framed payload the u16 length field can describe.
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// Built-in signing key.
///
/// This value is public knowledge. Anything sealed with it can be forged by
/// anyone, so it exists for tests and local tooling only. Production callers
/// must pass their own secret through [`crate::options::Options::new`].
pub const DEFAULT_KEY: &[u8] = b"Heisenberg";

/// Version identifiers stored in bits 1-4 of the flag byte.
pub mod version_ids {
    pub const VERSION1: u8 = 0;
}

/// Flag byte layout.
pub mod flags {
    /// Bit 0: payload is compressed.
    pub const COMPRESSED: u8 = 0b0000_0001;
    /// Bits 1-4: version.
    pub const VERSION_MASK: u8 = 0b0001_1110;
    pub const VERSION_SHIFT: u8 = 1;
    /// Bits 5-7: reserved, must be zero.
    pub const RESERVED_MASK: u8 = 0b1110_0000;
    /// Largest version representable in the flag byte.
    pub const MAX_VERSION: u8 = VERSION_MASK >> VERSION_SHIFT;
}
