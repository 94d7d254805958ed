use crate::constants::{flags, PAYLOAD_OFFSET};
use crate::crypto::{verify_tag, MacError};

/// Structured view of the flag byte.
///
/// Business logic works with the two named fields; the bit layout only exists
/// in `to_byte`/`from_byte`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Flag {
    pub compressed: bool,
    /// Raw version, 0..=15.
    pub version: u8,
}

impl Flag {
    #[inline]
    pub const fn new(compressed: bool, version: u8) -> Self {
        Self { compressed, version }
    }

    /// Pack into the wire byte. Versions above 15 cannot be represented.
    pub fn to_byte(self) -> Result<u8, FrameError> {
        if self.version > flags::MAX_VERSION {
            return Err(FrameError::VersionOutOfRange { have: self.version, max: flags::MAX_VERSION });
        }

        let mut b = self.version << flags::VERSION_SHIFT;
        if self.compressed {
            b |= flags::COMPRESSED;
        }
        Ok(b)
    }

    /// Unpack the wire byte. Reserved bits must be zero.
    pub fn from_byte(b: u8) -> Result<Self, FrameError> {
        if b & flags::RESERVED_MASK != 0 {
            return Err(FrameError::ReservedBitsSet(b));
        }

        Ok(Self {
            compressed: b & flags::COMPRESSED != 0,
            version: (b & flags::VERSION_MASK) >> flags::VERSION_SHIFT,
        })
    }
}

/// Borrowed view over a structurally valid frame. Nothing in it is trusted
/// until `verify` succeeds.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub flag: Flag,
    /// Framed (possibly compressed) payload, exactly `payload_len` bytes.
    pub payload: &'a [u8],
    /// Bytes covered by the tag: flag + length + payload.
    pub signed: &'a [u8],
    /// Received tag.
    pub tag: &'a [u8],
}

impl<'a> FrameView<'a> {
    /// Constant-time tag check over `signed`.
    pub fn verify(&self, key: &[u8]) -> Result<(), MacError> {
        verify_tag(key, self.signed, self.tag)
    }

    #[inline]
    pub fn payload_len(&self) -> usize {
        self.signed.len() - PAYLOAD_OFFSET
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("malformed base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("frame too short: {have} < {need}")]
    Truncated { have: usize, need: usize },

    #[error("declared payload length {declared} exceeds available {available} bytes")]
    LengthOverrun { declared: usize, available: usize },

    /// Flag bits 5-7 non-zero. Stricter than older decoders of this format, which ignored them.
    #[error("reserved flag bits set: 0b{0:08b}")]
    ReservedBitsSet(u8),

    #[error("version {have} does not fit the flag byte (max {max})")]
    VersionOutOfRange { have: u8, max: u8 },

    #[error("payload too large: {have} > {max}")]
    PayloadTooLarge { have: usize, max: usize },
}
