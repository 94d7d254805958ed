//! src/frame/decode.rs
//!
//! Structural frame parsing.
//!
//! Design notes:
//! - Only checks layout: minimum size, reserved bits, declared length.
//! - Returns borrowed slices; the caller must `verify` before trusting or
//!   decompressing anything.
//! - Bytes after the tag are ignored.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{FLAG_LEN, HASH_LEN, MIN_FRAME_LEN, PAYLOAD_OFFSET};
use crate::frame::types::{Flag, FrameError, FrameView};

/// Parse a decoded (binary) frame.
///
/// # Errors
/// - `FrameError::Truncated` if `wire` is shorter than 35 bytes.
/// - `FrameError::ReservedBitsSet` if flag bits 5-7 are non-zero.
/// - `FrameError::LengthOverrun` if the declared payload length runs past the end.
pub fn decode_frame(wire: &[u8]) -> Result<FrameView<'_>, FrameError> {
    if wire.len() < MIN_FRAME_LEN {
        return Err(FrameError::Truncated { have: wire.len(), need: MIN_FRAME_LEN });
    }

    let flag = Flag::from_byte(wire[0])?;
    let declared = BigEndian::read_u16(&wire[FLAG_LEN..PAYLOAD_OFFSET]) as usize;

    if wire.len() < MIN_FRAME_LEN + declared {
        return Err(FrameError::LengthOverrun {
            declared,
            available: wire.len() - MIN_FRAME_LEN,
        });
    }

    let payload_end = PAYLOAD_OFFSET + declared;

    Ok(FrameView {
        flag,
        payload: &wire[PAYLOAD_OFFSET..payload_end],
        signed: &wire[..payload_end],
        tag: &wire[payload_end..payload_end + HASH_LEN],
    })
}
