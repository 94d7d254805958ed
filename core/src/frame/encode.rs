//! src/frame/encode.rs
//!
//! Frame encoding.
//!
//! Design notes:
//! - Output is one contiguous buffer of `35 + payload.len()` bytes.
//! - The tag is computed over the buffer written so far, then appended.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::{HASH_LEN, MAX_PAYLOAD_LEN, MIN_FRAME_LEN, PAYLOAD_OFFSET};
use crate::crypto::compute_tag;
use crate::frame::types::{Flag, FrameError};

/// Serialize and sign a frame.
///
/// # Errors
/// - `FrameError::PayloadTooLarge` if `payload` does not fit the u16 length field.
/// - `FrameError::VersionOutOfRange` if the flag version exceeds 4 bits.
pub fn encode_frame(flag: Flag, payload: &[u8], key: &[u8]) -> Result<Vec<u8>, FrameError> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(FrameError::PayloadTooLarge { have: payload.len(), max: MAX_PAYLOAD_LEN });
    }
    let flag_byte = flag.to_byte()?;

    let total = MIN_FRAME_LEN + payload.len();
    let mut out = vec![0u8; total];
    let mut i = 0usize;

    out[i] = flag_byte;                                       // 0..1   flag
    i += 1;
    BigEndian::write_u16(&mut out[i..i + 2], payload.len() as u16); // 1..3   payload length
    i += 2;
    out[i..i + payload.len()].copy_from_slice(payload);       // 3..3+N payload
    i += payload.len();
    debug_assert_eq!(i, PAYLOAD_OFFSET + payload.len());

    let tag = compute_tag(key, &out[..i]);                    // tag over [0, i)
    out[i..i + HASH_LEN].copy_from_slice(&tag);
    i += HASH_LEN;

    debug_assert_eq!(i, total, "encoding wrote incorrect length");
    Ok(out)
}
