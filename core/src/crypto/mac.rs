//! src/crypto/mac.rs
//! HMAC-SHA256 frame authentication.
//!
//! Design notes:
//! - The key is used verbatim; there is no derivation step.
//! - The tag covers exactly `[flag][length][payload]`, never the tag itself.
//! - Verification goes through `Mac::verify_slice`, which compares in
//!   constant time. Never compare tags with `==`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::crypto::types::{MacError, Tag, TAG_LEN};

type HmacSha256 = Hmac<Sha256>;

#[inline]
fn keyed(key: &[u8]) -> HmacSha256 {
    match HmacSha256::new_from_slice(key) {
        Ok(mac) => mac,
        // HMAC pads or hashes keys of any length.
        Err(_) => unreachable!("HMAC-SHA256 accepts keys of any length"),
    }
}

/// Compute the tag over `signed` (all frame bytes preceding the tag).
pub fn compute_tag(key: &[u8], signed: &[u8]) -> Tag {
    let mut mac = keyed(key);
    mac.update(signed);
    let out = mac.finalize().into_bytes();

    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&out);
    tag
}

/// Recompute the tag over `signed` and compare it with `received` in
/// constant time.
///
/// # Errors
/// - `MacError::TagMismatch` if the tags differ or `received` has the wrong length.
pub fn verify_tag(key: &[u8], signed: &[u8], received: &[u8]) -> Result<(), MacError> {
    let mut mac = keyed(key);
    mac.update(signed);
    mac.verify_slice(received).map_err(|_| MacError::TagMismatch)
}
