use crate::constants::HASH_LEN;

/// HMAC-SHA256 output length.
pub const TAG_LEN: usize = HASH_LEN;

/// Authentication tag bytes.
pub type Tag = [u8; TAG_LEN];

#[derive(Debug, thiserror::Error)]
pub enum MacError {
    /// Recomputed tag differs from the received one.
    #[error("authentication tag mismatch")]
    TagMismatch,
}
