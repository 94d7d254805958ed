use crate::compression::CompressionError;
use crate::crypto::MacError;
use crate::frame::FrameError;

/// Unified error for the sealed-string pipeline.
/// - `From<T>` impls let each layer's error flow through `?`.
/// - Every variant is terminal for the call; there is no partial result.
#[derive(Debug, thiserror::Error)]
pub enum SssError {
    /// Not base64, too short, declared length past the end, or reserved bits set.
    #[error("invalid format: {0}")]
    InvalidFormat(#[source] FrameError),

    /// Authentication tag mismatch.
    #[error("not signed")]
    NotSigned,

    /// Frame authenticated but its compressed payload would not inflate.
    #[error("decompression error: {0}")]
    Decompression(#[from] CompressionError),

    /// Frame authenticated but carries a version this build does not implement.
    #[error("unsupported version: {raw}")]
    UnsupportedVersion { raw: u8 },

    /// Framed payload does not fit the u16 length field.
    #[error("payload too large: {have} > {max}")]
    PayloadTooLarge { have: usize, max: usize },

    /// Decoded payload is not UTF-8 (string API only).
    #[error("payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

impl From<FrameError> for SssError {
    fn from(e: FrameError) -> Self {
        match e {
            FrameError::PayloadTooLarge { have, max } => SssError::PayloadTooLarge { have, max },
            other => SssError::InvalidFormat(other),
        }
    }
}

impl From<base64::DecodeError> for SssError {
    fn from(e: base64::DecodeError) -> Self {
        SssError::InvalidFormat(FrameError::Base64(e))
    }
}

impl From<MacError> for SssError {
    fn from(e: MacError) -> Self {
        match e {
            MacError::TagMismatch => SssError::NotSigned,
        }
    }
}

pub type Result<T> = std::result::Result<T, SssError>;
