//! compression/types.rs
//! Codec identifiers, errors and the compressor/decompressor seams.
use std::fmt;
use std::str::FromStr;
use num_enum::TryFromPrimitive;

use crate::compression::constants::codec_ids;

/// Compression engine selector.
#[repr(u16)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum CompressionCodec {
    #[default]
    Brotli  = codec_ids::BROTLI,
    Zstd    = codec_ids::ZSTD,
    Deflate = codec_ids::DEFLATE,
}

impl CompressionCodec {
    pub fn from_id(raw: u16) -> Result<Self, CompressionError> {
        Self::try_from_primitive(raw)
            .map_err(|_| CompressionError::UnsupportedCodec { codec_id: raw })
    }

    #[inline]
    pub const fn id(self) -> u16 {
        self as u16
    }

    pub const fn name(self) -> &'static str {
        match self {
            CompressionCodec::Brotli  => "brotli",
            CompressionCodec::Zstd    => "zstd",
            CompressionCodec::Deflate => "deflate",
        }
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionCodec {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brotli" | "br" => Ok(CompressionCodec::Brotli),
            "zstd" | "zst"  => Ok(CompressionCodec::Zstd),
            "deflate"       => Ok(CompressionCodec::Deflate),
            other => Err(CompressionError::UnknownCodecName(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("unsupported compression codec: 0x{codec_id:04x}")]
    UnsupportedCodec { codec_id: u16 },

    #[error("unknown compression codec name: {0}")]
    UnknownCodecName(String),

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },
}

impl CompressionError {
    pub(crate) fn process_failed(codec: CompressionCodec, e: impl fmt::Display) -> Self {
        CompressionError::CodecProcessFailed {
            codec: codec.name(),
            msg: e.to_string(),
        }
    }
}

/// One-shot compressor. Each call is independent; no state carries over
/// between inputs.
pub trait Compressor: Send {
    /// Compress all of `input`, appending the encoded stream to `out`.
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}

pub trait Decompressor: Send {
    /// Decompress a complete encoded stream into `out`.
    /// Malformed or truncated streams must fail rather than yield a prefix.
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError>;
}
