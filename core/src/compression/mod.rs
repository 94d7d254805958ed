//! compression/mod.rs
//! Compression engine used opportunistically by the sealer.
//!
//! Notes:
//! - Every codec runs at its maximum-ratio setting; encode-time CPU is traded
//!   for shorter sealed strings.
//! - Calls are independent: no dictionaries, no streaming state.
//! - The registry resolves a `CompressionCodec` to boxed trait objects so new
//!   engines plug in without touching the framing code.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;

pub use constants::*;
pub use types::*;
pub use registry::*;

/// Compress `input` with `codec` into a fresh buffer.
pub fn compress(codec: CompressionCodec, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::with_capacity(input.len() / 2 + 16);
    create_compressor(codec).compress(input, &mut out)?;
    Ok(out)
}

/// Decompress a complete `codec` stream into a fresh buffer.
pub fn decompress(codec: CompressionCodec, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
    let mut out = Vec::with_capacity(input.len() * 2);
    create_decompressor(codec).decompress(input, &mut out)?;
    Ok(out)
}
