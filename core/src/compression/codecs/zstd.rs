//! src/compression/codecs/zstd.rs
//!
//! Zstd compressor/decompressor.
//!
//! Design notes:
//! - Uses the bulk API for compression; frames carry their own content size.
//! - Decompression goes through `decode_all`, so the output size is never
//!   guessed and oversized claims cannot truncate silently.

use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

/// Highest level the linked zstd library accepts.
pub fn max_level() -> i32 {
    *::zstd::compression_level_range().end()
}

pub struct ZstdCompressor {
    level: i32,
}

pub struct ZstdDecompressor;

impl ZstdCompressor {
    pub fn new(level: i32) -> Box<dyn Compressor + Send> {
        Box::new(Self { level })
    }
}

impl ZstdDecompressor {
    pub fn new() -> Box<dyn Decompressor + Send> {
        Box::new(Self)
    }
}

impl Compressor for ZstdCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let compressed = ::zstd::bulk::compress(input, self.level)
            .map_err(|e| CompressionError::process_failed(CompressionCodec::Zstd, e))?;
        out.extend_from_slice(&compressed);
        Ok(())
    }
}

impl Decompressor for ZstdDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let decompressed = ::zstd::stream::decode_all(input)
            .map_err(|e| CompressionError::process_failed(CompressionCodec::Zstd, e))?;
        out.extend_from_slice(&decompressed);
        Ok(())
    }
}
