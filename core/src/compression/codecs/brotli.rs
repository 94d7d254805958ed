//! src/compression/codecs/brotli.rs
//!
//! Brotli compressor/decompressor, the reference engine.
//!
//! Design notes:
//! - Quality 11 / window 22: the encoder's maximum-ratio mode.
//! - The writer is finished through `into_inner`, which flushes the last
//!   meta-block; dropping it early would leave a truncated stream.
//! - The reader rejects truncated input with an `InvalidData` I/O error, which
//!   is mapped to `CodecProcessFailed`.

use std::io::{Read, Write};

use crate::compression::constants::{BROTLI_BUFFER_SIZE, BROTLI_LGWIN};
use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

pub struct BrotliCompressor {
    quality: u32,
    lgwin: u32,
}

pub struct BrotliDecompressor;

impl BrotliCompressor {
    /// `quality` above 11 is clamped by the encoder.
    pub fn new(quality: u32) -> Box<dyn Compressor + Send> {
        Box::new(Self { quality, lgwin: BROTLI_LGWIN })
    }
}

impl BrotliDecompressor {
    pub fn new() -> Box<dyn Decompressor + Send> {
        Box::new(Self)
    }
}

impl Compressor for BrotliCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut writer = ::brotli::CompressorWriter::new(
            &mut *out,
            BROTLI_BUFFER_SIZE,
            self.quality,
            self.lgwin,
        );
        writer
            .write_all(input)
            .map_err(|e| CompressionError::process_failed(CompressionCodec::Brotli, e))?;
        writer.into_inner();
        Ok(())
    }
}

impl Decompressor for BrotliDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut reader = ::brotli::Decompressor::new(input, BROTLI_BUFFER_SIZE);
        reader
            .read_to_end(out)
            .map_err(|e| CompressionError::process_failed(CompressionCodec::Brotli, e))?;
        Ok(())
    }
}
