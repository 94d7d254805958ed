//! Deflate (zlib wrapper) via flate2.
//!
//! The zlib container adds an Adler-32 trailer, so corrupt streams fail
//! instead of inflating to garbage. Decompression drives `flate2::Decompress`
//! directly: the `Read` adapters report a truncated stream as a clean EOF.
//! The inflate loop uses `FlushDecompress::None`; `Finish` requires the whole
//! output to fit in a single call and cannot resume after growing the buffer.

use std::io::Write;
use flate2::{Compression, Decompress, FlushDecompress, Status, write::ZlibEncoder};

use crate::compression::types::{CompressionCodec, CompressionError, Compressor, Decompressor};

pub struct DeflateCompressor {
    level: Compression,
}

impl DeflateCompressor {
    pub fn new(level: u32) -> Box<dyn Compressor + Send> {
        let lvl = match level {
            0..=9 => Compression::new(level),
            _ => Compression::best(),
        };
        Box::new(Self { level: lvl })
    }
}

impl Compressor for DeflateCompressor {
    fn compress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut enc = ZlibEncoder::new(&mut *out, self.level);
        enc.write_all(input)
            .map_err(|e| CompressionError::process_failed(CompressionCodec::Deflate, e))?;
        enc.finish()
            .map_err(|e| CompressionError::process_failed(CompressionCodec::Deflate, e))?;
        Ok(())
    }
}

pub struct DeflateDecompressor;

impl DeflateDecompressor {
    pub fn new() -> Box<dyn Decompressor + Send> {
        Box::new(Self)
    }
}

impl Decompressor for DeflateDecompressor {
    fn decompress(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CompressionError> {
        let mut dec = Decompress::new(true);
        out.reserve(input.len().saturating_mul(4).max(64));

        loop {
            // Output buffer full: grow before inflating further.
            if out.len() == out.capacity() {
                out.reserve(out.capacity().max(4096));
            }

            let (in_before, out_before) = (dec.total_in(), dec.total_out());
            let status = dec
                .decompress_vec(&input[in_before as usize..], out, FlushDecompress::None)
                .map_err(|e| CompressionError::process_failed(CompressionCodec::Deflate, e))?;

            match status {
                Status::StreamEnd => return Ok(()),
                Status::Ok | Status::BufError => {
                    let stalled = dec.total_in() == in_before && dec.total_out() == out_before;
                    // No progress with room to spare: the input ended mid-stream.
                    if stalled && out.len() < out.capacity() {
                        return Err(CompressionError::process_failed(
                            CompressionCodec::Deflate,
                            "truncated zlib stream",
                        ));
                    }
                }
            }
        }
    }
}
