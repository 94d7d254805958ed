//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{brotli, deflate, zstd};
use crate::compression::constants::{BROTLI_QUALITY, DEFLATE_LEVEL};
use crate::compression::types::{CompressionCodec, Compressor, Decompressor};

pub struct CodecInfo {
    pub name: &'static str,
    /// Level used by the factory; always the codec's maximum-ratio setting.
    pub level: i32,
}

/// Single source of the name and level for each codec.
pub fn resolve(codec: CompressionCodec) -> CodecInfo {
    match codec {
        CompressionCodec::Brotli =>
            CodecInfo { name: codec.name(), level: BROTLI_QUALITY as i32 },
        CompressionCodec::Zstd =>
            CodecInfo { name: codec.name(), level: zstd::max_level() },
        CompressionCodec::Deflate =>
            CodecInfo { name: codec.name(), level: DEFLATE_LEVEL as i32 },
    }
}

/// Compressor for `codec`, running at the level `resolve` reports.
pub fn create_compressor(codec: CompressionCodec) -> Box<dyn Compressor + Send> {
    let info = resolve(codec);
    match codec {
        CompressionCodec::Brotli  => brotli::BrotliCompressor::new(info.level as u32),
        CompressionCodec::Zstd    => zstd::ZstdCompressor::new(info.level),
        CompressionCodec::Deflate => deflate::DeflateCompressor::new(info.level as u32),
    }
}

pub fn create_decompressor(codec: CompressionCodec) -> Box<dyn Decompressor + Send> {
    match codec {
        CompressionCodec::Brotli  => brotli::BrotliDecompressor::new(),
        CompressionCodec::Zstd    => zstd::ZstdDecompressor::new(),
        CompressionCodec::Deflate => deflate::DeflateDecompressor::new(),
    }
}
