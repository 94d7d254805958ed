/// Stable codec IDs (u16). The id is not written into frames; it names the
/// engine an encoder/decoder pair agreed on through `Options::codec`.
pub mod codec_ids {
    pub const BROTLI: u16  = 0x0001;
    pub const ZSTD: u16    = 0x0002;
    pub const DEFLATE: u16 = 0x0003;
}

/// Brotli maximum-ratio setting.
pub const BROTLI_QUALITY: u32 = 11;
/// Brotli window size (log2).
pub const BROTLI_LGWIN: u32 = 22;
/// Internal buffer for the brotli reader/writer adapters.
pub const BROTLI_BUFFER_SIZE: usize = 4096;

/// flate2 best compression.
pub const DEFLATE_LEVEL: u32 = 9;
