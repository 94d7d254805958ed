//! compression/codecs/mod.rs
//! Concrete engines behind the `Compressor`/`Decompressor` traits.

pub mod brotli;
pub mod deflate;
pub mod zstd;

pub use self::brotli::*;
pub use self::deflate::*;
pub use self::zstd::*;
