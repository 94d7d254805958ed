//! sss-core
//!
//! Sealed strings: arbitrary bytes packed into a URL-safe string that a holder
//! of the shared key can authenticate and recover losslessly.
//!
//! - Integrity only: the payload (or its compressed form) is readable by anyone.
//! - Compression is applied only when it makes the frame shorter.
//! - HMAC-SHA256 over the frame, checked in constant time before anything
//!   is decompressed.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod options;

pub mod compression;
pub mod crypto;
pub mod frame;

// Codec
pub mod sealed;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::CompressionCodec;
    pub use crate::options::{default_option, Options, Version};
    pub use crate::sealed::{
        decode, decode_string, encode, encode_string, try_encode, try_encode_string, SealedString,
    };
    pub use crate::types::{Result, SssError};
}

pub use prelude::*;
