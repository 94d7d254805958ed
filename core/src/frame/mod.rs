//! frame/mod.rs
//! Binary frame of a sealed string (before base64).
//!
//! Layout:
//!
//! ```text
//! [ flag (1) ]            bit0 = compressed, bits1-4 = version, bits5-7 = 0
//! [ payload_len (2) ]     big-endian u16
//! [ payload (N) ]         raw or compressed bytes
//! [ tag (32) ]            HMAC-SHA256 over every preceding byte
//! ```
//!
//! Responsibilities:
//! - Pack/unpack the flag byte at the boundary only
//! - Encode frames and sign them
//! - Parse frames with strict length checks
//!
//! Non-responsibilities:
//! - Compression
//! - Base64

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{Flag, FrameError, FrameView};
pub use encode::encode_frame;
pub use decode::decode_frame;
