//! options.rs
//! Per-call configuration: version, signing key, compression codec.
//!
//! Notes:
//! - Options are plain values built by the caller; nothing here is global or
//!   mutable. `default_option()` returns a fresh value on every call.
//! - The default key is public. See [`DEFAULT_KEY`].

use std::fmt;
use num_enum::TryFromPrimitive;

use crate::compression::CompressionCodec;
use crate::constants::{version_ids, DEFAULT_KEY};

/// Framing scheme stored in the flag byte.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, TryFromPrimitive)]
pub enum Version {
    #[default]
    Version1 = version_ids::VERSION1,
}

impl Version {
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Configuration supplied to every encode/decode call.
#[derive(Clone, PartialEq, Eq)]
pub struct Options {
    /// Informational; framing always follows Version1 today.
    pub version: Version,
    /// Shared secret, used verbatim as the HMAC key.
    pub key: Vec<u8>,
    /// Compression engine. Must match between encoder and decoder.
    pub codec: CompressionCodec,
}

impl Options {
    /// Options with an explicit secret and default version/codec.
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into(), ..Self::default() }
    }

    pub fn with_key(mut self, key: impl Into<Vec<u8>>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_codec(mut self, codec: CompressionCodec) -> Self {
        self.codec = codec;
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// True when the built-in (insecure) key is in use.
    pub fn uses_default_key(&self) -> bool {
        self.key == DEFAULT_KEY
    }
}

impl Default for Options {
    /// Version1, the built-in key, Brotli.
    fn default() -> Self {
        Self {
            version: Version::Version1,
            key: DEFAULT_KEY.to_vec(),
            codec: CompressionCodec::Brotli,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("version", &self.version)
            .field("key", &format_args!("<{} bytes redacted>", self.key.len()))
            .field("codec", &self.codec)
            .finish()
    }
}

/// Default options: Version1, the built-in key `b"Heisenberg"`, Brotli.
///
/// The key is a published constant. Frames sealed with it carry no
/// authenticity guarantee; use [`Options::new`] with a real secret.
pub fn default_option() -> Options {
    Options::default()
}
