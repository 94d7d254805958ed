//! sealed.rs
//! Sealed-string codec: compress-or-not, frame, sign, base64url.
//!
//! Pipeline:
//!
//! ```text
//! seal: payload -> compress? -> frame + HMAC -> base64url (padded)
//! open: base64url -> parse frame -> verify HMAC -> version -> decompress?
//! ```
//!
//! Notes:
//! - Verification always happens before decompression; unauthenticated bytes
//!   never reach a decompressor.
//! - Compressed bytes are only used when strictly shorter than the input, so a
//!   sealed frame is at most 35 bytes larger than its payload.
//! - Calls are pure; `Options` is only read.

use std::borrow::Cow;

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use num_enum::TryFromPrimitive;
use tracing::{debug, warn};

use crate::compression::{self, CompressionCodec};
use crate::constants::MAX_PAYLOAD_LEN;
use crate::frame::{decode_frame, encode_frame, Flag};
use crate::options::{Options, Version};
use crate::types::{Result, SssError};

/// Logical content of a sealed string.
///
/// `version` and `is_compressed` describe a frame produced by [`SealedString::open`].
/// Sealing ignores them: the version comes from `Options` and compression is
/// decided again for every call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SealedString {
    pub version: Version,
    pub is_compressed: bool,
    pub payload: Vec<u8>,
}

impl SealedString {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self { payload: payload.into(), ..Self::default() }
    }

    /// Seal the payload into a base64url string.
    ///
    /// # Errors
    /// - `SssError::PayloadTooLarge` if the framed payload (compressed when
    ///   that is shorter, raw otherwise) exceeds 65535 bytes.
    pub fn try_seal(&self, opts: &Options) -> Result<String> {
        warn_if_default_key(opts, "seal");

        let (framed, compressed) = select_payload(&self.payload, opts.codec);
        if framed.len() > MAX_PAYLOAD_LEN {
            return Err(SssError::PayloadTooLarge { have: framed.len(), max: MAX_PAYLOAD_LEN });
        }

        let flag = Flag::new(compressed, opts.version.as_u8());
        let wire = encode_frame(flag, &framed, &opts.key)?;

        debug!(
            codec = %opts.codec,
            compressed,
            payload_len = self.payload.len(),
            framed_len = framed.len(),
            wire_len = wire.len(),
            "sealed payload"
        );

        Ok(URL_SAFE.encode(&wire))
    }

    /// Seal the payload into a base64url string.
    ///
    /// # Panics
    /// If the framed payload does not fit the 16-bit length field. Payloads up
    /// to 65535 bytes always fit; use [`SealedString::try_seal`] for larger or
    /// untrusted inputs.
    pub fn seal(&self, opts: &Options) -> String {
        match self.try_seal(opts) {
            Ok(text) => text,
            Err(e) => panic!("sealed string precondition violated: {e}"),
        }
    }

    /// Decode, authenticate and (if flagged) decompress a sealed string.
    ///
    /// # Errors
    /// - `SssError::InvalidFormat` for malformed base64 or frame structure.
    /// - `SssError::NotSigned` if the tag does not match under `opts.key`.
    /// - `SssError::UnsupportedVersion` for an authentic frame of an unknown version.
    /// - `SssError::Decompression` if an authentic compressed payload is corrupt.
    pub fn open(text: &str, opts: &Options) -> Result<Self> {
        warn_if_default_key(opts, "open");

        let wire = URL_SAFE.decode(text)?;
        let frame = decode_frame(&wire)?;

        if let Err(e) = frame.verify(&opts.key) {
            debug!(wire_len = wire.len(), payload_len = frame.payload_len(), "tag verification failed");
            return Err(e.into());
        }

        let raw = frame.flag.version;
        let version = Version::try_from_primitive(raw)
            .map_err(|_| SssError::UnsupportedVersion { raw })?;

        let payload = if frame.flag.compressed {
            compression::decompress(opts.codec, frame.payload)?
        } else {
            frame.payload.to_vec()
        };

        debug!(
            codec = %opts.codec,
            compressed = frame.flag.compressed,
            framed_len = frame.payload.len(),
            payload_len = payload.len(),
            "opened sealed string"
        );

        Ok(Self {
            version,
            is_compressed: frame.flag.compressed,
            payload,
        })
    }
}

/// Compressed bytes when strictly shorter than `payload`, else `payload` itself.
/// A compressor failure takes the raw path so sealing stays total.
fn select_payload(payload: &[u8], codec: CompressionCodec) -> (Cow<'_, [u8]>, bool) {
    match compression::compress(codec, payload) {
        Ok(c) if c.len() < payload.len() => (Cow::Owned(c), true),
        Ok(_) => (Cow::Borrowed(payload), false),
        Err(e) => {
            warn!(codec = %codec, error = %e, "compression failed, sealing raw payload");
            (Cow::Borrowed(payload), false)
        }
    }
}

fn warn_if_default_key(opts: &Options, op: &'static str) {
    if opts.uses_default_key() {
        warn!(op, "using the built-in default key; sealed strings are forgeable");
    }
}

/// Seal binary `payload`.
///
/// # Panics
/// See [`SealedString::seal`].
pub fn encode(payload: &[u8], opts: &Options) -> String {
    SealedString::new(payload).seal(opts)
}

/// Fallible variant of [`encode`].
pub fn try_encode(payload: &[u8], opts: &Options) -> Result<String> {
    SealedString::new(payload).try_seal(opts)
}

/// Open a sealed string and return its binary payload.
pub fn decode(text: &str, opts: &Options) -> Result<Vec<u8>> {
    SealedString::open(text, opts).map(|s| s.payload)
}

/// Seal a UTF-8 string. `None` uses [`crate::options::default_option`].
///
/// # Panics
/// See [`SealedString::seal`].
pub fn encode_string(plaintext: &str, opts: Option<&Options>) -> String {
    with_options(opts, |o| encode(plaintext.as_bytes(), o))
}

/// Fallible variant of [`encode_string`].
pub fn try_encode_string(plaintext: &str, opts: Option<&Options>) -> Result<String> {
    with_options(opts, |o| try_encode(plaintext.as_bytes(), o))
}

/// Open a sealed string whose payload is UTF-8. `None` uses the default options.
///
/// # Errors
/// Everything [`decode`] returns, plus `SssError::InvalidUtf8`.
pub fn decode_string(sealed: &str, opts: Option<&Options>) -> Result<String> {
    let payload = with_options(opts, |o| decode(sealed, o))?;
    Ok(String::from_utf8(payload)?)
}

fn with_options<T>(opts: Option<&Options>, f: impl FnOnce(&Options) -> T) -> T {
    match opts {
        Some(o) => f(o),
        None => f(&Options::default()),
    }
}
