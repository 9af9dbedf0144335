//! Configuration for share tokens and signatures.
//!
//! Named constants are defined once here and referenced by the codec, the base64 helper and
//! the signature service. `ShareFormatConfig` is what a host application passes to the
//! encoder and decoder when it needs a non-default prefix or alphabet.

use alloc::string::String;

use crate::core::base64::Base64Options;

/// Constants shared by every component.
pub mod constants {
    /// Signature algorithm used for shares.
    pub const SIGNATURE_ALGORITHM: &str = "ECDSA";

    /// Named curve of the signature algorithm.
    pub const SIGNATURE_CURVE: &str = "P-256";

    /// Message digest applied before signing.
    pub const SIGNATURE_HASH: &str = "SHA-256";

    /// Format of the public key embedded in share tokens (uncompressed SEC1 point).
    pub const PUBLIC_KEY_FORMAT: &str = "raw";

    /// Length in bytes of a P-256 signature in fixed `r || s` form.
    pub const SIGNATURE_LEN: usize = 64;

    /// Prefix of labeled share tokens.
    pub const SHRZ_PREFIX: &str = "shrz";

    /// Separator between token segments.
    pub const SEGMENT_SEPARATOR: char = ':';

    /// Marker introducing the threshold inside the index segment.
    pub const REQUIREMENT_MARKER: char = 'u';

    /// Default substitute for base64 `+`.
    pub const DEFAULT_BASE64_PLUS: char = '-';

    /// Default substitute for base64 `/`.
    pub const DEFAULT_BASE64_SLASH: char = '_';
}

/// Settings of the `shrz` text encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareFormatConfig {
    /// Prefix of labeled tokens, written before the first separator.
    pub prefix: String,

    /// Alphabet and padding of every base64 segment.
    pub base64: Base64Options,
}

impl Default for ShareFormatConfig {
    fn default() -> Self {
        Self {
            prefix: String::from(constants::SHRZ_PREFIX),
            base64: Base64Options::default(),
        }
    }
}
