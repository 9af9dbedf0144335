//! The `shrz` share token format.
//!
//! A share travels as one line of text in one of two forms:
//!
//! ```text
//! raw:      <base64(payload)>
//! labeled:  shrz:<x>[u<requirement>]:<base64(payload)>[:<base64(signature)>[:<base64(pubkey)>]]
//! ```
//!
//! `x` and `requirement` are decimal. Base64 segments use the URL-safe alphabet
//! `[A-Za-z0-9-_]` without padding (see `ShareFormatConfig`). The raw form is used when the
//! share has no index and cannot carry a signature. A public key is only written after a
//! signature.
//!
//! Decoding tries the raw form first (the whole input is alphabet characters), then the
//! labeled form.

extern crate alloc;
use alloc::string::String;
use alloc::vec::Vec;

use crate::codec::signature::{verify, PublicKey, ShareSignature};
use crate::config::constants::{REQUIREMENT_MARKER, SEGMENT_SEPARATOR};
use crate::config::ShareFormatConfig;
use crate::core::base64::{from_base64_string, to_base64_string};
use crate::mpc::share::Share;
use crate::mpc::SssError;

/// A share together with an optional signature, as carried by a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedShare {
    pub share: Share,
    pub signature: Option<ShareSignature>,
}

impl SignedShare {
    pub fn new(share: Share, signature: Option<ShareSignature>) -> Self {
        Self { share, signature }
    }

    /// Verifies the carried signature, using `fallback` if no key is embedded.
    ///
    /// # Errors
    /// * `SssError::UnsignedShare` if there is no signature.
    /// * `SssError::MissingSignatureKey` if no key is available.
    pub fn verify(&self, fallback: Option<&PublicKey>) -> Result<bool, SssError> {
        let signature = self.signature.as_ref().ok_or(SssError::UnsignedShare)?;
        verify(&self.share, signature, fallback)
    }
}

impl From<Share> for SignedShare {
    fn from(share: Share) -> Self {
        Self { share, signature: None }
    }
}

/// Writes shares as tokens.
#[derive(Debug, Clone, Default)]
pub struct ShareEncoder {
    config: ShareFormatConfig,
}

impl ShareEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShareFormatConfig) -> Self {
        Self { config }
    }

    /// Encodes `signed` as a raw or labeled token.
    ///
    /// A share without an index is written raw; any signature it carries is dropped.
    pub fn encode(&self, signed: &SignedShare) -> Result<String, SssError> {
        let opts = &self.config.base64;
        let share = &signed.share;
        let data = to_base64_string(share.y_values(), opts)?;

        let Some(x) = share.x_value() else {
            if signed.signature.is_some() {
                log::warn!("raw share token cannot carry a signature; signature dropped");
            }
            return Ok(data);
        };

        let mut token = String::with_capacity(self.config.prefix.len() + data.len() + 8);
        token.push_str(&self.config.prefix);
        token.push(SEGMENT_SEPARATOR);
        token.push_str(&x.to_string());
        if let Some(requirement) = share.requirement() {
            token.push(REQUIREMENT_MARKER);
            token.push_str(&requirement.to_string());
        }
        token.push(SEGMENT_SEPARATOR);
        token.push_str(&data);

        if let Some(signature) = &signed.signature {
            token.push(SEGMENT_SEPARATOR);
            token.push_str(&to_base64_string(&signature.signature, opts)?);
            if let Some(pubkey) = &signature.pubkey {
                token.push(SEGMENT_SEPARATOR);
                token.push_str(&to_base64_string(&pubkey.export_raw(), opts)?);
            }
        }
        log::debug!("encoded share {} ({} bytes)", x, share.y_values().len());
        Ok(token)
    }

    pub fn encode_share(&self, share: &Share) -> Result<String, SssError> {
        self.encode(&SignedShare::from(share.clone()))
    }
}

/// Parses tokens back into shares.
#[derive(Debug, Clone, Default)]
pub struct ShareDecoder {
    config: ShareFormatConfig,
}

/// Parses a non-empty run of ASCII digits as a `u8`.
fn parse_decimal(digits: &str, what: &'static str) -> Result<u8, SssError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SssError::MalformedWireToken(what));
    }
    digits
        .parse::<u8>()
        .map_err(|_| SssError::MalformedWireToken("number out of range"))
}

impl ShareDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ShareFormatConfig) -> Self {
        Self { config }
    }

    /// Alphabet characters followed by at most two `=`; padding is accepted whatever the
    /// encode setting, matching the decoder.
    fn is_base64_segment(&self, segment: &str) -> bool {
        let body = segment.strip_suffix("==").or_else(|| segment.strip_suffix('=')).unwrap_or(segment);
        !body.is_empty() && body.chars().all(|c| self.config.base64.is_alphabet_char(c))
    }

    fn decode_segment(&self, segment: &str) -> Result<Vec<u8>, SssError> {
        if !self.is_base64_segment(segment) {
            return Err(SssError::MalformedWireToken("segment outside base64 alphabet"));
        }
        from_base64_string(segment, &self.config.base64)
    }

    /// Decodes a raw or labeled token.
    ///
    /// # Errors
    /// * `SssError::MalformedWireToken` if the text matches neither form, a number is not a
    ///   decimal byte, the index is zero, or a base64 segment is invalid.
    /// * `SssError::InvalidKey` if the public-key segment is not a P-256 point.
    pub fn decode(&self, input: &str) -> Result<SignedShare, SssError> {
        let result = self.decode_inner(input);
        if let Err(e) = &result {
            log::warn!("rejected share token: {}", e);
        }
        result
    }

    fn decode_inner(&self, input: &str) -> Result<SignedShare, SssError> {
        if self.is_base64_segment(input) {
            let payload = from_base64_string(input, &self.config.base64)?;
            return Ok(SignedShare::from(Share::raw(payload)?));
        }

        let body = input
            .strip_prefix(self.config.prefix.as_str())
            .and_then(|rest| rest.strip_prefix(SEGMENT_SEPARATOR))
            .ok_or(SssError::MalformedWireToken("input is not a share"))?;
        let segments: Vec<&str> = body.split(SEGMENT_SEPARATOR).collect();
        if !(2..=4).contains(&segments.len()) {
            return Err(SssError::MalformedWireToken("wrong number of segments"));
        }

        let (id, requirement) = match segments[0].split_once(REQUIREMENT_MARKER) {
            Some((id, req)) => (id, Some(parse_decimal(req, "requirement is not decimal")?)),
            None => (segments[0], None),
        };
        let x = parse_decimal(id, "share index is not decimal")?;
        if x == 0 {
            return Err(SssError::MalformedWireToken("share index 0 is reserved"));
        }

        let payload = self.decode_segment(segments[1])?;
        let signature = match segments.get(2) {
            Some(sig) => {
                let signature = self.decode_segment(sig)?;
                let pubkey = match segments.get(3) {
                    Some(pk) => Some(PublicKey::import_raw(&self.decode_segment(pk)?)?),
                    None => None,
                };
                Some(ShareSignature { signature, pubkey })
            }
            None => None,
        };

        let share = Share::new(x, requirement, payload)?;
        log::debug!("decoded share {} ({} bytes)", x, share.y_values().len());
        Ok(SignedShare { share, signature })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::signature::{generate_key_pair, sign};
    use crate::core::base64::Base64Options;
    use crate::entropy::OsEntropy;
    use crate::mpc::Sss;
    use proptest::prelude::*;

    fn roundtrip(signed: &SignedShare) -> SignedShare {
        let token = ShareEncoder::new().encode(signed).unwrap();
        ShareDecoder::new().decode(&token).unwrap()
    }

    #[test]
    fn test_labeled_format() {
        let share = Share::new(17, Some(3), vec![0xFB, 0xFF]).unwrap();
        let token = ShareEncoder::new().encode_share(&share).unwrap();
        assert_eq!(token, "shrz:17u3:-_8");
        assert_eq!(ShareDecoder::new().decode(&token).unwrap(), SignedShare::from(share));

        let no_req = Share::new(200, None, b"hi".to_vec()).unwrap();
        assert_eq!(ShareEncoder::new().encode_share(&no_req).unwrap(), "shrz:200:aGk");
    }

    #[test]
    fn test_raw_format() {
        let raw = Share::raw(b"hi".to_vec()).unwrap();
        let token = ShareEncoder::new().encode_share(&raw).unwrap();
        assert_eq!(token, "aGk");
        let decoded = ShareDecoder::new().decode("aGk").unwrap();
        assert_eq!(decoded.share, raw);
        assert_eq!(decoded.signature, None);
    }

    #[test]
    fn test_signed_roundtrip_and_verify() {
        let kp = generate_key_pair();
        for x in [1u8, 42, 255] {
            let share = Share::new(x, Some(2), vec![9, 8, 7, 6, 5]).unwrap();
            let signature = sign(&share, &kp);
            let signed = SignedShare::new(share, Some(signature));
            let token = ShareEncoder::new().encode(&signed).unwrap();
            assert_eq!(token.matches(':').count(), 4);
            let rebuilt = ShareDecoder::new().decode(&token).unwrap();
            assert_eq!(rebuilt, signed);
            assert_eq!(rebuilt.verify(None), Ok(true));
        }
    }

    #[test]
    fn test_signature_without_pubkey() {
        let kp = generate_key_pair();
        let share = Share::new(3, None, vec![1, 2, 3]).unwrap();
        let mut signature = sign(&share, &kp);
        signature.pubkey = None;
        let signed = SignedShare::new(share, Some(signature));
        let rebuilt = roundtrip(&signed);
        assert_eq!(rebuilt, signed);
        assert_eq!(rebuilt.verify(None), Err(SssError::MissingSignatureKey));
        assert_eq!(rebuilt.verify(Some(kp.public_key())), Ok(true));
    }

    #[test]
    fn test_unsigned_verify() {
        let signed = SignedShare::from(Share::new(3, None, vec![1]).unwrap());
        assert_eq!(signed.verify(None), Err(SssError::UnsignedShare));
    }

    #[test]
    fn test_relabeled_token_fails_verification() {
        let kp = generate_key_pair();
        let share = Share::new(5, Some(2), vec![1, 2, 3]).unwrap();
        let signed = SignedShare::new(share.clone(), Some(sign(&share, &kp)));
        let token = ShareEncoder::new().encode(&signed).unwrap();
        let forged = token.replacen("shrz:5u2:", "shrz:6u2:", 1);
        let rebuilt = ShareDecoder::new().decode(&forged).unwrap();
        assert_eq!(rebuilt.verify(None), Ok(false));
    }

    #[test]
    fn test_malformed_tokens() {
        let decoder = ShareDecoder::new();
        for bad in [
            "",
            "shrz:",
            "shrz:1",
            "shrz:1:",
            "shrz:x:AAAA",
            "shrz:1u:AAAA",
            "shrz:+1:AAAA",
            "shrz:256:AAAA",
            "shrz:1u256:AAAA",
            "shrz:0:AAAA",
            "shrz:1:AA+A",
            "shrz:1:AAAA:",
            "shrz:1:AAAA:BBBB:CCCC:DDDD",
            "sharez:1:AAAA",
            "A",
            "hello world",
        ] {
            assert!(
                matches!(decoder.decode(bad), Err(SssError::MalformedWireToken(_))),
                "accepted {:?}",
                bad
            );
        }
        assert_eq!(decoder.decode("shrz:1:AAAA:AAAA:AAAA"), Err(SssError::InvalidKey));
    }

    #[test]
    fn test_custom_config() {
        let config = ShareFormatConfig {
            prefix: String::from("vault"),
            base64: Base64Options { plus: '.', slash: '~', padding: false },
        };
        let share = Share::new(1, Some(2), vec![0xFB, 0xFF]).unwrap();
        let token = ShareEncoder::with_config(config.clone()).encode_share(&share).unwrap();
        assert_eq!(token, "vault:1u2:.~8");
        let decoded = ShareDecoder::with_config(config).decode(&token).unwrap();
        assert_eq!(decoded.share, share);
        assert!(ShareDecoder::new().decode(&token).is_err());
    }

    #[test]
    fn test_padded_config_roundtrip() {
        let config = ShareFormatConfig {
            base64: Base64Options { padding: true, ..Base64Options::default() },
            ..ShareFormatConfig::default()
        };
        let encoder = ShareEncoder::with_config(config.clone());
        let decoder = ShareDecoder::with_config(config);

        let share = Share::new(1, Some(2), vec![0x61]).unwrap();
        let token = encoder.encode_share(&share).unwrap();
        assert_eq!(token, "shrz:1u2:YQ==");
        assert_eq!(decoder.decode(&token).unwrap(), SignedShare::from(share));

        let raw = Share::raw(vec![0x61]).unwrap();
        let token = encoder.encode_share(&raw).unwrap();
        assert_eq!(token, "YQ==");
        assert_eq!(decoder.decode(&token).unwrap().share, raw);

        // 64-byte signature and 65-byte key both end in padding.
        let kp = generate_key_pair();
        let share = Share::new(9, None, vec![1, 2, 3, 4]).unwrap();
        let signed = SignedShare::new(share.clone(), Some(sign(&share, &kp)));
        let token = encoder.encode(&signed).unwrap();
        assert!(token.contains("=:"));
        let rebuilt = decoder.decode(&token).unwrap();
        assert_eq!(rebuilt, signed);
        assert_eq!(rebuilt.verify(None), Ok(true));

        // Unpadded tokens still decode, and padding is not accepted mid-segment.
        assert_eq!(decoder.decode("shrz:1u2:YQ").unwrap().share.y_values(), &[0x61]);
        assert!(matches!(decoder.decode("shrz:1:Y=Q="), Err(SssError::MalformedWireToken(_))));
        assert!(matches!(decoder.decode("shrz:1:YQ==="), Err(SssError::MalformedWireToken(_))));
        assert!(matches!(decoder.decode("=="), Err(SssError::MalformedWireToken(_))));
    }

    #[test]
    fn test_engine_to_token_to_engine() {
        let secret = b"correct horse battery staple".to_vec();
        let engine = Sss::from_secret(&secret, 3, &mut OsEntropy::new()).unwrap();
        let tokens: Vec<String> = [2u8, 30, 99]
            .iter()
            .map(|&x| ShareEncoder::new().encode_share(&engine.share(x).unwrap()).unwrap())
            .collect();
        let shares: Vec<Share> = tokens
            .iter()
            .map(|t| ShareDecoder::new().decode(t).unwrap().share)
            .collect();
        assert_eq!(Sss::from_shares(&shares).unwrap().secret().unwrap(), secret);
    }

    proptest! {
        #[test]
        fn prop_unsigned_roundtrip(
            x in 1u8..=255,
            requirement in proptest::option::of(any::<u8>()),
            payload in proptest::collection::vec(any::<u8>(), 1..48),
        ) {
            let signed = SignedShare::from(Share::new(x, requirement, payload).unwrap());
            prop_assert_eq!(roundtrip(&signed), signed);
        }

        #[test]
        fn prop_raw_roundtrip(payload in proptest::collection::vec(any::<u8>(), 1..48)) {
            let signed = SignedShare::from(Share::raw(payload).unwrap());
            prop_assert_eq!(roundtrip(&signed), signed);
        }
    }
}
