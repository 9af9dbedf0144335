//! Base64 with substitutable `+` and `/` characters.
//!
//! Share tokens must survive URLs, file names and copy-paste, so the two non-alphanumeric
//! characters of standard base64 are replaced (by default with `-` and `_`) and `=`
//! padding is usually dropped. Encoding and decoding with the same options are exact
//! inverses for every byte sequence.

use alloc::string::String;
use alloc::vec::Vec;

use base64::alphabet::Alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::config::constants::{DEFAULT_BASE64_PLUS, DEFAULT_BASE64_SLASH};
use crate::mpc::SssError;

const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Options selecting the alphabet and padding behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base64Options {
    /// Replacement for `+` (value 62).
    pub plus: char,
    /// Replacement for `/` (value 63).
    pub slash: char,
    /// Whether encoding emits `=` padding. Decoding accepts either form.
    pub padding: bool,
}

impl Default for Base64Options {
    fn default() -> Self {
        Self {
            plus: DEFAULT_BASE64_PLUS,
            slash: DEFAULT_BASE64_SLASH,
            padding: false,
        }
    }
}

impl Base64Options {
    /// Returns true if `c` is one of the 64 alphabet characters (padding excluded).
    pub fn is_alphabet_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || c == self.plus || c == self.slash
    }

    fn engine(&self) -> Result<GeneralPurpose, SssError> {
        let mut symbols = String::with_capacity(64);
        symbols.push_str(ALPHANUMERIC);
        symbols.push(self.plus);
        symbols.push(self.slash);
        let alphabet = Alphabet::new(&symbols)
            .map_err(|_| SssError::InvalidConfig("base64 substitutes must be distinct printable non-alphanumeric ASCII"))?;
        let config = GeneralPurposeConfig::new()
            .with_encode_padding(self.padding)
            .with_decode_padding_mode(DecodePaddingMode::Indifferent);
        Ok(GeneralPurpose::new(&alphabet, config))
    }
}

/// Encodes `input` with the given alphabet options.
///
/// # Errors
/// * `SssError::InvalidConfig` if the substitute characters do not form a valid alphabet.
pub fn to_base64_string(input: &[u8], options: &Base64Options) -> Result<String, SssError> {
    Ok(options.engine()?.encode(input))
}

/// Decodes `input` with the given alphabet options.
///
/// # Errors
/// * `SssError::MalformedWireToken` if `input` contains characters outside the alphabet or
///   is not a valid base64 length.
/// * `SssError::InvalidConfig` if the substitute characters do not form a valid alphabet.
pub fn from_base64_string(input: &str, options: &Base64Options) -> Result<Vec<u8>, SssError> {
    options
        .engine()?
        .decode(input)
        .map_err(|_| SssError::MalformedWireToken("invalid base64 segment"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_alphabet_substitutes() {
        let opts = Base64Options::default();
        // 0xFB 0xFF encodes to "+/8=" in standard base64
        assert_eq!(to_base64_string(&[0xFB, 0xFF], &opts).unwrap(), "-_8");
        assert_eq!(from_base64_string("-_8", &opts).unwrap(), vec![0xFB, 0xFF]);
    }

    #[test]
    fn test_padding_option() {
        let padded = Base64Options { padding: true, ..Base64Options::default() };
        assert_eq!(to_base64_string(b"a", &padded).unwrap(), "YQ==");
        // Decoding is indifferent to padding.
        assert_eq!(from_base64_string("YQ==", &Base64Options::default()).unwrap(), b"a".to_vec());
        assert_eq!(from_base64_string("YQ", &padded).unwrap(), b"a".to_vec());
    }

    #[test]
    fn test_rejects_foreign_characters() {
        let opts = Base64Options::default();
        assert!(matches!(
            from_base64_string("ab+/", &opts),
            Err(SssError::MalformedWireToken(_))
        ));
        assert!(matches!(
            from_base64_string("a", &opts),
            Err(SssError::MalformedWireToken(_))
        ));
    }

    #[test]
    fn test_invalid_substitutes() {
        let opts = Base64Options { plus: 'A', ..Base64Options::default() };
        assert!(matches!(to_base64_string(b"x", &opts), Err(SssError::InvalidConfig(_))));
    }

    #[test]
    fn test_is_alphabet_char() {
        let opts = Base64Options::default();
        assert!(opts.is_alphabet_char('z'));
        assert!(opts.is_alphabet_char('-'));
        assert!(opts.is_alphabet_char('_'));
        assert!(!opts.is_alphabet_char('+'));
        assert!(!opts.is_alphabet_char(':'));
    }

    proptest! {
        #[test]
        fn prop_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..64), padding in any::<bool>()) {
            let opts = Base64Options { padding, ..Base64Options::default() };
            let encoded = to_base64_string(&data, &opts).unwrap();
            prop_assert!(encoded.chars().all(|c| opts.is_alphabet_char(c) || c == '='));
            prop_assert_eq!(from_base64_string(&encoded, &opts).unwrap(), data);
        }
    }
}
