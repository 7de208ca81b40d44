//! Base64 codec for UTF-8 text.
//!
//! [`Base64Codec`] is the capability the string helpers depend on;
//! [`StandardBase64`] implements it on top of the `base64` crate's
//! general-purpose engine, configured through [`Base64Options`].

use crate::error::{Error, Result};
use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Base64 alphabet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alphabet {
    /// RFC 4648 standard alphabet (`+` and `/`).
    #[default]
    Standard,
    /// RFC 4648 URL-safe alphabet (`-` and `_`).
    UrlSafe,
}

impl Alphabet {
    fn contains(self, c: char) -> bool {
        c.is_ascii_alphanumeric()
            || match self {
                Self::Standard => c == '+' || c == '/',
                Self::UrlSafe => c == '-' || c == '_',
            }
    }
}

/// What the decoder skips before decoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DecodeMode {
    /// Skip ASCII whitespace and line breaks; anything else outside the
    /// alphabet is an error.
    #[default]
    IgnoreWhitespace,
    /// Skip every character that is neither in the alphabet nor `=`.
    IgnoreUnknown,
}

/// Codec configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Base64Options {
    pub alphabet: Alphabet,
    /// Emit `=` padding when encoding, and require canonical padding when
    /// decoding. Without it, decoding accepts padded and unpadded input.
    pub padding: bool,
    pub decode_mode: DecodeMode,
}

impl Default for Base64Options {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::Standard,
            padding: true,
            decode_mode: DecodeMode::IgnoreWhitespace,
        }
    }
}

/// Byte-level base64 encoding and decoding.
pub trait Base64Codec {
    /// Encode bytes.
    fn encode(&self, bytes: &[u8]) -> String;

    /// Decode text into bytes.
    fn decode(&self, input: &str) -> Result<Vec<u8>>;

    /// Encode the UTF-8 bytes of a string.
    fn encode_str(&self, input: &str) -> String {
        self.encode(input.as_bytes())
    }

    /// Decode into a UTF-8 string.
    fn decode_str(&self, input: &str) -> Result<String> {
        Ok(String::from_utf8(self.decode(input)?)?)
    }
}

/// [`Base64Codec`] backed by the `base64` crate.
#[derive(Clone, Debug)]
pub struct StandardBase64 {
    engine: GeneralPurpose,
    options: Base64Options,
}

impl StandardBase64 {
    /// Create a codec with the given options.
    #[must_use]
    pub fn new(options: Base64Options) -> Self {
        let alphabet = match options.alphabet {
            Alphabet::Standard => &alphabet::STANDARD,
            Alphabet::UrlSafe => &alphabet::URL_SAFE,
        };
        let padding_mode = if options.padding {
            DecodePaddingMode::RequireCanonical
        } else {
            DecodePaddingMode::Indifferent
        };
        let config = GeneralPurposeConfig::new()
            .with_encode_padding(options.padding)
            .with_decode_padding_mode(padding_mode);
        Self {
            engine: GeneralPurpose::new(alphabet, config),
            options,
        }
    }

    #[must_use]
    pub fn options(&self) -> Base64Options {
        self.options
    }

    fn filter(&self, input: &str) -> String {
        match self.options.decode_mode {
            DecodeMode::IgnoreWhitespace => {
                input.chars().filter(|c| !c.is_ascii_whitespace()).collect()
            }
            DecodeMode::IgnoreUnknown => input
                .chars()
                .filter(|&c| c == '=' || self.options.alphabet.contains(c))
                .collect(),
        }
    }
}

impl Default for StandardBase64 {
    fn default() -> Self {
        Self::new(Base64Options::default())
    }
}

impl Base64Codec for StandardBase64 {
    fn encode(&self, bytes: &[u8]) -> String {
        self.engine.encode(bytes)
    }

    fn decode(&self, input: &str) -> Result<Vec<u8>> {
        let filtered = self.filter(input);
        self.engine.decode(filtered).map_err(|e| {
            tracing::debug!(error = %e, len = input.len(), "base64 decode failed");
            Error::from(e)
        })
    }
}

/// Encode the UTF-8 bytes of `input` with the default codec.
///
/// Always `Some` for `&str`; the `Option` mirrors [`base64_decode`].
#[must_use]
pub fn base64_encode(input: &str) -> Option<String> {
    Some(StandardBase64::default().encode_str(input))
}

/// Decode with the default codec, reporting why decoding failed.
pub fn try_base64_decode(input: &str) -> Result<String> {
    StandardBase64::default().decode_str(input)
}

/// Decode with the default codec. `None` for invalid base64 or non-UTF-8
/// content.
#[must_use]
pub fn base64_decode(input: &str) -> Option<String> {
    try_base64_decode(input).ok()
}
