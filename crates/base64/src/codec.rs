//! A configured codec bundling alphabet choices with the free functions.

use crate::alphabet::Alphabet;
use crate::config::Config;
use crate::decode::{decode, validate};
use crate::decode_in_place::decode_in_place;
use crate::encode::{encode, encode_to_slice};
use crate::error::Result;

/// Standard alphabet both ways.
pub const STANDARD: Codec = Codec::with_config(Config {
    encode_alphabet: Alphabet::Standard,
    decode_alphabet: Alphabet::Standard,
});

/// URL-safe alphabet both ways.
pub const URL_SAFE: Codec = Codec::with_config(Config {
    encode_alphabet: Alphabet::UrlSafe,
    decode_alphabet: Alphabet::UrlSafe,
});

/// Standard encoding, auto-detecting decoding. Same as [`Codec::new`].
pub const AUTO: Codec = Codec::new();

/// Base64 codec with fixed alphabet choices.
///
/// # Example
///
/// ```
/// use base64_rfc4648::{Alphabet, Codec};
///
/// let codec = Codec::new().encode_alphabet(Alphabet::UrlSafe);
/// let encoded = codec.encode(b"\xfb\xff");
/// assert_eq!(encoded, "-_8=");
/// assert_eq!(codec.decode(&encoded).unwrap(), b"\xfb\xff");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    config: Config,
}

impl Codec {
    /// Standard encoding, auto-detecting decoding.
    pub const fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Codec using the alphabets of `config`.
    pub const fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Replaces the alphabet used for encoding.
    pub const fn encode_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.encode_alphabet = alphabet;
        self
    }

    /// Replaces the alphabet used for decoding.
    pub const fn decode_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.decode_alphabet = alphabet;
        self
    }

    /// The alphabet choices of this codec.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Encodes `input` with the encode alphabet, see [`encode`](crate::encode).
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        encode(input, self.config.encode_alphabet)
    }

    /// See [`encode_to_slice`](crate::encode_to_slice) for the panic contract.
    pub fn encode_to_slice(&self, input: impl AsRef<[u8]>, dest: &mut [u8]) -> usize {
        encode_to_slice(input, dest, self.config.encode_alphabet)
    }

    /// Decodes `encoded` with the decode alphabet, see [`decode`](crate::decode).
    pub fn decode(&self, encoded: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        decode(encoded, self.config.decode_alphabet)
    }

    /// Decodes `buf` in place and truncates it, see
    /// [`decode_in_place`](crate::decode_in_place).
    pub fn decode_in_place(&self, buf: &mut Vec<u8>) -> Result<usize> {
        decode_in_place(buf, self.config.decode_alphabet)
    }

    /// Checks `encoded` against the decode alphabet, see
    /// [`validate`](crate::validate).
    pub fn validate(&self, encoded: impl AsRef<[u8]>) -> Result<Option<Alphabet>> {
        validate(encoded, self.config.decode_alphabet)
    }
}

impl From<Config> for Codec {
    fn from(config: Config) -> Self {
        Self::with_config(config)
    }
}
