//! Codec configuration.

use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;

/// Alphabet choices for a [`Codec`](crate::Codec).
///
/// Missing fields fall back to the defaults, so a partial table deserializes:
///
/// ```
/// use base64_rfc4648::{Alphabet, Config};
///
/// let config: Config = serde_json::from_str(r#"{ "encode_alphabet": "url-safe" }"#).unwrap();
/// assert_eq!(config.encode_alphabet, Alphabet::UrlSafe);
/// assert_eq!(config.decode_alphabet, Alphabet::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Alphabet used by encoding operations. `Auto` encodes as `Standard`.
    pub encode_alphabet: Alphabet,
    /// Alphabet used by decoding operations.
    pub decode_alphabet: Alphabet,
}

impl Config {
    /// Standard encoding, auto-detecting decoding.
    pub const fn new() -> Self {
        Self {
            encode_alphabet: Alphabet::Standard,
            decode_alphabet: Alphabet::Auto,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
