//! Alphabet selection and the symbol-to-sextet mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES};

/// Which base64 alphabet to use.
///
/// `Auto` only means something when decoding: the alphabet is inferred from
/// the first `+`, `/`, `-` or `_` in the input. Encoding with `Auto` uses the
/// standard alphabet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alphabet {
    /// RFC 4648 §4, `+` and `/`.
    Standard,
    /// RFC 4648 §5, `-` and `_`.
    #[serde(alias = "urlsafe", alias = "url")]
    UrlSafe,
    /// Decide while decoding.
    #[default]
    Auto,
}

impl Alphabet {
    /// The 64 symbols used when encoding with this alphabet.
    pub const fn symbols(self) -> &'static [u8; 64] {
        match self {
            Alphabet::UrlSafe => ALPHABET_URL_BYTES,
            Alphabet::Standard | Alphabet::Auto => ALPHABET_BYTES,
        }
    }

    pub(crate) const fn detection(self) -> Detected {
        match self {
            Alphabet::Standard => Detected::Standard,
            Alphabet::UrlSafe => Detected::UrlSafe,
            Alphabet::Auto => Detected::Undetermined,
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Standard => write!(f, "standard"),
            Alphabet::UrlSafe => write!(f, "url-safe"),
            Alphabet::Auto => write!(f, "auto"),
        }
    }
}

/// Returned when parsing an unknown alphabet name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown base64 alphabet: {0} (expected standard, url-safe or auto)")]
pub struct ParseAlphabetError(String);

impl FromStr for Alphabet {
    type Err = ParseAlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(Alphabet::Standard),
            "url-safe" | "urlsafe" | "url" => Ok(Alphabet::UrlSafe),
            "auto" => Ok(Alphabet::Auto),
            _ => Err(ParseAlphabetError(s.to_string())),
        }
    }
}

/// Alphabet state of a single decode call.
///
/// Starts `Undetermined` under [`Alphabet::Auto`] and is fixed by the first
/// distinguishing symbol. It is never reset within the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Detected {
    Undetermined,
    Standard,
    UrlSafe,
}

impl Detected {
    /// The alphabet this state settled on, if any.
    pub(crate) const fn resolved(self) -> Option<Alphabet> {
        match self {
            Detected::Undetermined => None,
            Detected::Standard => Some(Alphabet::Standard),
            Detected::UrlSafe => Some(Alphabet::UrlSafe),
        }
    }

    /// Maps a symbol to its 6-bit value, or `None` when the symbol is not part
    /// of the current alphabet. The pad symbol is never a member.
    #[inline]
    pub(crate) fn sextet(&mut self, byte: u8) -> Option<u8> {
        match byte {
            b'A'..=b'Z' => Some(byte - b'A'),
            b'a'..=b'z' => Some(byte - b'a' + 26),
            b'0'..=b'9' => Some(byte - b'0' + 52),
            b'+' => self.settle(Alphabet::Standard).then_some(62),
            b'/' => self.settle(Alphabet::Standard).then_some(63),
            b'-' => self.settle(Alphabet::UrlSafe).then_some(62),
            b'_' => self.settle(Alphabet::UrlSafe).then_some(63),
            _ => None,
        }
    }

    /// Fixes the state to `alphabet` if undetermined; true when the state
    /// agrees with `alphabet` afterwards.
    fn settle(&mut self, alphabet: Alphabet) -> bool {
        let wanted = alphabet.detection();
        if *self == Detected::Undetermined {
            trace!(%alphabet, "detected base64 alphabet");
            *self = wanted;
        }
        *self == wanted
    }
}
