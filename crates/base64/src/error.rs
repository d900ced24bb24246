use std::ascii;

use thiserror::Error;

/// Error type for base64 decoding.
///
/// Encoding never fails; every error here describes malformed encoded input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The encoded length is not a multiple of 4.
    #[error("invalid base64 input: length {length} is not a multiple of 4")]
    InvalidInput { length: usize },
    /// A byte outside the resolved alphabet, a misplaced pad, or a symbol of
    /// the other alphabet after auto-detection already settled on one.
    #[error("invalid base64 character '{}' at position {position}", escaped(.byte))]
    InvalidCharacter { byte: u8, position: usize },
}

fn escaped(byte: &u8) -> ascii::EscapeDefault {
    ascii::escape_default(*byte)
}

/// Result alias used throughout the crate.
pub type Result<T, E = Base64Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_input() {
        let err = Base64Error::InvalidInput { length: 5 };
        assert_eq!(
            err.to_string(),
            "invalid base64 input: length 5 is not a multiple of 4"
        );
    }

    #[test]
    fn test_display_escapes_non_printable() {
        let err = Base64Error::InvalidCharacter {
            byte: b'!',
            position: 3,
        };
        assert_eq!(err.to_string(), "invalid base64 character '!' at position 3");

        let err = Base64Error::InvalidCharacter {
            byte: 0xff,
            position: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid base64 character '\\xff' at position 0"
        );
    }
}
