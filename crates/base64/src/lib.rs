//! Base64 encoding and decoding (RFC 4648).
//!
//! This crate provides:
//! - Standard (`+`, `/`) and URL-safe (`-`, `_`) alphabets, always padded
//! - Decoding with alphabet auto-detection
//! - Encoding and decoding into caller buffers, and decoding in place
//!
//! Input must be canonical padded base64: whitespace, line breaks and missing
//! padding are rejected.
//!
//! # Example
//!
//! ```
//! use base64_rfc4648::{decode, encode, Alphabet};
//!
//! let data = b"hello world";
//! let encoded = encode(data, Alphabet::Standard);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! let decoded = decode(&encoded, Alphabet::Auto).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod alphabet;
mod codec;
mod config;
mod constants;
mod decode;
mod decode_in_place;
mod encode;
mod error;
mod group;
mod required_size;

pub use alphabet::{Alphabet, ParseAlphabetError};
pub use codec::{Codec, AUTO, STANDARD, URL_SAFE};
pub use config::Config;
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, PAD};
pub use decode::{decode, decode_to_slice, validate};
pub use decode_in_place::{decode_in_place, decode_slice_in_place};
pub use encode::{encode, encode_to_slice};
pub use error::{Base64Error, Result};
pub use required_size::{required_decode_size, required_encode_size};
