/// Standard base64 alphabet (RFC 4648 §4).
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// URL and filename safe alphabet (RFC 4648 §5, uses - and _ instead of + and /).
pub const ALPHABET_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// URL-safe alphabet as a byte array.
pub const ALPHABET_URL_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Padding character.
pub const PAD: char = '=';

pub(crate) const PAD_BYTE: u8 = b'=';
