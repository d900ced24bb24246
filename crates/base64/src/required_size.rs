//! Output size calculations.

use crate::error::{Base64Error, Result};
use crate::group::Group;

/// Number of symbols produced by encoding `length` bytes, pads included.
///
/// # Example
///
/// ```
/// use base64_rfc4648::required_encode_size;
///
/// assert_eq!(required_encode_size(0), 0);
/// assert_eq!(required_encode_size(1), 4);
/// assert_eq!(required_encode_size(6), 8);
/// ```
pub const fn required_encode_size(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Number of bytes decoding `encoded` would produce, judged from its length
/// and trailing pads only. Symbols are not checked.
///
/// # Errors
///
/// [`Base64Error::InvalidInput`] when the length is not a multiple of 4.
pub fn required_decode_size(encoded: impl AsRef<[u8]>) -> Result<usize> {
    let encoded = encoded.as_ref();
    let length = encoded.len();
    if length == 0 {
        return Ok(0);
    }
    if !length.is_multiple_of(4) {
        return Err(Base64Error::InvalidInput { length });
    }

    let last = [
        encoded[length - 4],
        encoded[length - 3],
        encoded[length - 2],
        encoded[length - 1],
    ];
    Ok(length / 4 * 3 - 3 + Group::classify(&last).decoded_len())
}
