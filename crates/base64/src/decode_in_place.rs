//! Decoding that reuses the encoded buffer for the output.
//!
//! Decoded data is never longer than its encoding (3 bytes per 4 symbols), so
//! it fits in the prefix of the buffer holding the input. Groups are decoded
//! left to right with a write cursor that stays at or behind the read cursor:
//! group `k` is read from `4k..4k + 4` and written to `3k..3k + 3`, and the
//! group is copied out before any of its bytes are overwritten.
//!
//! The whole buffer is validated before the first write, so a rejected input
//! is left exactly as it was.

use crate::alphabet::Alphabet;
use crate::decode::validate;
use crate::error::Result;
use crate::group::{decode_groups, InPlace};

/// Decodes `buf` into its own prefix and returns the decoded length.
/// Bytes past that length are left over from the input.
///
/// # Errors
///
/// Same as [`decode`](crate::decode). `buf` is unchanged on error.
///
/// # Example
///
/// ```
/// use base64_rfc4648::{decode_slice_in_place, Alphabet};
///
/// let mut buf = *b"Zm9vYmE=";
/// let len = decode_slice_in_place(&mut buf, Alphabet::Auto).unwrap();
/// assert_eq!(&buf[..len], b"fooba");
/// ```
pub fn decode_slice_in_place(buf: &mut [u8], alphabet: Alphabet) -> Result<usize> {
    let resolved = validate(&*buf, alphabet)?.unwrap_or(alphabet);
    let length = buf.len();
    // validated above, so this pass cannot fail
    let (written, _) = decode_groups(&mut InPlace(buf), length, resolved)?;
    Ok(written)
}

/// Decodes `buf` in place and truncates it to the decoded data.
/// Returns the new length.
///
/// # Errors
///
/// Same as [`decode`](crate::decode). `buf` is unchanged on error.
///
/// # Example
///
/// ```
/// use base64_rfc4648::{decode_in_place, Alphabet};
///
/// let mut buf = b"aGVsbG8gd29ybGQ=".to_vec();
/// assert_eq!(decode_in_place(&mut buf, Alphabet::Standard).unwrap(), 11);
/// assert_eq!(buf, b"hello world");
/// ```
pub fn decode_in_place(buf: &mut Vec<u8>, alphabet: Alphabet) -> Result<usize> {
    let written = decode_slice_in_place(buf, alphabet)?;
    buf.truncate(written);
    Ok(written)
}
