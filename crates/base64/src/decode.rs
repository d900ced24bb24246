//! Base64 decoding into fresh or caller-provided storage.

use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::{Base64Error, Result};
use crate::group::{decode_groups, Discard, Split};
use crate::required_size::required_decode_size;

pub(crate) fn log_rejection(err: &Base64Error) {
    match err {
        Base64Error::InvalidInput { length } => {
            debug!(length, "rejected base64 input with bad length");
        }
        Base64Error::InvalidCharacter { byte, position } => {
            debug!(byte, position, "rejected base64 input with invalid character");
        }
    }
}

/// Decodes a padded base64 string.
///
/// With [`Alphabet::Auto`] the first `+`/`/` or `-`/`_` decides the alphabet
/// for the rest of the input; mixing both is an error.
///
/// # Errors
///
/// - [`Base64Error::InvalidInput`] when the length is not a multiple of 4.
/// - [`Base64Error::InvalidCharacter`] for a symbol outside the alphabet,
///   including a pad anywhere but the last two positions.
///
/// # Example
///
/// ```
/// use base64_rfc4648::{decode, Alphabet};
///
/// assert_eq!(decode("aGVsbG8=", Alphabet::Auto).unwrap(), b"hello");
/// assert_eq!(decode("", Alphabet::Auto).unwrap(), b"");
/// assert!(decode("aGVsbG8", Alphabet::Auto).is_err());
/// ```
pub fn decode(encoded: impl AsRef<[u8]>, alphabet: Alphabet) -> Result<Vec<u8>> {
    let encoded = encoded.as_ref();
    let size = required_decode_size(encoded).inspect_err(log_rejection)?;
    let mut buf = vec![0u8; size];
    let mut split = Split {
        input: encoded,
        output: &mut buf,
    };
    decode_groups(&mut split, encoded.len(), alphabet).inspect_err(log_rejection)?;
    Ok(buf)
}

/// Decodes into the front of `dest` and returns the number of bytes written.
///
/// # Errors
///
/// Same as [`decode`]. On error the contents of `dest` are unspecified.
///
/// # Panics
///
/// When `dest` is shorter than [`required_decode_size`] of the input.
///
/// # Example
///
/// ```
/// use base64_rfc4648::{decode_to_slice, Alphabet};
///
/// let mut dest = [0u8; 16];
/// let len = decode_to_slice("Zm9vYmE=", &mut dest, Alphabet::Standard).unwrap();
/// assert_eq!(&dest[..len], b"fooba");
/// ```
pub fn decode_to_slice(
    encoded: impl AsRef<[u8]>,
    dest: &mut [u8],
    alphabet: Alphabet,
) -> Result<usize> {
    let encoded = encoded.as_ref();
    let size = required_decode_size(encoded).inspect_err(log_rejection)?;
    assert!(
        dest.len() >= size,
        "base64 destination holds {} bytes but {} are required",
        dest.len(),
        size
    );
    let mut split = Split {
        input: encoded,
        output: dest,
    };
    let (written, _) =
        decode_groups(&mut split, encoded.len(), alphabet).inspect_err(log_rejection)?;
    Ok(written)
}

/// Checks `encoded` exactly as [`decode`] would, without producing output.
///
/// Returns the alphabet the input resolves to: the requested one when it is
/// not [`Alphabet::Auto`], otherwise the detected one, or `None` when the
/// input holds no alphabet-specific symbol.
///
/// # Example
///
/// ```
/// use base64_rfc4648::{validate, Alphabet};
///
/// assert_eq!(validate("-_8=", Alphabet::Auto).unwrap(), Some(Alphabet::UrlSafe));
/// assert_eq!(validate("Zm9v", Alphabet::Auto).unwrap(), None);
/// assert!(validate("+_8=", Alphabet::Auto).is_err());
/// ```
pub fn validate(encoded: impl AsRef<[u8]>, alphabet: Alphabet) -> Result<Option<Alphabet>> {
    let encoded = encoded.as_ref();
    let (_, detected) = decode_groups(&mut Discard(encoded), encoded.len(), alphabet)
        .inspect_err(log_rejection)?;
    Ok(detected.resolved())
}
