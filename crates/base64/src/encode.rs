//! Base64 encoding.

use crate::alphabet::Alphabet;
use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES, PAD_BYTE};
use crate::group::Group;
use crate::required_size::required_encode_size;

/// Builds the two-symbol lookup table for an alphabet.
/// Entry `i * 64 + j` holds symbols `i` and `j`, so one 12-bit index yields
/// two output symbols.
const fn pair_table(symbols: &[u8; 64]) -> [[u8; 2]; 4096] {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = symbols[i];
            table[idx][1] = symbols[j];
            j += 1;
        }
        i += 1;
    }
    table
}

static TABLE2: [[u8; 2]; 4096] = pair_table(ALPHABET_BYTES);
static TABLE2_URL: [[u8; 2]; 4096] = pair_table(ALPHABET_URL_BYTES);

fn pair_table_for(alphabet: Alphabet) -> &'static [[u8; 2]; 4096] {
    match alphabet {
        Alphabet::UrlSafe => &TABLE2_URL,
        Alphabet::Standard | Alphabet::Auto => &TABLE2,
    }
}

/// Encodes `input` into the front of `dest` and returns the number of symbols
/// written, always `required_encode_size(input.len())`.
///
/// [`Alphabet::Auto`] encodes with the standard alphabet.
///
/// # Panics
///
/// When `dest` is shorter than [`required_encode_size`] of the input.
///
/// # Example
///
/// ```
/// use base64_rfc4648::{encode_to_slice, Alphabet};
///
/// let mut dest = [0u8; 8];
/// let len = encode_to_slice(b"hello", &mut dest, Alphabet::Standard);
/// assert_eq!(&dest[..len], b"aGVsbG8=");
/// ```
pub fn encode_to_slice(input: impl AsRef<[u8]>, dest: &mut [u8], alphabet: Alphabet) -> usize {
    let input = input.as_ref();
    let size = required_encode_size(input.len());
    assert!(
        dest.len() >= size,
        "base64 destination holds {} bytes but {} are required",
        dest.len(),
        size
    );

    let table2 = pair_table_for(alphabet);
    let dest = &mut dest[..size];

    let extra_length = input.len() % 3;
    let base_length = input.len() - extra_length;

    for (src, out) in input[..base_length]
        .chunks_exact(3)
        .zip(dest.chunks_exact_mut(4))
    {
        let v1 = ((src[0] as usize) << 4) | ((src[1] as usize) >> 4);
        let v2 = (((src[1] & 0b1111) as usize) << 8) | (src[2] as usize);
        out[..2].copy_from_slice(&table2[v1]);
        out[2..].copy_from_slice(&table2[v2]);
    }

    let tail = &mut dest[base_length / 3 * 4..];
    match Group::for_remainder(extra_length) {
        Group::Full => {}
        Group::TwoPad => {
            let o1 = input[base_length];
            let v1 = (o1 as usize) << 4;
            tail[..2].copy_from_slice(&table2[v1]);
            tail[2] = PAD_BYTE;
            tail[3] = PAD_BYTE;
        }
        Group::OnePad => {
            let o1 = input[base_length];
            let o2 = input[base_length + 1];
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = ((o2 & 0b1111) as usize) << 2;
            tail[..2].copy_from_slice(&table2[v1]);
            tail[2] = alphabet.symbols()[v2];
            tail[3] = PAD_BYTE;
        }
    }

    size
}

/// Encodes a byte slice to a base64 string with padding.
///
/// [`Alphabet::Auto`] encodes with the standard alphabet.
///
/// # Example
///
/// ```
/// use base64_rfc4648::{encode, Alphabet};
///
/// assert_eq!(encode(b"hello world", Alphabet::Standard), "aGVsbG8gd29ybGQ=");
/// assert_eq!(encode(b"\xfb\xff", Alphabet::UrlSafe), "-_8=");
/// ```
pub fn encode(input: impl AsRef<[u8]>, alphabet: Alphabet) -> String {
    let input = input.as_ref();
    let mut out = vec![0u8; required_encode_size(input.len())];
    encode_to_slice(input, &mut out, alphabet);
    out.into_iter().map(char::from).collect()
}
