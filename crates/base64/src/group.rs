//! Group shapes and the per-group decode step shared by every decoder.

use crate::alphabet::{Alphabet, Detected};
use crate::constants::PAD_BYTE;
use crate::error::{Base64Error, Result};

/// Shape of a group: how many pad symbols close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Group {
    /// 3 bytes, 4 symbols.
    Full,
    /// 2 bytes, 3 symbols and one pad.
    OnePad,
    /// 1 byte, 2 symbols and two pads.
    TwoPad,
}

impl Group {
    /// Shape of the trailing encode group for `length % 3` leftover bytes.
    pub(crate) const fn for_remainder(remainder: usize) -> Self {
        match remainder {
            1 => Group::TwoPad,
            2 => Group::OnePad,
            _ => Group::Full,
        }
    }

    /// Shape of the final decode group, from its last two symbols.
    pub(crate) const fn classify(quad: &[u8; 4]) -> Self {
        match (quad[2], quad[3]) {
            (PAD_BYTE, PAD_BYTE) => Group::TwoPad,
            (_, PAD_BYTE) => Group::OnePad,
            _ => Group::Full,
        }
    }

    pub(crate) const fn decoded_len(self) -> usize {
        match self {
            Group::Full => 3,
            Group::OnePad => 2,
            Group::TwoPad => 1,
        }
    }

    const fn symbols(self) -> usize {
        self.decoded_len() + 1
    }
}

/// Storage the decode loop reads quads from and writes decoded bytes to.
///
/// Reads always happen at or after the write position, so one buffer can
/// serve as both source and destination.
pub(crate) trait GroupBuffer {
    /// The encoded symbols.
    fn source(&self) -> &[u8];

    /// Stores decoded bytes starting at `at`.
    fn put(&mut self, at: usize, bytes: &[u8]);

    /// Copies out the 4 symbols starting at `at`.
    fn quad(&self, at: usize) -> [u8; 4] {
        let src = self.source();
        [src[at], src[at + 1], src[at + 2], src[at + 3]]
    }
}

/// Separate source and destination.
pub(crate) struct Split<'a> {
    pub(crate) input: &'a [u8],
    pub(crate) output: &'a mut [u8],
}

impl GroupBuffer for Split<'_> {
    fn source(&self) -> &[u8] {
        self.input
    }

    fn put(&mut self, at: usize, bytes: &[u8]) {
        self.output[at..at + bytes.len()].copy_from_slice(bytes);
    }
}

/// Source and destination are the same buffer; the write cursor trails.
pub(crate) struct InPlace<'a>(pub(crate) &'a mut [u8]);

impl GroupBuffer for InPlace<'_> {
    fn source(&self) -> &[u8] {
        self.0
    }

    fn put(&mut self, at: usize, bytes: &[u8]) {
        self.0[at..at + bytes.len()].copy_from_slice(bytes);
    }
}

/// Read-only walk, decoded bytes are dropped.
pub(crate) struct Discard<'a>(pub(crate) &'a [u8]);

impl GroupBuffer for Discard<'_> {
    fn source(&self) -> &[u8] {
        self.0
    }

    fn put(&mut self, _at: usize, _bytes: &[u8]) {}
}

/// Decodes one group. `offset` is the position of `quad[0]` in the input and
/// only feeds error reporting.
fn decode_quad(
    quad: [u8; 4],
    group: Group,
    offset: usize,
    detected: &mut Detected,
) -> Result<[u8; 3]> {
    let mut sextets = [0u8; 4];
    for (i, &byte) in quad[..group.symbols()].iter().enumerate() {
        sextets[i] = detected
            .sextet(byte)
            .ok_or(Base64Error::InvalidCharacter {
                byte,
                position: offset + i,
            })?;
    }

    Ok([
        (sextets[0] << 2) | (sextets[1] >> 4),
        (sextets[1] << 4) | (sextets[2] >> 2),
        (sextets[2] << 6) | sextets[3],
    ])
}

/// Decodes `length` encoded bytes held by `buf`.
///
/// Every group but the last is decoded as [`Group::Full`]; the last is
/// classified by its trailing pads. Output for group `k` lands at `3 * k`
/// while its input sits at `4 * k`, so the write cursor never passes the read
/// cursor.
///
/// Returns the decoded length and the alphabet state the walk ended in.
pub(crate) fn decode_groups<B: GroupBuffer>(
    buf: &mut B,
    length: usize,
    alphabet: Alphabet,
) -> Result<(usize, Detected)> {
    let mut detected = alphabet.detection();
    if length == 0 {
        return Ok((0, detected));
    }
    if !length.is_multiple_of(4) {
        return Err(Base64Error::InvalidInput { length });
    }

    let last = length - 4;
    let mut read = 0;
    let mut write = 0;

    while read < last {
        let bytes = decode_quad(buf.quad(read), Group::Full, read, &mut detected)?;
        buf.put(write, &bytes);
        read += 4;
        write += 3;
    }

    let quad = buf.quad(last);
    let group = Group::classify(&quad);
    let bytes = decode_quad(quad, group, last, &mut detected)?;
    let tail = group.decoded_len();
    buf.put(write, &bytes[..tail]);

    Ok((write + tail, detected))
}
