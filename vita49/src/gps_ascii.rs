// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
GPS ASCII, CIF0 bit 10 (ANSI/VITA-49.2-2017 section 9.4.5).

Variable-length: `[char_count:u32][chars, padded to 4 bytes]`. Total
size is `1 + ceil(char_count/4)` words. This is a non-owning view over
the backing buffer — no `Vec`, no copy; `bytes()` borrows the ASCII
payload directly.
*/

use crate::endian::{read_u32, write_u32};

/// A read-only, non-owning view over a GPS ASCII field already known
/// to fit within its buffer (bounds are checked by the offset engine
/// or validation pipeline before this view is constructed).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GpsAsciiView<'a> {
    char_count: u32,
    chars: &'a [u8],
}

impl<'a> GpsAsciiView<'a> {
    /// Wraps the field starting at `buf[offset..]`. `buf` must contain
    /// at least `size_words(buf, offset) * 4` bytes from `offset`.
    pub fn decode(buf: &'a [u8], offset: usize) -> GpsAsciiView<'a> {
        let char_count = read_u32(buf, offset);
        let padded = Self::padded_len(char_count);
        let chars = &buf[offset + 4..offset + 4 + padded];
        GpsAsciiView { char_count, chars }
    }

    /// Number of 32-bit words occupied by a GPS ASCII field whose
    /// character count is `char_count`: `1 + ceil(char_count/4)`.
    pub fn size_words(char_count: u32) -> u32 {
        1 + (char_count + 3) / 4
    }

    fn padded_len(char_count: u32) -> usize {
        (Self::size_words(char_count) as usize - 1) * 4
    }

    /// The declared character count (may be less than `bytes().len()`,
    /// which includes zero-padding out to a word boundary).
    pub fn char_count(&self) -> u32 {
        self.char_count
    }

    /// The raw ASCII bytes, including zero padding out to a word
    /// boundary. Use `ascii()` to trim padding.
    pub fn bytes(&self) -> &'a [u8] {
        self.chars
    }

    /// The ASCII payload with trailing NUL padding removed, truncated
    /// to `char_count` bytes.
    pub fn ascii(&self) -> &'a [u8] {
        let n = (self.char_count as usize).min(self.chars.len());
        &self.chars[..n]
    }

    /// Total words this field occupies on the wire.
    pub fn total_words(&self) -> u32 {
        Self::size_words(self.char_count)
    }
}

/// Writes a GPS ASCII field at `buf[offset..]`, padding `ascii` with
/// zero bytes out to a word boundary. `buf` must have room for
/// `GpsAsciiView::size_words(ascii.len() as u32) * 4` bytes from
/// `offset`.
pub fn encode(buf: &mut [u8], offset: usize, ascii: &[u8]) {
    write_u32(buf, offset, ascii.len() as u32);
    let padded = GpsAsciiView::size_words(ascii.len() as u32) as usize * 4 - 4;
    let dest = &mut buf[offset + 4..offset + 4 + padded];
    dest.fill(0);
    dest[..ascii.len()].copy_from_slice(ascii);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_hello_world() {
        let ascii = b"Hello World!";
        let words = GpsAsciiView::size_words(ascii.len() as u32);
        assert_eq!(words, 4); // 1 + ceil(12/4) = 1 + 3
        let mut buf = vec![0u8; words as usize * 4];
        encode(&mut buf, 0, ascii);
        let view = GpsAsciiView::decode(&buf, 0);
        assert_eq!(view.char_count(), 12);
        assert_eq!(view.ascii(), ascii);
        assert_eq!(view.total_words(), 4);
    }

    #[test]
    fn zero_chars_is_one_word() {
        assert_eq!(GpsAsciiView::size_words(0), 1);
        let mut buf = [0u8; 4];
        encode(&mut buf, 0, b"");
        let view = GpsAsciiView::decode(&buf, 0);
        assert_eq!(view.char_count(), 0);
        assert_eq!(view.ascii(), b"");
    }

    #[test]
    fn pads_to_word_boundary() {
        let ascii = b"abc"; // 3 chars -> 1 padding word char, still 1 word total body
        let mut buf = vec![0u8; GpsAsciiView::size_words(3) as usize * 4];
        encode(&mut buf, 0, ascii);
        let view = GpsAsciiView::decode(&buf, 0);
        assert_eq!(view.bytes(), [b'a', b'b', b'c', 0]);
        assert_eq!(view.ascii(), b"abc");
    }
}
