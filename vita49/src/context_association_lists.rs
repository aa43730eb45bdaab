// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Context Association Lists, CIF0 bit 9 (ANSI/VITA-49.2-2017 section
9.10.1).

Variable-length: `[stream_count:u16 || context_count:u16]
[stream_ids...][context_ids...]`. Total size is
`1 + stream_count + context_count` words. A non-owning view: the two
ID lists borrow directly from the backing buffer.
*/

use crate::endian::{read_u32, write_u32};

/// A read-only, non-owning view over a Context Association Lists
/// field already known to fit within its buffer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ContextAssociationListsView<'a> {
    stream_count: u16,
    context_count: u16,
    stream_ids: &'a [u8],
    context_ids: &'a [u8],
}

impl<'a> ContextAssociationListsView<'a> {
    /// Wraps the field starting at `buf[offset..]`. `buf` must contain
    /// at least `size_words(...) * 4` bytes from `offset`.
    pub fn decode(buf: &'a [u8], offset: usize) -> ContextAssociationListsView<'a> {
        let counts = read_u32(buf, offset);
        let stream_count = (counts >> 16) as u16;
        let context_count = (counts & 0xFFFF) as u16;
        let stream_bytes = stream_count as usize * 4;
        let context_bytes = context_count as usize * 4;
        let stream_ids = &buf[offset + 4..offset + 4 + stream_bytes];
        let context_ids = &buf[offset + 4 + stream_bytes..offset + 4 + stream_bytes + context_bytes];
        ContextAssociationListsView {
            stream_count,
            context_count,
            stream_ids,
            context_ids,
        }
    }

    /// Number of 32-bit words occupied by a field with the given
    /// counts: `1 + stream_count + context_count`.
    pub fn size_words(stream_count: u16, context_count: u16) -> u32 {
        1 + stream_count as u32 + context_count as u32
    }

    /// Number of associated stream IDs.
    pub fn stream_count(&self) -> u16 {
        self.stream_count
    }
    /// Number of associated context IDs.
    pub fn context_count(&self) -> u16 {
        self.context_count
    }

    /// The `i`th associated stream ID, if in range.
    pub fn stream_id(&self, i: usize) -> Option<u32> {
        if i >= self.stream_count as usize {
            return None;
        }
        Some(read_u32(self.stream_ids, i * 4))
    }

    /// The `i`th associated context ID, if in range.
    pub fn context_id(&self, i: usize) -> Option<u32> {
        if i >= self.context_count as usize {
            return None;
        }
        Some(read_u32(self.context_ids, i * 4))
    }

    /// Total words this field occupies on the wire.
    pub fn total_words(&self) -> u32 {
        Self::size_words(self.stream_count, self.context_count)
    }
}

/// Writes a Context Association Lists field at `buf[offset..]`.
/// `buf` must have room for `(1 + stream_ids.len() +
/// context_ids.len()) * 4` bytes from `offset`.
///
/// # Panics
/// Panics if either list exceeds `u16::MAX` entries.
pub fn encode(buf: &mut [u8], offset: usize, stream_ids: &[u32], context_ids: &[u32]) {
    let stream_count = u16::try_from(stream_ids.len()).expect("stream_ids exceeds u16::MAX");
    let context_count = u16::try_from(context_ids.len()).expect("context_ids exceeds u16::MAX");
    write_u32(
        buf,
        offset,
        (stream_count as u32) << 16 | context_count as u32,
    );
    let mut cursor = offset + 4;
    for id in stream_ids {
        write_u32(buf, cursor, *id);
        cursor += 4;
    }
    for id in context_ids {
        write_u32(buf, cursor, *id);
        cursor += 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_two_streams_one_context() {
        let streams = [0x11, 0x22];
        let contexts = [0x33];
        let words = ContextAssociationListsView::size_words(2, 1);
        assert_eq!(words, 4);
        let mut buf = vec![0u8; words as usize * 4];
        encode(&mut buf, 0, &streams, &contexts);
        let view = ContextAssociationListsView::decode(&buf, 0);
        assert_eq!(view.stream_count(), 2);
        assert_eq!(view.context_count(), 1);
        assert_eq!(view.stream_id(0), Some(0x11));
        assert_eq!(view.stream_id(1), Some(0x22));
        assert_eq!(view.stream_id(2), None);
        assert_eq!(view.context_id(0), Some(0x33));
        assert_eq!(view.total_words(), 4);
    }

    #[test]
    fn zero_counts_is_one_word() {
        assert_eq!(ContextAssociationListsView::size_words(0, 0), 1);
        let mut buf = [0u8; 4];
        encode(&mut buf, 0, &[], &[]);
        let view = ContextAssociationListsView::decode(&buf, 0);
        assert_eq!(view.stream_count(), 0);
        assert_eq!(view.context_count(), 0);
        assert_eq!(view.total_words(), 1);
    }
}
