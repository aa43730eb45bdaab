// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Prologue layout: header + optional stream-ID + optional class-ID +
optional TSI/TSF words (ANSI/VITA-49.2-2017 section 5.1).

The prologue is the single source of offsets for everything that
follows it (payload/trailer for data packets, CIF words for context
packets). Presence of each optional section is a pure function of
`(packet_type, has_class_id, tsi, tsf)` — never inferred from buffer
content — so offsets can be computed before any bytes are read.
*/

use crate::class_id::{ClassIdentifier, CLASS_ID_BYTES};
use crate::header::{build_header, decode_header, DecodedHeader, PacketType, Tsf, Tsi};
use crate::timestamp::{Timestamp, TIMESTAMP_BYTES};

/// Size of the fixed header word, in bytes.
pub const HEADER_BYTES: usize = 4;
/// Size of a stream ID word, in bytes.
pub const STREAM_ID_BYTES: usize = 4;
/// Size of the integer-timestamp (TSI) word, in bytes.
pub const TSI_BYTES: usize = 4;
/// Size of the fractional-timestamp (TSF) field, in bytes (2 words).
pub const TSF_BYTES: usize = 8;

/// Stream-ID presence is a function of packet type alone, never a
/// header bit: odd data types (1, 3) and both context types (4, 5).
pub fn has_stream_id(packet_type: PacketType) -> bool {
    packet_type.has_stream_id()
}

/// The fixed layout of a prologue, computed once from presence flags.
///
/// Byte offsets are relative to the start of the packet. Each section's
/// offset equals the sum of the byte sizes of every section before it
/// that is present — the offset invariant in spec §3.1.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct PrologueLayout {
    has_stream_id: bool,
    has_class_id: bool,
    has_tsi: bool,
    has_tsf: bool,
    stream_id_offset: usize,
    class_id_offset: usize,
    tsi_offset: usize,
    tsf_offset: usize,
    total_bytes: usize,
}

impl PrologueLayout {
    /// Computes the layout for a given packet type and optional-field
    /// presence. `tsi`/`tsf` are [`Tsi::None`]/[`Tsf::None`] when absent.
    pub fn new(packet_type: PacketType, has_class_id: bool, tsi: Tsi, tsf: Tsf) -> PrologueLayout {
        let has_stream_id = has_stream_id(packet_type);
        let has_tsi = tsi != Tsi::None;
        let has_tsf = tsf != Tsf::None;

        let mut cursor = HEADER_BYTES;
        let stream_id_offset = cursor;
        if has_stream_id {
            cursor += STREAM_ID_BYTES;
        }
        let class_id_offset = cursor;
        if has_class_id {
            cursor += CLASS_ID_BYTES;
        }
        let tsi_offset = cursor;
        if has_tsi {
            cursor += TSI_BYTES;
        }
        let tsf_offset = cursor;
        if has_tsf {
            cursor += TSF_BYTES;
        }

        PrologueLayout {
            has_stream_id,
            has_class_id,
            has_tsi,
            has_tsf,
            stream_id_offset,
            class_id_offset,
            tsi_offset,
            tsf_offset,
            total_bytes: cursor,
        }
    }

    /// Whether a stream ID word is present.
    pub fn has_stream_id(&self) -> bool {
        self.has_stream_id
    }
    /// Whether a class ID is present.
    pub fn has_class_id(&self) -> bool {
        self.has_class_id
    }
    /// Whether a TSI (integer timestamp) word is present.
    pub fn has_tsi(&self) -> bool {
        self.has_tsi
    }
    /// Whether a TSF (fractional timestamp) field is present.
    pub fn has_tsf(&self) -> bool {
        self.has_tsf
    }
    /// Whether any timestamp component is present.
    pub fn has_timestamp(&self) -> bool {
        self.has_tsi || self.has_tsf
    }

    /// Byte offset of the stream ID word (valid only if present).
    pub fn stream_id_offset(&self) -> usize {
        self.stream_id_offset
    }
    /// Byte offset of the class ID (valid only if present).
    pub fn class_id_offset(&self) -> usize {
        self.class_id_offset
    }
    /// Byte offset of the TSI word (valid only if present).
    pub fn tsi_offset(&self) -> usize {
        self.tsi_offset
    }
    /// Byte offset of the TSF field (valid only if present).
    pub fn tsf_offset(&self) -> usize {
        self.tsf_offset
    }
    /// Byte offset of whatever follows the prologue (payload or CIF0).
    pub fn end_offset(&self) -> usize {
        self.total_bytes
    }
    /// Total prologue size, in 32-bit words.
    pub fn total_words(&self) -> usize {
        self.total_bytes / 4
    }
}

/// Composes the header word for a packet, given its category's three
/// type-dependent indicator bits. The caller supplies `bit26`/`bit25`/
/// `bit24` with whatever meaning its packet category assigns them
/// (see [`crate::header::Indicators`]); this function only places them.
#[allow(clippy::too_many_arguments)]
pub fn init_header(
    packet_type: PacketType,
    has_class_id: bool,
    bit26: bool,
    bit25: bool,
    bit24: bool,
    tsi: Tsi,
    tsf: Tsf,
    packet_count: u8,
    size_words: u16,
) -> u32 {
    build_header(
        packet_type.to_bits(),
        has_class_id,
        bit26,
        bit25,
        bit24,
        tsi.to_bits(),
        tsf.to_bits(),
        packet_count,
        size_words,
    )
}

/// Zeroes the stream ID word in `buf` at the layout's offset, if
/// present. No-op otherwise.
pub fn init_stream_id(layout: &PrologueLayout, buf: &mut [u8]) {
    if layout.has_stream_id {
        buf[layout.stream_id_offset..layout.stream_id_offset + STREAM_ID_BYTES].fill(0);
    }
}

/// Zeroes the class ID region in `buf` at the layout's offset, if
/// present. No-op otherwise.
pub fn init_class_id(layout: &PrologueLayout, buf: &mut [u8]) {
    if layout.has_class_id {
        buf[layout.class_id_offset..layout.class_id_offset + CLASS_ID_BYTES].fill(0);
    }
}

/// Zeroes the TSI/TSF regions in `buf` at the layout's offsets, for
/// whichever are present.
pub fn init_timestamps(layout: &PrologueLayout, buf: &mut [u8]) {
    if layout.has_tsi {
        buf[layout.tsi_offset..layout.tsi_offset + TSI_BYTES].fill(0);
    }
    if layout.has_tsf {
        buf[layout.tsf_offset..layout.tsf_offset + TSF_BYTES].fill(0);
    }
}

/// Reads the header word (always present, at byte offset 0).
pub fn header(buf: &[u8]) -> DecodedHeader {
    decode_header(crate::endian::read_u32(buf, 0))
}

/// Header `size_words` field, in 32-bit words.
pub fn packet_size(buf: &[u8]) -> u16 {
    header(buf).size_words
}

/// Header `packet_count` field (modulo-16).
pub fn packet_count(buf: &[u8]) -> u8 {
    header(buf).packet_count
}

/// Reads the stream ID, if the layout says it's present.
pub fn stream_id(layout: &PrologueLayout, buf: &[u8]) -> Option<u32> {
    layout
        .has_stream_id
        .then(|| crate::endian::read_u32(buf, layout.stream_id_offset))
}

/// Sets the stream ID, if the layout says it's present. No-op
/// otherwise.
pub fn set_stream_id(layout: &PrologueLayout, buf: &mut [u8], value: u32) {
    if layout.has_stream_id {
        crate::endian::write_u32(buf, layout.stream_id_offset, value);
    }
}

/// Reads the class ID, if the layout says it's present.
pub fn class_id(layout: &PrologueLayout, buf: &[u8]) -> Option<ClassIdentifier> {
    layout
        .has_class_id
        .then(|| ClassIdentifier::decode(buf, layout.class_id_offset))
}

/// Sets the class ID, if the layout says it's present. No-op
/// otherwise.
pub fn set_class_id(layout: &PrologueLayout, buf: &mut [u8], value: &ClassIdentifier) {
    if layout.has_class_id {
        value.encode(buf, layout.class_id_offset);
    }
}

/// Reads the timestamp, if either TSI or TSF is present. Seconds come
/// from the TSI word (or 0 if TSI is absent); fractional comes from
/// the TSF field (or 0 if TSF is absent).
pub fn timestamp(layout: &PrologueLayout, buf: &[u8]) -> Option<Timestamp> {
    if !layout.has_timestamp() {
        return None;
    }
    let seconds = if layout.has_tsi {
        crate::endian::read_u32(buf, layout.tsi_offset)
    } else {
        0
    };
    let fractional = if layout.has_tsf {
        crate::endian::read_u64(buf, layout.tsf_offset)
    } else {
        0
    };
    Some(Timestamp::new(seconds, fractional))
}

/// Sets the timestamp, writing whichever of TSI/TSF the layout says
/// are present. No-op for whichever is absent.
pub fn set_timestamp(layout: &PrologueLayout, buf: &mut [u8], value: &Timestamp) {
    if layout.has_tsi {
        crate::endian::write_u32(buf, layout.tsi_offset, value.seconds());
    }
    if layout.has_tsf {
        crate::endian::write_u64(buf, layout.tsf_offset, value.fractional());
    }
}

const _: () = assert!(TIMESTAMP_BYTES == TSI_BYTES + TSF_BYTES);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_data_no_id_has_minimal_prologue() {
        let layout = PrologueLayout::new(PacketType::SignalDataNoId, false, Tsi::None, Tsf::None);
        assert!(!layout.has_stream_id());
        assert!(!layout.has_class_id());
        assert!(!layout.has_timestamp());
        assert_eq!(layout.end_offset(), 4);
    }

    #[test]
    fn context_packet_always_has_stream_id() {
        let layout = PrologueLayout::new(PacketType::Context, false, Tsi::None, Tsf::None);
        assert!(layout.has_stream_id());
        assert_eq!(layout.stream_id_offset(), 4);
        assert_eq!(layout.end_offset(), 8);
    }

    #[test]
    fn scenario_b_layout_offsets() {
        // type=1 (SignalData), class_id=false, TSI=Utc, TSF=RealTime
        let layout = PrologueLayout::new(PacketType::SignalData, false, Tsi::Utc, Tsf::RealTime);
        assert_eq!(layout.stream_id_offset(), 4);
        assert_eq!(layout.tsi_offset(), 8);
        assert_eq!(layout.tsf_offset(), 12);
        assert_eq!(layout.end_offset(), 20);
        assert_eq!(layout.total_words(), 5);
    }

    #[test]
    fn round_trips_stream_id_class_id_and_timestamp() {
        let layout = PrologueLayout::new(PacketType::Context, true, Tsi::Utc, Tsf::RealTime);
        let mut buf = [0u8; 64];
        let header_word = init_header(
            PacketType::Context,
            true,
            false,
            false,
            false,
            Tsi::Utc,
            Tsf::RealTime,
            0,
            layout.total_words() as u16,
        );
        crate::endian::write_u32(&mut buf, 0, header_word);
        init_stream_id(&layout, &mut buf);
        init_class_id(&layout, &mut buf);
        init_timestamps(&layout, &mut buf);

        set_stream_id(&layout, &mut buf, 0xAABBCCDD);
        let cid = ClassIdentifier::new(0x001234, 0xAB, 0xDEADBEEF);
        set_class_id(&layout, &mut buf, &cid);
        let ts = Timestamp::new(1234, 500);
        set_timestamp(&layout, &mut buf, &ts);

        assert_eq!(stream_id(&layout, &buf), Some(0xAABBCCDD));
        assert_eq!(class_id(&layout, &buf), Some(cid));
        assert_eq!(timestamp(&layout, &buf), Some(ts));
        assert_eq!(header(&buf).packet_type, PacketType::Context);
        assert_eq!(packet_size(&buf), layout.total_words() as u16);
    }

    #[test]
    fn absent_optional_fields_return_none() {
        let layout = PrologueLayout::new(PacketType::SignalDataNoId, false, Tsi::None, Tsf::None);
        let buf = [0u8; 4];
        assert_eq!(stream_id(&layout, &buf), None);
        assert_eq!(class_id(&layout, &buf), None);
        assert_eq!(timestamp(&layout, &buf), None);
    }
}
