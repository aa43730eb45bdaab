// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Runtime Context Packet View: validates an arbitrary received
Context/Extension Context packet buffer on construction, then exposes
typed field access over the result (ANSI/VITA-49.2-2017 section 5.3
and spec §4.9).

This is the heaviest subsystem in the crate: validation walks the
header, the prologue, however many of CIF0..CIF3 the control bits
enable, and the CIF0 variable-length fields (GPS ASCII, Context
Association Lists), accumulating a computed packet length that must
equal the header's declared `size_words` before the view is considered
valid. Field access after construction reuses the same offset engine
([`crate::offset`]) that computed the size, so there is exactly one
place that knows how to walk a CIF word.
*/

use crate::cif_tables::{self, CIF0_CONTROL_BITS};
use crate::class_id::ClassIdentifier;
use crate::context_association_lists::ContextAssociationListsView;
use crate::endian::{read_u32, try_read_u32};
use crate::field_proxy::FieldProxy;
use crate::field_tags::FieldSpec;
use crate::gps_ascii::GpsAsciiView;
use crate::header::{decode_header, DecodedHeader, PacketType};
use crate::offset::{calculate_field_offset_runtime, sum_table_runtime, walk_cif0, TargetCif};
use crate::prologue::PrologueLayout;
use crate::timestamp::Timestamp;
use crate::validation::ValidationError;

/// A validated, non-owning view over a received context-packet
/// buffer. Construction runs the full validation pipeline (spec
/// §4.9); once built, every accessor is infallible bit/byte
/// extraction over the already-checked layout.
pub struct RuntimeContextPacketView<'a> {
    buf: &'a [u8],
    header: DecodedHeader,
    layout: PrologueLayout,
    cif0: u32,
    cif1: u32,
    cif2: u32,
    cif3: u32,
    has_cif1: bool,
    has_cif2: bool,
    has_cif3: bool,
    fields_offset: usize,
}

fn checked_read_u32(buf: &[u8], offset: usize, limit: usize) -> Result<u32, ValidationError> {
    if offset + 4 > limit {
        return Err(ValidationError::BufferTooSmall);
    }
    try_read_u32(buf, offset).ok_or(ValidationError::BufferTooSmall)
}

impl<'a> RuntimeContextPacketView<'a> {
    /// Validates `buf[..buffer_size]` as a context packet and, on
    /// success, builds a view over it. Runs the full pipeline from
    /// spec §4.9, halting and returning on the first failure.
    pub fn new(buf: &'a [u8], buffer_size: usize) -> Result<RuntimeContextPacketView<'a>, ValidationError> {
        // Step 1: buffer at least holds a header.
        if buffer_size < 4 || buf.len() < 4 {
            return Err(ValidationError::BufferTooSmall);
        }

        // Step 2: decode header; type must be Context/ExtContext, and
        // bit 26 (reserved for this packet category) must be zero.
        let word0 = read_u32(buf, 0);
        let header = decode_header(word0);
        if !matches!(header.packet_type, PacketType::Context | PacketType::ExtContext) {
            return Err(ValidationError::PacketTypeMismatch);
        }
        if (word0 >> 26) & 1 != 0 {
            return Err(ValidationError::UnsupportedField);
        }

        // Step 3: declared size fits the buffer.
        let size_bytes = header.size_words as usize * 4;
        if size_bytes > buffer_size || size_bytes > buf.len() {
            return Err(ValidationError::BufferTooSmall);
        }

        // Step 4: walk the prologue.
        let layout = PrologueLayout::new(header.packet_type, header.has_class_id, header.tsi, header.tsf);
        if layout.end_offset() > size_bytes {
            return Err(ValidationError::BufferTooSmall);
        }

        // Step 5: read CIF0, then whichever of CIF1/2/3 its control
        // bits enable, each bounds-checked against the declared size.
        let cif0_offset = layout.end_offset();
        let cif0 = checked_read_u32(buf, cif0_offset, size_bytes)?;
        let mut cursor = cif0_offset + 4;

        let has_cif1 = cif0 & (1 << CIF0_CONTROL_BITS[0]) != 0;
        let cif1 = if has_cif1 {
            let v = checked_read_u32(buf, cursor, size_bytes)?;
            cursor += 4;
            v
        } else {
            0
        };
        let has_cif2 = cif0 & (1 << CIF0_CONTROL_BITS[1]) != 0;
        let cif2 = if has_cif2 {
            let v = checked_read_u32(buf, cursor, size_bytes)?;
            cursor += 4;
            v
        } else {
            0
        };
        let has_cif3 = cif0 & (1 << CIF0_CONTROL_BITS[2]) != 0;
        let cif3 = if has_cif3 {
            let v = checked_read_u32(buf, cursor, size_bytes)?;
            cursor += 4;
            v
        } else {
            0
        };

        // Step 6: every set bit must be in its word's supported mask.
        if cif0 & !cif_tables::CIF0_SUPPORTED_MASK != 0 {
            return Err(ValidationError::UnsupportedField);
        }
        if has_cif1 && cif1 & !cif_tables::CIF1_SUPPORTED_MASK != 0 {
            return Err(ValidationError::UnsupportedField);
        }
        if has_cif2 && cif2 & !cif_tables::CIF2_SUPPORTED_MASK != 0 {
            return Err(ValidationError::UnsupportedField);
        }
        if has_cif3 && cif3 & !cif_tables::CIF3_SUPPORTED_MASK != 0 {
            return Err(ValidationError::UnsupportedField);
        }

        let fields_offset = cursor;

        // Step 7: sum fixed fields, resolving CIF0's two variable
        // fields (GPS ASCII before Context Association Lists, per the
        // MSB-first bit order: bit 10 before bit 9) from buffer
        // content.
        let mut walk_cursor = fields_offset;
        let cif0_field_words = walk_cif0(cif0, 0, buf, &mut walk_cursor, size_bytes)?;
        let cif1_field_words = sum_table_runtime(&cif_tables::CIF1, cif1, 0);
        let cif2_field_words = sum_table_runtime(&cif_tables::CIF2, cif2, 0);
        let cif3_field_words = sum_table_runtime(&cif_tables::CIF3, cif3, 0);
        let context_field_words = cif0_field_words + cif1_field_words + cif2_field_words + cif3_field_words;

        // Step 8: total computed length must equal the header's
        // declared size_words.
        let cif_word_count = 1 + has_cif1 as u32 + has_cif2 as u32 + has_cif3 as u32;
        let calculated_size_words = layout.total_words() as u32 + cif_word_count + context_field_words;
        if calculated_size_words != header.size_words as u32 {
            return Err(ValidationError::SizeFieldMismatch);
        }

        Ok(RuntimeContextPacketView {
            buf,
            header,
            layout,
            cif0,
            cif1,
            cif2,
            cif3,
            has_cif1,
            has_cif2,
            has_cif3,
            fields_offset,
        })
    }

    /// The decoded header.
    pub fn header(&self) -> DecodedHeader {
        self.header
    }

    /// `size_words` from the header.
    pub fn packet_size(&self) -> u16 {
        self.header.size_words
    }

    /// `packet_count` from the header.
    pub fn packet_count(&self) -> u8 {
        self.header.packet_count
    }

    /// The stream ID. Always present on context packets.
    pub fn stream_id(&self) -> Option<u32> {
        crate::prologue::stream_id(&self.layout, self.buf)
    }

    /// The class ID, if present.
    pub fn class_id(&self) -> Option<ClassIdentifier> {
        crate::prologue::class_id(&self.layout, self.buf)
    }

    /// The timestamp, if TSI or TSF is present.
    pub fn timestamp(&self) -> Option<Timestamp> {
        crate::prologue::timestamp(&self.layout, self.buf)
    }

    /// The CIF0 bitmap, as written (including derived control bits).
    pub fn cif0(&self) -> u32 {
        self.cif0
    }
    /// The CIF1 bitmap, if CIF0's control bit 1 enabled it.
    pub fn cif1(&self) -> Option<u32> {
        self.has_cif1.then_some(self.cif1)
    }
    /// The CIF2 bitmap, if CIF0's control bit 2 enabled it.
    pub fn cif2(&self) -> Option<u32> {
        self.has_cif2.then_some(self.cif2)
    }
    /// The CIF3 bitmap, if CIF0's control bit 3 enabled it.
    pub fn cif3(&self) -> Option<u32> {
        self.has_cif3.then_some(self.cif3)
    }

    fn target_cif_for(cif_word: u8) -> TargetCif {
        match cif_word {
            0 => TargetCif::Cif0,
            1 => TargetCif::Cif1,
            2 => TargetCif::Cif2,
            3 => TargetCif::Cif3,
            _ => unreachable!("field tags only name CIF0..=3"),
        }
    }

    fn mask_for(&self, cif_word: u8) -> u32 {
        match cif_word {
            0 => self.cif0,
            1 => self.cif1,
            2 => self.cif2,
            3 => self.cif3,
            _ => unreachable!("field tags only name CIF0..=3"),
        }
    }

    /// A read-only proxy over the field named by `Tag`. Reports
    /// absent if the field's bit isn't set in this packet's CIF
    /// bitmaps.
    pub fn field<Tag: FieldSpec>(&self) -> FieldProxy<'_, Tag> {
        let mask = self.mask_for(Tag::CIF_WORD);
        if mask & (1 << Tag::BIT) == 0 {
            return FieldProxy::absent();
        }
        let offset = match calculate_field_offset_runtime(
            self.cif0,
            self.cif1,
            self.cif2,
            self.cif3,
            Self::target_cif_for(Tag::CIF_WORD),
            Tag::BIT,
            self.buf,
            self.fields_offset,
            self.buf.len(),
        ) {
            Ok(offset) => offset,
            Err(_) => return FieldProxy::absent(),
        };
        let size = <Tag::Wire as crate::field_tags::WireCodec>::SIZE_BYTES;
        FieldProxy::new(&self.buf[offset..offset + size], true)
    }

    /// GPS ASCII (CIF0 bit 10), if present.
    pub fn gps_ascii(&self) -> Option<GpsAsciiView<'a>> {
        if self.cif0 & (1 << 10) == 0 {
            return None;
        }
        let offset = calculate_field_offset_runtime(
            self.cif0,
            self.cif1,
            self.cif2,
            self.cif3,
            TargetCif::Cif0,
            10,
            self.buf,
            self.fields_offset,
            self.buf.len(),
        )
        .ok()?;
        Some(GpsAsciiView::decode(self.buf, offset))
    }

    /// Context Association Lists (CIF0 bit 9), if present.
    pub fn context_association_lists(&self) -> Option<ContextAssociationListsView<'a>> {
        if self.cif0 & (1 << 9) == 0 {
            return None;
        }
        let offset = calculate_field_offset_runtime(
            self.cif0,
            self.cif1,
            self.cif2,
            self.cif3,
            TargetCif::Cif0,
            9,
            self.buf,
            self.fields_offset,
            self.buf.len(),
        )
        .ok()?;
        Some(ContextAssociationListsView::decode(self.buf, offset))
    }

    /// The full packet as on-wire bytes: exactly `size_words * 4`
    /// bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buf[..self.header.size_words as usize * 4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_tags::{AuxFrequency, Bandwidth};

    fn scenario_c() -> Vec<u8> {
        let mut v = vec![0x40, 0x00, 0x00, 0x05];
        v.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]); // stream id
        v.extend_from_slice(&[0x20, 0x00, 0x00, 0x00]); // CIF0 bit 29
        v.extend_from_slice(&[0x00, 0x00, 0x00, 0x13]); // bandwidth hi
        v.extend_from_slice(&[0x12, 0xD0, 0x00, 0x00]); // bandwidth lo
        v
    }

    #[test]
    fn scenario_c_bandwidth() {
        let buf = scenario_c();
        let view = RuntimeContextPacketView::new(&buf, buf.len()).unwrap();
        assert_eq!(view.stream_id(), Some(0xAABBCCDD));
        assert_eq!(view.cif0(), 1 << 29);
        assert_eq!(view.field::<Bandwidth>().value(), 20_000_000.0);
    }

    fn scenario_d() -> Vec<u8> {
        let mut v = vec![0x40, 0x00, 0x00, 0x06];
        v.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]); // stream id
        v.extend_from_slice(&[0x00, 0x00, 0x00, 0x02]); // CIF0: CIF1-enable
        v.extend_from_slice(&[0x00, 0x00, 0x80, 0x00]); // CIF1: bit 15
        v.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x98, 0x96, 0x80]); // aux_frequency = 10_000_000
        v
    }

    #[test]
    fn scenario_d_aux_frequency_in_cif1() {
        let buf = scenario_d();
        let view = RuntimeContextPacketView::new(&buf, buf.len()).unwrap();
        assert_eq!(view.cif0(), 0x2);
        assert_eq!(view.cif1(), Some(0x8000));
        assert_eq!(view.field::<AuxFrequency>().encoded(), 10_000_000);
    }

    fn scenario_e() -> Vec<u8> {
        let mut v = vec![0x40, 0x00, 0x00, 0x07];
        v.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]); // stream id
        v.extend_from_slice(&[0x00, 0x00, 0x04, 0x00]); // CIF0 bit 10
        v.extend_from_slice(&[0x00, 0x00, 0x00, 0x0C]); // char_count = 12
        v.extend_from_slice(b"Hello World!");
        v
    }

    #[test]
    fn scenario_e_gps_ascii() {
        let buf = scenario_e();
        let view = RuntimeContextPacketView::new(&buf, buf.len()).unwrap();
        let gps = view.gps_ascii().unwrap();
        assert_eq!(gps.char_count(), 12);
        assert_eq!(gps.ascii(), b"Hello World!");
    }

    fn scenario_f() -> Vec<u8> {
        let mut v = vec![0x40, 0x00, 0x00, 0x04];
        v.extend_from_slice(&[0x11, 0x22, 0x33, 0x44]); // stream id
        v.extend_from_slice(&[0x00, 0x00, 0x00, 0x08]); // CIF0: CIF3-enable
        v.extend_from_slice(&[0x10, 0x00, 0x00, 0x00]); // CIF3: reserved bit 28
        v
    }

    #[test]
    fn scenario_f_unsupported_cif3_bit() {
        let buf = scenario_f();
        assert!(matches!(
            RuntimeContextPacketView::new(&buf, buf.len()),
            Err(ValidationError::UnsupportedField)
        ));
    }

    #[test]
    fn rejects_context_with_bit26_set() {
        let mut buf = scenario_c();
        buf[0] |= 0x04; // bit 26 of the first byte (bits 31..24)
        assert!(matches!(
            RuntimeContextPacketView::new(&buf, buf.len()),
            Err(ValidationError::UnsupportedField)
        ));
    }

    #[test]
    fn rejects_buffer_smaller_than_header() {
        let buf = [0u8; 2];
        assert!(matches!(
            RuntimeContextPacketView::new(&buf, buf.len()),
            Err(ValidationError::BufferTooSmall)
        ));
    }

    #[test]
    fn rejects_data_packet_type() {
        let buf = [0x00, 0x00, 0x00, 0x01];
        assert!(matches!(
            RuntimeContextPacketView::new(&buf, buf.len()),
            Err(ValidationError::PacketTypeMismatch)
        ));
    }

    #[test]
    fn rejects_size_field_mismatch() {
        let mut buf = scenario_c();
        buf[3] = 0x04; // declare one word too few
        assert!(matches!(
            RuntimeContextPacketView::new(&buf, buf.len()),
            Err(ValidationError::SizeFieldMismatch)
        ));
    }

    #[test]
    fn context_association_lists_zero_counts_is_one_word() {
        let mut v = vec![0x40, 0x00, 0x00, 0x04];
        v.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
        v.extend_from_slice(&[0x00, 0x00, 0x02, 0x00]); // CIF0 bit 9
        v.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // counts = 0, 0
        let view = RuntimeContextPacketView::new(&v, v.len()).unwrap();
        let cal = view.context_association_lists().unwrap();
        assert_eq!(cal.stream_count(), 0);
        assert_eq!(cal.context_count(), 0);
    }
}
