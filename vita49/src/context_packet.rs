// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Compile-time Context Packet view (ANSI/VITA-49.2-2017 section 5.3).

A context packet schema is `(TimeStampType, ClassIdType, CIF0, CIF1,
CIF2, CIF3)`: the caller supplies the four CIF bitmaps directly as
const generics rather than a variadic field-tag pack (spec §9's
REDESIGN FLAGS note — a pack is "just a front door" over a computed
bitmask, and const generics over the mask itself is the more direct
translation into a language without variadic templates). Field tags
still gate individual-field access (§4.10); `field::<Tag>()` derives
`(CIF_WORD, BIT)` from the tag and panics at schema-definition time
(via [`Self::ASSERT_SCHEMA`]) if that bit isn't actually set in this
schema's masks.

CIF0's control bits (1, 2, 3) are never passed by the caller: they are
derived from whether `CIF1`/`CIF2`/`CIF3` is nonzero.
*/

use crate::cif_tables::{self, CIF0_CONTROL_BITS};
use crate::class_id::CLASS_ID_BYTES;
use crate::field_proxy::{FieldProxy, FieldProxyMut};
use crate::field_tags::FieldSpec;
use crate::header::{decode_header, Tsf, Tsi};
use crate::offset::{calculate_context_size_ct, calculate_field_offset_runtime, TargetCif};
use crate::prologue::{init_header, HEADER_BYTES, STREAM_ID_BYTES, TSF_BYTES, TSI_BYTES};
use crate::{ClassIdentifier, PacketType, Timestamp};

/// A compile-time-schema'd view over a Context/Extension Context
/// packet buffer. `EXT` selects Context (false) vs. ExtContext (true).
/// `CIF0` must not set control bits 1/2/3 directly — they are derived
/// from whether `CIF1`/`CIF2`/`CIF3` is nonzero.
pub struct ContextPacketView<
    'a,
    const EXT: bool,
    const HAS_CLASS_ID: bool,
    const TSI: u8,
    const TSF: u8,
    const CIF0: u32,
    const CIF1: u32,
    const CIF2: u32,
    const CIF3: u32,
> {
    buf: &'a mut [u8],
}

impl<
        'a,
        const EXT: bool,
        const HAS_CLASS_ID: bool,
        const TSI: u8,
        const TSF: u8,
        const CIF0: u32,
        const CIF1: u32,
        const CIF2: u32,
        const CIF3: u32,
    > ContextPacketView<'a, EXT, HAS_CLASS_ID, TSI, TSF, CIF0, CIF1, CIF2, CIF3>
{
    /// The effective CIF0 word actually written to the wire: the
    /// caller's data bits plus the derived CIF1/2/3 enable control
    /// bits.
    pub const EFFECTIVE_CIF0: u32 = CIF0
        | if CIF1 != 0 { 1 << CIF0_CONTROL_BITS[0] } else { 0 }
        | if CIF2 != 0 { 1 << CIF0_CONTROL_BITS[1] } else { 0 }
        | if CIF3 != 0 { 1 << CIF0_CONTROL_BITS[2] } else { 0 };

    const PACKET_TYPE: u8 = if EXT { 5 } else { 4 };

    const STREAM_ID_OFFSET: usize = HEADER_BYTES;
    const CLASS_ID_OFFSET: usize = Self::STREAM_ID_OFFSET + STREAM_ID_BYTES;
    const TSI_OFFSET: usize =
        Self::CLASS_ID_OFFSET + if HAS_CLASS_ID { CLASS_ID_BYTES } else { 0 };
    const TSF_OFFSET: usize = Self::TSI_OFFSET + if TSI != 0 { TSI_BYTES } else { 0 };
    /// Byte offset of CIF0, and of the context-fields region's base.
    pub const CIF0_OFFSET: usize = Self::TSF_OFFSET + if TSF != 0 { TSF_BYTES } else { 0 };
    const CIF1_OFFSET: usize = Self::CIF0_OFFSET + 4;
    const CIF2_OFFSET: usize = Self::CIF1_OFFSET + if CIF1 != 0 { 4 } else { 0 };
    const CIF3_OFFSET: usize = Self::CIF2_OFFSET + if CIF2 != 0 { 4 } else { 0 };
    /// Byte offset of the first context data field.
    pub const FIELDS_OFFSET: usize = Self::CIF3_OFFSET + if CIF3 != 0 { 4 } else { 0 };

    /// Asserts the compile-time schema constraints from spec §4.8:
    /// no direct control-bit setting, every set bit within its
    /// supported mask, no variable-length bits.
    pub const ASSERT_SCHEMA: () = {
        assert!(
            CIF0 & (1 << CIF0_CONTROL_BITS[0] | 1 << CIF0_CONTROL_BITS[1] | 1 << CIF0_CONTROL_BITS[2]) == 0,
            "CIF0 control bits 1/2/3 must not be set directly; they are derived from CIF1/2/3"
        );
        assert!(
            CIF0 & !cif_tables::CIF0_SUPPORTED_MASK == 0,
            "CIF0 sets an unsupported or reserved bit"
        );
        assert!(
            CIF1 & !cif_tables::CIF1_SUPPORTED_MASK == 0,
            "CIF1 sets an unsupported or reserved bit"
        );
        assert!(
            CIF2 & !cif_tables::CIF2_SUPPORTED_MASK == 0,
            "CIF2 sets an unsupported or reserved bit"
        );
        assert!(
            CIF3 & !cif_tables::CIF3_SUPPORTED_MASK == 0,
            "CIF3 sets an unsupported or reserved bit"
        );
        if let Err(_) = calculate_context_size_ct(CIF0, CIF1, CIF2, CIF3) {
            panic!("CIF0/1/2/3 schema rejected: variable-length bit or size overflow");
        }
    };

    /// Total packet size, in 32-bit words. Requires [`Self::ASSERT_SCHEMA`].
    pub const TOTAL_WORDS: u16 = {
        let prologue_words = (Self::FIELDS_OFFSET / 4) as u16;
        let field_words = match calculate_context_size_ct(CIF0, CIF1, CIF2, CIF3) {
            Ok(words) => words,
            Err(_) => 0,
        };
        prologue_words + field_words
    };

    /// Wraps `buf` as this schema. If `init`, writes header, stream
    /// ID region, class ID, timestamps, and CIF words (zeroing the
    /// context-fields region); otherwise assumes `buf` already holds a
    /// conforming packet.
    ///
    /// # Panics
    /// Panics if `buf.len()` is smaller than `Self::TOTAL_WORDS * 4`.
    pub fn new(buf: &'a mut [u8], init: bool) -> Self {
        #[allow(clippy::let_unit_value)]
        let _ = Self::ASSERT_SCHEMA;
        let total_bytes = Self::TOTAL_WORDS as usize * 4;
        assert!(buf.len() >= total_bytes, "buffer too small for schema");
        let mut view = ContextPacketView { buf };
        if init {
            view.buf[..total_bytes].fill(0);
            let header_word = init_header(
                PacketType::from_bits(Self::PACKET_TYPE),
                HAS_CLASS_ID,
                false,
                false,
                false,
                Tsi::from_bits(TSI),
                Tsf::from_bits(TSF),
                0,
                Self::TOTAL_WORDS,
            );
            crate::endian::write_u32(view.buf, 0, header_word);
            crate::endian::write_u32(view.buf, Self::CIF0_OFFSET, Self::EFFECTIVE_CIF0);
            if CIF1 != 0 {
                crate::endian::write_u32(view.buf, Self::CIF1_OFFSET, CIF1);
            }
            if CIF2 != 0 {
                crate::endian::write_u32(view.buf, Self::CIF2_OFFSET, CIF2);
            }
            if CIF3 != 0 {
                crate::endian::write_u32(view.buf, Self::CIF3_OFFSET, CIF3);
            }
        }
        view
    }

    /// The decoded header.
    pub fn header(&self) -> crate::header::DecodedHeader {
        decode_header(crate::endian::read_u32(self.buf, 0))
    }

    /// `size_words` from the header.
    pub fn packet_size(&self) -> u16 {
        self.header().size_words
    }

    /// The stream ID (always present on context packets).
    pub fn stream_id(&self) -> u32 {
        crate::endian::read_u32(self.buf, Self::STREAM_ID_OFFSET)
    }
    /// Sets the stream ID.
    pub fn set_stream_id(&mut self, value: u32) {
        crate::endian::write_u32(self.buf, Self::STREAM_ID_OFFSET, value);
    }

    /// The class ID, if `HAS_CLASS_ID`.
    pub fn class_id(&self) -> Option<ClassIdentifier> {
        HAS_CLASS_ID.then(|| ClassIdentifier::decode(self.buf, Self::CLASS_ID_OFFSET))
    }
    /// Sets the class ID, if `HAS_CLASS_ID`. No-op otherwise.
    pub fn set_class_id(&mut self, value: &ClassIdentifier) {
        if HAS_CLASS_ID {
            value.encode(self.buf, Self::CLASS_ID_OFFSET);
        }
    }

    /// The timestamp, if either TSI or TSF is present.
    pub fn timestamp(&self) -> Option<Timestamp> {
        if TSI == 0 && TSF == 0 {
            return None;
        }
        let seconds = if TSI != 0 {
            crate::endian::read_u32(self.buf, Self::TSI_OFFSET)
        } else {
            0
        };
        let fractional = if TSF != 0 {
            crate::endian::read_u64(self.buf, Self::TSF_OFFSET)
        } else {
            0
        };
        Some(Timestamp::new(seconds, fractional))
    }
    /// Sets whichever of TSI/TSF are present from `value`.
    pub fn set_timestamp(&mut self, value: &Timestamp) {
        if TSI != 0 {
            crate::endian::write_u32(self.buf, Self::TSI_OFFSET, value.seconds());
        }
        if TSF != 0 {
            crate::endian::write_u64(self.buf, Self::TSF_OFFSET, value.fractional());
        }
    }

    /// The as-written CIF0 word (including derived control bits).
    pub fn cif0(&self) -> u32 {
        crate::endian::read_u32(self.buf, Self::CIF0_OFFSET)
    }
    /// The CIF1 word, if enabled.
    pub fn cif1(&self) -> Option<u32> {
        (CIF1 != 0).then(|| crate::endian::read_u32(self.buf, Self::CIF1_OFFSET))
    }
    /// The CIF2 word, if enabled.
    pub fn cif2(&self) -> Option<u32> {
        (CIF2 != 0).then(|| crate::endian::read_u32(self.buf, Self::CIF2_OFFSET))
    }
    /// The CIF3 word, if enabled.
    pub fn cif3(&self) -> Option<u32> {
        (CIF3 != 0).then(|| crate::endian::read_u32(self.buf, Self::CIF3_OFFSET))
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

    fn mask_for(cif_word: u8) -> u32 {
        match cif_word {
            0 => Self::EFFECTIVE_CIF0,
            1 => CIF1,
            2 => CIF2,
            3 => CIF3,
            _ => unreachable!("field tags only name CIF0..=3"),
        }
    }

    /// A read-only proxy over the field named by `Tag`. The field must
    /// be declared present in this schema's masks or every accessor on
    /// the returned proxy will panic (`has_value()` reports `false`).
    pub fn field<Tag: FieldSpec>(&self) -> FieldProxy<'_, Tag> {
        let mask = Self::mask_for(Tag::CIF_WORD);
        let present = mask & (1 << Tag::BIT) != 0;
        if !present {
            return FieldProxy::absent();
        }
        let offset = calculate_field_offset_runtime(
            Self::EFFECTIVE_CIF0,
            CIF1,
            CIF2,
            CIF3,
            Self::target_cif_for(Tag::CIF_WORD),
            Tag::BIT,
            self.buf,
            Self::FIELDS_OFFSET,
            self.buf.len(),
        )
        .expect("field offset is content-independent for fixed fields declared in a compile-time schema");
        FieldProxy::new(
            &self.buf[offset..offset + <Tag::Wire as crate::field_tags::WireCodec>::SIZE_BYTES],
            true,
        )
    }

    /// A mutable proxy over the field named by `Tag`.
    ///
    /// # Panics
    /// Panics if the field isn't set in this schema's masks.
    pub fn field_mut<Tag: FieldSpec>(&mut self) -> FieldProxyMut<'_, Tag> {
        let mask = Self::mask_for(Tag::CIF_WORD);
        assert!(
            mask & (1 << Tag::BIT) != 0,
            "field {} is not present in this schema",
            Tag::NAME
        );
        let offset = calculate_field_offset_runtime(
            Self::EFFECTIVE_CIF0,
            CIF1,
            CIF2,
            CIF3,
            Self::target_cif_for(Tag::CIF_WORD),
            Tag::BIT,
            self.buf,
            Self::FIELDS_OFFSET,
            self.buf.len(),
        )
        .expect("field offset is content-independent for fixed fields declared in a compile-time schema");
        let size = <Tag::Wire as crate::field_tags::WireCodec>::SIZE_BYTES;
        FieldProxyMut::new(&mut self.buf[offset..offset + size])
    }

    /// The full packet as on-wire bytes: exactly `TOTAL_WORDS * 4`
    /// bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..Self::TOTAL_WORDS as usize * 4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_tags::{AuxFrequency, Bandwidth};

    type ScenarioC<'a> = ContextPacketView<'a, false, false, 0, 0, { 1 << 29 }, 0, 0, 0>;

    #[test]
    fn scenario_c_bandwidth() {
        let mut storage = [0u8; 20];
        let mut view = ScenarioC::new(&mut storage, true);
        view.set_stream_id(0xAABBCCDD);
        view.field_mut::<Bandwidth>().set_value(20_000_000.0);
        assert_eq!(ScenarioC::TOTAL_WORDS, 5);
        assert_eq!(view.cif0(), 1 << 29);
        assert_eq!(view.field::<Bandwidth>().value(), 20_000_000.0);
    }

    type ScenarioD<'a> = ContextPacketView<'a, false, false, 0, 0, 0, { 1 << 15 }, 0, 0>;

    #[test]
    fn scenario_d_aux_frequency_in_cif1() {
        let mut storage = [0u8; 24];
        let mut view = ScenarioD::new(&mut storage, true);
        view.set_stream_id(0x12345678);
        view.field_mut::<AuxFrequency>().set_encoded(10_000_000);
        assert_eq!(ScenarioD::TOTAL_WORDS, 6);
        assert_eq!(view.cif0(), 0x2);
        assert_eq!(view.cif1(), Some(0x8000));
        assert_eq!(view.field::<AuxFrequency>().encoded(), 10_000_000);
    }

    #[test]
    fn absent_field_reports_no_value() {
        let mut storage = [0u8; 20];
        let view = ScenarioC::new(&mut storage, true);
        assert!(!view.field::<AuxFrequency>().has_value());
    }
}
