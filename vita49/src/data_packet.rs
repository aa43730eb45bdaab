// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Compile-time Signal/Extension Data Packet view (ANSI/VITA-49.2-2017
section 5.2).

Schema parameters are const generics, not runtime fields: `PACKET_TYPE`
(0..=3), `HAS_CLASS_ID`, `TSI`, `TSF`, `HAS_TRAILER`, `PAYLOAD_WORDS`.
Every offset and the total packet length are associated `const`s,
computed once at compile time and asserted against `total_words <=
65535` at schema-definition time (spec §3.2 invariant 6 applies to
context packets' variable bits; this schema has none, so the only
compile-time check is the size budget).
*/

use crate::class_id::CLASS_ID_BYTES;
use crate::endian::{read_u32, write_u32};
use crate::header::{decode_header, Tsf, Tsi};
use crate::prologue::{init_header, HEADER_BYTES, STREAM_ID_BYTES, TSF_BYTES, TSI_BYTES};
use crate::trailer::{Trailer, TRAILER_BYTES};
use crate::validation::ValidationError;
use crate::{ClassIdentifier, PacketType, Timestamp};

/// A compile-time-schema'd view over a Signal/Extension Data packet
/// buffer. `PACKET_TYPE` must be 0..=3; asserted at schema-definition
/// time via [`Self::ASSERT_SCHEMA`].
pub struct DataPacketView<
    'a,
    const PACKET_TYPE: u8,
    const HAS_CLASS_ID: bool,
    const TSI: u8,
    const TSF: u8,
    const HAS_TRAILER: bool,
    const PAYLOAD_WORDS: usize,
> {
    buf: &'a mut [u8],
}

impl<
        'a,
        const PACKET_TYPE: u8,
        const HAS_CLASS_ID: bool,
        const TSI: u8,
        const TSF: u8,
        const HAS_TRAILER: bool,
        const PAYLOAD_WORDS: usize,
    > DataPacketView<'a, PACKET_TYPE, HAS_CLASS_ID, TSI, TSF, HAS_TRAILER, PAYLOAD_WORDS>
{
    /// `true` iff a stream ID word is present: odd data types (1, 3).
    pub const HAS_STREAM_ID: bool = PACKET_TYPE % 2 == 1;
    /// `true` iff either timestamp component is present.
    pub const HAS_TIMESTAMP: bool = TSI != 0 || TSF != 0;

    const STREAM_ID_OFFSET: usize = HEADER_BYTES;
    const CLASS_ID_OFFSET: usize =
        Self::STREAM_ID_OFFSET + if Self::HAS_STREAM_ID { STREAM_ID_BYTES } else { 0 };
    const TSI_OFFSET: usize =
        Self::CLASS_ID_OFFSET + if HAS_CLASS_ID { CLASS_ID_BYTES } else { 0 };
    const TSF_OFFSET: usize = Self::TSI_OFFSET + if TSI != 0 { TSI_BYTES } else { 0 };
    /// Byte offset of the payload region.
    pub const PAYLOAD_OFFSET: usize = Self::TSF_OFFSET + if TSF != 0 { TSF_BYTES } else { 0 };
    /// Byte offset of the trailer word (valid only if `HAS_TRAILER`).
    pub const TRAILER_OFFSET: usize = Self::PAYLOAD_OFFSET + PAYLOAD_WORDS * 4;
    /// Total packet size, in bytes.
    pub const TOTAL_BYTES: usize =
        Self::TRAILER_OFFSET + if HAS_TRAILER { TRAILER_BYTES } else { 0 };
    /// Total packet size, in 32-bit words.
    pub const TOTAL_WORDS: usize = Self::TOTAL_BYTES / 4;

    /// Forces the schema's compile-time assertions to be evaluated.
    /// Referencing this constant from a schema instantiation is enough
    /// to turn a violation into a compile error.
    pub const ASSERT_SCHEMA: () = {
        assert!(PACKET_TYPE <= 3, "data packet schema requires PACKET_TYPE in 0..=3");
        assert!(TSI <= 3, "TSI must be 0..=3");
        assert!(TSF <= 3, "TSF must be 0..=3");
        assert!(
            Self::TOTAL_WORDS <= u16::MAX as usize,
            "data packet schema exceeds 65535 words"
        );
    };

    /// Wraps `buf` as this schema. If `init`, writes the header and
    /// zeroes all optional regions and the payload; otherwise assumes
    /// `buf` already holds a conforming packet.
    ///
    /// # Panics
    /// Panics if `buf.len() < Self::TOTAL_BYTES`.
    pub fn new(buf: &'a mut [u8], init: bool) -> Self {
        #[allow(clippy::let_unit_value)]
        let _ = Self::ASSERT_SCHEMA;
        assert!(buf.len() >= Self::TOTAL_BYTES, "buffer too small for schema");
        let mut view = DataPacketView { buf };
        if init {
            view.buf[..Self::TOTAL_BYTES].fill(0);
            let header_word = init_header(
                PacketType::from_bits(PACKET_TYPE),
                HAS_CLASS_ID,
                HAS_TRAILER,
                false,
                false,
                Tsi::from_bits(TSI),
                Tsf::from_bits(TSF),
                0,
                Self::TOTAL_WORDS as u16,
            );
            write_u32(view.buf, 0, header_word);
        }
        view
    }

    /// Validates that `buf` (of length `buffer_size`) actually
    /// conforms to this schema's header expectations.
    pub fn validate(buf: &[u8], buffer_size: usize) -> Result<(), ValidationError> {
        if buffer_size < 4 {
            return Err(ValidationError::BufferTooSmall);
        }
        if buffer_size < Self::TOTAL_BYTES {
            return Err(ValidationError::BufferTooSmall);
        }
        let header = decode_header(read_u32(buf, 0));
        if header.packet_type.to_bits() != PACKET_TYPE {
            return Err(ValidationError::PacketTypeMismatch);
        }
        if header.has_class_id != HAS_CLASS_ID {
            return Err(ValidationError::ClassIdBitMismatch);
        }
        if header.tsi.to_bits() != TSI {
            return Err(ValidationError::TsiMismatch);
        }
        if header.tsf.to_bits() != TSF {
            return Err(ValidationError::TsfMismatch);
        }
        let trailer_included = matches!(
            header.indicators,
            crate::header::Indicators::Data {
                trailer_included: true,
                ..
            }
        );
        if trailer_included != HAS_TRAILER {
            return Err(ValidationError::TrailerBitMismatch);
        }
        if header.size_words as usize != Self::TOTAL_WORDS {
            return Err(ValidationError::SizeFieldMismatch);
        }
        Ok(())
    }

    /// The decoded header.
    pub fn header(&self) -> crate::header::DecodedHeader {
        decode_header(read_u32(self.buf, 0))
    }

    /// `size_words` from the header.
    pub fn packet_size(&self) -> u16 {
        self.header().size_words
    }

    /// Modulo-16 packet counter.
    pub fn packet_count(&self) -> u8 {
        self.header().packet_count
    }

    /// Sets the modulo-16 packet counter.
    pub fn set_packet_count(&mut self, count: u8) {
        let word = read_u32(self.buf, 0);
        let word = (word & !(0xF << 16)) | ((count as u32 & 0xF) << 16);
        write_u32(self.buf, 0, word);
    }

    /// The stream ID, if `HAS_STREAM_ID`.
    pub fn stream_id(&self) -> Option<u32> {
        Self::HAS_STREAM_ID.then(|| read_u32(self.buf, Self::STREAM_ID_OFFSET))
    }
    /// Sets the stream ID, if `HAS_STREAM_ID`. No-op otherwise.
    pub fn set_stream_id(&mut self, value: u32) {
        if Self::HAS_STREAM_ID {
            write_u32(self.buf, Self::STREAM_ID_OFFSET, value);
        }
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
        if !Self::HAS_TIMESTAMP {
            return None;
        }
        let seconds = if TSI != 0 {
            read_u32(self.buf, Self::TSI_OFFSET)
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
    /// Sets whichever of TSI/TSF are present from `value`. No-op for
    /// whichever is absent.
    pub fn set_timestamp(&mut self, value: &Timestamp) {
        if TSI != 0 {
            write_u32(self.buf, Self::TSI_OFFSET, value.seconds());
        }
        if TSF != 0 {
            crate::endian::write_u64(self.buf, Self::TSF_OFFSET, value.fractional());
        }
    }

    /// The payload region.
    pub fn payload(&self) -> &[u8] {
        &self.buf[Self::PAYLOAD_OFFSET..Self::PAYLOAD_OFFSET + PAYLOAD_WORDS * 4]
    }
    /// The payload region, mutable.
    pub fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.buf[Self::PAYLOAD_OFFSET..Self::PAYLOAD_OFFSET + PAYLOAD_WORDS * 4]
    }

    /// The trailer, if `HAS_TRAILER`.
    pub fn trailer(&self) -> Option<Trailer> {
        HAS_TRAILER.then(|| Trailer::decode(self.buf, Self::TRAILER_OFFSET))
    }
    /// Sets the trailer, if `HAS_TRAILER`. No-op otherwise.
    pub fn set_trailer(&mut self, value: &Trailer) {
        if HAS_TRAILER {
            value.encode(self.buf, Self::TRAILER_OFFSET);
        }
    }

    /// The full packet as on-wire bytes: exactly `TOTAL_WORDS * 4`
    /// bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..Self::TOTAL_BYTES]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type ScenarioA<'a> = DataPacketView<'a, 0, false, 0, 0, false, 1>;

    #[test]
    fn scenario_a_signal_data_no_stream_no_trailer() {
        let mut storage = [0u8; 8];
        {
            let mut view = ScenarioA::new(&mut storage, true);
            assert!(!ScenarioA::HAS_STREAM_ID);
            view.payload_mut().copy_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
        }
        assert_eq!(storage[4..8], [0xAA, 0xBB, 0xCC, 0xDD]);
        let header = decode_header(read_u32(&storage, 0));
        assert_eq!(header.size_words, 2);
        assert_eq!(ScenarioA::validate(&storage, storage.len()), Ok(()));
    }

    type ScenarioB<'a> = DataPacketView<'a, 1, false, 1, 2, true, 1>;

    #[test]
    fn scenario_b_stream_trailer_utc_realtime() {
        let mut storage = [0u8; 28];
        let mut view = ScenarioB::new(&mut storage, true);
        view.set_stream_id(0x1234_5678);
        view.set_timestamp(&Timestamp::new(1234, 500));
        view.payload_mut().copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        view.set_trailer(
            &crate::trailer::TrailerInit::new()
                .set_valid_data(true)
                .set_calibrated_time(true)
                .finish(),
        );
        assert_eq!(view.stream_id(), Some(0x1234_5678));
        assert_eq!(view.timestamp(), Some(Timestamp::new(1234, 500)));
        assert_eq!(view.payload(), [0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(view.trailer().unwrap().valid_data(), Some(true));
        assert_eq!(ScenarioB::TOTAL_WORDS, 7);
    }

    #[test]
    fn validate_rejects_wrong_packet_type() {
        let mut storage = [0u8; 8];
        ScenarioA::new(&mut storage, true);
        write_u32(&mut storage, 0, read_u32(&storage, 0) | (1 << 28));
        assert_eq!(
            ScenarioA::validate(&storage, storage.len()),
            Err(ValidationError::PacketTypeMismatch)
        );
    }

    #[test]
    fn validate_rejects_too_small_buffer() {
        let storage = [0u8; 2];
        assert_eq!(
            ScenarioA::validate(&storage, storage.len()),
            Err(ValidationError::BufferTooSmall)
        );
    }
}
