// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the packet header format
(ANSI/VITA-49.2-2017 section 5.1.1).

The header is a single 32-bit word:

```text
 31..28  27   26   25   24   23..22   21..20   19..16   15..0
 Type    C    i26  i25  i24  TSI      TSF      Count    SizeWords
```

`build_header`/`decode_header` are pure bit packing/extraction with no
failure mode; they're the encode/decode pair the rest of the crate
builds on. Validating that a decoded packet type is actually usable is
a separate step (see [`crate::validation`]).
*/

/// The type of VRT packet. Bits 31..28 of the header word.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PacketType {
    /// Signal data packet without a stream ID.
    SignalDataNoId,
    /// Signal data packet *with* a stream ID.
    SignalData,
    /// Extension data packet without a stream ID.
    ExtDataNoId,
    /// Extension data packet *with* a stream ID.
    ExtData,
    /// Context packet.
    Context,
    /// Extension context packet.
    ExtContext,
    /// Command packet. Enumerated but not parsed; see [`crate::validation::ValidationError::UnsupportedField`].
    Command,
    /// Extension command packet. Enumerated but not parsed.
    ExtCommand,
    /// Reserved packet type bits (8..15). Always invalid.
    Reserved(u8),
}

impl PacketType {
    /// Decodes the 4-bit type field. Total: every value 0..=15 maps to
    /// a variant, `8..=15` to [`PacketType::Reserved`].
    pub fn from_bits(bits: u8) -> PacketType {
        match bits & 0xF {
            0x0 => PacketType::SignalDataNoId,
            0x1 => PacketType::SignalData,
            0x2 => PacketType::ExtDataNoId,
            0x3 => PacketType::ExtData,
            0x4 => PacketType::Context,
            0x5 => PacketType::ExtContext,
            0x6 => PacketType::Command,
            0x7 => PacketType::ExtCommand,
            other => PacketType::Reserved(other),
        }
    }

    /// Encodes back to the 4-bit field value.
    pub fn to_bits(self) -> u8 {
        match self {
            PacketType::SignalDataNoId => 0x0,
            PacketType::SignalData => 0x1,
            PacketType::ExtDataNoId => 0x2,
            PacketType::ExtData => 0x3,
            PacketType::Context => 0x4,
            PacketType::ExtContext => 0x5,
            PacketType::Command => 0x6,
            PacketType::ExtCommand => 0x7,
            PacketType::Reserved(bits) => bits & 0xF,
        }
    }

    /// True for signal/extension data packet types (0..=3).
    pub fn is_data(self) -> bool {
        matches!(
            self,
            PacketType::SignalDataNoId
                | PacketType::SignalData
                | PacketType::ExtDataNoId
                | PacketType::ExtData
        )
    }

    /// True for context/extension context packet types (4, 5).
    pub fn is_context(self) -> bool {
        matches!(self, PacketType::Context | PacketType::ExtContext)
    }

    /// True for command/extension command packet types (6, 7).
    pub fn is_command(self) -> bool {
        matches!(self, PacketType::Command | PacketType::ExtCommand)
    }

    /// Stream ID presence is a function of packet type alone (VITA
    /// 49.2 Table 5.1.1.1-1), never of a header bit: present for odd
    /// data types (1, 3) and for both context types (4, 5).
    pub fn has_stream_id(self) -> bool {
        matches!(
            self,
            PacketType::SignalData
                | PacketType::ExtData
                | PacketType::Context
                | PacketType::ExtContext
        )
    }
}

/// `true` if `type_bits` names one of the eight defined packet types
/// (0..=7); `8..=15` are reserved and invalid.
pub fn is_valid_packet_type(type_bits: u8) -> bool {
    type_bits <= 7
}

/// TimeStamp-Integer (TSI) field. Bits 23..22.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tsi {
    /// No integer timestamp.
    #[default]
    None,
    /// UTC time.
    Utc,
    /// GPS time.
    Gps,
    /// Other/unspecified integer time base.
    Other,
}

impl Tsi {
    /// Decodes a 2-bit field value. Total over 0..=3.
    pub fn from_bits(bits: u8) -> Tsi {
        match bits & 0b11 {
            0 => Tsi::None,
            1 => Tsi::Utc,
            2 => Tsi::Gps,
            _ => Tsi::Other,
        }
    }
    /// Encodes back to the 2-bit field value.
    pub fn to_bits(self) -> u8 {
        match self {
            Tsi::None => 0,
            Tsi::Utc => 1,
            Tsi::Gps => 2,
            Tsi::Other => 3,
        }
    }
}

/// TimeStamp-Fractional (TSF) field. Bits 21..20.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tsf {
    /// No fractional timestamp.
    #[default]
    None,
    /// Fractional field is a sample counter.
    SampleCount,
    /// Fractional field is real time, in picoseconds.
    RealTime,
    /// Fractional field is a free-running counter.
    FreeRunning,
}

impl Tsf {
    /// Decodes a 2-bit field value. Total over 0..=3.
    pub fn from_bits(bits: u8) -> Tsf {
        match bits & 0b11 {
            0 => Tsf::None,
            1 => Tsf::SampleCount,
            2 => Tsf::RealTime,
            _ => Tsf::FreeRunning,
        }
    }
    /// Encodes back to the 2-bit field value.
    pub fn to_bits(self) -> u8 {
        match self {
            Tsf::None => 0,
            Tsf::SampleCount => 1,
            Tsf::RealTime => 2,
            Tsf::FreeRunning => 3,
        }
    }
}

/// The three packet-type-dependent indicator bits (26, 25, 24),
/// interpreted according to the packet's type. See
/// ANSI/VITA-49.2-2017 section 5.1.1.1.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Indicators {
    /// Signal/extension data packet indicators.
    Data {
        /// Bit 26: a trailer word follows the payload.
        trailer_included: bool,
        /// Bit 25: packet is not a plain VITA 49.0 packet.
        not_v49_0: bool,
        /// Bit 24: payload is spectral (not time-domain) data.
        signal_spectrum: bool,
    },
    /// Context/extension context packet indicators.
    Context {
        /// Bit 25: packet is not a plain VITA 49.0 packet.
        not_v49_0: bool,
        /// Bit 24: timestamp refers to precise vs. general timing.
        timestamp_mode: bool,
    },
    /// Command/extension command packet indicators.
    Command {
        /// Bit 26: packet is an acknowledgement.
        acknowledge: bool,
        /// Bit 24: packet is a cancellation.
        cancel: bool,
    },
    /// Packet type is reserved (8..=15); indicator bits carry no
    /// defined meaning.
    Unknown,
}

/// The fully decoded contents of one header word. Produced by
/// [`decode_header`], which is infallible bit extraction — the
/// `packet_type` field may still be [`PacketType::Reserved`], which
/// callers must reject during validation rather than here.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecodedHeader {
    /// The packet type.
    pub packet_type: PacketType,
    /// Class-ID presence bit (27).
    pub has_class_id: bool,
    /// The three type-dependent indicator bits (26, 25, 24).
    pub indicators: Indicators,
    /// Integer timestamp format.
    pub tsi: Tsi,
    /// Fractional timestamp format.
    pub tsf: Tsf,
    /// Modulo-16 packet counter.
    pub packet_count: u8,
    /// Total packet length in 32-bit words.
    pub size_words: u16,
}

/// Packs header fields into the on-wire 32-bit header word.
///
/// `bit26`/`bit25`/`bit24` carry whatever the packet type says they
/// mean (trailer/v49/spectrum for data, reserved/v49/tsm for context,
/// ack/reserved/cancel for command) — this function doesn't interpret
/// them, it only places them.
#[allow(clippy::too_many_arguments)]
pub fn build_header(
    packet_type: u8,
    has_class_id: bool,
    bit26: bool,
    bit25: bool,
    bit24: bool,
    tsi: u8,
    tsf: u8,
    packet_count: u8,
    size_words: u16,
) -> u32 {
    let mut word = (packet_type as u32 & 0xF) << 28;
    word |= (has_class_id as u32) << 27;
    word |= (bit26 as u32) << 26;
    word |= (bit25 as u32) << 25;
    word |= (bit24 as u32) << 24;
    word |= (tsi as u32 & 0b11) << 22;
    word |= (tsf as u32 & 0b11) << 20;
    word |= (packet_count as u32 & 0xF) << 16;
    word |= size_words as u32;
    word
}

/// Extracts all universal header fields, plus a type-aware
/// interpretation of the three indicator bits. Total: never fails.
pub fn decode_header(word: u32) -> DecodedHeader {
    let type_bits = ((word >> 28) & 0xF) as u8;
    let packet_type = PacketType::from_bits(type_bits);
    let has_class_id = (word >> 27) & 1 != 0;
    let bit26 = (word >> 26) & 1 != 0;
    let bit25 = (word >> 25) & 1 != 0;
    let bit24 = (word >> 24) & 1 != 0;
    let indicators = if packet_type.is_data() {
        Indicators::Data {
            trailer_included: bit26,
            not_v49_0: bit25,
            signal_spectrum: bit24,
        }
    } else if packet_type.is_context() {
        Indicators::Context {
            not_v49_0: bit25,
            timestamp_mode: bit24,
        }
    } else if packet_type.is_command() {
        Indicators::Command {
            acknowledge: bit26,
            cancel: bit24,
        }
    } else {
        Indicators::Unknown
    };
    let tsi = Tsi::from_bits(((word >> 22) & 0b11) as u8);
    let tsf = Tsf::from_bits(((word >> 20) & 0b11) as u8);
    let packet_count = ((word >> 16) & 0xF) as u8;
    let size_words = (word & 0xFFFF) as u16;
    DecodedHeader {
        packet_type,
        has_class_id,
        indicators,
        tsi,
        tsf,
        packet_count,
        size_words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_data_header() {
        let word = build_header(1, true, true, false, true, 1, 2, 3, 7);
        let decoded = decode_header(word);
        assert_eq!(decoded.packet_type, PacketType::SignalData);
        assert!(decoded.has_class_id);
        assert_eq!(
            decoded.indicators,
            Indicators::Data {
                trailer_included: true,
                not_v49_0: false,
                signal_spectrum: true,
            }
        );
        assert_eq!(decoded.tsi, Tsi::Utc);
        assert_eq!(decoded.tsf, Tsf::RealTime);
        assert_eq!(decoded.packet_count, 3);
        assert_eq!(decoded.size_words, 7);
    }

    #[test]
    fn decode_is_total_over_reserved_types() {
        let word = build_header(0xC, false, false, false, false, 0, 0, 0, 1);
        let decoded = decode_header(word);
        assert_eq!(decoded.packet_type, PacketType::Reserved(0xC));
        assert_eq!(decoded.indicators, Indicators::Unknown);
        assert!(!is_valid_packet_type(0xC));
        assert!(is_valid_packet_type(0x7));
    }

    #[test]
    fn scenario_a_signal_data_no_id() {
        // 00 00 00 02
        let word = 0x0000_0002u32;
        let decoded = decode_header(word);
        assert_eq!(decoded.packet_type, PacketType::SignalDataNoId);
        assert!(!decoded.packet_type.has_stream_id());
        assert_eq!(decoded.size_words, 2);
    }

    #[test]
    fn scenario_b_header_word() {
        // type=1, no class id, trailer=1, TSI=1(Utc), TSF=2(RealTime), count=0, size=7
        let word = build_header(1, false, true, false, false, 1, 2, 0, 7);
        let decoded = decode_header(word);
        assert_eq!(decoded.packet_type, PacketType::SignalData);
        assert!(!decoded.has_class_id);
        assert_eq!(
            decoded.indicators,
            Indicators::Data {
                trailer_included: true,
                not_v49_0: false,
                signal_spectrum: false,
            }
        );
        assert_eq!(decoded.tsi, Tsi::Utc);
        assert_eq!(decoded.tsf, Tsf::RealTime);
        assert_eq!(decoded.size_words, 7);
    }
}
