// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Runtime Data Packet View: validates an arbitrary received
Signal/Extension Data packet buffer on construction, then exposes
typed accessors returning `None` for absent optional fields.

Unlike [`crate::data_packet::DataPacketView`], the packet's shape
(class ID, TSI/TSF, trailer) is read from the header rather than fixed
at compile time, so there is nothing to mismatch against — the only
way construction fails is if the buffer itself is too small or the
type bits fall outside 0..=3.
*/

use crate::class_id::ClassIdentifier;
use crate::endian::read_u32;
use crate::header::{decode_header, DecodedHeader, PacketType};
use crate::prologue::PrologueLayout;
use crate::timestamp::Timestamp;
use crate::trailer::{Trailer, TRAILER_BYTES};
use crate::validation::ValidationError;

/// A validated, non-owning view over a received data-packet buffer.
pub struct RuntimeDataPacketView<'a> {
    buf: &'a [u8],
    header: DecodedHeader,
    layout: PrologueLayout,
    has_trailer: bool,
    payload_offset: usize,
    payload_len: usize,
}

impl<'a> RuntimeDataPacketView<'a> {
    /// Validates `buf[..buffer_size]` as a data packet and, on
    /// success, builds a view over it.
    pub fn new(buf: &'a [u8], buffer_size: usize) -> Result<RuntimeDataPacketView<'a>, ValidationError> {
        if buffer_size < 4 {
            return Err(ValidationError::BufferTooSmall);
        }
        let header = decode_header(read_u32(buf, 0));
        let packet_type = header.packet_type;
        if !matches!(
            packet_type,
            PacketType::SignalDataNoId | PacketType::SignalData | PacketType::ExtDataNoId | PacketType::ExtData
        ) {
            return Err(ValidationError::PacketTypeMismatch);
        }
        let size_bytes = header.size_words as usize * 4;
        if size_bytes > buffer_size || size_bytes > buf.len() {
            return Err(ValidationError::BufferTooSmall);
        }
        let has_class_id = header.has_class_id;
        let layout = PrologueLayout::new(packet_type, has_class_id, header.tsi, header.tsf);
        if layout.end_offset() > size_bytes {
            return Err(ValidationError::BufferTooSmall);
        }
        let has_trailer = match header.indicators {
            crate::header::Indicators::Data { trailer_included, .. } => trailer_included,
            _ => false,
        };
        let trailer_bytes = if has_trailer { TRAILER_BYTES } else { 0 };
        let payload_offset = layout.end_offset();
        if payload_offset + trailer_bytes > size_bytes {
            return Err(ValidationError::BufferTooSmall);
        }
        let payload_len = size_bytes - payload_offset - trailer_bytes;
        Ok(RuntimeDataPacketView {
            buf,
            header,
            layout,
            has_trailer,
            payload_offset,
            payload_len,
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

    /// The stream ID, if this packet type carries one.
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

    /// The payload span.
    pub fn payload(&self) -> &'a [u8] {
        &self.buf[self.payload_offset..self.payload_offset + self.payload_len]
    }

    /// The trailer, if this packet declares one present.
    pub fn trailer(&self) -> Option<Trailer> {
        self.has_trailer.then(|| {
            let offset = self.payload_offset + self.payload_len;
            Trailer::decode(self.buf, offset)
        })
    }

    /// The full packet as on-wire bytes: exactly `size_words * 4`
    /// bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.buf[..self.header.size_words as usize * 4]
    }
}
