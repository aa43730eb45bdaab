// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Packet Variant & Parser Dispatcher (§4.11).

[`parse_packet`] is the single entry point for an unknown received
buffer: it decodes just enough of the header to pick a packet-type
category, then routes to [`crate::runtime_data::RuntimeDataPacketView`]
or [`crate::runtime_context::RuntimeContextPacketView`] for full
validation. Command/extension-command packets and reserved type bits
are recognized but not parsed further, since this crate doesn't model
command packet bodies; callers get an [`InvalidPacket`] naming why.
*/

use crate::endian::read_u32;
use crate::header::{decode_header, DecodedHeader, PacketType};
use crate::runtime_context::RuntimeContextPacketView;
use crate::runtime_data::RuntimeDataPacketView;
use crate::validation::ValidationError;

/// A buffer that was recognized as a packet header but could not be
/// turned into a [`PacketVariant::Data`] or [`PacketVariant::Context`]
/// view.
pub struct InvalidPacket<'a> {
    /// Why the packet was rejected.
    pub error: ValidationError,
    /// The packet type the header claimed, if the buffer held enough
    /// bytes to decode one.
    pub attempted_type: Option<PacketType>,
    /// The decoded header, if decoding got that far.
    pub header: Option<DecodedHeader>,
    /// The original bytes, for diagnostics.
    pub bytes: &'a [u8],
}

/// The result of attempting to parse an arbitrary received buffer.
pub enum PacketVariant<'a> {
    /// A signal/extension data packet.
    Data(RuntimeDataPacketView<'a>),
    /// A context/extension context packet.
    Context(RuntimeContextPacketView<'a>),
    /// Recognized as a header but not a parseable data/context packet.
    Invalid(InvalidPacket<'a>),
}

/// Parses `bytes` as a VRT packet, dispatching on the header's packet
/// type. Never panics: a buffer too short to hold even a header, or
/// one naming a command/reserved type, comes back as
/// [`PacketVariant::Invalid`] rather than an `Err`, since the caller
/// may still want to inspect whatever header bytes were available.
pub fn parse_packet(bytes: &[u8]) -> PacketVariant<'_> {
    if bytes.len() < 4 {
        return PacketVariant::Invalid(InvalidPacket {
            error: ValidationError::BufferTooSmall,
            attempted_type: None,
            header: None,
            bytes,
        });
    }
    let header = decode_header(read_u32(bytes, 0));
    match header.packet_type {
        PacketType::SignalDataNoId | PacketType::SignalData | PacketType::ExtDataNoId | PacketType::ExtData => {
            match RuntimeDataPacketView::new(bytes, bytes.len()) {
                Ok(view) => PacketVariant::Data(view),
                Err(error) => PacketVariant::Invalid(InvalidPacket {
                    error,
                    attempted_type: Some(header.packet_type),
                    header: Some(header),
                    bytes,
                }),
            }
        }
        PacketType::Context | PacketType::ExtContext => match RuntimeContextPacketView::new(bytes, bytes.len()) {
            Ok(view) => PacketVariant::Context(view),
            Err(error) => PacketVariant::Invalid(InvalidPacket {
                error,
                attempted_type: Some(header.packet_type),
                header: Some(header),
                bytes,
            }),
        },
        PacketType::Command | PacketType::ExtCommand => PacketVariant::Invalid(InvalidPacket {
            error: ValidationError::UnsupportedField,
            attempted_type: Some(header.packet_type),
            header: Some(header),
            bytes,
        }),
        PacketType::Reserved(_) => PacketVariant::Invalid(InvalidPacket {
            error: ValidationError::InvalidPacketType,
            attempted_type: Some(header.packet_type),
            header: Some(header),
            bytes,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_data_packet() {
        let buf = [0x00, 0x00, 0x00, 0x01];
        match parse_packet(&buf) {
            PacketVariant::Data(view) => assert_eq!(view.packet_size(), 1),
            _ => panic!("expected Data variant"),
        }
    }

    #[test]
    fn dispatches_context_packet() {
        let mut buf = vec![0x40, 0x00, 0x00, 0x03];
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // stream id
        buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]); // CIF0, no fields set
        match parse_packet(&buf) {
            PacketVariant::Context(view) => assert_eq!(view.packet_size(), 3),
            _ => panic!("expected Context variant"),
        }
    }

    #[test]
    fn rejects_command_packet() {
        let buf = [0x60, 0x00, 0x00, 0x01];
        match parse_packet(&buf) {
            PacketVariant::Invalid(invalid) => {
                assert_eq!(invalid.error, ValidationError::UnsupportedField);
                assert_eq!(invalid.attempted_type, Some(PacketType::Command));
            }
            _ => panic!("expected Invalid variant"),
        }
    }

    #[test]
    fn rejects_reserved_packet_type() {
        let buf = [0x80, 0x00, 0x00, 0x01];
        match parse_packet(&buf) {
            PacketVariant::Invalid(invalid) => {
                assert_eq!(invalid.error, ValidationError::InvalidPacketType);
            }
            _ => panic!("expected Invalid variant"),
        }
    }

    #[test]
    fn rejects_too_short_buffer() {
        let buf = [0x00, 0x00];
        match parse_packet(&buf) {
            PacketVariant::Invalid(invalid) => {
                assert_eq!(invalid.error, ValidationError::BufferTooSmall);
                assert!(invalid.attempted_type.is_none());
            }
            _ => panic!("expected Invalid variant"),
        }
    }
}
