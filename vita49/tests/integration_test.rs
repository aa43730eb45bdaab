// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use vita49::{parse_packet, PacketVariant, ValidationError};

#[test]
fn scenario_a_signal_data_no_stream_no_ts_no_trailer() {
    let buf = [0x00, 0x00, 0x00, 0x02, 0xAA, 0xBB, 0xCC, 0xDD];
    match parse_packet(&buf) {
        PacketVariant::Data(view) => {
            assert_eq!(view.packet_size(), 2);
            assert_eq!(view.stream_id(), None);
            assert_eq!(view.payload(), &[0xAA, 0xBB, 0xCC, 0xDD]);
            assert!(view.trailer().is_none());
        }
        _ => panic!("expected a Data variant"),
    }
}

#[test]
fn scenario_b_signal_data_with_stream_trailer_and_timestamp() {
    let mut buf = vec![0x1C, 0x60, 0x00, 0x07];
    buf.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]); // stream id
    buf.extend_from_slice(&[0x00, 0x00, 0x04, 0xD2]); // TSI: 1234 s
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0xF4]); // TSF: 500 ps
    buf.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]); // payload
    buf.extend_from_slice(&[0xC0, 0x03, 0x00, 0x00]); // trailer

    match parse_packet(&buf) {
        PacketVariant::Data(view) => {
            assert_eq!(view.stream_id(), Some(0x12345678));
            let ts = view.timestamp().unwrap();
            assert_eq!(ts.seconds(), 1234);
            assert_eq!(ts.fractional(), 500);
            assert_eq!(view.payload(), &[0xDE, 0xAD, 0xBE, 0xEF]);
            let trailer = view.trailer().unwrap();
            assert_eq!(trailer.valid_data(), Some(true));
            assert_eq!(trailer.calibrated_time(), Some(true));
        }
        _ => panic!("expected a Data variant"),
    }
}

#[test]
fn scenario_c_context_packet_with_bandwidth() {
    let mut buf = vec![0x40, 0x00, 0x00, 0x05];
    buf.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]); // stream id
    buf.extend_from_slice(&[0x20, 0x00, 0x00, 0x00]); // CIF0 bit 29
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x13, 0x12, 0xD0, 0x00, 0x00]); // bandwidth

    match parse_packet(&buf) {
        PacketVariant::Context(view) => {
            assert_eq!(view.stream_id(), Some(0xAABBCCDD));
            assert_eq!(view.field::<vita49::field::Bandwidth>().value(), 20_000_000.0);
        }
        _ => panic!("expected a Context variant"),
    }
}

#[test]
fn scenario_d_context_packet_with_cif1_aux_frequency() {
    let mut buf = vec![0x40, 0x00, 0x00, 0x06];
    buf.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]); // stream id
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x02]); // CIF0: CIF1-enable
    buf.extend_from_slice(&[0x00, 0x00, 0x80, 0x00]); // CIF1: bit 15
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x00, 0x00, 0x98, 0x96, 0x80]); // aux_frequency

    match parse_packet(&buf) {
        PacketVariant::Context(view) => {
            assert_eq!(view.cif0(), 0x2);
            assert_eq!(view.cif1(), Some(0x8000));
            assert_eq!(view.field::<vita49::field::AuxFrequency>().encoded(), 10_000_000);
        }
        _ => panic!("expected a Context variant"),
    }
}

#[test]
fn scenario_e_context_packet_with_gps_ascii() {
    let mut buf = vec![0x40, 0x00, 0x00, 0x07];
    buf.extend_from_slice(&[0x12, 0x34, 0x56, 0x78]); // stream id
    buf.extend_from_slice(&[0x00, 0x00, 0x04, 0x00]); // CIF0 bit 10
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x0C]); // char count
    buf.extend_from_slice(b"Hello World!");

    match parse_packet(&buf) {
        PacketVariant::Context(view) => {
            let gps = view.gps_ascii().unwrap();
            assert_eq!(gps.char_count(), 12);
            assert_eq!(gps.ascii(), b"Hello World!");
            assert_eq!(
                gps.bytes(),
                &[0x00, 0x00, 0x00, 0x0C, b'H', b'e', b'l', b'l', b'o', b' ', b'W', b'o', b'r', b'l', b'd', b'!']
            );
        }
        _ => panic!("expected a Context variant"),
    }
}

#[test]
fn scenario_f_context_packet_with_unsupported_cif3_bit() {
    let mut buf = vec![0x40, 0x00, 0x00, 0x04];
    buf.extend_from_slice(&[0x11, 0x22, 0x33, 0x44]); // stream id
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x08]); // CIF0: CIF3-enable
    buf.extend_from_slice(&[0x10, 0x00, 0x00, 0x00]); // CIF3: reserved bit 28

    match parse_packet(&buf) {
        PacketVariant::Invalid(invalid) => {
            assert_eq!(invalid.error, ValidationError::UnsupportedField);
        }
        _ => panic!("expected an Invalid variant"),
    }
}

#[test]
fn boundary_short_buffers_are_buffer_too_small() {
    for len in [0, 1, 3] {
        let buf = vec![0u8; len];
        match parse_packet(&buf) {
            PacketVariant::Invalid(invalid) => {
                assert_eq!(invalid.error, ValidationError::BufferTooSmall);
            }
            _ => panic!("expected an Invalid variant for a {len}-byte buffer"),
        }
    }
}

#[test]
fn round_trip_preserves_header_and_fields() {
    let mut buf = vec![0x40, 0x00, 0x00, 0x05];
    buf.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0xDD]);
    buf.extend_from_slice(&[0x20, 0x00, 0x00, 0x00]);
    buf.extend_from_slice(&[0x00, 0x00, 0x00, 0x13, 0x12, 0xD0, 0x00, 0x00]);

    let first = match parse_packet(&buf) {
        PacketVariant::Context(view) => view.as_bytes().to_vec(),
        _ => panic!("expected a Context variant"),
    };
    match parse_packet(&first) {
        PacketVariant::Context(view) => {
            assert_eq!(view.stream_id(), Some(0xAABBCCDD));
            assert_eq!(view.cif0(), 1 << 29);
        }
        _ => panic!("expected a Context variant on re-parse"),
    }
}
