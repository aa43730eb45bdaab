// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]
#![doc = include_str!("../README.md")]

#[cxx::bridge]
mod ffi {
    pub struct MySignalData {
        stream_id: u32,
        signal_data: Vec<u8>,
    }

    extern "Rust" {
        fn parse_vita49(packet_data: &[u8]) -> MySignalData;
    }
}

use vita49::prelude::*;

use ffi::MySignalData;

pub fn parse_vita49(packet_data: &[u8]) -> MySignalData {
    match parse_packet(packet_data) {
        PacketVariant::Data(view) => {
            println!(
                "[RUST] Parsed signal data packet with a {} byte payload",
                view.payload().len()
            );
            MySignalData {
                stream_id: view.stream_id().unwrap_or(0),
                signal_data: view.payload().to_vec(),
            }
        }
        // Other packet types are not covered in this example.
        PacketVariant::Context(_) => unimplemented!("context packets"),
        PacketVariant::Invalid(invalid) => panic!("failed to parse: {:?}", invalid.error),
    }
}
