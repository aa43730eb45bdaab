// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use vita49::{RuntimeContextPacketView, RuntimeDataPacketView};

// A signal data packet: header (trailer bit set, no class ID, no
// timestamp), stream ID, 16-byte payload, trailer.
const DATA_PACKET: [u8; 28] = [
    0x14, 0x00, 0x00, 0x07, // header: SignalData, trailer included, size_words=7
    0xAA, 0xBB, 0xCC, 0xDD, // stream id
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, // payload
    0x00, 0x00, 0x00, 0x00, // trailer
];

// A context packet: header, stream ID, CIF0 with bandwidth (bit 29)
// and gain (bit 23) set.
const CONTEXT_PACKET: [u8; 24] = [
    0x40, 0x00, 0x00, 0x06, // header: Context, size_words=6
    0xAA, 0xBB, 0xCC, 0xDD, // stream id
    0x20, 0x80, 0x00, 0x00, // CIF0: bit 29 (bandwidth) | bit 23 (gain)
    0x00, 0x00, 0x00, 0x13, 0x12, 0xD0, 0x00, 0x00, // bandwidth = 20_000_000.0 Hz
    0x00, 0x00, 0x00, 0x00, // gain
];

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse runtime data packet", |p| {
        p.iter(|| RuntimeDataPacketView::new(black_box(&DATA_PACKET), DATA_PACKET.len()).unwrap())
    });
    c.bench_function("parse runtime context packet", |p| {
        p.iter(|| RuntimeContextPacketView::new(black_box(&CONTEXT_PACKET), CONTEXT_PACKET.len()).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
