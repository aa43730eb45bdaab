// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Big-endian load/store helpers over unaligned byte buffers.

Every multi-byte VRT field is big-endian on the wire and word-aligned
by construction, but nothing requires the *buffer itself* to start at
a CPU-aligned address, so reads and writes go through
[`u32::from_be_bytes`]/[`u32::to_be_bytes`] rather than pointer casts.
*/

/// Reads a big-endian `u32` at `offset` bytes into `buf`.
///
/// # Panics
/// Panics if `offset + 4 > buf.len()`. Callers in this crate always
/// bounds-check before calling; this function itself performs no I/O
/// and never fails softly.
pub fn read_u32(buf: &[u8], offset: usize) -> u32 {
    let bytes: [u8; 4] = buf[offset..offset + 4].try_into().unwrap();
    u32::from_be_bytes(bytes)
}

/// Reads a big-endian `u64` at `offset` bytes into `buf`.
///
/// # Panics
/// Panics if `offset + 8 > buf.len()`.
pub fn read_u64(buf: &[u8], offset: usize) -> u64 {
    let bytes: [u8; 8] = buf[offset..offset + 8].try_into().unwrap();
    u64::from_be_bytes(bytes)
}

/// Writes a big-endian `u32` at `offset` bytes into `buf`.
///
/// # Panics
/// Panics if `offset + 4 > buf.len()`.
pub fn write_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

/// Writes a big-endian `u64` at `offset` bytes into `buf`.
///
/// # Panics
/// Panics if `offset + 8 > buf.len()`.
pub fn write_u64(buf: &mut [u8], offset: usize, value: u64) {
    buf[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}

/// Checked variant of [`read_u32`] used by the runtime validation
/// pipeline, which must never panic on attacker-controlled buffers.
pub fn try_read_u32(buf: &[u8], offset: usize) -> Option<u32> {
    buf.get(offset..offset + 4)
        .map(|b| u32::from_be_bytes(b.try_into().unwrap()))
}

/// Checked variant of [`read_u64`].
pub fn try_read_u64(buf: &[u8], offset: usize) -> Option<u64> {
    buf.get(offset..offset + 8)
        .map(|b| u64::from_be_bytes(b.try_into().unwrap()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_u32() {
        let mut buf = [0u8; 8];
        write_u32(&mut buf, 2, 0xDEAD_BEEF);
        assert_eq!(read_u32(&buf, 2), 0xDEAD_BEEF);
        assert_eq!(buf[2..6], [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn round_trips_u64() {
        let mut buf = [0u8; 12];
        write_u64(&mut buf, 1, 0x0102_0304_0506_0708);
        assert_eq!(read_u64(&buf, 1), 0x0102_0304_0506_0708);
    }

    #[test]
    fn try_read_rejects_out_of_bounds() {
        let buf = [0u8; 3];
        assert_eq!(try_read_u32(&buf, 0), None);
        assert_eq!(try_read_u64(&buf, 0), None);
    }
}
