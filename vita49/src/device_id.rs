// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the device identifier field
(ANSI/VITA-49.2-2017 section 9.10.1).
*/

use crate::endian::{read_u64, write_u64};
use core::fmt;

/// Size of an encoded device identifier, in bytes.
pub const DEVICE_ID_BYTES: usize = 8;

/// Base device ID data structure.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceId(u64);

impl DeviceId {
    /// Decodes a device ID from the two words starting at
    /// `buf[offset..offset + 8]`.
    ///
    /// # Panics
    /// Panics if the slice is too short; callers bounds-check first.
    pub fn decode(buf: &[u8], offset: usize) -> DeviceId {
        DeviceId(read_u64(buf, offset))
    }

    /// Encodes this device ID into the two words starting at
    /// `buf[offset..offset + 8]`.
    ///
    /// # Panics
    /// Panics if the slice is too short.
    pub fn encode(&self, buf: &mut [u8], offset: usize) {
        write_u64(buf, offset, self.0);
    }

    /// Gets the size of the device ID structure in 32-bit words.
    pub fn size_words(&self) -> u16 {
        2
    }

    /// Gets the manufacturer Organizational Unique Identifier (OUI).
    pub fn manufacturer_oui(&self) -> u32 {
        ((self.0 >> 32) & 0xFF_FFFF) as u32
    }

    /// Sets the manufacturer Organizational Unique Identifier (OUI).
    ///
    /// Note: while this API takes a 32-bit integer, only the least
    /// significant 24 bits are used.
    pub fn set_manufacturer_oui(&mut self, oui: u32) {
        let val = (oui as u64 & 0xFF_FFFF) << 32;
        self.0 = self.0 & !(0xFF_FFFF << 32) | val;
    }

    /// Gets the device code.
    pub fn device_code(&self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// Sets the device code.
    pub fn set_device_code(&mut self, code: u16) {
        self.0 = self.0 & !(0xFFFF) | code as u64;
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Device ID:")?;
        writeln!(f, "  Manufacturer OUI: {:#x}", self.manufacturer_oui())?;
        writeln!(f, "  Device code: {}", self.device_code())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_buffer() {
        let mut id = DeviceId::default();
        id.set_manufacturer_oui(0x00_AB_CD);
        id.set_device_code(0x1234);
        let mut buf = [0u8; 8];
        id.encode(&mut buf, 0);
        let decoded = DeviceId::decode(&buf, 0);
        assert_eq!(decoded, id);
        assert_eq!(decoded.manufacturer_oui(), 0x00AB_CD);
        assert_eq!(decoded.device_code(), 0x1234);
        assert_eq!(decoded.size_words(), 2);
    }
}
