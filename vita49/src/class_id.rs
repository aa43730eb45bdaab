// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Structures and methods related to the class identifier
field (ANSI/VITA-49.2-2017 section 5.1.3).

Encoded in two consecutive 32-bit words when the header's class-ID bit
is set: word 0 packs a 24-bit OUI and an 8-bit ICC, word 1 is the full
32-bit PCC.
*/

use crate::endian::{read_u32, write_u32};

/// Size of an encoded class identifier, in bytes.
pub const CLASS_ID_BYTES: usize = 8;

/// Base class identifier data structure.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassIdentifier {
    oui: u32,
    icc: u8,
    pcc: u32,
}

impl ClassIdentifier {
    /// Builds a class identifier from its three logical fields.
    ///
    /// Only the low 24 bits of `oui` are used.
    pub fn new(oui: u32, icc: u8, pcc: u32) -> ClassIdentifier {
        ClassIdentifier {
            oui: oui & 0xFF_FFFF,
            icc,
            pcc,
        }
    }

    /// Decodes a class identifier from the two words starting at
    /// `buf[offset..offset + 8]`.
    ///
    /// # Panics
    /// Panics if the slice is too short; callers bounds-check first.
    pub fn decode(buf: &[u8], offset: usize) -> ClassIdentifier {
        let word0 = read_u32(buf, offset);
        let word1 = read_u32(buf, offset + 4);
        ClassIdentifier {
            oui: word0 >> 8,
            icc: (word0 & 0xFF) as u8,
            pcc: word1,
        }
    }

    /// Encodes this class identifier into the two words starting at
    /// `buf[offset..offset + 8]`.
    ///
    /// # Panics
    /// Panics if the slice is too short.
    pub fn encode(&self, buf: &mut [u8], offset: usize) {
        write_u32(buf, offset, (self.oui << 8) | (self.icc as u32));
        write_u32(buf, offset + 4, self.pcc);
    }

    /// Gets the 24-bit Organizationally Unique Identifier (OUI).
    pub fn oui(&self) -> u32 {
        self.oui
    }
    /// Sets the OUI. Only the low 24 bits of `oui` are used.
    pub fn set_oui(&mut self, oui: u32) {
        self.oui = oui & 0xFF_FFFF;
    }

    /// Gets the 8-bit Information Class Code (ICC).
    pub fn icc(&self) -> u8 {
        self.icc
    }
    /// Sets the ICC.
    pub fn set_icc(&mut self, icc: u8) {
        self.icc = icc;
    }

    /// Gets the 32-bit Packet Class Code (PCC).
    pub fn pcc(&self) -> u32 {
        self.pcc
    }
    /// Sets the PCC.
    pub fn set_pcc(&mut self, pcc: u32) {
        self.pcc = pcc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_buffer() {
        let id = ClassIdentifier::new(0x00_12_34, 0xAB, 0xDEAD_BEEF);
        let mut buf = [0u8; 8];
        id.encode(&mut buf, 0);
        let decoded = ClassIdentifier::decode(&buf, 0);
        assert_eq!(decoded, id);
        assert_eq!(decoded.oui(), 0x001234);
        assert_eq!(decoded.icc(), 0xAB);
        assert_eq!(decoded.pcc(), 0xDEAD_BEEF);
    }

    #[test]
    fn oui_masks_to_24_bits() {
        let id = ClassIdentifier::new(0xFF_FF_FF_FF, 0, 0);
        assert_eq!(id.oui(), 0x00FF_FFFF);
    }
}
