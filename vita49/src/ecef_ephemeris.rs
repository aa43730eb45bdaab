// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the ECEF ephemeris format
(ANSI/VITA-49.2-2017 section 9.4.3).
*/

use crate::endian::{read_u32, write_u32};

/// Size of an encoded ECEF ephemeris field, in bytes.
pub const ECEF_EPHEMERIS_BYTES: usize = 52;

/// Base ECEF ephemeris data structure: 13 consecutive 32-bit words.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcefEphemeris {
    w1: u32,
    ts1: u32,
    ts2: u32,
    ts3: u32,
    position_x: i32,
    position_y: i32,
    position_z: i32,
    attitude_alpha: i32,
    attitude_beta: i32,
    attitude_phi: i32,
    velocity_dx: i32,
    velocity_dy: i32,
    velocity_dz: i32,
}

impl EcefEphemeris {
    /// Decodes an ECEF ephemeris field from the 13 words starting at
    /// `buf[offset..offset + 52]`.
    ///
    /// # Panics
    /// Panics if the slice is too short; callers bounds-check first.
    pub fn decode(buf: &[u8], offset: usize) -> EcefEphemeris {
        EcefEphemeris {
            w1: read_u32(buf, offset),
            ts1: read_u32(buf, offset + 4),
            ts2: read_u32(buf, offset + 8),
            ts3: read_u32(buf, offset + 12),
            position_x: read_u32(buf, offset + 16) as i32,
            position_y: read_u32(buf, offset + 20) as i32,
            position_z: read_u32(buf, offset + 24) as i32,
            attitude_alpha: read_u32(buf, offset + 28) as i32,
            attitude_beta: read_u32(buf, offset + 32) as i32,
            attitude_phi: read_u32(buf, offset + 36) as i32,
            velocity_dx: read_u32(buf, offset + 40) as i32,
            velocity_dy: read_u32(buf, offset + 44) as i32,
            velocity_dz: read_u32(buf, offset + 48) as i32,
        }
    }

    /// Encodes this ECEF ephemeris field into the 13 words starting at
    /// `buf[offset..offset + 52]`.
    ///
    /// # Panics
    /// Panics if the slice is too short.
    pub fn encode(&self, buf: &mut [u8], offset: usize) {
        write_u32(buf, offset, self.w1);
        write_u32(buf, offset + 4, self.ts1);
        write_u32(buf, offset + 8, self.ts2);
        write_u32(buf, offset + 12, self.ts3);
        write_u32(buf, offset + 16, self.position_x as u32);
        write_u32(buf, offset + 20, self.position_y as u32);
        write_u32(buf, offset + 24, self.position_z as u32);
        write_u32(buf, offset + 28, self.attitude_alpha as u32);
        write_u32(buf, offset + 32, self.attitude_beta as u32);
        write_u32(buf, offset + 36, self.attitude_phi as u32);
        write_u32(buf, offset + 40, self.velocity_dx as u32);
        write_u32(buf, offset + 44, self.velocity_dy as u32);
        write_u32(buf, offset + 48, self.velocity_dz as u32);
    }

    /// Gets the size of the ECEF ephemeris field in 32-bit words.
    pub fn size_words(&self) -> u16 {
        13
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_buffer() {
        let e = EcefEphemeris {
            position_x: -1000,
            position_y: 2000,
            position_z: -3000,
            ..Default::default()
        };
        let mut buf = [0u8; ECEF_EPHEMERIS_BYTES];
        e.encode(&mut buf, 0);
        let decoded = EcefEphemeris::decode(&buf, 0);
        assert_eq!(decoded, e);
        assert_eq!(decoded.size_words(), 13);
    }
}
