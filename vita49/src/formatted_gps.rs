// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the formatted GPS format
(ANSI/VITA-49.2-2017 section 9.4.5).
*/

use crate::endian::{read_u32, write_u32};

/// Size of an encoded formatted GPS field, in bytes.
pub const FORMATTED_GPS_BYTES: usize = 44;

/// Base formatted GPS data structure: 11 consecutive 32-bit words.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormattedGps {
    w1: u32,
    ts1: u32,
    ts2: u32,
    ts3: u32,
    latitude: i32,
    longitude: i32,
    altitude: i32,
    speed_over_ground: i32,
    heading_angle: i32,
    track_angle: i32,
    magnetic_variation: i32,
}

impl FormattedGps {
    /// Decodes a formatted GPS field from the 11 words starting at
    /// `buf[offset..offset + 44]`.
    ///
    /// # Panics
    /// Panics if the slice is too short; callers bounds-check first.
    pub fn decode(buf: &[u8], offset: usize) -> FormattedGps {
        FormattedGps {
            w1: read_u32(buf, offset),
            ts1: read_u32(buf, offset + 4),
            ts2: read_u32(buf, offset + 8),
            ts3: read_u32(buf, offset + 12),
            latitude: read_u32(buf, offset + 16) as i32,
            longitude: read_u32(buf, offset + 20) as i32,
            altitude: read_u32(buf, offset + 24) as i32,
            speed_over_ground: read_u32(buf, offset + 28) as i32,
            heading_angle: read_u32(buf, offset + 32) as i32,
            track_angle: read_u32(buf, offset + 36) as i32,
            magnetic_variation: read_u32(buf, offset + 40) as i32,
        }
    }

    /// Encodes this formatted GPS field into the 11 words starting at
    /// `buf[offset..offset + 44]`.
    ///
    /// # Panics
    /// Panics if the slice is too short.
    pub fn encode(&self, buf: &mut [u8], offset: usize) {
        write_u32(buf, offset, self.w1);
        write_u32(buf, offset + 4, self.ts1);
        write_u32(buf, offset + 8, self.ts2);
        write_u32(buf, offset + 12, self.ts3);
        write_u32(buf, offset + 16, self.latitude as u32);
        write_u32(buf, offset + 20, self.longitude as u32);
        write_u32(buf, offset + 24, self.altitude as u32);
        write_u32(buf, offset + 28, self.speed_over_ground as u32);
        write_u32(buf, offset + 32, self.heading_angle as u32);
        write_u32(buf, offset + 36, self.track_angle as u32);
        write_u32(buf, offset + 40, self.magnetic_variation as u32);
    }

    /// Gets the size of the formatted GPS structure in 32-bit words.
    pub fn size_words(&self) -> u16 {
        11
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_buffer() {
        let gps = FormattedGps {
            latitude: -123_456,
            longitude: 654_321,
            altitude: 10_000,
            ..Default::default()
        };
        let mut buf = [0u8; FORMATTED_GPS_BYTES];
        gps.encode(&mut buf, 0);
        let decoded = FormattedGps::decode(&buf, 0);
        assert_eq!(decoded, gps);
        assert_eq!(decoded.size_words(), 11);
    }
}
