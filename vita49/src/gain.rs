// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the gain format
(ANSI/VITA-49.2-2017 section 9.5.3).

"In RF equipment such as tuners and receivers, the total gain
of the equipment is typically distributed to allow tradeoffs
between noise power and linearity. For such equipment, Stage 1
Gain conveys the front-end or RF gain, and Stage 2 Gain conveys
the back-end or IF gain. For equipment that does not require gain
distribution, Stage 1 Gain provides the gain of the device, and
Stage 2 Gain is set to zero."
*/

use crate::endian::{read_u32, write_u32};
use fixed::{types::extra::U7, FixedI16};
use std::fmt;

/// Size of an encoded gain field, in bytes.
pub const GAIN_BYTES: usize = 4;

/// Base gain data structure: two Q8.7 fixed-point dB values packed into
/// one 32-bit word (stage 2 in the high half, stage 1 in the low half).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gain(i32);

impl Gain {
    /// Create a new `Gain` object given stage 1 and 2 gain in dB.
    pub fn new(stage_1_gain_db: f32, stage_2_gain_db: f32) -> Gain {
        let s1 = FixedI16::<U7>::from_num(stage_1_gain_db).to_bits() as u16 as i32;
        let s2 = FixedI16::<U7>::from_num(stage_2_gain_db).to_bits() as u16 as i32;
        Gain((s2 << 16) | s1)
    }

    /// Decodes a gain word at `buf[offset..offset + 4]`.
    ///
    /// # Panics
    /// Panics if the slice is too short; callers bounds-check first.
    pub fn decode(buf: &[u8], offset: usize) -> Gain {
        Gain(read_u32(buf, offset) as i32)
    }

    /// Encodes this gain into `buf[offset..offset + 4]`.
    ///
    /// # Panics
    /// Panics if the slice is too short.
    pub fn encode(&self, buf: &mut [u8], offset: usize) {
        write_u32(buf, offset, self.0 as u32);
    }

    /// Gets the size of the gain structure in 32-bit words.
    pub fn size_words(&self) -> u16 {
        1
    }

    /// Gets stage 1 gain (dB)
    pub fn stage_1_gain_db(&self) -> f32 {
        let s1 = (self.0 & 0xFFFF) as i16;
        FixedI16::<U7>::from_bits(s1).to_num()
    }

    /// Sets stage 1 gain (dB)
    pub fn set_stage_1_gain_db(&mut self, stage_1_gain_db: f32) {
        let s1 = FixedI16::<U7>::from_num(stage_1_gain_db).to_bits() as u16 as i32;
        self.0 = (self.0 & (0xFFFF_0000u32 as i32)) | s1
    }

    /// Gets stage 2 gain (dB)
    pub fn stage_2_gain_db(&self) -> f32 {
        let s2 = ((self.0 >> 16) & 0xFFFF) as i16;
        FixedI16::<U7>::from_bits(s2).to_num()
    }

    /// Sets stage 2 gain (dB)
    pub fn set_stage_2_gain_db(&mut self, stage_2_gain_db: f32) {
        let s2 = FixedI16::<U7>::from_num(stage_2_gain_db).to_bits() as u16 as i32;
        self.0 = (self.0 & 0x0000_FFFF) | (s2 << 16)
    }
}

impl fmt::Display for Gain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "Stage 1: {} dB, Stage 2: {} dB",
            self.stage_1_gain_db(),
            self.stage_2_gain_db()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constructs_both_stages() {
        let gain = Gain::new(25.2, 0.23);
        assert_relative_eq!(gain.stage_1_gain_db(), 25.2, max_relative = 0.1);
        assert_relative_eq!(gain.stage_2_gain_db(), 0.23, max_relative = 0.1);
    }

    #[test]
    fn setters_do_not_clobber_the_other_stage() {
        let mut gain = Gain::new(1.0, 2.0);
        gain.set_stage_1_gain_db(10.0);
        assert_relative_eq!(gain.stage_1_gain_db(), 10.0, max_relative = 0.1);
        assert_relative_eq!(gain.stage_2_gain_db(), 2.0, max_relative = 0.1);

        gain.set_stage_2_gain_db(20.0);
        assert_relative_eq!(gain.stage_1_gain_db(), 10.0, max_relative = 0.1);
        assert_relative_eq!(gain.stage_2_gain_db(), 20.0, max_relative = 0.1);
    }

    #[test]
    fn round_trips_through_buffer() {
        let gain = Gain::new(-3.5, 12.0);
        let mut buf = [0u8; 4];
        gain.encode(&mut buf, 0);
        let decoded = Gain::decode(&buf, 0);
        assert_eq!(decoded, gain);
        assert_eq!(decoded.size_words(), 1);
    }
}
