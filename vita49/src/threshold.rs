// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the threshold field described in
(ANSI/VITA-49.2-2017 section 9.5.13).
*/

use crate::endian::{read_u32, write_u32};
use fixed::{types::extra::U7, FixedI16};
use std::fmt;

/// Size of an encoded threshold field, in bytes.
pub const THRESHOLD_BYTES: usize = 4;

/// Base threshold data structure: two Q8.7 fixed-point dB values packed
/// into one 32-bit word (stage 2 in the high half, stage 1 in the low
/// half).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Threshold(i32);

impl Threshold {
    /// Create a new `Threshold` object given stage 1 and 2 in dB.
    pub fn new(stage_1_threshold_db: f32, stage_2_threshold_db: f32) -> Threshold {
        let s1 = FixedI16::<U7>::from_num(stage_1_threshold_db).to_bits() as u16 as i32;
        let s2 = FixedI16::<U7>::from_num(stage_2_threshold_db).to_bits() as u16 as i32;
        Threshold((s2 << 16) | s1)
    }

    /// Decodes a threshold word at `buf[offset..offset + 4]`.
    ///
    /// # Panics
    /// Panics if the slice is too short; callers bounds-check first.
    pub fn decode(buf: &[u8], offset: usize) -> Threshold {
        Threshold(read_u32(buf, offset) as i32)
    }

    /// Encodes this threshold into `buf[offset..offset + 4]`.
    ///
    /// # Panics
    /// Panics if the slice is too short.
    pub fn encode(&self, buf: &mut [u8], offset: usize) {
        write_u32(buf, offset, self.0 as u32);
    }

    /// Gets the size of the threshold structure in 32-bit words.
    pub fn size_words(&self) -> u16 {
        1
    }

    /// Gets stage 1 threshold (dB)
    pub fn stage_1_threshold_db(&self) -> f32 {
        let s1 = (self.0 & 0xFFFF) as i16;
        FixedI16::<U7>::from_bits(s1).to_num()
    }

    /// Sets stage 1 threshold (dB)
    pub fn set_stage_1_threshold_db(&mut self, stage_1_threshold_db: f32) {
        let s1 = FixedI16::<U7>::from_num(stage_1_threshold_db).to_bits() as u16 as i32;
        self.0 = (self.0 & (0xFFFF_0000u32 as i32)) | s1
    }

    /// Gets stage 2 threshold (dB)
    pub fn stage_2_threshold_db(&self) -> f32 {
        let s2 = ((self.0 >> 16) & 0xFFFF) as i16;
        FixedI16::<U7>::from_bits(s2).to_num()
    }

    /// Sets stage 2 threshold (dB)
    pub fn set_stage_2_threshold_db(&mut self, stage_2_threshold_db: f32) {
        let s2 = FixedI16::<U7>::from_num(stage_2_threshold_db).to_bits() as u16 as i32;
        self.0 = (self.0 & 0x0000_FFFF) | (s2 << 16)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "Stage 1: {} dB, Stage 2: {} dB",
            self.stage_1_threshold_db(),
            self.stage_2_threshold_db()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn manipulate_threshold() {
        let mut t = Threshold::new(25.2, 0.23);
        assert_relative_eq!(t.stage_1_threshold_db(), 25.2, max_relative = 0.1);
        assert_relative_eq!(t.stage_2_threshold_db(), 0.23, max_relative = 0.1);

        t.set_stage_1_threshold_db(-20.5);
        t.set_stage_2_threshold_db(-11.1);
        assert_relative_eq!(t.stage_1_threshold_db(), -20.5, max_relative = 0.1);
        assert_relative_eq!(t.stage_2_threshold_db(), -11.1, max_relative = 0.1);
    }

    #[test]
    fn round_trips_through_buffer() {
        let t = Threshold::new(1.0, -2.0);
        let mut buf = [0u8; 4];
        t.encode(&mut buf, 0);
        let decoded = Threshold::decode(&buf, 0);
        assert_eq!(decoded, t);
        assert_eq!(decoded.size_words(), 1);
    }
}
