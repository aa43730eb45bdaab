// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Data structures and methods related to the trailer field
(ANSI/VITA-49.2-2017 section 5.1.6). Data packets only.

Each of the eight paired indicators (bits 31..24 enable, 19..12 value)
is reported as `Option<bool>`: if the enable bit is clear, the API
reports the indicator as absent rather than guessing at an undefined
value.
*/

use crate::endian::{read_u32, write_u32};

/// Size of an encoded trailer, in bytes.
pub const TRAILER_BYTES: usize = 4;

/// Sample frame indicator enumeration (trailer bits 11..10).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleFrameIndicator {
    /// Not part of a multi-packet sample frame.
    NotApplicable,
    /// First packet of a sample frame.
    FirstDataPacket,
    /// A middle packet of a sample frame.
    MiddleDataPacket,
    /// Final packet of a sample frame.
    FinalDataPacket,
}

impl SampleFrameIndicator {
    fn from_bits(bits: u32) -> SampleFrameIndicator {
        match bits & 0b11 {
            0 => SampleFrameIndicator::NotApplicable,
            1 => SampleFrameIndicator::FirstDataPacket,
            2 => SampleFrameIndicator::MiddleDataPacket,
            _ => SampleFrameIndicator::FinalDataPacket,
        }
    }
}

/// Read-only view over a 32-bit trailer word.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trailer(u32);

impl Trailer {
    /// Wraps a raw trailer word.
    pub fn from_u32(word: u32) -> Trailer {
        Trailer(word)
    }

    /// Decodes the trailer word at `buf[offset..offset + 4]`.
    ///
    /// # Panics
    /// Panics if the slice is too short; callers bounds-check first.
    pub fn decode(buf: &[u8], offset: usize) -> Trailer {
        Trailer(read_u32(buf, offset))
    }

    /// Encodes this trailer into `buf[offset..offset + 4]`.
    ///
    /// # Panics
    /// Panics if the slice is too short.
    pub fn encode(&self, buf: &mut [u8], offset: usize) {
        write_u32(buf, offset, self.0);
    }

    /// The raw 32-bit word.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    fn cal_time_enabled(&self) -> bool {
        self.0 & (1 << 31) != 0
    }
    fn valid_data_enabled(&self) -> bool {
        self.0 & (1 << 30) != 0
    }
    fn reference_lock_enabled(&self) -> bool {
        self.0 & (1 << 29) != 0
    }
    fn agc_enabled(&self) -> bool {
        self.0 & (1 << 28) != 0
    }
    fn detected_signal_enabled(&self) -> bool {
        self.0 & (1 << 27) != 0
    }
    fn spectral_inversion_enabled(&self) -> bool {
        self.0 & (1 << 26) != 0
    }
    fn over_range_enabled(&self) -> bool {
        self.0 & (1 << 25) != 0
    }
    fn sample_loss_enabled(&self) -> bool {
        self.0 & (1 << 24) != 0
    }
    fn sample_frame_enabled(&self) -> bool {
        self.0 & (1 << 23) != 0 && self.0 & (1 << 22) != 0
    }
    fn user_defined_enabled(&self) -> bool {
        self.0 & (1 << 21) != 0 && self.0 & (1 << 20) != 0
    }

    /// Calibration time indicator, if bit 31 is enabled.
    pub fn calibrated_time(&self) -> Option<bool> {
        self.cal_time_enabled().then(|| self.0 & (1 << 19) != 0)
    }
    /// Valid-data indicator, if bit 30 is enabled.
    pub fn valid_data(&self) -> Option<bool> {
        self.valid_data_enabled().then(|| self.0 & (1 << 18) != 0)
    }
    /// Reference-lock indicator, if bit 29 is enabled.
    pub fn reference_lock(&self) -> Option<bool> {
        self.reference_lock_enabled()
            .then(|| self.0 & (1 << 17) != 0)
    }
    /// Automatic gain control (AGC) indicator, if bit 28 is enabled.
    pub fn agc(&self) -> Option<bool> {
        self.agc_enabled().then(|| self.0 & (1 << 16) != 0)
    }
    /// Detected-signal indicator, if bit 27 is enabled.
    pub fn detected_signal(&self) -> Option<bool> {
        self.detected_signal_enabled()
            .then(|| self.0 & (1 << 15) != 0)
    }
    /// Spectral-inversion indicator, if bit 26 is enabled.
    pub fn spectral_inversion(&self) -> Option<bool> {
        self.spectral_inversion_enabled()
            .then(|| self.0 & (1 << 14) != 0)
    }
    /// Over-range indicator, if bit 25 is enabled.
    pub fn over_range(&self) -> Option<bool> {
        self.over_range_enabled().then(|| self.0 & (1 << 13) != 0)
    }
    /// Sample-loss indicator, if bit 24 is enabled.
    pub fn sample_loss(&self) -> Option<bool> {
        self.sample_loss_enabled().then(|| self.0 & (1 << 12) != 0)
    }
    /// Sample-frame indicator, if both bits 23 and 22 are enabled.
    pub fn sample_frame(&self) -> Option<SampleFrameIndicator> {
        self.sample_frame_enabled()
            .then(|| SampleFrameIndicator::from_bits(self.0 >> 10))
    }
    /// User-defined indicator byte, if both bits 21 and 20 are enabled.
    pub fn user_defined(&self) -> Option<u8> {
        self.user_defined_enabled()
            .then(|| ((self.0 >> 8) & 0b11) as u8)
    }

    fn associated_context_packet_count_enabled(&self) -> bool {
        self.0 & (1 << 7) != 0
    }
    /// Associated context packet count, if bit 7 is enabled.
    pub fn associated_context_packet_count(&self) -> Option<u8> {
        self.associated_context_packet_count_enabled()
            .then(|| (self.0 & 0x7F) as u8)
    }
}

/// Ephemeral builder for a trailer word. Builders don't allocate; they
/// mutate a word in place and hand back the finished [`Trailer`].
#[derive(Copy, Clone, Default, Debug)]
pub struct TrailerInit(u32);

impl TrailerInit {
    /// Starts a new, empty trailer.
    pub fn new() -> TrailerInit {
        TrailerInit::default()
    }

    /// Sets the calibration time indicator (and its enable bit).
    pub fn set_calibrated_time(mut self, value: bool) -> Self {
        self.0 |= 1 << 31;
        self.0 = (self.0 & !(1 << 19)) | ((value as u32) << 19);
        self
    }
    /// Sets the valid-data indicator (and its enable bit).
    pub fn set_valid_data(mut self, value: bool) -> Self {
        self.0 |= 1 << 30;
        self.0 = (self.0 & !(1 << 18)) | ((value as u32) << 18);
        self
    }
    /// Sets the associated context packet count (and its enable bit).
    /// Only the low 7 bits of `count` are used.
    pub fn set_associated_context_packet_count(mut self, count: u8) -> Self {
        self.0 |= 1 << 7;
        self.0 = (self.0 & !0x7F) | (count as u32 & 0x7F);
        self
    }

    /// Finishes the builder, producing the encoded [`Trailer`].
    pub fn finish(self) -> Trailer {
        Trailer(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_indicator_reports_absent() {
        let t = Trailer::from_u32(0);
        assert_eq!(t.calibrated_time(), None);
        assert_eq!(t.valid_data(), None);
    }

    #[test]
    fn scenario_b_trailer() {
        // valid_data enable+1, calibrated_time enable+1 => C0 03 00 00
        let t = TrailerInit::new()
            .set_valid_data(true)
            .set_calibrated_time(true)
            .finish();
        assert_eq!(t.as_u32(), 0xC003_0000);
        assert_eq!(t.valid_data(), Some(true));
        assert_eq!(t.calibrated_time(), Some(true));
    }

    #[test]
    fn round_trips_through_buffer() {
        let t = TrailerInit::new()
            .set_associated_context_packet_count(5)
            .finish();
        let mut buf = [0u8; 4];
        t.encode(&mut buf, 0);
        let decoded = Trailer::decode(&buf, 0);
        assert_eq!(decoded.associated_context_packet_count(), Some(5));
    }
}
