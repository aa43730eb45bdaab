// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
The VITA-49 timestamp pair (ANSI/VITA-49.2-2017 section 5.1.5).

A timestamp is always a `(seconds: u32, fractional: u64)` pair; how the
fractional part is interpreted depends on the prologue's TSI/TSF mode.
Only the (UTC, [`Tsf::RealTime`]) combination has a defined arithmetic
contract (picosecond precision); every other combination is opaque
storage and callers must not assume any particular unit.
*/

use crate::endian::{read_u32, read_u64, write_u32, write_u64};
use std::time::Duration;

/// Picoseconds in a second, per section 5.1.5.
pub const PICOSECONDS_PER_SECOND: u64 = 1_000_000_000_000;
/// Nanoseconds in a second.
pub const NANOSECONDS_PER_SECOND: u64 = 1_000_000_000;
/// Largest valid fractional value, one picosecond short of a full second.
pub const MAX_FRACTIONAL: u64 = PICOSECONDS_PER_SECOND - 1;

/// Size of an encoded (seconds, fractional) pair, in bytes.
pub const TIMESTAMP_BYTES: usize = 12;

/// A VITA-49 timestamp pair.
///
/// For TSI=UTC, TSF=RealTime streams the fractional field is
/// picoseconds-since-the-second and the arithmetic methods below apply.
/// For any other (TSI, TSF) combination, treat this as opaque storage:
/// construct with [`Timestamp::new`] and read back [`Timestamp::seconds`]
/// / [`Timestamp::fractional`] verbatim.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    seconds: u32,
    fractional: u64,
}

impl Timestamp {
    /// Builds a timestamp pair verbatim, with no normalization.
    pub fn new(seconds: u32, fractional: u64) -> Timestamp {
        Timestamp {
            seconds,
            fractional,
        }
    }

    /// Decodes a timestamp from the three words starting at
    /// `buf[offset..offset + 12]`: `seconds` (1 word), `fractional`
    /// (2 words).
    ///
    /// # Panics
    /// Panics if the slice is too short; callers bounds-check first.
    pub fn decode(buf: &[u8], offset: usize) -> Timestamp {
        Timestamp {
            seconds: read_u32(buf, offset),
            fractional: read_u64(buf, offset + 4),
        }
    }

    /// Encodes this timestamp into the three words starting at
    /// `buf[offset..offset + 12]`.
    ///
    /// # Panics
    /// Panics if the slice is too short.
    pub fn encode(&self, buf: &mut [u8], offset: usize) {
        write_u32(buf, offset, self.seconds);
        write_u64(buf, offset + 4, self.fractional);
    }

    /// The integer-seconds component, stored verbatim.
    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    /// The fractional component, stored verbatim.
    pub fn fractional(&self) -> u64 {
        self.fractional
    }

    /// Folds any `fractional >= PICOSECONDS_PER_SECOND` back into whole
    /// seconds. Saturates at `(u32::MAX, MAX_FRACTIONAL)` instead of
    /// wrapping `seconds`. Only meaningful for (UTC, RealTime) streams.
    pub fn normalize(&mut self) {
        if self.fractional >= PICOSECONDS_PER_SECOND {
            let extra = self.fractional / PICOSECONDS_PER_SECOND;
            match u32::try_from(extra)
                .ok()
                .and_then(|extra| self.seconds.checked_add(extra))
            {
                Some(seconds) => {
                    self.seconds = seconds;
                    self.fractional %= PICOSECONDS_PER_SECOND;
                }
                None => {
                    self.seconds = u32::MAX;
                    self.fractional = MAX_FRACTIONAL;
                }
            }
        }
    }

    /// Builds a (UTC, RealTime) timestamp from a host wall-clock value,
    /// expressed as signed seconds and nanoseconds since the Unix epoch.
    /// Negative epochs clamp to `(0, 0)`; epochs past `u32::MAX` clamp to
    /// `(u32::MAX, MAX_FRACTIONAL)`.
    pub fn from_epoch(epoch_seconds: i64, epoch_nanos: u32) -> Timestamp {
        if epoch_seconds < 0 {
            return Timestamp::new(0, 0);
        }
        match u32::try_from(epoch_seconds) {
            Ok(seconds) => Timestamp::new(seconds, epoch_nanos as u64 * 1000),
            Err(_) => Timestamp::new(u32::MAX, MAX_FRACTIONAL),
        }
    }

    /// Converts back to (epoch_seconds, epoch_nanos), losing
    /// sub-nanosecond precision.
    pub fn to_epoch(&self) -> (u32, u32) {
        (self.seconds, (self.fractional / 1000) as u32)
    }

    /// `seconds * 10^12 + fractional`, saturated to `u64::MAX`.
    pub fn total_picoseconds(&self) -> u64 {
        (self.seconds as u64)
            .saturating_mul(PICOSECONDS_PER_SECOND)
            .saturating_add(self.fractional)
    }

    /// Adds a signed nanosecond duration, saturating at `(0, 0)` on
    /// underflow and `(u32::MAX, MAX_FRACTIONAL)` on overflow.
    ///
    /// `i64::MIN` has no positive counterpart, so it is handled as
    /// `self - i64::MAX - 1` rather than negating it directly.
    pub fn add_nanos(&self, nanos: i64) -> Timestamp {
        if nanos == i64::MIN {
            return self.add_nanos(i64::MAX).add_nanos(1);
        }
        if nanos < 0 {
            return self.sub_nanos_unsigned(nanos.unsigned_abs());
        }
        self.add_nanos_unsigned(nanos as u64)
    }

    /// Subtracts a signed nanosecond duration. Equivalent to
    /// `self.add_nanos(-nanos)`, with the same `i64::MIN` handling.
    pub fn sub_nanos(&self, nanos: i64) -> Timestamp {
        if nanos == i64::MIN {
            return self.sub_nanos(i64::MAX).sub_nanos(1);
        }
        if nanos < 0 {
            return self.add_nanos_unsigned(nanos.unsigned_abs());
        }
        self.sub_nanos_unsigned(nanos as u64)
    }

    fn add_nanos_unsigned(&self, nanos: u64) -> Timestamp {
        let whole_secs = nanos / NANOSECONDS_PER_SECOND;
        let rem_picos = (nanos % NANOSECONDS_PER_SECOND) * 1000;
        let mut fractional = self.fractional + rem_picos;
        let mut carry = 0u64;
        if fractional >= PICOSECONDS_PER_SECOND {
            fractional -= PICOSECONDS_PER_SECOND;
            carry = 1;
        }
        match u32::try_from(whole_secs + carry)
            .ok()
            .and_then(|add| self.seconds.checked_add(add))
        {
            Some(seconds) => Timestamp::new(seconds, fractional),
            None => Timestamp::new(u32::MAX, MAX_FRACTIONAL),
        }
    }

    fn sub_nanos_unsigned(&self, nanos: u64) -> Timestamp {
        let whole_secs = nanos / NANOSECONDS_PER_SECOND;
        let rem_picos = (nanos % NANOSECONDS_PER_SECOND) * 1000;
        let (fractional, borrow) = if self.fractional >= rem_picos {
            (self.fractional - rem_picos, 0u64)
        } else {
            (self.fractional + PICOSECONDS_PER_SECOND - rem_picos, 1u64)
        };
        match u32::try_from(whole_secs + borrow)
            .ok()
            .and_then(|sub| self.seconds.checked_sub(sub))
        {
            Some(seconds) => Timestamp::new(seconds, fractional),
            None => Timestamp::new(0, 0),
        }
    }

    /// Signed nanosecond difference `self - other`, correct for
    /// differences up to roughly 292 years. Only meaningful when both
    /// timestamps are (UTC, RealTime).
    pub fn diff_nanos(&self, other: &Timestamp) -> i64 {
        let sec_diff = self.seconds as i64 - other.seconds as i64;
        let frac_diff = self.fractional as i64 - other.fractional as i64;
        sec_diff.saturating_mul(NANOSECONDS_PER_SECOND as i64)
            + frac_diff / 1000
    }
}

impl Timestamp {
    /// Builds a (UTC, RealTime) timestamp from a [`chrono::DateTime`].
    pub fn from_chrono(tp: chrono::DateTime<chrono::Utc>) -> Timestamp {
        Timestamp::from_epoch(tp.timestamp(), tp.timestamp_subsec_nanos())
    }

    /// Converts back to a [`chrono::DateTime`]. Returns `None` if the
    /// stored value is out of chrono's representable range.
    pub fn to_chrono(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let (seconds, nanos) = self.to_epoch();
        chrono::DateTime::from_timestamp(seconds as i64, nanos)
    }
}

/// Converts a [`Duration`] to signed nanoseconds, saturating at
/// `i64::MAX` rather than panicking on overflow.
pub fn duration_to_nanos(d: Duration) -> i64 {
    i64::try_from(d.as_nanos()).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_buffer() {
        let ts = Timestamp::new(1234, 500);
        let mut buf = [0u8; 12];
        ts.encode(&mut buf, 0);
        assert_eq!(Timestamp::decode(&buf, 0), ts);
    }

    #[test]
    fn scenario_b_timestamp() {
        // TSI: 00 00 04 D2 (1234 s), TSF: ...01 F4 (500 ps)
        let mut buf = [0u8; 12];
        write_u32(&mut buf, 0, 1234);
        write_u64(&mut buf, 4, 500);
        let ts = Timestamp::decode(&buf, 0);
        assert_eq!(ts.seconds(), 1234);
        assert_eq!(ts.fractional(), 500);
    }

    #[test]
    fn normalize_folds_overflowing_fractional_into_seconds() {
        let mut ts = Timestamp::new(5, PICOSECONDS_PER_SECOND);
        ts.normalize();
        assert_eq!(ts, Timestamp::new(6, 0));
    }

    #[test]
    fn normalize_clamps_on_seconds_overflow() {
        let mut ts = Timestamp::new(u32::MAX, PICOSECONDS_PER_SECOND);
        ts.normalize();
        assert_eq!(ts, Timestamp::new(u32::MAX, MAX_FRACTIONAL));
    }

    #[test]
    fn from_epoch_clamps_negative_to_zero() {
        assert_eq!(Timestamp::from_epoch(-1, 0), Timestamp::new(0, 0));
    }

    #[test]
    fn from_epoch_clamps_past_u32_max() {
        let ts = Timestamp::from_epoch(u32::MAX as i64 + 1, 0);
        assert_eq!(ts, Timestamp::new(u32::MAX, MAX_FRACTIONAL));
    }

    #[test]
    fn total_picoseconds_saturates() {
        let ts = Timestamp::new(u32::MAX, MAX_FRACTIONAL);
        assert_eq!(ts.total_picoseconds(), u64::MAX.min(ts.total_picoseconds()));
        assert!(ts.total_picoseconds() > 0);
    }

    #[test]
    fn add_nanos_handles_i64_min() {
        let ts = Timestamp::new(10, 0);
        // Should not panic or overflow; clamps at zero since it's a huge subtraction.
        let result = ts.add_nanos(i64::MIN);
        assert_eq!(result, Timestamp::new(0, 0));
    }

    #[test]
    fn sub_nanos_handles_i64_min() {
        let ts = Timestamp::new(10, 0);
        let result = ts.sub_nanos(i64::MIN);
        assert_eq!(result, Timestamp::new(u32::MAX, MAX_FRACTIONAL));
    }

    #[test]
    fn add_nanos_carries_across_second_boundary() {
        let ts = Timestamp::new(1, PICOSECONDS_PER_SECOND - 500);
        let result = ts.add_nanos(1); // +1000 ps
        assert_eq!(result, Timestamp::new(2, 500));
    }

    #[test]
    fn sub_nanos_borrows_across_second_boundary() {
        let ts = Timestamp::new(2, 500);
        let result = ts.sub_nanos(1); // -1000 ps
        assert_eq!(result, Timestamp::new(1, PICOSECONDS_PER_SECOND - 500));
    }

    #[test]
    fn sub_nanos_underflow_clamps_to_zero() {
        let ts = Timestamp::new(0, 0);
        let result = ts.sub_nanos(1);
        assert_eq!(result, Timestamp::new(0, 0));
    }

    #[test]
    fn chrono_round_trip_loses_sub_nanosecond_precision_only() {
        let tp = chrono::DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let ts = Timestamp::from_chrono(tp);
        assert_eq!(ts, Timestamp::new(1_700_000_000, 123_456_789_000));
        assert_eq!(ts.to_chrono(), Some(tp));
    }

    #[test]
    fn diff_nanos_is_symmetric_and_signed() {
        let a = Timestamp::new(10, 500_000);
        let b = Timestamp::new(9, 0);
        assert_eq!(a.diff_nanos(&b), 1_000_000_500);
        assert_eq!(b.diff_nanos(&a), -1_000_000_500);
    }
}
