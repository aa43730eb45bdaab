// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Static field descriptors for CIF0 through CIF3 (ANSI/VITA-49.2-2017
section 9.1). Each table has exactly 32 entries, one per bit of its CIF
word, indexed MSB-first in source order (entry 0 is bit 31, entry 31 is
bit 0) purely for readability; lookups always go through [`cif0_entry`]
and friends, which index by bit number directly.
*/

/// One CIF bit's field descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CifEntry {
    /// Size of the field in 32-bit words. Zero for flag-only bits
    /// (e.g. CIF0's "change indicator") and for reserved/unsupported
    /// bits.
    pub size_words: u8,
    /// True if the field's on-wire length depends on its content
    /// (GPS ASCII, Context Association Lists).
    pub is_variable: bool,
    /// True if this crate implements the field. Unsupported bits may
    /// still be named (for diagnostics) but are rejected by the
    /// validation pipeline if set.
    pub is_supported: bool,
    /// Field name, for diagnostics and `Display` impls.
    pub name: &'static str,
}

const RESERVED: CifEntry = CifEntry {
    size_words: 0,
    is_variable: false,
    is_supported: false,
    name: "reserved",
};

const fn entry(size_words: u8, name: &'static str) -> CifEntry {
    CifEntry {
        size_words,
        is_variable: false,
        is_supported: true,
        name,
    }
}

const fn variable(name: &'static str) -> CifEntry {
    CifEntry {
        size_words: 1,
        is_variable: true,
        is_supported: true,
        name,
    }
}

const fn unsupported(name: &'static str) -> CifEntry {
    CifEntry {
        size_words: 0,
        is_variable: false,
        is_supported: false,
        name,
    }
}

/// CIF0 control bits that enable CIF1/CIF2/CIF3. These never carry a
/// data field of their own.
pub const CIF0_CONTROL_BITS: [u32; 3] = [1, 2, 3];

/// CIF0 field table, indexed by bit number (`CIF0[bit]`).
pub const CIF0: [CifEntry; 32] = [
    /* bit 0  */ RESERVED,
    /* bit 1  */ entry(0, "cif1_enable"),
    /* bit 2  */ entry(0, "cif2_enable"),
    /* bit 3  */ entry(0, "cif3_enable"),
    /* bit 4  */ RESERVED,
    /* bit 5  */ RESERVED,
    /* bit 6  */ RESERVED,
    /* bit 7  */ RESERVED,
    /* bit 8  */ RESERVED,
    /* bit 9  */ variable("context_association_lists"),
    /* bit 10 */ variable("gps_ascii"),
    /* bit 11 */ entry(1, "ephemeris_ref_id"),
    /* bit 12 */ entry(13, "relative_ephemeris"),
    /* bit 13 */ entry(13, "ecef_ephemeris"),
    /* bit 14 */ entry(11, "formatted_gps_ins"),
    /* bit 15 */ entry(2, "data_payload_format"),
    /* bit 16 */ entry(1, "state_event_indicators"),
    /* bit 17 */ entry(2, "device_id"),
    /* bit 18 */ RESERVED,
    /* bit 19 */ entry(1, "timestamp_cal_time"),
    /* bit 20 */ entry(2, "timestamp_adjustment"),
    /* bit 21 */ entry(2, "sample_rate"),
    /* bit 22 */ entry(1, "over_range_count"),
    /* bit 23 */ entry(1, "gain"),
    /* bit 24 */ entry(1, "reference_level"),
    /* bit 25 */ entry(2, "if_band_offset"),
    /* bit 26 */ entry(2, "rf_freq_offset"),
    /* bit 27 */ entry(2, "rf_ref_freq"),
    /* bit 28 */ entry(2, "if_ref_freq"),
    /* bit 29 */ entry(2, "bandwidth"),
    /* bit 30 */ entry(1, "reference_point_id"),
    /* bit 31 */ entry(0, "change_indicator"),
];

/// CIF1 field table, indexed by bit number (`CIF1[bit]`).
pub const CIF1: [CifEntry; 32] = [
    /* bit 0  */ RESERVED,
    /* bit 1  */ entry(2, "buffer_size"),
    /* bit 2  */ entry(1, "version_and_build_code"),
    /* bit 3  */ entry(1, "v49_spec_compliance"),
    /* bit 4  */ entry(1, "health_status"),
    /* bit 5  */ entry(2, "discrete_io_64"),
    /* bit 6  */ entry(1, "discrete_io_32"),
    /* bit 7  */ unsupported("index_list"),
    /* bit 8  */ RESERVED,
    /* bit 9  */ unsupported("sector_scan"),
    /* bit 10 */ entry(13, "spectrum"),
    /* bit 11 */ unsupported("array_of_cifs"),
    /* bit 12 */ RESERVED,
    /* bit 13 */ entry(2, "aux_bandwidth"),
    /* bit 14 */ entry(1, "aux_gain"),
    /* bit 15 */ entry(2, "aux_freq"),
    /* bit 16 */ entry(1, "snr_figure"),
    /* bit 17 */ entry(1, "second_and_third_order_intercept_points"),
    /* bit 18 */ entry(1, "compression_point"),
    /* bit 19 */ entry(1, "threshold"),
    /* bit 20 */ entry(1, "eb_over_no_and_ber"),
    /* bit 21 */ RESERVED,
    /* bit 22 */ RESERVED,
    /* bit 23 */ RESERVED,
    /* bit 24 */ entry(1, "range"),
    /* bit 25 */ entry(1, "beam_widths"),
    /* bit 26 */ entry(1, "spatial_ref_type"),
    /* bit 27 */ entry(1, "spatial_scan_type"),
    /* bit 28 */ unsupported("three_d_pointing_vector_struct"),
    /* bit 29 */ entry(1, "three_d_pointing_vector"),
    /* bit 30 */ entry(1, "polarization"),
    /* bit 31 */ entry(1, "phase_offset"),
];

/// CIF2 field table, indexed by bit number (`CIF2[bit]`). All
/// supported entries are identifier-association fields, usable from
/// context packets independent of Command/Control packet support.
pub const CIF2: [CifEntry; 32] = [
    /* bit 0  */ RESERVED,
    /* bit 1  */ RESERVED,
    /* bit 2  */ RESERVED,
    /* bit 3  */ entry(1, "rf_footprint_range"),
    /* bit 4  */ entry(1, "rf_footprint"),
    /* bit 5  */ entry(1, "comms_priority_id"),
    /* bit 6  */ entry(1, "function_priority_id"),
    /* bit 7  */ entry(1, "event_id"),
    /* bit 8  */ entry(1, "mode_id"),
    /* bit 9  */ entry(1, "function_id"),
    /* bit 10 */ entry(1, "modulation_type"),
    /* bit 11 */ entry(1, "modulation_class"),
    /* bit 12 */ entry(1, "ems_device_instance"),
    /* bit 13 */ entry(1, "ems_device_type"),
    /* bit 14 */ entry(1, "ems_device_class"),
    /* bit 15 */ entry(1, "platform_display"),
    /* bit 16 */ entry(1, "platform_instance"),
    /* bit 17 */ entry(1, "platform_class"),
    /* bit 18 */ entry(1, "operator"),
    /* bit 19 */ entry(1, "country_code"),
    /* bit 20 */ entry(1, "track_id"),
    /* bit 21 */ entry(1, "info_source_id"),
    /* bit 22 */ entry(4, "controller_uuid"),
    /* bit 23 */ entry(1, "controller_id"),
    /* bit 24 */ entry(4, "controllee_uuid"),
    /* bit 25 */ entry(1, "controllee_id"),
    /* bit 26 */ entry(1, "cited_message_id"),
    /* bit 27 */ entry(1, "child_sid"),
    /* bit 28 */ entry(1, "parent_sid"),
    /* bit 29 */ entry(1, "sibling_sid"),
    /* bit 30 */ entry(1, "cited_sid"),
    /* bit 31 */ entry(1, "bind"),
];

/// CIF3 field table, indexed by bit number (`CIF3[bit]`). Partial:
/// `age` and `shelf_life` are not implemented by this crate.
pub const CIF3: [CifEntry; 32] = [
    /* bit 0  */ RESERVED,
    /* bit 1  */ entry(1, "network_id"),
    /* bit 2  */ entry(1, "tropospheric_state"),
    /* bit 3  */ entry(1, "sea_and_swell_state"),
    /* bit 4  */ entry(1, "barometric_pressure"),
    /* bit 5  */ entry(1, "humidity"),
    /* bit 6  */ entry(1, "ground_temp"),
    /* bit 7  */ entry(1, "air_temp"),
    /* bit 8  */ RESERVED,
    /* bit 9  */ RESERVED,
    /* bit 10 */ RESERVED,
    /* bit 11 */ RESERVED,
    /* bit 12 */ RESERVED,
    /* bit 13 */ RESERVED,
    /* bit 14 */ RESERVED,
    /* bit 15 */ RESERVED,
    /* bit 16 */ unsupported("shelf_life"),
    /* bit 17 */ unsupported("age"),
    /* bit 18 */ RESERVED,
    /* bit 19 */ RESERVED,
    /* bit 20 */ entry(2, "jitter"),
    /* bit 21 */ entry(2, "dwell"),
    /* bit 22 */ entry(2, "duration"),
    /* bit 23 */ entry(2, "period"),
    /* bit 24 */ entry(2, "pulse_width"),
    /* bit 25 */ entry(2, "offset_time"),
    /* bit 26 */ entry(2, "fall_time"),
    /* bit 27 */ entry(2, "rise_time"),
    /* bit 28 */ RESERVED,
    /* bit 29 */ RESERVED,
    /* bit 30 */ entry(2, "timestamp_skew"),
    /* bit 31 */ entry(2, "timestamp_details"),
];

/// Returns the field descriptor for `bit` (0..=31) in `cif_word`
/// (0..=3). Panics if either is out of range; callers always pass
/// constants or values already masked to these ranges.
pub fn entry_for(cif_word: u8, bit: u32) -> &'static CifEntry {
    let table: &[CifEntry; 32] = match cif_word {
        0 => &CIF0,
        1 => &CIF1,
        2 => &CIF2,
        3 => &CIF3,
        _ => panic!("invalid CIF word index"),
    };
    &table[bit as usize]
}

/// The bitwise OR of `1 << bit` for every supported entry in `table`,
/// including CIF0's CIF1/2/3 enable control bits.
pub const fn supported_mask(table: &[CifEntry; 32]) -> u32 {
    let mut mask = 0u32;
    let mut bit = 0;
    while bit < 32 {
        if table[bit].is_supported {
            mask |= 1 << bit;
        }
        bit += 1;
    }
    mask
}

/// Supported-field mask for CIF0, including the CIF1/2/3 enable bits.
pub const CIF0_SUPPORTED_MASK: u32 = supported_mask(&CIF0);
/// Supported-field mask for CIF1.
pub const CIF1_SUPPORTED_MASK: u32 = supported_mask(&CIF1);
/// Supported-field mask for CIF2.
pub const CIF2_SUPPORTED_MASK: u32 = supported_mask(&CIF2);
/// Supported-field mask for CIF3.
pub const CIF3_SUPPORTED_MASK: u32 = supported_mask(&CIF3);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cif0_control_bits_carry_no_data() {
        for bit in CIF0_CONTROL_BITS {
            assert_eq!(CIF0[bit as usize].size_words, 0);
        }
    }

    #[test]
    fn supported_mask_includes_cif0_control_bits() {
        for bit in CIF0_CONTROL_BITS {
            assert!(CIF0_SUPPORTED_MASK & (1 << bit) != 0);
        }
    }

    #[test]
    fn bandwidth_entry_is_two_words() {
        assert_eq!(CIF0[29].size_words, 2);
        assert_eq!(CIF0[29].name, "bandwidth");
    }

    #[test]
    fn gps_ascii_precedes_context_association_lists_in_bit_order() {
        assert!(CIF0[10].is_variable);
        assert!(CIF0[9].is_variable);
        assert!(10 > 9);
    }

    #[test]
    fn unsupported_fields_are_excluded_from_supported_mask() {
        assert_eq!(CIF1_SUPPORTED_MASK & (1 << 7), 0);
        assert_eq!(CIF1_SUPPORTED_MASK & (1 << 11), 0);
        assert_eq!(CIF3_SUPPORTED_MASK & (1 << 17), 0);
    }

    #[test]
    fn entry_for_matches_direct_table_index() {
        assert_eq!(entry_for(0, 29).name, "bandwidth");
        assert_eq!(entry_for(1, 10).name, "spectrum");
        assert_eq!(entry_for(3, 31).name, "timestamp_details");
    }
}
