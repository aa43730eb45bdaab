// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
#![doc = include_str!(concat!("../", std::env!("CARGO_PKG_README")))]
#![deny(missing_docs)]
#![deny(unstable_features, unused_import_braces, unreachable_pub)]
#![warn(rustdoc::unescaped_backticks)]
#![forbid(unsafe_code)]

mod cif_tables;
mod class_id;
mod context_association_lists;
mod context_packet;
mod data_packet;
mod device_id;
mod ecef_ephemeris;
mod endian;
mod errors;
mod field_proxy;
mod field_tags;
mod formatted_gps;
mod gain;
mod gps_ascii;
mod header;
mod offset;
mod packet_variant;
mod prologue;
mod runtime_context;
mod runtime_data;
mod spectrum;
mod threshold;
mod timestamp;
mod trailer;
mod validation;

// Public exports
pub use crate::cif_tables::{CifEntry, CIF0, CIF0_SUPPORTED_MASK, CIF1, CIF1_SUPPORTED_MASK, CIF2, CIF2_SUPPORTED_MASK, CIF3, CIF3_SUPPORTED_MASK};
pub use crate::class_id::ClassIdentifier;
pub use crate::context_association_lists::ContextAssociationListsView;
pub use crate::context_packet::ContextPacketView;
pub use crate::data_packet::DataPacketView;
pub use crate::device_id::DeviceId;
pub use crate::ecef_ephemeris::EcefEphemeris;
pub use crate::errors::VitaError;
pub use crate::field_proxy::{FieldProxy, FieldProxyMut};
pub use crate::field_tags::{FieldSpec, Interpreted, WireCodec};
pub use crate::formatted_gps::FormattedGps;
pub use crate::gain::Gain;
pub use crate::gps_ascii::GpsAsciiView;
pub use crate::header::{build_header, decode_header, DecodedHeader, Indicators, PacketType, Tsf, Tsi};
pub use crate::offset::TargetCif;
pub use crate::packet_variant::{parse_packet, InvalidPacket, PacketVariant};
pub use crate::prologue::PrologueLayout;
pub use crate::runtime_context::RuntimeContextPacketView;
pub use crate::runtime_data::RuntimeDataPacketView;
pub use crate::spectrum::{AveragingType, Spectrum, SpectrumType, WindowTimeDelta, WindowTimeDeltaInterpretation, WindowType};
pub use crate::threshold::Threshold;
pub use crate::timestamp::Timestamp;
pub use crate::trailer::{SampleFrameIndicator, Trailer, TrailerInit};
pub use crate::validation::ValidationError;

/// Field tag marker types, one per named context field. Import these
/// alongside [`field::<Tag>()`][ContextPacketView::field] /
/// [`RuntimeContextPacketView::field`] calls.
pub mod field {
    pub use crate::field_tags::{
        AuxBandwidth, AuxFrequency, AuxGain, Bandwidth, CompressionPoint, DataPayloadFormat, DeviceId0,
        EcefEphemeris0, EphemerisRefId, FormattedGpsIns, Gain0, IfBandOffset, IfRefFreq, OverRangeCount,
        ReferenceLevel, ReferencePointId, RfFreqOffset, RfRefFreq, Range, SampleRate, SnrFigure,
        Spectrum1, StateEventIndicators, Threshold1, TimestampAdjustment, TimestampCalTime,
    };
}

/// Standard imports for the most commonly used structures and traits
/// in the vita49 crate.
pub mod prelude {
    pub use crate::class_id::ClassIdentifier;
    pub use crate::context_packet::ContextPacketView;
    pub use crate::data_packet::DataPacketView;
    pub use crate::errors::VitaError;
    pub use crate::field::*;
    pub use crate::field_proxy::{FieldProxy, FieldProxyMut};
    pub use crate::field_tags::{FieldSpec, Interpreted, WireCodec};
    pub use crate::header::{DecodedHeader, Indicators, PacketType, Tsf, Tsi};
    pub use crate::packet_variant::{parse_packet, InvalidPacket, PacketVariant};
    pub use crate::runtime_context::RuntimeContextPacketView;
    pub use crate::runtime_data::RuntimeDataPacketView;
    pub use crate::timestamp::Timestamp;
    pub use crate::trailer::Trailer;
    pub use crate::validation::ValidationError;
}
