// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Error taxonomy for the runtime validation pipeline (§7).

Validation functions never panic or abort on attacker-controlled
input; they return a [`ValidationError`], which a runtime view caches
and reports via `error()`/`is_valid()`.
*/

use thiserror::Error;

/// A validation failure kind, mirroring the taxonomy runtime packet
/// views use to report why a buffer failed to parse.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    /// Declared or derived packet length exceeds the provided buffer.
    #[error("buffer too small for declared or derived packet length")]
    BufferTooSmall,
    /// Header type is inconsistent with a compile-time schema.
    #[error("packet type does not match schema")]
    PacketTypeMismatch,
    /// TSI in the header does not match a compile-time schema.
    #[error("TSI does not match schema")]
    TsiMismatch,
    /// TSF in the header does not match a compile-time schema.
    #[error("TSF does not match schema")]
    TsfMismatch,
    /// Trailer-included indicator does not match a compile-time schema.
    #[error("trailer bit does not match schema")]
    TrailerBitMismatch,
    /// Class-ID indicator does not match a compile-time schema.
    #[error("class ID bit does not match schema")]
    ClassIdBitMismatch,
    /// Header's `size_words` does not equal the computed packet
    /// length.
    #[error("header size_words does not match computed packet length")]
    SizeFieldMismatch,
    /// Header type bits fall in 8..15.
    #[error("packet type bits are invalid (8..15)")]
    InvalidPacketType,
    /// A CIF bit is set outside its table's supported mask, or a
    /// reserved header bit is nonzero where it must be zero.
    #[error("unsupported or reserved field bit is set")]
    UnsupportedField,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_non_empty() {
        assert!(!ValidationError::BufferTooSmall.to_string().is_empty());
        assert!(!ValidationError::UnsupportedField.to_string().is_empty());
    }
}
