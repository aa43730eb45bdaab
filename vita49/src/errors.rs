// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Error types/enumerations for the `vita49` crate.
*/

use thiserror::Error;

/// Generic `vita49` crate error enumeration, for value-type setters
/// that can reject an in-range-but-meaningless argument (spectrum
/// enums, reserved field values) without going through
/// [`crate::ValidationError`], which is reserved for whole-packet
/// validation.
#[derive(Error, Debug)]
pub enum VitaError {
    /// Error given when attempting to use an out-of-range value.
    #[error("out of range")]
    OutOfRange,
    /// Error given when trying to set a reserved value.
    #[error("attempted to set reserved field")]
    ReservedField,
}
