// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use proc_macro::TokenStream;

mod field_tag;

/// Generates a zero-sized field tag type implementing `FieldSpec`
/// (`CIF_WORD`, `BIT`, `NAME`, `Wire`) for one named context field.
///
/// Expects `FieldSpec` to be in scope at the call site:
/// `field_tag!(Bandwidth, 0, 29, u64, "bandwidth")`.
#[proc_macro]
pub fn field_tag(input: TokenStream) -> TokenStream {
    field_tag::field_tag(input.into()).into()
}
