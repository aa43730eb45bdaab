// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{parse2, Ident, LitInt, LitStr, Token, Type};

struct FieldTagArgs {
    name: Ident,
    _comma1: Token![,],
    cif_word: LitInt,
    _comma2: Token![,],
    bit: LitInt,
    _comma3: Token![,],
    wire: Type,
    _comma4: Token![,],
    field_name: LitStr,
}

impl Parse for FieldTagArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        Ok(FieldTagArgs {
            name: input.parse()?,
            _comma1: input.parse()?,
            cif_word: input.parse()?,
            _comma2: input.parse()?,
            bit: input.parse()?,
            _comma3: input.parse()?,
            wire: input.parse()?,
            _comma4: input.parse()?,
            field_name: input.parse()?,
        })
    }
}

pub fn field_tag(input: TokenStream) -> TokenStream {
    let FieldTagArgs {
        name,
        cif_word,
        bit,
        wire,
        field_name,
        ..
    } = parse2(input).expect("failed to parse field_tag! input");

    let doc = format!("Field tag for `{}`.", field_name.value());

    quote! {
        #[doc = #doc]
        #[derive(Copy, Clone, Eq, PartialEq, Debug)]
        pub struct #name;
        impl FieldSpec for #name {
            const CIF_WORD: u8 = #cif_word;
            const BIT: u32 = #bit;
            const NAME: &'static str = #field_name;
            type Wire = #wire;
        }
    }
}
