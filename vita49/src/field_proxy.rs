// SPDX-FileCopyrightText: 2025 The vita49-rs Authors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Field proxies: the per-access value bundling offset/size/presence
exposed by subscript-over-tag access on context packet views (§4.10).

A proxy is cheap and recomputed on every access rather than cached in
the packet view — constructing one is just three integers and a
borrow, so there is nothing to amortize by caching it.
*/

use crate::field_tags::{FieldSpec, Interpreted, WireCodec};

/// A read-only proxy over one field's on-wire bytes.
///
/// `offset_bytes`/`present` are supplied by whatever computed them
/// (the runtime offset engine, or a compile-time packet's fixed
/// layout); the proxy itself performs no bounds checking beyond what
/// slicing already guarantees, since callers only construct one after
/// establishing the field is present and in-bounds.
pub struct FieldProxy<'a, Tag: FieldSpec> {
    bytes: &'a [u8],
    present: bool,
    _tag: std::marker::PhantomData<Tag>,
}

impl<'a, Tag: FieldSpec> FieldProxy<'a, Tag> {
    /// Builds a proxy over `bytes`, which must be exactly
    /// `Tag::Wire::SIZE_BYTES` long when `present` is true.
    pub fn new(bytes: &'a [u8], present: bool) -> FieldProxy<'a, Tag> {
        FieldProxy {
            bytes,
            present,
            _tag: std::marker::PhantomData,
        }
    }

    /// An absent proxy: `has_value()` is false and every accessor
    /// that would read bytes panics if called.
    pub fn absent() -> FieldProxy<'a, Tag> {
        FieldProxy {
            bytes: &[],
            present: false,
            _tag: std::marker::PhantomData,
        }
    }

    /// Whether the field is present in the backing packet.
    pub fn has_value(&self) -> bool {
        self.present
    }

    /// The field's raw on-wire bytes.
    ///
    /// # Panics
    /// Panics if `has_value()` is false.
    pub fn bytes(&self) -> &'a [u8] {
        assert!(self.present, "field {} is not present", Tag::NAME);
        self.bytes
    }

    /// The field's decoded wire-type value.
    ///
    /// # Panics
    /// Panics if `has_value()` is false.
    pub fn encoded(&self) -> Tag::Wire {
        Tag::Wire::decode_wire(self.bytes())
    }
}

impl<'a, Tag: Interpreted> FieldProxy<'a, Tag> {
    /// The field's interpreted (engineering-unit) value.
    ///
    /// # Panics
    /// Panics if `has_value()` is false.
    pub fn value(&self) -> Tag::Interp {
        Tag::to_interpreted(self.encoded())
    }
}

impl<'a, Tag: FieldSpec> From<FieldProxy<'a, Tag>> for bool {
    fn from(proxy: FieldProxy<'a, Tag>) -> bool {
        proxy.has_value()
    }
}

/// A mutable proxy over one field's on-wire bytes, for compile-time
/// (mutable) context packets only.
pub struct FieldProxyMut<'a, Tag: FieldSpec> {
    bytes: &'a mut [u8],
    _tag: std::marker::PhantomData<Tag>,
}

impl<'a, Tag: FieldSpec> FieldProxyMut<'a, Tag> {
    /// Builds a mutable proxy over `bytes`, which must be exactly
    /// `Tag::Wire::SIZE_BYTES` long.
    pub fn new(bytes: &'a mut [u8]) -> FieldProxyMut<'a, Tag> {
        FieldProxyMut {
            bytes,
            _tag: std::marker::PhantomData,
        }
    }

    /// The field's raw on-wire bytes.
    pub fn bytes(&self) -> &[u8] {
        self.bytes
    }

    /// Overwrites the field's raw on-wire bytes.
    ///
    /// # Panics
    /// Panics if `bytes.len() != Tag::Wire::SIZE_BYTES`.
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        assert_eq!(bytes.len(), self.bytes.len(), "field {} size mismatch", Tag::NAME);
        self.bytes.copy_from_slice(bytes);
    }

    /// The field's decoded wire-type value.
    pub fn encoded(&self) -> Tag::Wire {
        Tag::Wire::decode_wire(self.bytes)
    }

    /// Overwrites the field with an encoded wire-type value.
    pub fn set_encoded(&mut self, value: Tag::Wire) {
        value.encode_wire(self.bytes);
    }
}

impl<'a, Tag: Interpreted> FieldProxyMut<'a, Tag> {
    /// The field's interpreted (engineering-unit) value.
    pub fn value(&self) -> Tag::Interp {
        Tag::to_interpreted(self.encoded())
    }

    /// Overwrites the field from an interpreted (engineering-unit)
    /// value.
    pub fn set_value(&mut self, value: Tag::Interp) {
        self.set_encoded(Tag::from_interpreted(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_tags::Bandwidth;

    #[test]
    fn absent_proxy_reports_no_value() {
        let proxy = FieldProxy::<Bandwidth>::absent();
        assert!(!proxy.has_value());
    }

    #[test]
    fn present_proxy_round_trips_value() {
        let mut storage = [0u8; 8];
        {
            let mut proxy = FieldProxyMut::<Bandwidth>::new(&mut storage);
            proxy.set_value(20_000_000.0);
        }
        let proxy = FieldProxy::<Bandwidth>::new(&storage, true);
        assert!(proxy.has_value());
        assert_eq!(proxy.encoded(), 81_920_000_000);
        assert_eq!(proxy.value(), 20_000_000.0);
    }
}
