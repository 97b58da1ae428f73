/*!
Encoding marker types and traits.

Each representation this crate understands is named by an uninhabited marker type implementing `Encoding`.  The marker fixes the unit type (*e.g.* `u16` for `Utf16`), and, where the representation can be decoded at all, provides a `Codec` used by the conversion drivers.
*/
pub mod conv;

use libc::wchar_t;
use self::conv::{utf16, utf32, utf8, wide, DecodeError, EncodeError};

/**
The platform's native wide character unit.

This is 2 bytes on Windows, and 4 bytes everywhere else.  See `conv::wide` for how the width is dispatched.
*/
pub type WChar = wchar_t;

/**
Represents a particular text representation.
*/
pub trait Encoding {
    type Unit: Unit;

    /**
    Returns a short name for this encoding, used in debug output and log messages.
    */
    fn debug_prefix() -> &'static str;
}

/**
A single code unit of some encoding.

The zero unit is the terminator for all zero-terminated strings.
*/
pub trait Unit: Copy + Eq + Default + 'static {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;

    /**
    Returns the unit's bit pattern, zero-extended to 32 bits.
    */
    fn to_u32(self) -> u32;

    /**
    Constructs a unit from the low-order bits of `v`.  Any bits which do not fit are silently discarded.
    */
    fn from_u32_lossy(v: u32) -> Self;
}

macro_rules! prim_unit_impl {
    ($($ty_name:ty),*) => {
        $(
            impl Unit for $ty_name {
                #[inline]
                fn zero() -> Self {
                    0
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    *self == 0
                }

                #[inline]
                fn to_u32(self) -> u32 {
                    self as u32
                }

                #[inline]
                fn from_u32_lossy(v: u32) -> Self {
                    v as $ty_name
                }
            }
        )*
    };
}

// `wchar_t` is one of `u16`, `i32`, or `u32`, depending on the target.
prim_unit_impl! { u8, u16, u32, i32 }

/**
Implemented by encodings which can be decoded to, and encoded from, code points.
*/
pub trait Codec: Encoding {
    /**
    Decodes the first code point from `units`, returning it along with the number of units consumed.

    Fails with `DecodeError::Incomplete` if `units` is empty.
    */
    fn decode(units: &[Self::Unit]) -> Result<(u32, usize), DecodeError>;

    /**
    Appends the units representing `cp` to `out`.
    */
    fn encode(cp: u32, out: &mut Vec<Self::Unit>) -> Result<(), EncodeError>;
}

/**
Fixed-width narrow text: each byte *is* a code point in `0..=0xFF` (*i.e.* Latin-1).
*/
pub enum Narrow {}

impl Encoding for Narrow {
    type Unit = u8;
    fn debug_prefix() -> &'static str { "N" }
}

impl Codec for Narrow {
    #[inline]
    fn decode(units: &[u8]) -> Result<(u32, usize), DecodeError> {
        match units.first() {
            Some(&cu) => Ok((cu as u32, 1)),
            None => Err(DecodeError::Incomplete),
        }
    }

    /**
    Narrow encoding truncates; use `driver::narrow_from_checked` for a checked conversion.
    */
    #[inline]
    fn encode(cp: u32, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        out.push(u8::from_u32_lossy(cp));
        Ok(())
    }
}

/**
Narrow multibyte text in an unspecified encoding.

This library never guesses what the encoding is.  The legacy entry points (`convert::ToLegacy`) pass it through untouched; every other conversion treats it as UTF-8, since that is the only multibyte encoding this library knows how to decode.
*/
pub enum MultiByte {}

impl Encoding for MultiByte {
    type Unit = u8;
    fn debug_prefix() -> &'static str { "Mb" }
}

impl Codec for MultiByte {
    #[inline]
    fn decode(units: &[u8]) -> Result<(u32, usize), DecodeError> {
        utf8::decode(units)
    }

    #[inline]
    fn encode(cp: u32, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        utf8::encode(cp, out)
    }
}

pub enum Utf8 {}

impl Encoding for Utf8 {
    type Unit = u8;
    fn debug_prefix() -> &'static str { "Utf8" }
}

impl Codec for Utf8 {
    #[inline]
    fn decode(units: &[u8]) -> Result<(u32, usize), DecodeError> {
        utf8::decode(units)
    }

    #[inline]
    fn encode(cp: u32, out: &mut Vec<u8>) -> Result<(), EncodeError> {
        utf8::encode(cp, out)
    }
}

pub enum Utf16 {}

impl Encoding for Utf16 {
    type Unit = u16;
    fn debug_prefix() -> &'static str { "Utf16" }
}

impl Codec for Utf16 {
    #[inline]
    fn decode(units: &[u16]) -> Result<(u32, usize), DecodeError> {
        utf16::decode(units)
    }

    #[inline]
    fn encode(cp: u32, out: &mut Vec<u16>) -> Result<(), EncodeError> {
        utf16::encode(cp, out)
    }
}

pub enum Utf32 {}

impl Encoding for Utf32 {
    type Unit = u32;
    fn debug_prefix() -> &'static str { "Utf32" }
}

impl Codec for Utf32 {
    #[inline]
    fn decode(units: &[u32]) -> Result<(u32, usize), DecodeError> {
        utf32::decode(units)
    }

    #[inline]
    fn encode(cp: u32, out: &mut Vec<u32>) -> Result<(), EncodeError> {
        utf32::encode(cp, out)
    }
}

/**
Platform-native wide text.

Depending on the width of `wchar_t`, this is either UTF-16 or UTF-32.  The codec forwards to `conv::wide::NativeCodec`, which is fixed when the crate is built.
*/
pub enum Wide {}

impl Encoding for Wide {
    type Unit = WChar;
    fn debug_prefix() -> &'static str { "W" }
}

impl Codec for Wide {
    #[inline]
    fn decode(units: &[WChar]) -> Result<(u32, usize), DecodeError> {
        wide::decode(units)
    }

    #[inline]
    fn encode(cp: u32, out: &mut Vec<WChar>) -> Result<(), EncodeError> {
        wide::encode(cp, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert_eq!(Narrow::decode(&[]), Err(DecodeError::Incomplete));
        assert_eq!(MultiByte::decode(&[]), Err(DecodeError::Incomplete));
        assert_eq!(Utf8::decode(&[]), Err(DecodeError::Incomplete));
        assert_eq!(Utf16::decode(&[]), Err(DecodeError::Incomplete));
        assert_eq!(Utf32::decode(&[]), Err(DecodeError::Incomplete));
        assert_eq!(Wide::decode(&[]), Err(DecodeError::Incomplete));
    }

    #[test]
    fn test_narrow_decode() {
        assert_eq!(Narrow::decode(b"\xe7o"), Ok((0xe7, 1)));
    }
}
