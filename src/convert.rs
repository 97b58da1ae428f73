/*!
The public conversion matrix.

There is one trait per destination representation, each implemented for every source representation it makes sense for.  The free functions at the bottom of this module (`to_utf8`, `to_utf16`, ...) simply forward to these traits.

| Destination | Trait | Result |
| --- | --- | --- |
| UTF-8 | `ToUtf8` | `Vec<u8>`, zero-terminated if non-empty |
| UTF-16 | `ToUtf16` | `Vec<u16>` |
| UTF-32 | `ToUtf32` | `Vec<u32>` |
| Fixed-width narrow | `ToNarrow` | `Vec<u8>` |
| Wide | `ToWide` | `Vec<WChar>` |
| Rust string | `ToText` | `String` |
| Legacy multibyte | `ToLegacy` | `LegacyString` |

UTF-8 results are returned as raw bytes rather than as `String` so that they are not mistaken for narrow text.

# Narrowing

Conversions to fixed-width narrow text (`ToNarrow::to_narrow`) are **lossy**: any code point above `0xFF` keeps only its low-order byte, and this is *not* reported as an error.  Use `ToNarrow::to_narrow_checked` if you need to know.

# Legacy strings

`ToLegacy` is deliberately only implemented for byte sources, and does no validation or transcoding of any kind.  Do not confuse it with `ToUtf8`, which (for non-byte sources) actually encodes.
*/
use crate::driver::{decode_to_string, narrow_from, narrow_from_checked, null_terminate, straight_widen, transcode, truncate_units};
use crate::encoding::conv::EncodingError;
use crate::encoding::{MultiByte, Narrow, Utf16, Utf32, Utf8, WChar, Wide};
use crate::legacy::LegacyString;
use crate::structure::{NarrowSource, Units};

pub trait ToUtf8 {
    /**
    Converts to a zero-terminated UTF-8 buffer.

    Byte sources are copied as-is, so narrow text with bytes above `0x7F` does *not* come out as valid UTF-8.  Use `ToText::to_text` to get Latin-1 decoded properly.
    */
    fn to_utf8(&self) -> Result<Vec<u8>, EncodingError>;
}

pub trait ToUtf16 {
    fn to_utf16(&self) -> Result<Vec<u16>, EncodingError>;
}

pub trait ToUtf32 {
    fn to_utf32(&self) -> Result<Vec<u32>, EncodingError>;
}

pub trait ToNarrow {
    /**
    Converts to fixed-width narrow text, truncating anything above `0xFF`.
    */
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError>;

    /**
    Converts to fixed-width narrow text, failing with `EncodingError::UnrepresentableAt` instead of truncating.
    */
    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError>;
}

pub trait ToWide {
    fn to_wide(&self) -> Result<Vec<WChar>, EncodingError>;
}

pub trait ToText {
    fn to_text(&self) -> Result<String, EncodingError>;
}

pub trait ToLegacy {
    fn to_legacy(&self) -> LegacyString;
}

/*
Fixed-width narrow.  Every byte is already a code point, so widening is a straight copy.

Note that UTF-8 output is also a straight copy, so bytes above `0x7F` are *not* re-encoded.
*/

impl<'a> ToUtf8 for Units<'a, Narrow> {
    fn to_utf8(&self) -> Result<Vec<u8>, EncodingError> {
        Ok(null_terminate(self.as_units().to_vec()))
    }
}

impl<'a> ToUtf16 for Units<'a, Narrow> {
    fn to_utf16(&self) -> Result<Vec<u16>, EncodingError> {
        Ok(straight_widen(self.as_units()))
    }
}

impl<'a> ToUtf32 for Units<'a, Narrow> {
    fn to_utf32(&self) -> Result<Vec<u32>, EncodingError> {
        Ok(straight_widen(self.as_units()))
    }
}

impl<'a> ToNarrow for Units<'a, Narrow> {
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError> {
        Ok(self.as_units().to_vec())
    }

    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError> {
        self.to_narrow()
    }
}

impl<'a> ToWide for Units<'a, Narrow> {
    fn to_wide(&self) -> Result<Vec<WChar>, EncodingError> {
        Ok(straight_widen(self.as_units()))
    }
}

impl<'a> ToText for Units<'a, Narrow> {
    fn to_text(&self) -> Result<String, EncodingError> {
        decode_to_string::<Narrow>(self.as_units())
    }
}

/*
Multibyte.  Apart from the legacy pass-through, this is decoded as UTF-8.
*/

impl<'a> ToUtf8 for Units<'a, MultiByte> {
    fn to_utf8(&self) -> Result<Vec<u8>, EncodingError> {
        Ok(null_terminate(self.as_units().to_vec()))
    }
}

impl<'a> ToUtf16 for Units<'a, MultiByte> {
    fn to_utf16(&self) -> Result<Vec<u16>, EncodingError> {
        transcode::<MultiByte, Utf16>(self.as_units())
    }
}

impl<'a> ToUtf32 for Units<'a, MultiByte> {
    fn to_utf32(&self) -> Result<Vec<u32>, EncodingError> {
        transcode::<MultiByte, Utf32>(self.as_units())
    }
}

impl<'a> ToNarrow for Units<'a, MultiByte> {
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError> {
        narrow_from::<MultiByte>(self.as_units())
    }

    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError> {
        narrow_from_checked::<MultiByte>(self.as_units())
    }
}

impl<'a> ToWide for Units<'a, MultiByte> {
    fn to_wide(&self) -> Result<Vec<WChar>, EncodingError> {
        transcode::<MultiByte, Wide>(self.as_units())
    }
}

impl<'a> ToText for Units<'a, MultiByte> {
    fn to_text(&self) -> Result<String, EncodingError> {
        decode_to_string::<MultiByte>(self.as_units())
    }
}

impl<'a> ToLegacy for Units<'a, MultiByte> {
    fn to_legacy(&self) -> LegacyString {
        LegacyString::from_bytes(self.as_units())
    }
}

/*
UTF-8.  Output to UTF-8 is a copy; it is *not* validated.
*/

impl<'a> ToUtf8 for Units<'a, Utf8> {
    fn to_utf8(&self) -> Result<Vec<u8>, EncodingError> {
        Ok(null_terminate(self.as_units().to_vec()))
    }
}

impl<'a> ToUtf16 for Units<'a, Utf8> {
    fn to_utf16(&self) -> Result<Vec<u16>, EncodingError> {
        transcode::<Utf8, Utf16>(self.as_units())
    }
}

impl<'a> ToUtf32 for Units<'a, Utf8> {
    fn to_utf32(&self) -> Result<Vec<u32>, EncodingError> {
        transcode::<Utf8, Utf32>(self.as_units())
    }
}

impl<'a> ToNarrow for Units<'a, Utf8> {
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError> {
        narrow_from::<Utf8>(self.as_units())
    }

    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError> {
        narrow_from_checked::<Utf8>(self.as_units())
    }
}

impl<'a> ToWide for Units<'a, Utf8> {
    fn to_wide(&self) -> Result<Vec<WChar>, EncodingError> {
        transcode::<Utf8, Wide>(self.as_units())
    }
}

impl<'a> ToText for Units<'a, Utf8> {
    fn to_text(&self) -> Result<String, EncodingError> {
        decode_to_string::<Utf8>(self.as_units())
    }
}

impl<'a> ToLegacy for Units<'a, Utf8> {
    fn to_legacy(&self) -> LegacyString {
        LegacyString::from_bytes(self.as_units())
    }
}

/*
UTF-16.
*/

impl<'a> ToUtf8 for Units<'a, Utf16> {
    fn to_utf8(&self) -> Result<Vec<u8>, EncodingError> {
        transcode::<Utf16, Utf8>(self.as_units()).map(null_terminate)
    }
}

impl<'a> ToUtf16 for Units<'a, Utf16> {
    fn to_utf16(&self) -> Result<Vec<u16>, EncodingError> {
        Ok(self.as_units().to_vec())
    }
}

impl<'a> ToUtf32 for Units<'a, Utf16> {
    fn to_utf32(&self) -> Result<Vec<u32>, EncodingError> {
        transcode::<Utf16, Utf32>(self.as_units())
    }
}

impl<'a> ToNarrow for Units<'a, Utf16> {
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError> {
        narrow_from::<Utf16>(self.as_units())
    }

    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError> {
        narrow_from_checked::<Utf16>(self.as_units())
    }
}

impl<'a> ToWide for Units<'a, Utf16> {
    fn to_wide(&self) -> Result<Vec<WChar>, EncodingError> {
        transcode::<Utf16, Wide>(self.as_units())
    }
}

impl<'a> ToText for Units<'a, Utf16> {
    fn to_text(&self) -> Result<String, EncodingError> {
        decode_to_string::<Utf16>(self.as_units())
    }
}

/*
UTF-32.  Narrowing truncates unit by unit.
*/

impl<'a> ToUtf8 for Units<'a, Utf32> {
    fn to_utf8(&self) -> Result<Vec<u8>, EncodingError> {
        transcode::<Utf32, Utf8>(self.as_units()).map(null_terminate)
    }
}

impl<'a> ToUtf16 for Units<'a, Utf32> {
    fn to_utf16(&self) -> Result<Vec<u16>, EncodingError> {
        transcode::<Utf32, Utf16>(self.as_units())
    }
}

impl<'a> ToUtf32 for Units<'a, Utf32> {
    fn to_utf32(&self) -> Result<Vec<u32>, EncodingError> {
        Ok(self.as_units().to_vec())
    }
}

impl<'a> ToNarrow for Units<'a, Utf32> {
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError> {
        Ok(truncate_units::<Utf32>(self.as_units()))
    }

    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError> {
        narrow_from_checked::<Utf32>(self.as_units())
    }
}

impl<'a> ToWide for Units<'a, Utf32> {
    fn to_wide(&self) -> Result<Vec<WChar>, EncodingError> {
        transcode::<Utf32, Wide>(self.as_units())
    }
}

impl<'a> ToText for Units<'a, Utf32> {
    fn to_text(&self) -> Result<String, EncodingError> {
        decode_to_string::<Utf32>(self.as_units())
    }
}

/*
Wide.  Whether these are UTF-16 or UTF-32 conversions underneath is decided by `conv::wide`.
*/

impl<'a> ToUtf8 for Units<'a, Wide> {
    fn to_utf8(&self) -> Result<Vec<u8>, EncodingError> {
        transcode::<Wide, Utf8>(self.as_units()).map(null_terminate)
    }
}

impl<'a> ToUtf16 for Units<'a, Wide> {
    fn to_utf16(&self) -> Result<Vec<u16>, EncodingError> {
        transcode::<Wide, Utf16>(self.as_units())
    }
}

impl<'a> ToUtf32 for Units<'a, Wide> {
    fn to_utf32(&self) -> Result<Vec<u32>, EncodingError> {
        transcode::<Wide, Utf32>(self.as_units())
    }
}

impl<'a> ToNarrow for Units<'a, Wide> {
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError> {
        narrow_from::<Wide>(self.as_units())
    }

    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError> {
        narrow_from_checked::<Wide>(self.as_units())
    }
}

impl<'a> ToWide for Units<'a, Wide> {
    fn to_wide(&self) -> Result<Vec<WChar>, EncodingError> {
        Ok(self.as_units().to_vec())
    }
}

impl<'a> ToText for Units<'a, Wide> {
    fn to_text(&self) -> Result<String, EncodingError> {
        decode_to_string::<Wide>(self.as_units())
    }
}

/*
Rust strings.  These are always valid UTF-8, and like every other source end at the first zero unit.
*/

fn str_units(s: &str) -> Units<'_, Utf8> {
    Units::new(s.as_bytes())
}

impl ToUtf8 for str {
    fn to_utf8(&self) -> Result<Vec<u8>, EncodingError> {
        str_units(self).to_utf8()
    }
}

impl ToUtf16 for str {
    fn to_utf16(&self) -> Result<Vec<u16>, EncodingError> {
        str_units(self).to_utf16()
    }
}

impl ToUtf32 for str {
    fn to_utf32(&self) -> Result<Vec<u32>, EncodingError> {
        str_units(self).to_utf32()
    }
}

impl ToNarrow for str {
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError> {
        str_units(self).to_narrow()
    }

    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError> {
        str_units(self).to_narrow_checked()
    }
}

impl ToWide for str {
    fn to_wide(&self) -> Result<Vec<WChar>, EncodingError> {
        str_units(self).to_wide()
    }
}

impl ToText for str {
    fn to_text(&self) -> Result<String, EncodingError> {
        let len = self.find('\0').unwrap_or(self.len());
        Ok(self[..len].to_owned())
    }
}

impl ToLegacy for str {
    fn to_legacy(&self) -> LegacyString {
        str_units(self).to_legacy()
    }
}

macro_rules! string_impl {
    ($($tr:ident::$method:ident -> $res:ty),* $(,)*) => {
        $(
            impl $tr for String {
                fn $method(&self) -> $res {
                    self.as_str().$method()
                }
            }
        )*
    };
}

string_impl! {
    ToUtf8::to_utf8 -> Result<Vec<u8>, EncodingError>,
    ToUtf16::to_utf16 -> Result<Vec<u16>, EncodingError>,
    ToUtf32::to_utf32 -> Result<Vec<u32>, EncodingError>,
    ToWide::to_wide -> Result<Vec<WChar>, EncodingError>,
    ToText::to_text -> Result<String, EncodingError>,
    ToLegacy::to_legacy -> LegacyString,
}

impl ToNarrow for String {
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError> {
        self.as_str().to_narrow()
    }

    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError> {
        self.as_str().to_narrow_checked()
    }
}

/*
Narrow strings with an explicit fixed-width flag.
*/

macro_rules! narrow_source_impl {
    ($($tr:ident::$method:ident -> $res:ty),* $(,)*) => {
        $(
            impl<'a> $tr for NarrowSource<'a> {
                fn $method(&self) -> $res {
                    match *self {
                        NarrowSource::Fixed(ref units) => units.$method(),
                        NarrowSource::MultiByte(ref units) => units.$method(),
                    }
                }
            }
        )*
    };
}

narrow_source_impl! {
    ToUtf8::to_utf8 -> Result<Vec<u8>, EncodingError>,
    ToUtf16::to_utf16 -> Result<Vec<u16>, EncodingError>,
    ToUtf32::to_utf32 -> Result<Vec<u32>, EncodingError>,
    ToWide::to_wide -> Result<Vec<WChar>, EncodingError>,
    ToText::to_text -> Result<String, EncodingError>,
}

impl<'a> ToNarrow for NarrowSource<'a> {
    fn to_narrow(&self) -> Result<Vec<u8>, EncodingError> {
        match *self {
            NarrowSource::Fixed(ref units) => units.to_narrow(),
            NarrowSource::MultiByte(ref units) => units.to_narrow(),
        }
    }

    fn to_narrow_checked(&self) -> Result<Vec<u8>, EncodingError> {
        match *self {
            NarrowSource::Fixed(ref units) => units.to_narrow_checked(),
            NarrowSource::MultiByte(ref units) => units.to_narrow_checked(),
        }
    }
}

pub fn to_utf8<T>(src: &T) -> Result<Vec<u8>, EncodingError> where T: ToUtf8 + ?Sized {
    src.to_utf8()
}

pub fn to_utf16<T>(src: &T) -> Result<Vec<u16>, EncodingError> where T: ToUtf16 + ?Sized {
    src.to_utf16()
}

pub fn to_utf32<T>(src: &T) -> Result<Vec<u32>, EncodingError> where T: ToUtf32 + ?Sized {
    src.to_utf32()
}

pub fn to_narrow<T>(src: &T) -> Result<Vec<u8>, EncodingError> where T: ToNarrow + ?Sized {
    src.to_narrow()
}

pub fn to_narrow_checked<T>(src: &T) -> Result<Vec<u8>, EncodingError> where T: ToNarrow + ?Sized {
    src.to_narrow_checked()
}

pub fn to_wide<T>(src: &T) -> Result<Vec<WChar>, EncodingError> where T: ToWide + ?Sized {
    src.to_wide()
}

pub fn to_text<T>(src: &T) -> Result<String, EncodingError> where T: ToText + ?Sized {
    src.to_text()
}

pub fn to_legacy<T>(src: &T) -> LegacyString where T: ToLegacy + ?Sized {
    src.to_legacy()
}
