/*!
This crate converts text between the representations commonly found at the boundary between Rust and other languages and environments: fixed-width narrow strings, encoding-ambiguous multibyte strings, platform wide strings, UTF-8 byte buffers, UTF-16, and UTF-32.

For more details, see the [additional documentation](doc/index.html).

# Quick Reference

Wrap the source in a `Units` of the appropriate encoding, then call the conversion for the destination you want.  The encoding of the source is *always* what you say it is; nothing is ever detected.

| Source | Encoding | Unit |
| ---: | --- | --- |
| Latin-1 / ASCII | `Narrow` | `u8` |
| Unknown multibyte | `MultiByte` | `u8` |
| UTF-8 | `Utf8` | `u8` |
| UTF-16 | `Utf16` | `u16` |
| UTF-32 | `Utf32` | `u32` |
| `wchar_t` | `Wide` | `WChar` |
| Rust string | (none; use `&str` directly) | |

```
use textconv::{to_utf16, to_utf8, Units, Utf32};

let units = Units::<Utf32>::new(&[0x67, 0x1f600, 0]);
assert_eq!(to_utf16(&units).unwrap(), vec![0x67, 0xd83d, 0xde00]);
assert_eq!(to_utf8(&units).unwrap(), b"g\xf0\x9f\x98\x80\0".to_vec());
```

Every conversion returns a freshly allocated result, and a null or empty source always produces an empty result.  Conversions fail with `EncodingError` only when the source cannot be decoded under its declared encoding, or a code point cannot be represented in the target; narrowing to fixed width is lossy and **never** fails unless you ask for the checked form.
*/
#[macro_use] extern crate log;

#[doc(hidden)] pub mod doc;
pub mod compare;
pub mod convert;
pub mod driver;
pub mod encoding;
pub mod legacy;
pub mod structure;

pub use compare::eq_ignore_case;
pub use convert::{ToLegacy, ToNarrow, ToText, ToUtf16, ToUtf32, ToUtf8, ToWide};
pub use convert::{to_legacy, to_narrow, to_narrow_checked, to_text, to_utf16, to_utf32, to_utf8, to_wide};
pub use encoding::conv::EncodingError;
pub use encoding::{MultiByte, Narrow, Utf16, Utf32, Utf8, WChar, Wide};
pub use legacy::LegacyString;
pub use structure::{NarrowSource, Units};

pub type ZNarrowStr<'a> = Units<'a, Narrow>;
pub type ZMbStr<'a> = Units<'a, MultiByte>;
pub type ZUtf8Str<'a> = Units<'a, Utf8>;
pub type ZUtf16Str<'a> = Units<'a, Utf16>;
pub type ZUtf32Str<'a> = Units<'a, Utf32>;
pub type ZWStr<'a> = Units<'a, Wide>;
