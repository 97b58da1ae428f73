/*!
Additional documentation.

# Representations

These tables summarise the representations this crate converts between.  Prefixes are used in type aliases and debug output.

## Encodings

See the `encoding` module.

| Prefix  | Name        | Unit | Encoding |
| ------- | ----------- | ---- | -------- |
| `N`     | `Narrow`    | `u8` | Fixed-width narrow text.  One byte is one code point in `0..=0xFF` (*i.e.* Latin-1). |
| `Mb`    | `MultiByte` | `u8` | Narrow text in an *unknown* multibyte encoding.  Passed through by the legacy entry points; decoded as UTF-8 everywhere else. |
| `Utf8`  | `Utf8`      | `u8` | UTF-8. |
| `Utf16` | `Utf16`     | `u16` | UTF-16.  Unpaired surrogates are passed through. |
| `Utf32` | `Utf32`     | `u32` | UTF-32. |
| `W`     | `Wide`      | `WChar` | The platform `wchar_t`: UTF-16 on Windows, UTF-32 elsewhere. |

## Structures

All sources are zero-terminated: a `Units` ends at its first zero unit.  The `Z` prefix on debug output and type aliases reflects this.

| Result | Terminated? |
| ------ | ----------- |
| UTF-8 `Vec<u8>` | Yes, with exactly one trailing zero, unless empty. |
| `LegacyString` | Yes, with a zero that is *not* part of the contents, unless empty. |
| `Vec<u16>`, `Vec<u32>`, `Vec<WChar>`, narrow `Vec<u8>`, `String` | No. |

# Conversion paths

| from \ to | UTF-8 | UTF-16 | UTF-32 | Narrow | Wide | `String` | Legacy |
| --------- | ----- | ------ | ------ | ------ | ---- | -------- | ------ |
| Narrow    | copy  | widen  | widen  | copy   | widen | Latin-1 | - |
| MultiByte | copy  | decode | decode | decode, truncate | decode | decode | copy |
| UTF-8     | copy  | decode | decode | decode, truncate | decode | decode | copy |
| UTF-16    | encode | copy | transcode | decode, truncate | transcode | decode | - |
| UTF-32    | encode | transcode | copy | truncate | transcode | decode | - |
| Wide      | encode | transcode | transcode | decode, truncate | copy | decode | - |
| `str`     | copy  | decode | decode | decode, truncate | decode | copy | copy |

"copy" never validates.  In particular, converting narrow or multibyte text to UTF-8 copies the bytes as-is.

# Common Misconceptions and Mistakes

* *"A `LegacyString` is UTF-8."*  It is whatever it was when it was received.  This library makes no claim as to its encoding, and never will.

* *"Narrowing will tell me if it loses data."*  `to_narrow` silently keeps only the low-order byte of each code point.  Use `to_narrow_checked` if you need to know.

* *"The wide encoding is UTF-32."*  On Windows, it's UTF-16.  The width is fixed when this crate is built, and never changes at run time.

* *"Null pointers are errors."*  A null source pointer is simply an empty string, and converts to an empty result.
*/
