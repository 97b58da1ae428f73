/*!
Encoding conversion support.

The codec primitives in this module are pure functions: decoding looks at a slice of units and returns the first code point along with the number of units it occupied; encoding appends the units for a single code point.  Neither keeps any state between calls.
*/
use std::fmt;
use std::mem;
use libc::wchar_t;

pub mod utf8;
pub mod utf16;
pub mod utf32;

#[cfg(windows)]
pub mod wide16;

#[cfg(windows)]
pub use self::wide16 as wide;

#[cfg(not(windows))]
pub mod wide32;

#[cfg(not(windows))]
pub use self::wide32 as wide;

const _: () = assert!(
    mem::size_of::<wchar_t>() == wide::WIDTH,
    "wide dispatch does not match the width of wchar_t"
);

/**
The largest valid Unicode code point.
*/
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/**
Returns `true` if `cp` lies in the UTF-16 surrogate range.
*/
#[inline]
pub fn is_surrogate(cp: u32) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

/**
Failure to decode a single code point.

This carries no position; the drivers attach one when lifting it into an `EncodingError`.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The units do not form a valid sequence.
    Invalid,
    /// The input ended part way through a sequence.
    Incomplete,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DecodeError::Invalid => write!(fmt, "invalid unit sequence"),
            DecodeError::Incomplete => write!(fmt, "incomplete unit sequence"),
        }
    }
}

impl ::std::error::Error for DecodeError {}

/**
Failure to encode a single code point.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncodeError {
    OutOfRange(u32),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EncodeError::OutOfRange(cp) => write!(fmt, "code point {:#x} is out of range", cp),
        }
    }
}

impl ::std::error::Error for EncodeError {}

/**
The error raised when a conversion cannot be completed.

Each variant records the offset, in *source* units, at which the conversion failed.  A conversion which fails produces no output at all.

Note that lossy narrowing is *not* an error; only the checked narrowing functions return `UnrepresentableAt`.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EncodingError {
    InvalidAt(usize),
    IncompleteAt(usize),
    OutOfRangeAt(usize, u32),
    InvalidCodePointAt(usize, u32),
    UnrepresentableAt(usize, u32),
}

impl EncodingError {
    /**
    Returns the offset, in source units, at which the conversion failed.
    */
    pub fn offset(&self) -> usize {
        match *self {
            EncodingError::InvalidAt(at)
            | EncodingError::IncompleteAt(at)
            | EncodingError::OutOfRangeAt(at, _)
            | EncodingError::InvalidCodePointAt(at, _)
            | EncodingError::UnrepresentableAt(at, _) => at,
        }
    }

    pub(crate) fn from_decode(err: DecodeError, at: usize) -> Self {
        match err {
            DecodeError::Invalid => EncodingError::InvalidAt(at),
            DecodeError::Incomplete => EncodingError::IncompleteAt(at),
        }
    }

    pub(crate) fn from_encode(err: EncodeError, at: usize) -> Self {
        match err {
            EncodeError::OutOfRange(cp) => EncodingError::OutOfRangeAt(at, cp),
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            EncodingError::InvalidAt(at) => write!(fmt, "invalid unit at offset {}", at),
            EncodingError::IncompleteAt(at) => write!(fmt, "incomplete unit at offset {}", at),
            EncodingError::OutOfRangeAt(at, cp) => write!(fmt, "code point {:#x} at offset {} cannot be encoded", cp, at),
            EncodingError::InvalidCodePointAt(at, cp) => write!(fmt, "{:#x} at offset {} is not a Unicode scalar value", cp, at),
            EncodingError::UnrepresentableAt(at, cp) => write!(fmt, "code point {:#x} at offset {} does not fit in a narrow unit", cp, at),
        }
    }
}

impl ::std::error::Error for EncodingError {}
