/*!
Wide characters are 4 bytes wide, and hold UTF-32.

`wchar_t` is signed on some of these targets; units are reinterpreted as `u32` bit patterns, so a negative unit decodes to a code point beyond `U+10FFFF` and fails to encode anywhere.
*/
use libc::wchar_t;
use crate::encoding::{Unit, Utf32};
use super::{utf32, DecodeError, EncodeError};

pub const WIDTH: usize = 4;

/**
The fixed-width encoding native wide units are interpreted as.
*/
pub type NativeCodec = Utf32;

#[inline]
pub fn decode(units: &[wchar_t]) -> Result<(u32, usize), DecodeError> {
    match units.first() {
        Some(&cu) => utf32::decode(&[cu.to_u32()]),
        None => Err(DecodeError::Incomplete),
    }
}

#[inline]
pub fn encode(cp: u32, out: &mut Vec<wchar_t>) -> Result<(), EncodeError> {
    let cp = utf32::check(cp)?;
    out.push(wchar_t::from_u32_lossy(cp));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let mut out = vec![];
        encode(0x1f600, &mut out).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(decode(&out), Ok((0x1f600, 1)));
    }

    #[test]
    fn test_out_of_range() {
        let mut out = vec![];
        assert_eq!(encode(0x110000, &mut out), Err(EncodeError::OutOfRange(0x110000)));
    }
}
