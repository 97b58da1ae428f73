/*!
Wide characters are 2 bytes wide, and hold UTF-16.

Since `wchar_t` *is* `u16` here, the UTF-16 codec is used directly.
*/
use libc::wchar_t;
use crate::encoding::Utf16;
use super::{utf16, DecodeError, EncodeError};

pub const WIDTH: usize = 2;

/**
The encoding native wide units are interpreted as.
*/
pub type NativeCodec = Utf16;

#[inline]
pub fn decode(units: &[wchar_t]) -> Result<(u32, usize), DecodeError> {
    utf16::decode(units)
}

#[inline]
pub fn encode(cp: u32, out: &mut Vec<wchar_t>) -> Result<(), EncodeError> {
    utf16::encode(cp, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrogate_pair() {
        let mut out = vec![];
        encode(0x1f600, &mut out).unwrap();
        assert_eq!(&out[..], &[0xd83d, 0xde00]);
        assert_eq!(decode(&out), Ok((0x1f600, 2)));
    }
}
