/*!
UTF-8 codec.
*/
use super::{is_surrogate, DecodeError, EncodeError, MAX_CODE_POINT};

/**
Decodes the first code point in `units`.

Decoding is strict: overlong forms, encoded surrogates, values beyond `U+10FFFF`, stray continuation bytes, and bad continuation bytes are all `Invalid`.  A sequence cut short by the end of `units` is `Incomplete`.
*/
pub fn decode(units: &[u8]) -> Result<(u32, usize), DecodeError> {
    let cu0 = match units.first() {
        Some(&cu0) => cu0,
        None => return Err(DecodeError::Incomplete),
    };

    let (len, init, min) = match cu0 {
        0x00..=0x7f => return Ok((cu0 as u32, 1)),
        0xc2..=0xdf => (2, (cu0 & 0x1f) as u32, 0x80),
        0xe0..=0xef => (3, (cu0 & 0x0f) as u32, 0x800),
        0xf0..=0xf4 => (4, (cu0 & 0x07) as u32, 0x10000),
        // Continuation bytes, `0xc0`/`0xc1` (always overlong), and `0xf5..`.
        _ => return Err(DecodeError::Invalid),
    };

    let mut cp = init;
    for i in 1..len {
        let cu = match units.get(i) {
            Some(&cu) => cu,
            None => return Err(DecodeError::Incomplete),
        };
        if cu & 0xc0 != 0x80 {
            return Err(DecodeError::Invalid);
        }
        cp = (cp << 6) | (cu & 0x3f) as u32;
    }

    if cp < min || cp > MAX_CODE_POINT || is_surrogate(cp) {
        return Err(DecodeError::Invalid);
    }

    Ok((cp, len))
}

/**
Returns the number of bytes needed to encode `cp`, or `None` if it is out of range.
*/
#[inline]
pub fn encoded_len(cp: u32) -> Option<usize> {
    match cp {
        0x0000..=0x007f => Some(1),
        0x0080..=0x07ff => Some(2),
        0x0800..=0xffff => Some(3),
        0x10000..=MAX_CODE_POINT => Some(4),
        _ => None,
    }
}

/**
Appends the UTF-8 encoding of `cp` to `out`.

Lone surrogates are written in their generalised three-byte form rather than rejected, so that unpaired UTF-16 units pass through.
*/
pub fn encode(cp: u32, out: &mut Vec<u8>) -> Result<(), EncodeError> {
    match encoded_len(cp) {
        Some(1) => out.push(cp as u8),
        Some(2) => out.extend_from_slice(&[
            0xc0 | (cp >> 6) as u8,
            0x80 | (cp & 0x3f) as u8,
        ]),
        Some(3) => out.extend_from_slice(&[
            0xe0 | (cp >> 12) as u8,
            0x80 | ((cp >> 6) & 0x3f) as u8,
            0x80 | (cp & 0x3f) as u8,
        ]),
        Some(_) => out.extend_from_slice(&[
            0xf0 | (cp >> 18) as u8,
            0x80 | ((cp >> 12) & 0x3f) as u8,
            0x80 | ((cp >> 6) & 0x3f) as u8,
            0x80 | (cp & 0x3f) as u8,
        ]),
        None => return Err(EncodeError::OutOfRange(cp)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_lengths() {
        assert_eq!(decode(b"a"), Ok((0x61, 1)));
        assert_eq!(decode(b"\xc2\xaa"), Ok((0xaa, 2)));
        assert_eq!(decode(b"\xe2\x82\xac"), Ok((0x20ac, 3)));
        assert_eq!(decode(b"\xf0\x9f\x98\x80"), Ok((0x1f600, 4)));
        // Only the first code point is consumed.
        assert_eq!(decode(b"\xc3\xa7on"), Ok((0xe7, 2)));
    }

    #[test]
    fn test_decode_invalid() {
        assert_eq!(decode(b"\xc0\x00"), Err(DecodeError::Invalid));
        assert_eq!(decode(b"\xc3\x28"), Err(DecodeError::Invalid));
        assert_eq!(decode(b"\x80"), Err(DecodeError::Invalid));
        assert_eq!(decode(b"\xe0\x80\xaf"), Err(DecodeError::Invalid));
        assert_eq!(decode(b"\xed\xa0\x80"), Err(DecodeError::Invalid));
        assert_eq!(decode(b"\xf4\x90\x80\x80"), Err(DecodeError::Invalid));
        assert_eq!(decode(b"\xff"), Err(DecodeError::Invalid));
    }

    #[test]
    fn test_decode_incomplete() {
        assert_eq!(decode(b"\xe2\x82"), Err(DecodeError::Incomplete));
        assert_eq!(decode(b"\xf0"), Err(DecodeError::Incomplete));
    }

    #[test]
    fn test_encode() {
        let mut out = vec![];
        encode(0x67, &mut out).unwrap();
        encode(0xaa, &mut out).unwrap();
        encode(0x20ac, &mut out).unwrap();
        encode(0x1f600, &mut out).unwrap();
        assert_eq!(&out[..], "gª€😀".as_bytes());
    }

    #[test]
    fn test_encode_lone_surrogate() {
        let mut out = vec![];
        encode(0xd800, &mut out).unwrap();
        assert_eq!(&out[..], b"\xed\xa0\x80");
    }

    #[test]
    fn test_encode_out_of_range() {
        let mut out = vec![];
        assert_eq!(encode(0x110000, &mut out), Err(EncodeError::OutOfRange(0x110000)));
        assert!(out.is_empty());
    }
}
