/*!
UTF-16 codec.

Unpaired surrogates are not rejected: a surrogate unit that is not part of a valid pair decodes to its own value, and encoding a surrogate code point writes it back out as a single unit.
*/
use super::{DecodeError, EncodeError, MAX_CODE_POINT};

/**
Decodes the first code point in `units`.

This never fails for non-empty input.
*/
pub fn decode(units: &[u16]) -> Result<(u32, usize), DecodeError> {
    let cu0 = match units.first() {
        Some(&cu0) => cu0,
        None => return Err(DecodeError::Incomplete),
    };

    match cu0 {
        0xd800..=0xdbff => match units.get(1) {
            Some(&cu1) if (0xdc00..=0xdfff).contains(&cu1) => {
                let hi = (cu0 & 0x3ff) as u32;
                let lo = (cu1 & 0x3ff) as u32;
                Ok((0x10000 + ((hi << 10) | lo), 2))
            },
            _ => Ok((cu0 as u32, 1)),
        },
        cu0 => Ok((cu0 as u32, 1)),
    }
}

/**
Appends the UTF-16 encoding of `cp` to `out`.
*/
pub fn encode(cp: u32, out: &mut Vec<u16>) -> Result<(), EncodeError> {
    match cp {
        0x0000..=0xffff => out.push(cp as u16),
        0x10000..=MAX_CODE_POINT => {
            let v = cp - 0x10000;
            out.push(0xd800 | (v >> 10) as u16);
            out.push(0xdc00 | (v & 0x3ff) as u16);
        },
        _ => return Err(EncodeError::OutOfRange(cp)),
    }
    Ok(())
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

    #[test]
    fn test_lone_surrogates_pass_through() {
        assert_eq!(decode(&[0xd83d]), Ok((0xd83d, 1)));
        assert_eq!(decode(&[0xd83d, 0x0041]), Ok((0xd83d, 1)));
        assert_eq!(decode(&[0xde00, 0xd83d]), Ok((0xde00, 1)));

        let mut out = vec![];
        encode(0xde00, &mut out).unwrap();
        assert_eq!(&out[..], &[0xde00]);
    }

    #[test]
    fn test_encode_out_of_range() {
        let mut out = vec![];
        assert_eq!(encode(0x110000, &mut out), Err(EncodeError::OutOfRange(0x110000)));
    }
}
