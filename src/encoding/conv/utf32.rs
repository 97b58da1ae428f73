/*!
UTF-32 codec.
*/
use super::{DecodeError, EncodeError, MAX_CODE_POINT};

/**
Decodes the first code point in `units`.  Each unit is taken as a code point verbatim; range checks happen when the code point is encoded elsewhere.
*/
#[inline]
pub fn decode(units: &[u32]) -> Result<(u32, usize), DecodeError> {
    match units.first() {
        Some(&cu) => Ok((cu, 1)),
        None => Err(DecodeError::Incomplete),
    }
}

/**
Returns `cp` unchanged if it can be encoded as UTF-32.
*/
#[inline]
pub fn check(cp: u32) -> Result<u32, EncodeError> {
    if cp > MAX_CODE_POINT {
        return Err(EncodeError::OutOfRange(cp));
    }
    Ok(cp)
}

#[inline]
pub fn encode(cp: u32, out: &mut Vec<u32>) -> Result<(), EncodeError> {
    out.push(check(cp)?);
    Ok(())
}
