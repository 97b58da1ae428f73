/*!
Generic conversion drivers.

Everything in the conversion matrix is built out of a handful of algorithms here: straight unit copies, code point transcoding, and byte buffer post-processing.  All of them operate on already-bounded unit slices; zero termination of the *source* is handled by `Units`.
*/
use std::marker::PhantomData;

use crate::encoding::conv::{is_surrogate, EncodingError, MAX_CODE_POINT};
use crate::encoding::{Codec, Encoding, Unit};

/**
Iterates over the code points in a slice of units.

Each item is either a code point, or the error that stopped decoding.  After an error, the iterator is exhausted.
*/
pub struct CodePoints<'a, C> where C: Codec {
    units: Option<&'a [C::Unit]>,
    at: usize,
    _marker: PhantomData<C>,
}

impl<'a, C> CodePoints<'a, C> where C: Codec {
    pub fn new(units: &'a [C::Unit]) -> Self {
        CodePoints {
            units: Some(units),
            at: 0,
            _marker: PhantomData,
        }
    }

    /**
    Returns the offset, in units, of the next code point.
    */
    pub fn offset(&self) -> usize {
        self.at
    }
}

impl<'a, C> Iterator for CodePoints<'a, C> where C: Codec {
    type Item = Result<u32, EncodingError>;

    fn next(&mut self) -> Option<Self::Item> {
        let units = match self.units {
            Some(units) if !units.is_empty() => units,
            _ => return None,
        };

        match C::decode(units) {
            Ok((cp, used)) => {
                self.units = Some(&units[used..]);
                self.at += used;
                Some(Ok(cp))
            },
            Err(err) => {
                self.units = None;
                Some(Err(EncodingError::from_decode(err, self.at)))
            },
        }
    }
}

/**
Copies each unit of `src` into a unit of type `D`.

When `D` is at least as wide as `S`, this zero-extends each unit.  When `D` is narrower, this is a **lossy truncation**: only the low-order bits of each unit are kept, and no error is raised.  Callers which need validated narrowing should use `narrow_from_checked` instead.
*/
pub fn straight_widen<S, D>(src: &[S]) -> Vec<D> where S: Unit, D: Unit {
    src.iter().map(|&u| D::from_u32_lossy(u.to_u32())).collect()
}

/**
Truncates each unit of `src` to a single byte, without decoding it first.
*/
pub fn truncate_units<S>(src: &[S::Unit]) -> Vec<u8> where S: Encoding {
    let out = straight_widen(src);
    if src.iter().any(|&u| u.to_u32() > 0xff) {
        trace!("narrowing from {} truncated one or more units", S::debug_prefix());
    }
    out
}

/**
Decodes `src` as `S`, and re-encodes each code point as `D`.

The first failure aborts the conversion; there is no partial output.
*/
pub fn transcode<S, D>(src: &[S::Unit]) -> Result<Vec<D::Unit>, EncodingError>
where
    S: Codec,
    D: Codec,
{
    let mut out = Vec::with_capacity(src.len());
    let mut cps = CodePoints::<S>::new(src);

    loop {
        let at = cps.offset();
        let cp = match cps.next() {
            Some(Ok(cp)) => cp,
            Some(Err(err)) => return Err(aborted::<S, D>(err)),
            None => break,
        };

        if let Err(err) = D::encode(cp, &mut out) {
            return Err(aborted::<S, D>(EncodingError::from_encode(err, at)));
        }
    }

    Ok(out)
}

/**
Decodes `src` as `S`, and truncates each code point to a single byte.

As with `straight_widen`, anything above `0xFF` is silently truncated.
*/
pub fn narrow_from<S>(src: &[S::Unit]) -> Result<Vec<u8>, EncodingError> where S: Codec {
    let mut lossy = false;
    let out = CodePoints::<S>::new(src)
        .map(|cp| cp.map(|cp| {
            lossy |= cp > 0xff;
            u8::from_u32_lossy(cp)
        }))
        .collect::<Result<Vec<_>, _>>()
        .map_err(aborted::<S, crate::encoding::Narrow>)?;
    if lossy {
        trace!("narrowing from {} truncated one or more code points", S::debug_prefix());
    }
    Ok(out)
}

/**
Decodes `src` as `S`, and converts each code point to a single byte.

Unlike `narrow_from`, this fails with `EncodingError::UnrepresentableAt` if any code point is above `0xFF`.
*/
pub fn narrow_from_checked<S>(src: &[S::Unit]) -> Result<Vec<u8>, EncodingError> where S: Codec {
    let mut out = Vec::with_capacity(src.len());
    let mut cps = CodePoints::<S>::new(src);

    loop {
        let at = cps.offset();
        match cps.next() {
            Some(Ok(cp)) if cp <= 0xff => out.push(cp as u8),
            Some(Ok(cp)) => return Err(aborted::<S, crate::encoding::Narrow>(EncodingError::UnrepresentableAt(at, cp))),
            Some(Err(err)) => return Err(aborted::<S, crate::encoding::Narrow>(err)),
            None => break,
        }
    }

    Ok(out)
}

/**
Decodes `src` as `S` into a Rust string.

This fails with `EncodingError::InvalidCodePointAt` if any decoded code point is not a Unicode scalar value (*i.e.* it is an unpaired surrogate, or beyond `U+10FFFF`).
*/
pub fn decode_to_string<S>(src: &[S::Unit]) -> Result<String, EncodingError> where S: Codec {
    let mut out = String::with_capacity(src.len());
    let mut cps = CodePoints::<S>::new(src);

    loop {
        let at = cps.offset();
        let cp = match cps.next() {
            Some(Ok(cp)) => cp,
            Some(Err(err)) => return Err(aborted_to_text::<S>(err)),
            None => break,
        };

        match char::from_u32(cp) {
            Some(c) => out.push(c),
            None => {
                debug_assert!(is_surrogate(cp) || cp > MAX_CODE_POINT);
                return Err(aborted_to_text::<S>(EncodingError::InvalidCodePointAt(at, cp)));
            },
        }
    }

    Ok(out)
}

/**
Ensures a non-empty byte buffer ends with a zero terminator, appending one if it is absent.

Empty buffers are returned unchanged.
*/
pub fn null_terminate(mut buf: Vec<u8>) -> Vec<u8> {
    if buf.last().map_or(false, |&b| b != 0) {
        buf.push(0);
    }
    buf
}

fn aborted<S, D>(err: EncodingError) -> EncodingError where S: Encoding, D: Encoding {
    debug!("conversion from {} to {} failed: {}", S::debug_prefix(), D::debug_prefix(), err);
    err
}

fn aborted_to_text<S>(err: EncodingError) -> EncodingError where S: Encoding {
    debug!("conversion from {} to String failed: {}", S::debug_prefix(), err);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Narrow, Utf16, Utf32, Utf8};

    #[test]
    fn test_code_points_fuse_after_error() {
        let mut cps = CodePoints::<Utf8>::new(b"a\xc3\x28b");
        assert_eq!(cps.next(), Some(Ok(0x61)));
        assert_eq!(cps.next(), Some(Err(EncodingError::InvalidAt(1))));
        assert_eq!(cps.next(), None);
    }

    #[test]
    fn test_straight_widen_and_truncate() {
        let wide: Vec<u32> = straight_widen(&b"g\xaar"[..]);
        assert_eq!(wide, vec![0x67, 0xaa, 0x72]);
        let narrow: Vec<u8> = straight_widen(&[0x1f600u32, 0x41]);
        assert_eq!(narrow, vec![0x00, 0x41]);
    }

    #[test]
    fn test_truncate_units() {
        assert_eq!(truncate_units::<Utf32>(&[0x41, 0x1f600, 0xe7]), vec![0x41, 0x00, 0xe7]);
        assert_eq!(truncate_units::<Utf32>(&[]), Vec::<u8>::new());
    }

    #[test]
    fn test_transcode_reports_offset() {
        let err = transcode::<Utf8, Utf16>(b"ab\xe2\x82").unwrap_err();
        assert_eq!(err, EncodingError::IncompleteAt(2));

        let err = transcode::<Utf32, Utf8>(&[0x41, 0x110000]).unwrap_err();
        assert_eq!(err, EncodingError::OutOfRangeAt(1, 0x110000));
    }

    #[test]
    fn test_narrow_from_checked() {
        assert_eq!(narrow_from_checked::<Utf16>(&[0x67, 0xaa]), Ok(vec![0x67, 0xaa]));
        assert_eq!(
            narrow_from_checked::<Utf16>(&[0x67, 0xd83d, 0xde00]),
            Err(EncodingError::UnrepresentableAt(1, 0x1f600))
        );
        assert_eq!(narrow_from::<Utf16>(&[0x67, 0xd83d, 0xde00]), Ok(vec![0x67, 0x00]));
    }

    #[test]
    fn test_decode_to_string() {
        assert_eq!(decode_to_string::<Narrow>(b"g\xaar\xe7on").unwrap(), "gªrçon");
        assert_eq!(
            decode_to_string::<Utf16>(&[0x41, 0xd83d]),
            Err(EncodingError::InvalidCodePointAt(1, 0xd83d))
        );
    }

    #[test]
    fn test_null_terminate() {
        assert_eq!(null_terminate(vec![]), Vec::<u8>::new());
        assert_eq!(null_terminate(vec![0x61]), vec![0x61, 0]);
        assert_eq!(null_terminate(vec![0x61, 0]), vec![0x61, 0]);
    }
}
