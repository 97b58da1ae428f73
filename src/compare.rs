/*!
Case-insensitive comparison.
*/
use crate::encoding::{Encoding, Unit};
use crate::structure::Units;

#[inline]
fn fold<U>(u: U) -> u32 where U: Unit {
    match u.to_u32() {
        cp @ 0x41..=0x5a => cp + 0x20,
        cp => cp,
    }
}

/**
Compares two unit sequences for equality, ignoring the case of ASCII letters.

Only `A`-`Z` and `a`-`z` are folded; every other unit must match exactly.  This does no decoding, so it is only meaningful for text which is ASCII, or which uses an ASCII-compatible encoding.
*/
pub fn eq_ignore_case<U>(a: &[U], b: &[U]) -> bool where U: Unit {
    a.len() == b.len()
        && a.iter().zip(b).all(|(&x, &y)| fold(x) == fold(y))
}

impl<'a, E> Units<'a, E> where E: Encoding {
    /**
    Compares this string with `other`, ignoring the case of ASCII letters.  See `eq_ignore_case`.
    */
    pub fn eq_ignore_case(&self, other: &Units<'_, E>) -> bool {
        eq_ignore_case(self.as_units(), other.as_units())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{Narrow, Utf16};

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case(&b"Hello"[..], &b"hELLO"[..]));
        assert!(!eq_ignore_case(&b"Hello"[..], &b"Hell"[..]));
        assert!(!eq_ignore_case(&b"\xc0"[..], &b"\xe0"[..]));
        assert!(eq_ignore_case::<u16>(&[0x41, 0x1f6], &[0x61, 0x1f6]));
    }

    #[test]
    fn test_units_stop_at_terminator() {
        let a = Units::<Narrow>::new(b"CNTK\0ignored");
        let b = Units::<Narrow>::new(b"cntk");
        assert!(a.eq_ignore_case(&b));

        let c = Units::<Utf16>::new(&[0x58, 0x59]);
        let d = Units::<Utf16>::new(&[0x78, 0x79, 0x00]);
        assert!(c.eq_ignore_case(&d));
    }
}
