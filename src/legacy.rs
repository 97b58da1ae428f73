/*!
Owned legacy multibyte strings.
*/
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use libc::c_char;

use crate::driver::null_terminate;

/**
Represents an owned narrow string whose encoding is unknown.

A `LegacyString` holds raw bytes exactly as they were received; it has never been decoded, validated, or transcoded, and it never will be by this library.  It exists for migrating code that passes byte strings around without knowing what encoding they are in.  Prefer one of the explicitly encoded representations wherever possible, since a `LegacyString` is ambiguous to use when passed from function to function.

The contents are kept zero-terminated: a non-empty `LegacyString` always ends with a single zero byte, which is *not* part of its contents, making it safe to pass to foreign code expecting a C string via `as_ptr`.  An empty `LegacyString` holds no bytes at all.

Since the contents are copied up to the first zero byte, they never contain an interior zero.
*/
#[derive(Clone, Default)]
pub struct LegacyString {
    bytes: Vec<u8>,
}

impl LegacyString {
    pub fn new() -> Self {
        LegacyString { bytes: Vec::new() }
    }

    /**
    Constructs a `LegacyString` from a byte slice, copying up to, but not including, the first zero byte.
    */
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        LegacyString {
            bytes: null_terminate(bytes[..len].to_vec()),
        }
    }

    /**
    Returns the contents of this string.  This *does not* include the terminating zero.
    */
    pub fn as_bytes(&self) -> &[u8] {
        match self.bytes.split_last() {
            Some((_, content)) => content,
            None => &[],
        }
    }

    /**
    Returns the contents of this string, *including* the terminating zero.  This is empty if the string is empty.
    */
    pub fn as_bytes_with_term(&self) -> &[u8] {
        &self.bytes
    }

    /**
    Returns a pointer to the zero-terminated contents of this string, or null if it is empty.

    The returned pointer is valid for as long as the `LegacyString` is neither modified nor dropped.
    */
    pub fn as_ptr(&self) -> *const c_char {
        if self.bytes.is_empty() {
            ::std::ptr::null()
        } else {
            self.bytes.as_ptr() as *const c_char
        }
    }

    /**
    Consumes the string, returning the underlying buffer, *including* the terminating zero.
    */
    pub fn into_bytes_with_term(self) -> Vec<u8> {
        self.bytes
    }

    /**
    Consumes the string, returning its contents without the terminating zero.
    */
    pub fn into_bytes(self) -> Vec<u8> {
        let mut bytes = self.bytes;
        bytes.pop();
        bytes
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for LegacyString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Borrow<[u8]> for LegacyString {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Debug for LegacyString {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "ZMb\"")?;
        for &b in self.as_bytes() {
            for c in ::std::ascii::escape_default(b) {
                write!(fmt, "{}", c as char)?;
            }
        }
        write!(fmt, "\"")
    }
}

impl Deref for LegacyString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Eq for LegacyString {}

// Must agree with `Borrow<[u8]>`, so the terminator is left out.
impl Hash for LegacyString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl<'a> From<&'a [u8]> for LegacyString {
    fn from(v: &'a [u8]) -> Self {
        LegacyString::from_bytes(v)
    }
}

impl From<LegacyString> for Vec<u8> {
    fn from(v: LegacyString) -> Self {
        v.into_bytes()
    }
}

impl Ord for LegacyString {
    fn cmp(&self, other: &LegacyString) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl PartialEq for LegacyString {
    fn eq(&self, other: &LegacyString) -> bool {
        self.bytes == other.bytes
    }
}

impl PartialEq<[u8]> for LegacyString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<'a> PartialEq<&'a [u8]> for LegacyString {
    fn eq(&self, other: &&'a [u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for LegacyString {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_bytes() == &other[..]
    }
}

impl PartialEq<Vec<u8>> for LegacyString {
    fn eq(&self, other: &Vec<u8>) -> bool {
        self.as_bytes() == &other[..]
    }
}

impl PartialOrd for LegacyString {
    fn partial_cmp(&self, other: &LegacyString) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminated() {
        let s = LegacyString::from_bytes(b"\xc3\x28");
        assert_eq!(s.as_bytes(), b"\xc3\x28");
        assert_eq!(s.as_bytes_with_term(), b"\xc3\x28\x00");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_stops_at_zero() {
        let s = LegacyString::from_bytes(b"ab\0cd\0");
        assert_eq!(s, *b"ab");
        assert_eq!(s.into_bytes_with_term(), b"ab\0".to_vec());
    }

    #[test]
    fn test_empty() {
        let s = LegacyString::from_bytes(b"\0");
        assert!(s.is_empty());
        assert!(s.as_bytes_with_term().is_empty());
        assert!(s.as_ptr().is_null());
        assert_eq!(s, LegacyString::new());
    }

    #[test]
    fn test_lookup_by_bytes() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(LegacyString::from_bytes(b"ab"));
        set.insert(LegacyString::new());
        assert!(set.contains(&b"ab"[..]));
        assert!(set.contains(&b""[..]));
        assert!(!set.contains(&b"ab\0"[..]));
    }
}
