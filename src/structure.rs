/*!
Borrowed, zero-terminated source strings.
*/
use std::fmt::{self, Debug};
use std::marker::PhantomData;
use std::slice;

use crate::encoding::{Encoding, Narrow, MultiByte, Unit};

/**
Represents a borrowed source string in the encoding `E`.

The contents of a `Units` always end at the first zero unit, or at the end of the underlying slice, whichever comes first.  Any units after an interior zero are *not* part of the string, exactly as if the slice had been handed to foreign code as a zero-terminated pointer.

A `Units` can be obtained from a slice via `new`, or from a raw zero-terminated pointer via `from_ptr`.  A null pointer produces an empty string, which converts to an empty result of any representation.

`Units` never copies or modifies the data it borrows; every conversion produces a fresh, independently owned result.
*/
pub struct Units<'a, E> where E: Encoding {
    units: &'a [E::Unit],
    _marker: PhantomData<E>,
}

impl<'a, E> Units<'a, E> where E: Encoding {
    /**
    Borrows a string from a slice of units, ending at the first zero unit (if any).
    */
    pub fn new(units: &'a [E::Unit]) -> Self {
        let len = units.iter().position(|u| u.is_zero()).unwrap_or(units.len());
        Units {
            units: &units[..len],
            _marker: PhantomData,
        }
    }

    /**
    Returns an empty string.
    */
    pub fn empty() -> Self {
        Units {
            units: &[],
            _marker: PhantomData,
        }
    }

    /**
    Re-borrows a string from a foreign zero-terminated pointer.

    This method computes the length of the foreign string by scanning for the terminator.  If `ptr` is null, the result is an empty string.

    # Safety

    If `ptr` is non-null, it must point to a readable sequence of units ending with a zero unit.

    It is impossible to know for how long the provided pointer will remain valid.  Care should be taken to ensure that the returned `Units` *does not* outlive the original foreign string.
    */
    pub unsafe fn from_ptr(ptr: *const E::Unit) -> Self {
        if ptr.is_null() {
            return Units::empty();
        }

        let mut len = 0;
        let mut cur = ptr;

        while !(*cur).is_zero() {
            len += 1;
            cur = cur.offset(1);
        }

        Units {
            units: slice::from_raw_parts(ptr, len),
            _marker: PhantomData,
        }
    }

    /**
    Returns the units comprising this string.  This *does not* include the terminating zero.
    */
    pub fn as_units(&self) -> &'a [E::Unit] {
        self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

impl<'a> Units<'a, Narrow> {
    /**
    Chooses how this narrow string should be interpreted.

    If `fixed_width` is `true`, each byte is one code point (Latin-1).  If `false`, the string is treated as encoding-ambiguous multibyte data, and transcoded using UTF-8 rules.
    */
    pub fn fixed_width(self, fixed_width: bool) -> NarrowSource<'a> {
        if fixed_width {
            NarrowSource::Fixed(self)
        } else {
            NarrowSource::MultiByte(self.multibyte())
        }
    }

    /**
    Re-borrows this string as multibyte data.
    */
    pub fn multibyte(self) -> Units<'a, MultiByte> {
        Units {
            units: self.units,
            _marker: PhantomData,
        }
    }
}

/**
A narrow string, along with a decision as to whether it is fixed width.

See `Units::<Narrow>::fixed_width`.
*/
#[derive(Copy, Clone, Debug)]
pub enum NarrowSource<'a> {
    Fixed(Units<'a, Narrow>),
    MultiByte(Units<'a, MultiByte>),
}

impl<'a, E> Clone for Units<'a, E> where E: Encoding {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for Units<'a, E> where E: Encoding {}

impl<'a, E> Debug for Units<'a, E> where E: Encoding, E::Unit: Debug {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Z{}{:?}", E::debug_prefix(), self.units)
    }
}

impl<'a, E> Default for Units<'a, E> where E: Encoding {
    fn default() -> Self {
        Units::empty()
    }
}

impl<'a, E> From<&'a [E::Unit]> for Units<'a, E> where E: Encoding {
    fn from(v: &'a [E::Unit]) -> Self {
        Units::new(v)
    }
}

impl<'a, 'b, E> PartialEq<Units<'b, E>> for Units<'a, E> where E: Encoding {
    fn eq(&self, other: &Units<'b, E>) -> bool {
        self.units == other.units
    }
}

impl<'a, E> Eq for Units<'a, E> where E: Encoding {}
