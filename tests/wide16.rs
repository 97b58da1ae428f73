#![cfg(windows)]
extern crate textconv;

macro_rules! here { () => { &format!(concat!(file!(), ":{:?}"), line!()) } }

use std::mem;
use textconv::encoding::conv::wide;
use textconv::{to_narrow, to_utf16, to_utf32, to_wide, Units, Utf16, Utf32, WChar, Wide};

#[test]
fn test_width() {
    assert_eq!(wide::WIDTH, 2);
    assert_eq!(mem::size_of::<WChar>(), 2);
}

#[test]
fn test_garcon() {
    const WORD: &'static str = "gªrçon";
    const WORD_W: &'static [WChar] = &[0x67, 0xAA, 0x72, 0xE7, 0x6F, 0x6E, 0x00];

    let zwstr = Units::<Wide>::new(WORD_W);
    assert_eq!(to_wide(WORD).expect(here!()), &WORD_W[..6]);
    assert_eq!(to_utf16(&zwstr).expect(here!()), vec![0x67, 0xAA, 0x72, 0xE7, 0x6F, 0x6E]);
    assert_eq!(to_narrow(&zwstr).expect(here!()), b"g\xaar\xe7on".to_vec());
}

#[test]
fn test_surrogate_pairs() {
    let utf32 = Units::<Utf32>::new(&[0x1f600]);
    let wide = to_wide(&utf32).expect(here!());
    assert_eq!(wide, vec![0xd83d, 0xde00]);

    assert_eq!(to_utf32(&Units::<Wide>::new(&wide)).expect(here!()), vec![0x1f600]);
    assert_eq!(to_utf16(&Units::<Wide>::new(&wide)).expect(here!()), vec![0xd83d, 0xde00]);

    // Unpaired surrogates are copied through unchanged.
    let lone = Units::<Utf16>::new(&[0xde00, 0x41]);
    assert_eq!(to_wide(&lone).expect(here!()), vec![0xde00, 0x41]);
}
