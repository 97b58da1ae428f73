extern crate textconv;

use textconv::{to_legacy, to_narrow, to_text, to_utf16, to_utf8, to_wide, Units, Utf8};

const WORD: &'static [u8] = b"g\xc2\xaar\xc3\xa7on\0";

fn main() {
    let word = Units::<Utf8>::new(WORD);
    println!("source: {:?}", word);

    match to_text(&word) {
        Ok(s) => println!("text: {:?}", s),
        Err(err) => println!("text: failed: {}", err),
    }

    println!("utf-8: {:?}", to_utf8(&word));
    println!("utf-16: {:?}", to_utf16(&word));
    println!("wide: {:?}", to_wide(&word));
    println!("narrow: {:?}", to_narrow(&word));
    println!("legacy: {:?}", to_legacy(&word));

    // Invalid UTF-8 is rejected, except by the legacy pass-through.
    let bad = Units::<Utf8>::new(b"\xc3\x28\0");
    println!("bad utf-16: {:?}", to_utf16(&bad));
    println!("bad legacy: {:?}", to_legacy(&bad));
}
