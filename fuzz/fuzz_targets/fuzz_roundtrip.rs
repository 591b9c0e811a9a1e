#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything we can decode must re-encode to bytes we can decode
    // again, with an identical header and pixel buffer (the gap before
    // the pixel data is zero-filled, which decode never looks at).
    let Ok(image) = zenbmp::decode(data) else {
        return;
    };

    let reencoded = zenbmp::encode(&image);
    let again = zenbmp::decode(&reencoded).expect("re-encoded data failed to decode");

    assert_eq!(again.header(), image.header(), "roundtrip header mismatch");
    assert_eq!(again.pixels(), image.pixels(), "roundtrip pixel mismatch");
});
