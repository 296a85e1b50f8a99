#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let parsed = strict_int::parse_bool(data).ok();
    let expected = match data {
        [b'y' | b'Y' | b'1', ..] => Some(true),
        [b'n' | b'N' | b'0', ..] => Some(false),
        [b'o' | b'O', b'n' | b'N', ..] => Some(true),
        [b'o' | b'O', b'f' | b'F', ..] => Some(false),
        _ => None,
    };
    assert_eq!(parsed, expected, "{data:?}");

    // only the first two bytes matter
    if data.len() > 2 {
        assert_eq!(strict_int::parse_bool(&data[..2]).ok(), parsed);
    }
});
