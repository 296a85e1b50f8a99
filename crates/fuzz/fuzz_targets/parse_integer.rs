#![no_main]

use libfuzzer_sys::fuzz_target;

/// Straightforward model using 128-bit arithmetic.
fn model(input: &[u8], base: u32, signed: bool) -> Option<i128> {
    let (negative, rest) = match input {
        [b'-', rest @ ..] if signed => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, input),
    };
    let rest = rest.strip_suffix(b"\n").unwrap_or(rest);
    let hex_prefixed = rest.len() > 2
        && rest[0] == b'0'
        && (rest[1] == b'x' || rest[1] == b'X')
        && rest[2].is_ascii_hexdigit();
    let base = match base {
        0 if hex_prefixed => 16,
        0 if rest.first() == Some(&b'0') => 8,
        0 => 10,
        2..=16 => base,
        _ => return None,
    };
    let digits = if base == 16 && rest.len() >= 2 && rest[0] == b'0' && (rest[1] | 0x20) == b'x' {
        &rest[2..]
    } else {
        rest
    };
    if digits.is_empty() {
        return None;
    }
    let mut value: u128 = 0;
    for &b in digits {
        let d = (b as char).to_digit(base)?;
        value = value * base as u128 + d as u128;
        if value > u64::MAX as u128 {
            return None;
        }
    }
    let value = value as i128;
    let value = if negative { -value } else { value };
    if signed && (value < i64::MIN as i128 || value > i64::MAX as i128) {
        return None;
    }
    Some(value)
}

fuzz_target!(|data: &[u8]| {
    let Some((&base, input)) = data.split_first() else {
        return;
    };
    let base = (base % 18) as u32;

    let unsigned = strict_int::parse_unsigned(input, base).ok();
    assert_eq!(unsigned.map(i128::from), model(input, base, false), "{input:?} base {base}");

    let signed = strict_int::parse_signed(input, base).ok();
    assert_eq!(signed.map(i128::from), model(input, base, true), "{input:?} base {base}");

    let narrow = strict_int::parse_i16(input, base).ok();
    let expected = signed.and_then(|v| i16::try_from(v).ok());
    assert_eq!(narrow, expected, "{input:?} base {base}");

    let narrow = strict_int::parse_u8(input, base).ok();
    let expected = unsigned.and_then(|v| u8::try_from(v).ok());
    assert_eq!(narrow, expected, "{input:?} base {base}");
});
