//! Radix resolution and the digit accumulator shared by every parser.
//!
//! Both functions are pure and never fail; the callers in [`crate::parser`]
//! decide what an empty scan or an overflow means.

#[cfg(test)]
#[path = "./radix_tests.rs"]
mod tests;

/// The largest base accepted by the parsers.
pub const MAX_RADIX: u32 = 16;

/// Outcome of scanning a run of digits with [`accumulate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accumulated {
    /// The accumulated value. Meaningless once `overflow` is set.
    pub value: u64,
    /// Number of digit bytes consumed from the start of the input.
    pub consumed: usize,
    /// Set when the digits describe a value larger than [`u64::MAX`].
    pub overflow: bool,
}

/// Resolves the effective base for `s` and skips a `0x`/`0X` prefix.
///
/// A `base` of `0` requests autodetection: a leading `0x` followed by a hex
/// digit selects base 16, any other leading `0` selects base 8, and
/// everything else is base 10. Whenever the resulting base is 16 a `0x`
/// prefix is stripped, including when the caller asked for base 16
/// explicitly.
///
/// # Examples
///
/// ```
/// use strict_int::resolve_radix;
///
/// assert_eq!(resolve_radix(b"0x1A", 0), (16, &b"1A"[..]));
/// assert_eq!(resolve_radix(b"017", 0), (8, &b"017"[..]));
/// assert_eq!(resolve_radix(b"0xff", 16), (16, &b"ff"[..]));
/// assert_eq!(resolve_radix(b"0xff", 10), (10, &b"0xff"[..]));
/// ```
pub fn resolve_radix(s: &[u8], base: u32) -> (u32, &[u8]) {
    let mut base = base;
    if base == 0 {
        base = match s {
            [b'0', x, h, ..] if x.eq_ignore_ascii_case(&b'x') && h.is_ascii_hexdigit() => 16,
            [b'0', ..] => 8,
            _ => 10,
        };
    }
    if base == 16 {
        if let [b'0', b'x' | b'X', rest @ ..] = s {
            return (base, rest);
        }
    }
    (base, s)
}

/// Value of a single ASCII digit, accepting `a-f` in either case.
#[inline]
fn digit_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'a'..=b'f' => Some((b - b'a') as u32 + 10),
        b'A'..=b'F' => Some((b - b'A') as u32 + 10),
        _ => None,
    }
}

/// Accumulates the leading digits of `s` in the given `base`.
///
/// Scanning stops at the first byte that is not a digit of `base`; that is
/// not an error, and a scan that consumes nothing is reported as
/// `consumed == 0`. Once the running value would exceed [`u64::MAX`] the
/// `overflow` flag is set and stays set while the remaining digits are still
/// counted, so `consumed` always locates the end of the digit run.
///
/// A `base` outside `2..=16` consumes nothing.
///
/// # Examples
///
/// ```
/// use strict_int::accumulate;
///
/// let acc = accumulate(b"777z", 8);
/// assert_eq!((acc.value, acc.consumed, acc.overflow), (0o777, 3, false));
///
/// let acc = accumulate(b"18446744073709551616", 10);
/// assert_eq!((acc.consumed, acc.overflow), (20, true));
/// ```
pub fn accumulate(s: &[u8], base: u32) -> Accumulated {
    let mut acc = Accumulated::default();
    if base < 2 || base > MAX_RADIX {
        return acc;
    }

    let radix = base as u64;
    for &b in s {
        let Some(digit) = digit_value(b) else {
            break;
        };
        if digit >= base {
            break;
        }
        let digit = digit as u64;
        // value * radix + digit <= MAX  <=>  value <= (MAX - digit) / radix
        if acc.value > (u64::MAX - digit) / radix {
            acc.overflow = true;
        }
        acc.value = acc.value.wrapping_mul(radix).wrapping_add(digit);
        acc.consumed += 1;
    }
    acc
}
