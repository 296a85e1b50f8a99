use crate::{
    Span,
    error::{Error, ErrorKind},
    radix::{accumulate, resolve_radix},
};

#[cfg(test)]
#[path = "./parser_tests.rs"]
mod tests;

// ---------------------------------------------------------------------------
// Cursor over the input bytes. The end of the slice is the terminator.
// ---------------------------------------------------------------------------

struct Parser<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }

    #[inline]
    fn peek_byte(&self) -> Option<u8> {
        self.bytes.get(self.cursor).copied()
    }

    #[inline]
    fn eat_byte(&mut self, b: u8) -> bool {
        if self.peek_byte() == Some(b) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    fn error(&self, start: usize, end: usize, kind: ErrorKind) -> Error {
        Error {
            kind,
            span: Span::at(start, end),
        }
    }

    /// Error for an unexpected byte at the cursor, or an empty span at EOF.
    fn invalid_here(&self) -> Error {
        let end = (self.cursor + 1).min(self.bytes.len());
        self.error(self.cursor, end, ErrorKind::InvalidNumber)
    }

    /// Parses an unsigned magnitude starting at the cursor. No sign is
    /// accepted here; the whole remaining input must be consumed except for
    /// one optional trailing newline.
    fn magnitude(&mut self, base: u32) -> Result<u64, Error> {
        let rest = &self.bytes[self.cursor..];
        let (base, digits) = resolve_radix(rest, base);
        self.cursor += rest.len() - digits.len();

        let acc = accumulate(digits, base);
        let digits_start = self.cursor;
        self.cursor += acc.consumed;

        if acc.overflow {
            return Err(self.error(digits_start, self.cursor, ErrorKind::OutOfRange("u64")));
        }
        if acc.consumed == 0 {
            self.cursor = digits_start;
            return Err(self.invalid_here());
        }

        self.eat_byte(b'\n');
        if self.cursor != self.bytes.len() {
            return Err(self.error(self.cursor, self.bytes.len(), ErrorKind::InvalidNumber));
        }
        Ok(acc.value)
    }

    fn unsigned(&mut self, base: u32) -> Result<u64, Error> {
        self.eat_byte(b'+');
        self.magnitude(base)
    }

    fn signed(&mut self, base: u32) -> Result<i64, Error> {
        if self.eat_byte(b'-') {
            let magnitude = match self.magnitude(base) {
                Ok(v) => v,
                Err(e) => return Err(e),
            };
            // |i64::MIN| is one larger than i64::MAX, so the boundary is
            // checked on the negated value rather than the magnitude.
            match 0i64.checked_sub_unsigned(magnitude) {
                Some(v) => Ok(v),
                None => Err(self.error(0, number_end(self.bytes), ErrorKind::OutOfRange("i64"))),
            }
        } else {
            let value = match self.unsigned(base) {
                Ok(v) => v,
                Err(e) => return Err(e),
            };
            match i64::try_from(value) {
                Ok(v) => Ok(v),
                Err(_) => Err(self.error(0, number_end(self.bytes), ErrorKind::OutOfRange("i64"))),
            }
        }
    }
}

/// Length of the numeric text, excluding one trailing newline.
pub(crate) fn number_end(bytes: &[u8]) -> usize {
    match bytes {
        [head @ .., b'\n'] => head.len(),
        _ => bytes.len(),
    }
}

/// Span covering the numeric text of an input that parsed successfully.
pub(crate) fn number_span(bytes: &[u8]) -> Span {
    Span::at(0, number_end(bytes))
}

pub(crate) fn parse_unsigned_bytes(bytes: &[u8], base: u32) -> Result<u64, Error> {
    Parser::new(bytes).unsigned(base)
}

pub(crate) fn parse_signed_bytes(bytes: &[u8], base: u32) -> Result<i64, Error> {
    Parser::new(bytes).signed(base)
}

/// Parses an unsigned 64-bit integer.
///
/// The input may start with a single `+` (never `-`) and may end with a
/// single newline; nothing else besides digits of the resolved base is
/// accepted. A `base` of `0` autodetects hexadecimal (`0x`), octal (leading
/// `0`) or decimal; an explicit base must lie in `2..=16`.
///
/// # Errors
///
/// - [`ErrorKind::InvalidNumber`] when no digits are present, characters
///   remain after the digits, or the base is unsupported.
/// - [`ErrorKind::OutOfRange`] when the value exceeds [`u64::MAX`].
///
/// # Examples
///
/// ```
/// use strict_int::{ErrorKind, parse_unsigned};
///
/// assert_eq!(parse_unsigned("0x1A", 0)?, 26);
/// assert_eq!(parse_unsigned("+017\n", 0)?, 15);
/// assert_eq!(parse_unsigned("-1", 10).unwrap_err().kind, ErrorKind::InvalidNumber);
/// assert_eq!(parse_unsigned("123abc", 10).unwrap_err().kind, ErrorKind::InvalidNumber);
/// # Ok::<(), strict_int::Error>(())
/// ```
pub fn parse_unsigned(s: impl AsRef<[u8]>, base: u32) -> Result<u64, Error> {
    parse_unsigned_bytes(s.as_ref(), base)
}

/// Parses a signed 64-bit integer.
///
/// Accepts one optional leading `+` or `-`, then follows the rules of
/// [`parse_unsigned`]. The full two's-complement range is accepted, including
/// [`i64::MIN`].
///
/// # Errors
///
/// - [`ErrorKind::InvalidNumber`] for malformed input.
/// - [`ErrorKind::OutOfRange`] when the value lies outside the `i64` range.
///
/// # Examples
///
/// ```
/// use strict_int::{ErrorKind, parse_signed};
///
/// assert_eq!(parse_signed("-1", 10)?, -1);
/// assert_eq!(parse_signed("-9223372036854775808", 10)?, i64::MIN);
/// assert_eq!(
///     parse_signed("9223372036854775808", 10).unwrap_err().kind,
///     ErrorKind::OutOfRange("i64")
/// );
/// # Ok::<(), strict_int::Error>(())
/// ```
pub fn parse_signed(s: impl AsRef<[u8]>, base: u32) -> Result<i64, Error> {
    parse_signed_bytes(s.as_ref(), base)
}
