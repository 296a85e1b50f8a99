use crate::{
    Span,
    error::{Error, ErrorKind},
};

#[cfg(test)]
#[path = "./boolean_tests.rs"]
mod tests;

/// Parses common user spellings of a boolean.
///
/// Only the leading one or two bytes are inspected: `y`, `Y` and `1` mean
/// `true`; `n`, `N` and `0` mean `false`; `o`/`O` followed by `n`/`N` means
/// `true` and followed by `f`/`F` means `false`. Anything after the
/// recognised prefix is ignored, so `"yes"`, `"no"`, `"on\n"` and `"off"`
/// all parse.
///
/// # Errors
///
/// Returns [`ErrorKind::InvalidNumber`] for empty input or an unrecognised
/// prefix.
///
/// # Examples
///
/// ```
/// use strict_int::parse_bool;
///
/// assert_eq!(parse_bool("Y")?, true);
/// assert_eq!(parse_bool("0")?, false);
/// assert_eq!(parse_bool("On")?, true);
/// assert_eq!(parse_bool("OFF")?, false);
/// assert!(parse_bool("x").is_err());
/// assert!(parse_bool("").is_err());
/// # Ok::<(), strict_int::Error>(())
/// ```
pub fn parse_bool(s: impl AsRef<[u8]>) -> Result<bool, Error> {
    let s = s.as_ref();
    match s {
        [b'y' | b'Y' | b'1', ..] => Ok(true),
        [b'n' | b'N' | b'0', ..] => Ok(false),
        [b'o' | b'O', b'n' | b'N', ..] => Ok(true),
        [b'o' | b'O', b'f' | b'F', ..] => Ok(false),
        [b'o' | b'O', ..] => Err(invalid(1, s.len().min(2))),
        [] => Err(invalid(0, 0)),
        [_, ..] => Err(invalid(0, 1)),
    }
}

fn invalid(start: usize, end: usize) -> Error {
    Error {
        kind: ErrorKind::InvalidNumber,
        span: Span::at(start, end),
    }
}
