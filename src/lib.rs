//! Strict parsing of integers and booleans from text.
//!
//! Every parser either returns the exact value the text describes or an
//! [`Error`]; nothing is clamped, truncated or partially parsed. Inputs come
//! from places such as configuration values, command lines and kernel-style
//! parameter strings, where a silently misread number is worse than a
//! rejected one.
//!
//! The rules shared by all integer parsers:
//!
//! - A base of `0` autodetects: `0x`/`0X` followed by a hex digit means
//!   hexadecimal, any other leading `0` means octal, anything else decimal.
//!   Explicit bases are `2..=16`, and base 16 also strips a `0x` prefix.
//! - Unsigned targets accept one leading `+`; signed targets accept `+` or `-`.
//! - A single trailing newline is allowed. Whitespace and any other trailing
//!   bytes are rejected.
//! - Values that do not fit the target type fail with
//!   [`ErrorKind::OutOfRange`]; everything malformed fails with
//!   [`ErrorKind::InvalidNumber`].
//!
//! # Examples
//!
//! ```
//! use strict_int::{ErrorKind, parse_bool, parse_i32, parse_u8, parse_u64};
//!
//! assert_eq!(parse_u64("0x1A", 0)?, 26);
//! assert_eq!(parse_u64("017", 0)?, 15);
//! assert_eq!(parse_i32("-2147483648\n", 10)?, i32::MIN);
//! assert_eq!(parse_bool("off")?, false);
//!
//! let err = parse_u8("256", 10).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::OutOfRange("u8"));
//! assert_eq!(err.to_string(), "number out of range of 'u8'");
//!
//! let err = parse_u8("12 ", 10).unwrap_err();
//! assert_eq!(err.kind, ErrorKind::InvalidNumber);
//! assert_eq!(err.span, strict_int::Span::new(2, 3));
//! # Ok::<(), strict_int::Error>(())
//! ```

mod boolean;
mod error;
mod narrow;
mod parser;
mod radix;
mod span;

pub use boolean::parse_bool;
pub use error::{Error, ErrorKind};
pub use narrow::{
    StrictInt, parse, parse_i8, parse_i16, parse_i32, parse_i64, parse_isize, parse_u8,
    parse_u16, parse_u32, parse_u64, parse_usize,
};
pub use parser::{parse_signed, parse_unsigned};
pub use radix::{Accumulated, MAX_RADIX, accumulate, resolve_radix};
pub use span::Span;

#[cfg(feature = "serde")]
pub mod impl_serde;
