//! Width-narrowing wrappers over the 64-bit parsers.
//!
//! Every target type parses at full width first and then narrows with a
//! lossless conversion; a value that does not survive the conversion is
//! reported as [`ErrorKind::OutOfRange`] naming the target type.

use crate::{
    error::{Error, ErrorKind},
    parser::{self, number_span},
};

#[cfg(test)]
#[path = "./narrow_tests.rs"]
mod tests;

/// Integer types that can be parsed strictly from text.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`, `usize`, `i8`, `i16`, `i32`,
/// `i64` and `isize`. Unsigned types accept an optional leading `+`, signed
/// types an optional `+` or `-`.
pub trait StrictInt: Sized + Copy {
    /// The type name reported in [`ErrorKind::OutOfRange`].
    const NAME: &'static str;

    /// Parses `s` in `base` (`0` to autodetect, otherwise `2..=16`).
    ///
    /// # Errors
    ///
    /// Fails with [`ErrorKind::InvalidNumber`] for malformed input and with
    /// [`ErrorKind::OutOfRange`] when the value does not fit in `Self`.
    fn parse_radix(s: &[u8], base: u32) -> Result<Self, Error>;

    /// Parses `s` and stores the value in `slot`.
    ///
    /// `slot` is written only when parsing succeeds, so its previous value
    /// can serve as a default.
    ///
    /// # Errors
    ///
    /// The same as [`StrictInt::parse_radix`]; `slot` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use strict_int::StrictInt;
    ///
    /// let mut timeout: u16 = 30;
    /// assert!(u16::parse_into(b"70000", 10, &mut timeout).is_err());
    /// assert_eq!(timeout, 30);
    /// u16::parse_into(b"45\n", 10, &mut timeout)?;
    /// assert_eq!(timeout, 45);
    /// # Ok::<(), strict_int::Error>(())
    /// ```
    #[inline]
    fn parse_into(s: &[u8], base: u32, slot: &mut Self) -> Result<(), Error> {
        *slot = Self::parse_radix(s, base)?;
        Ok(())
    }
}

/// Parses `s` as any [`StrictInt`] type.
///
/// # Errors
///
/// See [`StrictInt::parse_radix`].
///
/// # Examples
///
/// ```
/// use strict_int::{ErrorKind, parse};
///
/// let port: u16 = parse("0x1f90", 0)?;
/// assert_eq!(port, 8080);
/// assert_eq!(parse::<i8>("-129", 10).unwrap_err().kind, ErrorKind::OutOfRange("i8"));
/// # Ok::<(), strict_int::Error>(())
/// ```
#[inline]
pub fn parse<T: StrictInt>(s: impl AsRef<[u8]>, base: u32) -> Result<T, Error> {
    T::parse_radix(s.as_ref(), base)
}

fn out_of_range(s: &[u8], name: &'static str) -> Error {
    Error {
        kind: ErrorKind::OutOfRange(name),
        span: number_span(s),
    }
}

macro_rules! narrow {
    ($wide:path => $($num:ident $func:ident),+ $(,)?) => {$(
        impl StrictInt for $num {
            const NAME: &'static str = stringify!($num);

            fn parse_radix(s: &[u8], base: u32) -> Result<Self, Error> {
                match $wide(s, base) {
                    Ok(wide) => <$num>::try_from(wide).map_err(|_| out_of_range(s, Self::NAME)),
                    Err(e) => Err(e),
                }
            }
        }

        #[doc = concat!("Parses a `", stringify!($num), "`, see [`StrictInt::parse_radix`].")]
        ///
        /// # Errors
        ///
        /// [`ErrorKind::InvalidNumber`] for malformed input,
        #[doc = concat!("[`ErrorKind::OutOfRange`] when the value does not fit in `", stringify!($num), "`.")]
        #[inline]
        pub fn $func(s: impl AsRef<[u8]>, base: u32) -> Result<$num, Error> {
            <$num>::parse_radix(s.as_ref(), base)
        }
    )+};
}

narrow!(parser::parse_unsigned_bytes =>
    u8 parse_u8,
    u16 parse_u16,
    u32 parse_u32,
    u64 parse_u64,
    usize parse_usize,
);

narrow!(parser::parse_signed_bytes =>
    i8 parse_i8,
    i16 parse_i16,
    i32 parse_i32,
    i64 parse_i64,
    isize parse_isize,
);
