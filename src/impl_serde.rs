#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

//! Field helpers for `#[serde(deserialize_with = "...")]`.
//!
//! Strings are parsed strictly with base autodetection, so configuration
//! files can spell numbers as `"0x1f"`, `"0755"` or `"42"`. Native integers
//! produced by the data format go through the same lossless-narrowing rule,
//! and native booleans are accepted next to the string spellings understood
//! by [`parse_bool`](crate::parse_bool).
//!
//! ```
//! # use serde::de::{IntoDeserializer, value::{Error, StrDeserializer}};
//! let de: StrDeserializer<'_, Error> = "0x1f90".into_deserializer();
//! let port: u16 = strict_int::impl_serde::deserialize(de)?;
//! assert_eq!(port, 8080);
//! # Ok::<(), Error>(())
//! ```

use crate::{StrictInt, parse_bool};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use std::{fmt, marker::PhantomData};

#[cfg(test)]
#[path = "./impl_serde_tests.rs"]
mod tests;

/// Deserializes any [`StrictInt`] from a string (base autodetected) or a
/// native integer.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: StrictInt,
{
    deserializer.deserialize_any(IntVisitor(PhantomData))
}

/// Deserializes a `bool` from a native boolean or a string such as `"y"`,
/// `"0"` or `"off"`.
pub fn deserialize_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(BoolVisitor)
}

struct IntVisitor<T>(PhantomData<T>);

impl<T: StrictInt> IntVisitor<T> {
    fn narrow<W, E>(self, value: W, unexpected: Unexpected<'_>) -> Result<T, E>
    where
        W: fmt::Display,
        E: de::Error,
    {
        // Display of a native integer is plain decimal, which the strict
        // parser accepts back exactly.
        T::parse_radix(value.to_string().as_bytes(), 10)
            .map_err(|_| E::invalid_value(unexpected, &self))
    }
}

impl<'de, T: StrictInt> Visitor<'de> for IntVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an integer in range of '{}' or a string holding one", T::NAME)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
        self.narrow(v, Unexpected::Unsigned(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
        self.narrow(v, Unexpected::Signed(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::parse_radix(v.as_bytes(), 0).map_err(|err| E::custom(format_args!("{err}: {v:?}")))
    }
}

struct BoolVisitor;

impl<'de> Visitor<'de> for BoolVisitor {
    type Value = bool;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a boolean or a string such as \"y\", \"n\", \"on\" or \"off\"")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
        Ok(v)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
        parse_bool(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}
