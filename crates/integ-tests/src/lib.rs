#![allow(missing_docs)]

use std::fmt::{Debug, Write as _};
use strict_int::Error;

/// Asserts that `$func($input, $base)` parses to `$expected`
#[macro_export]
macro_rules! valid {
    ($name:ident, $func:path, $input:expr, $base:expr, $expected:expr) => {
        #[test]
        fn $name() {
            pretty_assertions::assert_eq!($func($input, $base), Ok($expected));
        }
    };
}

/// Asserts that `$func($input, $base)` fails with the given kind and span
#[macro_export]
macro_rules! invalid {
    ($name:ident, $func:path, $input:expr, $base:expr, $kind:expr, $span:expr) => {
        #[test]
        fn $name() {
            let err = $func($input, $base).unwrap_err();
            pretty_assertions::assert_eq!(err.kind, $kind);
            pretty_assertions::assert_eq!(std::ops::Range::<u32>::from(err.span), $span);
        }
    };
}

/// Renders one line per input describing the outcome of `parse`, used for
/// snapshotting whole tables of inputs at once.
pub fn outcomes<T: Debug>(inputs: &[&str], parse: impl Fn(&str) -> Result<T, Error>) -> String {
    let mut out = String::new();
    for input in inputs {
        let _ = match parse(input) {
            Ok(v) => writeln!(out, "{input:?} => {v:?}"),
            Err(e) => writeln!(
                out,
                "{input:?} => {} {}..{}: {e}",
                e.kind, e.span.start, e.span.end
            ),
        };
    }
    out
}

/// Splits a `key=value key=value` parameter line, the way boot and module
/// parameters are written.
pub fn params(line: &str) -> Vec<(&str, &str)> {
    line.split_whitespace()
        .map(|kv| kv.split_once('=').unwrap_or((kv, "")))
        .collect()
}
