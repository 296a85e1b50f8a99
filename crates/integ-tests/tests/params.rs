use integ_tests::params;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde::de::value::{Error, MapDeserializer};
use strict_int::impl_serde;

#[derive(Debug, PartialEq, Deserialize)]
struct NetParams {
    #[serde(deserialize_with = "impl_serde::deserialize")]
    port: u16,
    #[serde(deserialize_with = "impl_serde::deserialize")]
    mask: u32,
    #[serde(deserialize_with = "impl_serde::deserialize")]
    retries: i8,
    #[serde(deserialize_with = "impl_serde::deserialize_bool")]
    debug: bool,
}

fn load(line: &str) -> Result<NetParams, Error> {
    NetParams::deserialize(MapDeserializer::new(params(line).into_iter()))
}

#[test]
fn parses_parameter_line() {
    let p = load("port=0x1f90 mask=0777 retries=-3 debug=on").unwrap();
    assert_eq!(
        p,
        NetParams {
            port: 8080,
            mask: 0o777,
            retries: -3,
            debug: true,
        }
    );
}

#[test]
fn rejects_out_of_range_values() {
    let err = load("port=65536 mask=0 retries=0 debug=n").unwrap_err();
    assert_eq!(err.to_string(), "number out of range of 'u16': \"65536\"");

    let err = load("port=1 mask=0 retries=-129 debug=n").unwrap_err();
    assert_eq!(err.to_string(), "number out of range of 'i8': \"-129\"");
}

#[test]
fn rejects_partial_numbers() {
    let err = load("port=80tcp mask=0 retries=0 debug=n").unwrap_err();
    assert_eq!(err.to_string(), "invalid number: \"80tcp\"");

    let err = load("port=80 mask=0 retries=0 debug=maybe").unwrap_err();
    assert!(err.to_string().starts_with("invalid value: string \"maybe\""), "{err}");
}
