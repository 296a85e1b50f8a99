use super::*;
use serde::de::{
    IntoDeserializer,
    value::{BoolDeserializer, Error, I64Deserializer, StrDeserializer, U64Deserializer},
};

fn from_str<T: StrictInt>(s: &str) -> Result<T, Error> {
    let de: StrDeserializer<'_, Error> = s.into_deserializer();
    deserialize(de)
}

fn from_u64<T: StrictInt>(v: u64) -> Result<T, Error> {
    let de: U64Deserializer<Error> = v.into_deserializer();
    deserialize(de)
}

fn from_i64<T: StrictInt>(v: i64) -> Result<T, Error> {
    let de: I64Deserializer<Error> = v.into_deserializer();
    deserialize(de)
}

#[test]
fn strings_autodetect_base() {
    assert_eq!(from_str::<u16>("0x1f90").unwrap(), 8080);
    assert_eq!(from_str::<u32>("0755").unwrap(), 0o755);
    assert_eq!(from_str::<i8>("-12").unwrap(), -12);
    assert_eq!(from_str::<usize>("42\n").unwrap(), 42);
}

#[test]
fn strings_are_strict() {
    let err = from_str::<u8>("256").unwrap_err();
    assert_eq!(err.to_string(), "number out of range of 'u8': \"256\"");

    let err = from_str::<u8>(" 1").unwrap_err();
    assert_eq!(err.to_string(), "invalid number: \" 1\"");

    assert!(from_str::<u32>("12kb").is_err());
    assert!(from_str::<u32>("-1").is_err());
}

#[test]
fn native_integers_narrow_losslessly() {
    assert_eq!(from_u64::<u8>(255).unwrap(), 255);
    assert_eq!(from_i64::<i8>(-128).unwrap(), -128);
    assert_eq!(from_i64::<u64>(7).unwrap(), 7);
    assert_eq!(from_u64::<i64>(i64::MAX as u64).unwrap(), i64::MAX);

    let err = from_u64::<u8>(256).unwrap_err();
    assert!(err.to_string().contains("in range of 'u8'"), "{err}");
    assert!(from_i64::<u32>(-1).is_err());
    assert!(from_u64::<i64>(u64::MAX).is_err());
}

#[test]
fn booleans() {
    let de: BoolDeserializer<Error> = true.into_deserializer();
    assert!(deserialize_bool(de).unwrap());

    for (text, expected) in [("y", true), ("N", false), ("on", true), ("off", false)] {
        let de: StrDeserializer<'_, Error> = text.into_deserializer();
        assert_eq!(deserialize_bool(de).unwrap(), expected, "input: {text:?}");
    }

    let de: StrDeserializer<'_, Error> = "maybe".into_deserializer();
    assert!(deserialize_bool(de).is_err());
}
