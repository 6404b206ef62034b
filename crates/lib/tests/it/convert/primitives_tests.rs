//! Tests for scalar conversions: booleans, integers, floats, and strings.

use docbind::document::json;
use docbind::{from_value, to_value};

use super::helpers::*;

#[test]
fn test_bool_round_trip() {
    assert_eq!(assert_round_trip(true), json!(true));
    assert_eq!(assert_round_trip(false), json!(false));

    let err = from_value::<bool>(&json!(1)).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_integer_round_trips_across_widths() {
    assert_eq!(assert_round_trip(42_i8), json!(42));
    assert_round_trip(i16::MIN);
    assert_round_trip(i32::MAX);
    assert_round_trip(i64::MIN);
    assert_round_trip(-1_isize);
    assert_round_trip(u8::MAX);
    assert_round_trip(u16::MAX);
    assert_round_trip(u32::MAX);
    assert_round_trip(usize::MAX);
}

#[test]
fn test_u64_above_i64_max_round_trips() {
    assert_eq!(assert_round_trip(u64::MAX), json!(u64::MAX));
}

#[test]
fn test_integer_read_rejects_out_of_range() {
    let err = from_value::<u8>(&json!(256)).unwrap_err();
    assert!(err.is_out_of_range());

    let err = from_value::<u64>(&json!(-1)).unwrap_err();
    assert!(err.is_out_of_range());

    let err = from_value::<i32>(&json!(i64::from(i32::MAX) + 1)).unwrap_err();
    assert!(err.is_out_of_range());
}

#[test]
fn test_integer_read_rejects_wrong_shapes() {
    // A fractional number is the wrong shape, not out of range.
    let err = from_value::<i64>(&json!(2.5)).unwrap_err();
    assert!(err.is_type_mismatch());

    let err = from_value::<i64>(&json!("42")).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_float_round_trip() {
    assert_eq!(assert_round_trip(1.5_f64), json!(1.5));
    assert_round_trip(-0.25_f32);
    assert_round_trip(0.0_f64);
}

#[test]
fn test_float_read_accepts_integral_numbers() {
    let reading: f64 = from_value(&json!(3)).unwrap();
    assert_eq!(reading, 3.0);
}

#[test]
fn test_non_finite_float_write_fails() {
    assert!(to_value(&f64::NAN).is_err());
    assert!(to_value(&f64::INFINITY).is_err());
    assert!(to_value(&f32::NEG_INFINITY).is_err());
}

#[test]
fn test_string_round_trip() {
    assert_eq!(assert_round_trip(String::from("hello")), json!("hello"));
    assert_round_trip(String::new());

    let err = from_value::<String>(&json!(null)).unwrap_err();
    assert!(err.is_type_mismatch());
}
