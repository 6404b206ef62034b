//! Tests for sequence and map conversions.

use std::collections::{BTreeMap, HashMap};

use docbind::document::json;
use docbind::{from_value, to_value};

use super::helpers::*;

#[test]
fn test_vec_round_trip() {
    assert_eq!(assert_round_trip(vec![1_i64, 2, 3]), json!([1, 2, 3]));
    assert_eq!(assert_round_trip(Vec::<String>::new()), json!([]));
}

#[test]
fn test_nested_vec_round_trip() {
    let grid = vec![vec![1_u32, 2], vec![], vec![3]];
    assert_eq!(assert_round_trip(grid), json!([[1, 2], [], [3]]));
}

#[test]
fn test_slice_writes_as_array() {
    let items: &[bool] = &[true, false];
    assert_eq!(to_value(items).unwrap(), json!([true, false]));
}

#[test]
fn test_fixed_array_round_trip() {
    assert_eq!(assert_round_trip([7_i64, 8, 9]), json!([7, 8, 9]));

    let err = from_value::<[i64; 2]>(&json!([1, 2, 3])).unwrap_err();
    assert!(matches!(
        err,
        docbind::Error::Convert(docbind::ConvertError::LengthMismatch {
            expected: 2,
            actual: 3,
        })
    ));
}

#[test]
fn test_tuple_round_trips() {
    assert_eq!(assert_round_trip((5_i64,)), json!([5]));
    assert_eq!(
        assert_round_trip((String::from("x"), true)),
        json!(["x", true])
    );
    assert_round_trip((1_u8, String::from("two"), 3.0_f64, false));
}

#[test]
fn test_tuple_read_checks_arity() {
    let err = from_value::<(i64, i64)>(&json!([1])).unwrap_err();
    assert!(matches!(
        err,
        docbind::Error::Convert(docbind::ConvertError::LengthMismatch { .. })
    ));
}

#[test]
fn test_btree_map_round_trip() {
    let mut scores = BTreeMap::new();
    scores.insert("alice".to_string(), 3_i64);
    scores.insert("bob".to_string(), 5);

    let value = assert_round_trip(scores);
    assert_eq!(value, json!({"alice": 3, "bob": 5}));
}

#[test]
fn test_hash_map_round_trip() {
    let mut flags = HashMap::new();
    flags.insert("verbose".to_string(), true);
    assert_eq!(assert_round_trip(flags), json!({"verbose": true}));
}

#[test]
fn test_map_read_rejects_non_objects() {
    let err = from_value::<BTreeMap<String, i64>>(&json!([["k", 1]])).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn test_element_failure_propagates_through_containers() {
    let err = from_value::<Vec<u8>>(&json!([1, 999])).unwrap_err();
    assert!(err.is_out_of_range());

    let err = from_value::<HashMap<String, bool>>(&json!({"ok": true, "bad": "yes"})).unwrap_err();
    assert!(err.is_type_mismatch());
}
