//! Shared helpers for the conversion test suite.

use std::fmt::Debug;

use docbind::document::Value;
use docbind::{FromValue, ToValue, from_value, to_value};

/// Converts `input` to a document value and back, asserting that the round
/// trip reproduces the input exactly. Returns the intermediate document value
/// so callers can also assert on its shape.
pub fn assert_round_trip<T>(input: T) -> Value
where
    T: ToValue + FromValue + PartialEq + Debug,
{
    let value = to_value(&input).expect("write path failed");
    let restored: T = from_value(&value).expect("read path failed");
    assert_eq!(restored, input);
    value
}
