//! The serde bridge: conversion via a type's own serde implementations.
//!
//! Most types that want document conversion already describe their shape
//! through serde, in their defining crate. The bridge reuses that description
//! instead of requiring a second, parallel implementation: the free functions
//! here run a value through `serde_json`, and [`convert_via_serde!`] turns
//! them into [`ToValue`]/[`FromValue`] implementations for named types.
//!
//! The bridge is strictly opt-in. A hand-written implementation and a bridged
//! one cannot coexist for the same type, so opting in never overrides a
//! direct implementation elsewhere.
//!
//! [`convert_via_serde!`]: crate::convert_via_serde

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ConvertError;
use crate::document::Value;

/// Builds a document value from any [`Serialize`] type.
///
/// # Examples
///
/// ```
/// use docbind::convert::to_value_via_serde;
/// use docbind::document::json;
///
/// #[derive(serde::Serialize)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let value = to_value_via_serde(&Point { x: 1, y: 2 })?;
/// assert_eq!(value, json!({"x": 1, "y": 2}));
/// # Ok::<(), docbind::ConvertError>(())
/// ```
pub fn to_value_via_serde<T>(input: &T) -> Result<Value, ConvertError>
where
    T: Serialize,
{
    Ok(serde_json::to_value(input)?)
}

/// Constructs any [`DeserializeOwned`] type from a document value.
///
/// Fails with [`ConvertError::Serde`] when the value does not match the
/// type's serde shape.
pub fn from_value_via_serde<T>(value: &Value) -> Result<T, ConvertError>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(value.clone())?)
}

/// Implements [`ToValue`] and [`FromValue`] for named types by forwarding to
/// their serde implementations.
///
/// Use this for types whose conversion already lives in their defining crate
/// as `Serialize`/`Deserialize`. Types needing document-specific behavior
/// should implement the traits directly instead.
///
/// [`ToValue`]: crate::ToValue
/// [`FromValue`]: crate::FromValue
///
/// # Examples
///
/// ```
/// use docbind::document::json;
/// use docbind::{convert_via_serde, from_value, to_value};
///
/// #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
/// struct Endpoint {
///     host: String,
///     port: u16,
/// }
///
/// convert_via_serde!(Endpoint);
///
/// let endpoint = Endpoint { host: "localhost".into(), port: 8080 };
/// let value = to_value(&endpoint)?;
/// assert_eq!(value, json!({"host": "localhost", "port": 8080}));
/// assert_eq!(from_value::<Endpoint>(&value)?, endpoint);
/// # Ok::<(), docbind::Error>(())
/// ```
#[macro_export]
macro_rules! convert_via_serde {
    ($($type:ty),+ $(,)?) => {$(
        impl $crate::ToValue for $type {
            fn to_value(
                &self,
            ) -> ::std::result::Result<$crate::document::Value, $crate::ConvertError> {
                $crate::convert::to_value_via_serde(self)
            }
        }

        impl $crate::FromValue for $type {
            fn from_value(
                value: &$crate::document::Value,
            ) -> ::std::result::Result<Self, $crate::ConvertError> {
                $crate::convert::from_value_via_serde(value)
            }
        }
    )+};
}
