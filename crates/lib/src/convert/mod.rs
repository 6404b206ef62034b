//! Typed conversion between Rust values and document values.
//!
//! This module is the customization point of the library. A type takes part in
//! conversion by implementing [`ToValue`] (Rust value to document value) and
//! [`FromValue`] (document value to Rust value). Which implementation runs for
//! a given type is decided entirely at compile time by ordinary trait
//! resolution; calling [`to_value`] or [`from_value`] with a type that
//! implements neither route fails to build at the call site.
//!
//! # Implementation Routes
//!
//! There are two ways a type becomes convertible:
//!
//! 1. **A direct implementation.** Write `impl ToValue`/`impl FromValue` for
//!    the type. All built-in conversions (primitives, sequences, maps, and the
//!    ownership adapters for `Option`, `Box`, `Rc`, `Arc`) are of this kind.
//! 2. **The serde bridge.** For a type that already carries serde
//!    implementations in its own crate, the [`convert_via_serde!`][crate::convert_via_serde]
//!    macro generates both impls by forwarding to [`to_value_via_serde`] and
//!    [`from_value_via_serde`].
//!
//! Coherence guarantees a type resolves to exactly one route, so a direct
//! implementation always wins: the bridge is only ever used where it was
//! explicitly opted into.
//!
//! # Examples
//!
//! ```
//! use docbind::convert::{FromValue, ToValue};
//! use docbind::document::{Value, json};
//! use docbind::{ConvertError, from_value, to_value};
//!
//! struct Celsius(f64);
//!
//! impl ToValue for Celsius {
//!     fn to_value(&self) -> Result<Value, ConvertError> {
//!         self.0.to_value()
//!     }
//! }
//!
//! impl FromValue for Celsius {
//!     fn from_value(value: &Value) -> Result<Self, ConvertError> {
//!         f64::from_value(value).map(Celsius)
//!     }
//! }
//!
//! assert_eq!(to_value(&Celsius(21.5))?, json!(21.5));
//! let reading: Celsius = from_value(&json!(-3.0))?;
//! assert_eq!(reading.0, -3.0);
//! # Ok::<(), docbind::Error>(())
//! ```

mod bridge;
mod collections;
mod errors;
mod owned;
mod primitives;

pub use bridge::{from_value_via_serde, to_value_via_serde};
pub use errors::ConvertError;

use tracing::trace;

use crate::document::{self, Map, Value};

/// Conversion from a Rust value into a document value.
///
/// Implementations take `&self`: the conversion layer never forces a copy of
/// the input, and implementations clone only the data that has to live in the
/// produced tree.
///
/// Errors raised here propagate to the caller unchanged; the conversion layer
/// neither catches nor wraps them.
pub trait ToValue {
    /// Builds the document representation of `self`.
    fn to_value(&self) -> Result<Value, ConvertError>;
}

/// Conversion from a document value into a Rust value.
///
/// The constructed value is returned by value; on failure nothing is
/// assigned, so a caller's destination is left unchanged.
pub trait FromValue: Sized {
    /// Constructs `Self` from a document value.
    ///
    /// Fails with [`ConvertError`] when the document value does not have the
    /// shape this type expects.
    fn from_value(value: &Value) -> Result<Self, ConvertError>;
}

/// Converts any [`ToValue`] type into a document value.
///
/// This is the write-path entry point a document container calls when
/// building a document from a typed value.
///
/// # Examples
///
/// ```
/// use docbind::document::json;
/// use docbind::to_value;
///
/// assert_eq!(to_value(&vec![1_i64, 2, 3])?, json!([1, 2, 3]));
/// # Ok::<(), docbind::Error>(())
/// ```
pub fn to_value<T>(input: &T) -> crate::Result<Value>
where
    T: ToValue + ?Sized,
{
    trace!(ty = std::any::type_name::<T>(), "converting rust value to document value");
    Ok(input.to_value()?)
}

/// Converts a document value into any [`FromValue`] type.
///
/// This is the read-path entry point a document container calls when handing
/// a stored value back as a typed one.
///
/// # Examples
///
/// ```
/// use docbind::document::json;
/// use docbind::from_value;
///
/// let numbers: Vec<i64> = from_value(&json!([1, 2, 3]))?;
/// assert_eq!(numbers, vec![1, 2, 3]);
/// # Ok::<(), docbind::Error>(())
/// ```
pub fn from_value<T>(value: &Value) -> crate::Result<T>
where
    T: FromValue,
{
    trace!(
        ty = std::any::type_name::<T>(),
        kind = document::kind_name(value),
        "converting document value to rust value"
    );
    Ok(T::from_value(value)?)
}

/// Extension methods on [`Value`] for typed reads.
pub trait ValueExt {
    /// Converts this document value into `T`.
    ///
    /// Equivalent to [`from_value`], in method position so type inference can
    /// flow from the destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use docbind::ValueExt;
    /// use docbind::document::json;
    ///
    /// let value = json!("hello");
    /// let text: String = value.convert()?;
    /// assert_eq!(text, "hello");
    /// # Ok::<(), docbind::Error>(())
    /// ```
    fn convert<T: FromValue>(&self) -> crate::Result<T>;
}

impl ValueExt for Value {
    fn convert<T: FromValue>(&self) -> crate::Result<T> {
        from_value(self)
    }
}

// References are transparent on the write path.
impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Result<Value, ConvertError> {
        (**self).to_value()
    }
}

// Document values convert to themselves, so documents nest in documents.
impl ToValue for Value {
    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(self.clone())
    }
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        Ok(value.clone())
    }
}

impl ToValue for Map<String, Value> {
    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::Object(self.clone()))
    }
}

impl FromValue for Map<String, Value> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        value
            .as_object()
            .cloned()
            .ok_or_else(|| ConvertError::type_mismatch("object", value))
    }
}
