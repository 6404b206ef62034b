//! Ownership adapters: conversions for `Option`, `Box`, `Rc`, and `Arc`.
//!
//! These make nullable owning references first-class convertible types.
//! [`Option`] carries the null policy: an absent value and document null map
//! to each other. The owning wrappers are transparent: a `Box<T>`, `Rc<T>`,
//! or `Arc<T>` serializes exactly as its referent would, so an
//! `Option<Box<T>>` reads and writes as "`T` or null" with no wrapper
//! artifact in the document.
//!
//! Reading into an owning wrapper always constructs a fresh referent through
//! the wrapped type's own conversion. For the reference-counted wrappers that
//! means a fresh count domain: the result is never aliased with any existing
//! owner. A failing referent conversion propagates out unchanged, and nothing
//! is assigned on failure.

use std::rc::Rc;
use std::sync::Arc;

use super::{ConvertError, FromValue, ToValue};
use crate::document::Value;

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Result<Value, ConvertError> {
        match self {
            Some(inner) => inner.to_value(),
            None => Ok(Value::Null),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_value(value).map(Some)
        }
    }
}

// Exclusive ownership: writing inspects the referent without disturbing
// ownership; reading takes fresh, sole ownership of a newly built value.
impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Result<Value, ConvertError> {
        (**self).to_value()
    }
}

impl<T: FromValue> FromValue for Box<T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        T::from_value(value).map(Box::new)
    }
}

// Shared ownership, single-threaded.
impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    fn to_value(&self) -> Result<Value, ConvertError> {
        (**self).to_value()
    }
}

impl<T: FromValue> FromValue for Rc<T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        T::from_value(value).map(Rc::new)
    }
}

// Shared ownership, thread-safe.
impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    fn to_value(&self) -> Result<Value, ConvertError> {
        (**self).to_value()
    }
}

impl<T: FromValue> FromValue for Arc<T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        T::from_value(value).map(Arc::new)
    }
}
