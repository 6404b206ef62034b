//! Conversions for sequences and string-keyed maps.
//!
//! Every element conversion re-dispatches through [`ToValue`]/[`FromValue`]
//! for the element type, so nesting works to any depth and an element failure
//! propagates out unchanged.

use std::collections::{BTreeMap, HashMap};

use super::{ConvertError, FromValue, ToValue};
use crate::document::{Map, Value};

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Result<Value, ConvertError> {
        let mut items = Vec::with_capacity(self.len());
        for item in self {
            items.push(item.to_value()?);
        }
        Ok(Value::Array(items))
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Result<Value, ConvertError> {
        self.as_slice().to_value()
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        let items = value
            .as_array()
            .ok_or_else(|| ConvertError::type_mismatch("array", value))?;
        items.iter().map(T::from_value).collect()
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Result<Value, ConvertError> {
        self.as_slice().to_value()
    }
}

impl<T: FromValue, const N: usize> FromValue for [T; N] {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        let items = value
            .as_array()
            .ok_or_else(|| ConvertError::type_mismatch("array", value))?;
        if items.len() != N {
            return Err(ConvertError::LengthMismatch {
                expected: N,
                actual: items.len(),
            });
        }
        let converted = items
            .iter()
            .map(T::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        // Length was checked above, so this conversion cannot fail.
        converted.try_into().map_err(|items: Vec<T>| {
            ConvertError::LengthMismatch {
                expected: N,
                actual: items.len(),
            }
        })
    }
}

/// Implements tuple conversions as fixed-length document arrays.
macro_rules! impl_value_tuple {
    ($(($($name:ident : $idx:tt),+) => $len:expr;)+) => {$(
        impl<$($name: ToValue),+> ToValue for ($($name,)+) {
            fn to_value(&self) -> Result<Value, ConvertError> {
                Ok(Value::Array(vec![$(self.$idx.to_value()?),+]))
            }
        }

        impl<$($name: FromValue),+> FromValue for ($($name,)+) {
            fn from_value(value: &Value) -> Result<Self, ConvertError> {
                let items = value
                    .as_array()
                    .ok_or_else(|| ConvertError::type_mismatch("array", value))?;
                if items.len() != $len {
                    return Err(ConvertError::LengthMismatch {
                        expected: $len,
                        actual: items.len(),
                    });
                }
                Ok(($($name::from_value(&items[$idx])?,)+))
            }
        }
    )+};
}

impl_value_tuple! {
    (A: 0) => 1;
    (A: 0, B: 1) => 2;
    (A: 0, B: 1, C: 2) => 3;
    (A: 0, B: 1, C: 2, D: 3) => 4;
}

impl<T: ToValue> ToValue for BTreeMap<String, T> {
    fn to_value(&self) -> Result<Value, ConvertError> {
        let mut object = Map::new();
        for (key, item) in self {
            object.insert(key.clone(), item.to_value()?);
        }
        Ok(Value::Object(object))
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        let object = value
            .as_object()
            .ok_or_else(|| ConvertError::type_mismatch("object", value))?;
        object
            .iter()
            .map(|(key, item)| Ok((key.clone(), T::from_value(item)?)))
            .collect()
    }
}

impl<T: ToValue> ToValue for HashMap<String, T> {
    fn to_value(&self) -> Result<Value, ConvertError> {
        let mut object = Map::new();
        for (key, item) in self {
            object.insert(key.clone(), item.to_value()?);
        }
        Ok(Value::Object(object))
    }
}

impl<T: FromValue> FromValue for HashMap<String, T> {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        let object = value
            .as_object()
            .ok_or_else(|| ConvertError::type_mismatch("object", value))?;
        object
            .iter()
            .map(|(key, item)| Ok((key.clone(), T::from_value(item)?)))
            .collect()
    }
}
