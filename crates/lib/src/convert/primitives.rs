//! Conversions for scalar types: booleans, integers, floats, and strings.
//!
//! Integer reads are range-checked: any integral document number converts to
//! any integer type that can hold it, and a value that does not fit fails with
//! [`ConvertError::OutOfRange`] rather than wrapping. Float writes reject
//! non-finite values, which have no document number representation.

use serde_json::Number;

use super::{ConvertError, FromValue, ToValue};
use crate::document::Value;

impl ToValue for bool {
    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::Bool(*self))
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        value
            .as_bool()
            .ok_or_else(|| ConvertError::type_mismatch("boolean", value))
    }
}

/// Implements integer conversions. Writes widen losslessly into the document
/// number; reads accept any integral number that fits the target.
macro_rules! impl_value_int {
    ($($int:ty),* $(,)?) => {$(
        impl ToValue for $int {
            fn to_value(&self) -> Result<Value, ConvertError> {
                Ok(Value::Number(Number::from(*self)))
            }
        }

        impl FromValue for $int {
            fn from_value(value: &Value) -> Result<Self, ConvertError> {
                let number = value
                    .as_number()
                    .ok_or_else(|| ConvertError::type_mismatch("number", value))?;
                if let Some(wide) = number.as_i64() {
                    <$int>::try_from(wide)
                        .map_err(|_| ConvertError::out_of_range(wide, stringify!($int)))
                } else if let Some(wide) = number.as_u64() {
                    // Integral but above i64::MAX.
                    <$int>::try_from(wide)
                        .map_err(|_| ConvertError::out_of_range(wide, stringify!($int)))
                } else {
                    Err(ConvertError::type_mismatch("integer", value))
                }
            }
        }
    )*};
}

impl_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Implements float conversions. Reads accept any document number, including
/// integral ones; writes fail on NaN and infinities instead of degrading to
/// null.
macro_rules! impl_value_float {
    ($($float:ty),* $(,)?) => {$(
        impl ToValue for $float {
            fn to_value(&self) -> Result<Value, ConvertError> {
                let wide = f64::from(*self);
                Number::from_f64(wide)
                    .map(Value::Number)
                    .ok_or(ConvertError::NonFiniteFloat { value: wide })
            }
        }

        impl FromValue for $float {
            fn from_value(value: &Value) -> Result<Self, ConvertError> {
                value
                    .as_f64()
                    .map(|wide| wide as $float)
                    .ok_or_else(|| ConvertError::type_mismatch("number", value))
            }
        }
    )*};
}

impl_value_float!(f32, f64);

impl ToValue for String {
    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::String(self.clone()))
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, ConvertError> {
        value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| ConvertError::type_mismatch("string", value))
    }
}

// Write-only: an unsized str cannot be constructed from a document value,
// but borrowed text should still serialize without an intermediate String.
impl ToValue for str {
    fn to_value(&self) -> Result<Value, ConvertError> {
        Ok(Value::String(self.to_owned()))
    }
}
