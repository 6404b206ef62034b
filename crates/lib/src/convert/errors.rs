//! Error types for value conversion.
//!
//! This module defines the structured errors a conversion can raise at
//! runtime. A missing conversion is never one of them: requesting a type
//! without a [`ToValue`]/[`FromValue`] implementation fails to compile.
//!
//! [`ToValue`]: super::ToValue
//! [`FromValue`]: super::FromValue

use thiserror::Error;

use crate::document::{self, Value};

/// Structured error types for conversion failures.
///
/// Each variant captures the context a caller needs to report why a document
/// value could not be converted: the shape that was expected, the range that
/// was exceeded, or the underlying serde failure.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The document value has the wrong shape for the target type
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// A numeric document value does not fit in the target type
    #[error("number out of range for {target}: {value}")]
    OutOfRange { target: String, value: String },

    /// A non-finite float has no document number representation
    #[error("cannot represent non-finite float: {value}")]
    NonFiniteFloat { value: f64 },

    /// A fixed-size sequence received the wrong number of elements
    #[error("length mismatch: expected {expected} elements, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A conversion routed through serde failed
    #[error("serde conversion failed: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    /// A downstream implementation failed for a type-specific reason
    #[error("conversion failed: {reason}")]
    Custom { reason: String },
}

impl ConvertError {
    /// Builds a [`ConvertError::TypeMismatch`] recording the actual kind of `value`.
    pub fn type_mismatch(expected: impl Into<String>, value: &Value) -> Self {
        ConvertError::TypeMismatch {
            expected: expected.into(),
            actual: document::kind_name(value).to_string(),
        }
    }

    /// Builds a [`ConvertError::OutOfRange`] for a numeric narrowing failure.
    pub fn out_of_range(value: impl ToString, target: impl Into<String>) -> Self {
        ConvertError::OutOfRange {
            target: target.into(),
            value: value.to_string(),
        }
    }

    /// Builds a [`ConvertError::Custom`] from any displayable reason.
    ///
    /// Intended for downstream [`FromValue`](super::FromValue) implementations
    /// whose failure modes don't fit the structured variants.
    pub fn custom(reason: impl Into<String>) -> Self {
        ConvertError::Custom {
            reason: reason.into(),
        }
    }

    /// Check if this error is a shape mismatch between document and target.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ConvertError::TypeMismatch { .. })
    }

    /// Check if this error is a numeric range failure.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, ConvertError::OutOfRange { .. })
    }

    /// Check if this error is a fixed-size sequence arity failure.
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, ConvertError::LengthMismatch { .. })
    }

    /// Check if this error was propagated from a serde implementation.
    pub fn is_serde_error(&self) -> bool {
        matches!(self, ConvertError::Serde { .. })
    }

    /// Get the expected shape if this is a type mismatch.
    pub fn expected(&self) -> Option<&str> {
        match self {
            ConvertError::TypeMismatch { expected, .. } => Some(expected),
            _ => None,
        }
    }

    /// Get the target type name if this is a range failure.
    pub fn target(&self) -> Option<&str> {
        match self {
            ConvertError::OutOfRange { target, .. } => Some(target),
            _ => None,
        }
    }
}

// Conversion from ConvertError to the main Error type
impl From<ConvertError> for crate::Error {
    fn from(err: ConvertError) -> Self {
        crate::Error::Convert(err)
    }
}
