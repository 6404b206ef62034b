//!
//! Docbind: typed, extensible conversion between Rust values and JSON document trees.
//! This library provides the customization point that lets arbitrary types plug into
//! document-value conversion without the document library knowing about them.
//!
//! ## Core Concepts
//!
//! * **Document values (`document`)**: The JSON-like tree the conversions target.
//!   Docbind does not define its own tree; it converts to and from [`serde_json::Value`],
//!   re-exported through the [`document`] module.
//! * **Conversion traits (`convert::ToValue`, `convert::FromValue`)**: The customization
//!   point. A type is convertible exactly when it implements these traits; a missing
//!   implementation is a compile error at the call site, never a runtime surprise.
//! * **Entry points (`to_value`, `from_value`)**: The functions a document container
//!   calls to read a typed value out of a document or build a document from one.
//! * **Ownership adapters (`convert::owned`)**: Built-in implementations for `Option`,
//!   `Box`, `Rc`, and `Arc`, so nullable owning references like `Option<Box<T>>`
//!   map absence to document null and otherwise serialize transparently as `T`.
//! * **Serde bridge (`convert_via_serde!`)**: A fallback route that derives both
//!   traits from a type's own serde implementations, for types whose conversion
//!   lives in their defining crate rather than here.
//!
//! ## Example
//!
//! ```
//! use docbind::{from_value, to_value};
//! use docbind::document::json;
//!
//! // A nullable exclusive owner serializes as its contents, or as null.
//! let owner: Option<Box<i64>> = Some(Box::new(42));
//! assert_eq!(to_value(&owner)?, json!(42));
//! assert_eq!(to_value(&None::<Box<i64>>)?, json!(null));
//!
//! // Reading back restores fresh ownership.
//! let restored: Option<Box<i64>> = from_value(&json!(7))?;
//! assert_eq!(restored, Some(Box::new(7)));
//! # Ok::<(), docbind::Error>(())
//! ```

pub mod convert;
pub mod document;

pub use convert::{ConvertError, FromValue, ToValue, ValueExt, from_value, to_value};

/// Result type used throughout the docbind library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the docbind library.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured conversion errors from the convert module
    #[error(transparent)]
    Convert(convert::ConvertError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Convert(_) => "convert",
        }
    }

    /// Check if this error indicates a document value with the wrong shape
    /// for the requested target type.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Convert(err) => err.is_type_mismatch(),
        }
    }

    /// Check if this error indicates a numeric value outside the target's range.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::Convert(err) => err.is_out_of_range(),
        }
    }

    /// Check if this error was propagated from a serde implementation.
    pub fn is_serde_error(&self) -> bool {
        match self {
            Error::Convert(err) => err.is_serde_error(),
        }
    }
}
