//! Path algebra over nested JSON values.
//!
//! This crate implements pure functions for navigating and building nested
//! [`serde_json::Value`] documents with typed paths: ordered sequences of
//! string keys (object entries) and integer indices (array elements).
//!
//! # Example
//!
//! ```
//! use json_nav_path::{get, materialize, path};
//! use serde_json::json;
//!
//! // Address a location in a nested document
//! let doc = json!({"links": {"alternate": [{"href": "somelink"}]}});
//! let path = path!["links", "alternate", 0, "href"];
//! assert_eq!(get(&doc, &path), Some(&json!("somelink")));
//!
//! // Build brand-new structure from a path and a value
//! let built = materialize(&path!["one", "two"], json!("X"));
//! assert_eq!(built, json!({"one": {"two": "X"}}));
//! ```

use thiserror::Error;

pub mod build;
pub mod find;
pub mod get;
pub mod types;

pub use build::{backfill_insert, materialize};
pub use find::{all_paths, count_key, find_value_paths, first_key_path, key_paths};
pub use get::{get, get_mut, resolve, resolve_mut, set};
pub use types::{format_path, Path, PathSegment};

/// Errors produced while navigating or building paths.
///
/// One enum covers the whole workspace; different entry points produce
/// different subsets of variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A zero-length path was given to an operation that needs at least one
    /// segment.
    #[error("path must contain at least one segment")]
    EmptyPath,
    /// A path was structurally unusable for the operation, e.g. `create_path`
    /// given a path whose first segment is not an object key.
    #[error("malformed path: {0}")]
    BadPath(String),
    /// An object key segment did not resolve.
    #[error("key not found: {0}")]
    KeyNotFound(String),
    /// An array index segment was past the end of the array.
    #[error("index {0} out of range")]
    IndexOutOfRange(usize),
    /// A segment's kind (key vs. index) did not match the container it was
    /// applied to.
    #[error("segment `{0}` does not match container type")]
    TypeMismatch(String),
    /// Inside `create_path`: the first missing segment under a resolved array
    /// prefix must be an integer index.
    #[error("array position must be an integer index, got key `{0}`")]
    NonIntegerIndex(String),
    /// A document root was not a JSON object.
    #[error("document root must be a JSON object")]
    RootNotObject,
}

impl PathError {
    /// True for failures that mean "the data is not there", as opposed to a
    /// malformed path argument.
    ///
    /// These are the conditions swallowed by lenient lookups and recovered
    /// from by create-on-write entry points.
    pub fn is_absence(&self) -> bool {
        matches!(
            self,
            PathError::KeyNotFound(_) | PathError::IndexOutOfRange(_) | PathError::TypeMismatch(_)
        )
    }
}
