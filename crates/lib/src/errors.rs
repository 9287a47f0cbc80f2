//! Error types for path-addressed data access.
//!
//! Every failure raised by [`Data`](crate::Data) and the merge utilities is a
//! [`DataError`]. Path problems (an empty path, or a path that does not
//! resolve) form the "bad path" subset, see [`DataError::is_bad_path`].

use thiserror::Error;

/// Structured error types for data access operations.
///
/// All variants carry enough context to identify the offending path, so
/// callers can report the failure without holding on to the input.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The path string was rejected before any traversal happened.
    #[error("{reason}")]
    InvalidPath { reason: String },

    /// A read without a default did not resolve to a value.
    #[error("No data exists at the given path: \"{path}\"")]
    PathNotFound { path: String },

    /// A write had to descend through a value that is not a map.
    #[error("Key path at {segment} of {path} cannot be indexed into (is not a map)")]
    NotIndexable { segment: String, path: String },

    /// The value at the path cannot be wrapped in a new accessor.
    #[error("Value at \"{path}\" could not be represented as a Data instance")]
    NotRepresentable { path: String },

    /// Exact-match extraction from a [`Value`](crate::Value) failed.
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl DataError {
    pub(crate) fn empty_path() -> Self {
        DataError::InvalidPath {
            reason: "Path cannot be an empty string".to_string(),
        }
    }

    /// Check if this error is about the path itself (invalid or unresolved).
    pub fn is_bad_path(&self) -> bool {
        matches!(
            self,
            DataError::InvalidPath { .. } | DataError::PathNotFound { .. }
        )
    }

    /// Check if the path was rejected as malformed
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, DataError::InvalidPath { .. })
    }

    /// Check if the path did not resolve
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::PathNotFound { .. })
    }

    /// Check if a write was blocked by a non-map value
    pub fn is_not_indexable(&self) -> bool {
        matches!(self, DataError::NotIndexable { .. })
    }

    /// Check if a sub-accessor could not be built
    pub fn is_not_representable(&self) -> bool {
        matches!(self, DataError::NotRepresentable { .. })
    }

    /// Check if this error is a type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, DataError::TypeMismatch { .. })
    }

    /// Get the path if this is a path-related error
    pub fn path(&self) -> Option<&str> {
        match self {
            DataError::PathNotFound { path }
            | DataError::NotIndexable { path, .. }
            | DataError::NotRepresentable { path } => Some(path),
            _ => None,
        }
    }

    /// Get the segment that blocked a write
    pub fn segment(&self) -> Option<&str> {
        match self {
            DataError::NotIndexable { segment, .. } => Some(segment),
            _ => None,
        }
    }
}

// Conversion from DataError to the main Error type
impl From<DataError> for crate::Error {
    fn from(err: DataError) -> Self {
        crate::Error::Data(err)
    }
}
