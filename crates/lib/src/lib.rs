//!
//! dotdata: path-addressed access to nested key-value data.
//!
//! This library wraps the kind of nested structure produced by parsing
//! configuration or document formats and lets callers read and write it by
//! path, for example `"server.tls.cert"` or `"server/tls/cert"`.
//!
//! ## Core Concepts
//!
//! * **Values (`value::Value`)**: A node in the tree. Scalars (null, bool, int, float, text) or containers (lists and insertion-ordered maps).
//! * **Paths (`path::KeyPath`)**: Non-empty strings whose segments are separated by `/` or `.`, used interchangeably.
//! * **Accessor (`data::Data`)**: Owns a root map and implements the `traits::DataAccess` operations: get, has, set, append, remove, get_data, import, export.
//! * **Merging (`util`)**: Associative-vs-list classification and the deep merge used by `import`, under a clobber or keep-existing policy.
//!
//! ```
//! use dotdata::{Data, DataAccess, Map, Value};
//!
//! let mut data = Data::new();
//! data.set("a.b", "B")?;
//!
//! let mut incoming = Map::new();
//! incoming.insert("a".to_string(), Value::from(Map::from([("b".to_string(), Value::from("C"))])));
//!
//! data.import(incoming.clone(), false);
//! assert_eq!(data["a.b"], "B");
//!
//! data.import(incoming, true);
//! assert_eq!(data["a/b"], "C");
//! # Ok::<(), dotdata::Error>(())
//! ```

pub mod data;
pub mod errors;
pub mod path;
pub mod traits;
pub mod util;
pub mod value;

pub use data::Data;
pub use errors::DataError;
pub use path::KeyPath;
pub use traits::DataAccess;
pub use value::{Map, Value};

/// Result type used throughout the dotdata library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the dotdata library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from path access and merging
    #[error(transparent)]
    Data(DataError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Data(_) => "data",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Returns the structured data error, if this is one.
    pub fn as_data_error(&self) -> Option<&DataError> {
        match self {
            Error::Data(err) => Some(err),
            _ => None,
        }
    }

    /// Check if this error is about the path itself (invalid or unresolved).
    pub fn is_bad_path(&self) -> bool {
        self.as_data_error().is_some_and(DataError::is_bad_path)
    }

    /// Check if the path was rejected as malformed.
    pub fn is_invalid_path(&self) -> bool {
        self.as_data_error().is_some_and(DataError::is_invalid_path)
    }

    /// Check if this error indicates a path was not found.
    pub fn is_not_found(&self) -> bool {
        self.as_data_error().is_some_and(DataError::is_not_found)
    }

    /// Check if a write was blocked by a non-map value.
    pub fn is_not_indexable(&self) -> bool {
        self.as_data_error().is_some_and(DataError::is_not_indexable)
    }

    /// Check if a sub-accessor could not be built.
    pub fn is_not_representable(&self) -> bool {
        self.as_data_error()
            .is_some_and(DataError::is_not_representable)
    }

    /// Check if this error is a serialization failure.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
