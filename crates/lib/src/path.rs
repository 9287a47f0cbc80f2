//! Path parsing for nested data access.
//!
//! A path is a non-empty string of key segments separated by `/` or `.`.
//! Both delimiters are interchangeable and may be mixed in one path. There is
//! no escaping and no normalization: `"a//b"` has an empty middle segment and
//! addresses the key `""` inside `a`.
//!
//! # Usage
//!
//! ```rust
//! use dotdata::KeyPath;
//!
//! let path = KeyPath::parse("server.tls/cert")?;
//! let segments: Vec<&str> = path.segments().collect();
//! assert_eq!(segments, vec!["server", "tls", "cert"]);
//!
//! assert!(KeyPath::parse("").is_err());
//! # Ok::<(), dotdata::DataError>(())
//! ```

use std::fmt;

use crate::errors::DataError;

/// The characters that separate path segments.
pub const DELIMITERS: [char; 2] = ['/', '.'];

/// A validated, borrowed key path.
///
/// `KeyPath` only guarantees that the path is non-empty. Segments are split
/// lazily from the source string, so parsing never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPath<'a> {
    inner: &'a str,
}

impl<'a> KeyPath<'a> {
    /// Validates `path` and wraps it.
    ///
    /// # Errors
    /// Returns [`DataError::InvalidPath`] if the path is empty.
    pub fn parse(path: &'a str) -> Result<Self, DataError> {
        if path.is_empty() {
            return Err(DataError::empty_path());
        }
        Ok(Self { inner: path })
    }

    /// Returns an iterator over the segments, in order.
    ///
    /// Always yields at least one segment. Empty segments are kept.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.inner.split(DELIMITERS)
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.inner.matches(DELIMITERS).count() + 1
    }

    /// Always `false`: a parsed path has at least one segment.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Splits the path into its parent segments and the final key.
    ///
    /// ```rust
    /// # use dotdata::KeyPath;
    /// let path = KeyPath::parse("a.b/c")?;
    /// let (parents, last) = path.split_last();
    /// assert_eq!(parents, vec!["a", "b"]);
    /// assert_eq!(last, "c");
    /// # Ok::<(), dotdata::DataError>(())
    /// ```
    pub fn split_last(&self) -> (Vec<&'a str>, &'a str) {
        match self.inner.rfind(DELIMITERS) {
            Some(idx) => (
                self.inner[..idx].split(DELIMITERS).collect(),
                // Both delimiters are one byte wide
                &self.inner[idx + 1..],
            ),
            None => (Vec::new(), self.inner),
        }
    }

    /// Returns the final key of the path.
    pub fn last(&self) -> &'a str {
        self.split_last().1
    }

    /// Returns the path exactly as it was given.
    pub fn as_str(&self) -> &'a str {
        self.inner
    }
}

impl<'a> TryFrom<&'a str> for KeyPath<'a> {
    type Error = DataError;

    fn try_from(path: &'a str) -> Result<Self, Self::Error> {
        KeyPath::parse(path)
    }
}

impl AsRef<str> for KeyPath<'_> {
    fn as_ref(&self) -> &str {
        self.inner
    }
}

impl fmt::Display for KeyPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.inner)
    }
}

/// Parses a path string into its ordered list of owned segments.
///
/// # Examples
///
/// ```rust
/// # use dotdata::path::parse_path;
/// assert_eq!(parse_path("a/b.c")?, vec!["a", "b", "c"]);
/// assert_eq!(parse_path("a//b")?, vec!["a", "", "b"]);
/// # Ok::<(), dotdata::DataError>(())
/// ```
pub fn parse_path(path: &str) -> Result<Vec<String>, DataError> {
    Ok(KeyPath::parse(path)?
        .segments()
        .map(str::to_string)
        .collect())
}
