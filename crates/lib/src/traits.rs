//! The accessor contract for path-addressed data.
//!
//! [`DataAccess`] is implemented by [`Data`](crate::Data). Code that only
//! needs to read from or merge in another accessor should accept
//! `&impl DataAccess`.

use crate::{
    Result,
    value::{Map, Value},
};

/// Path-addressed access to a nested map.
///
/// Every `path` argument is a non-empty string whose segments are separated
/// by `/` or `.` (see [`KeyPath`](crate::KeyPath)). An empty path fails with
/// [`DataError::InvalidPath`](crate::DataError::InvalidPath) before anything
/// else happens.
///
/// # Examples
///
/// ```
/// use dotdata::{Data, DataAccess};
///
/// let mut data = Data::new();
/// data.set("server.port", 8080)?;
/// data.append("server/hosts", "alpha")?;
/// data.append("server/hosts", "beta")?;
///
/// assert_eq!(*data.get("server.port")?, 8080);
/// assert_eq!(data.get("server.hosts")?.as_list().map(Vec::len), Some(2));
/// assert!(!data.has("server.tls")?);
/// # Ok::<(), dotdata::Error>(())
/// ```
pub trait DataAccess {
    /// Appends `value` to the list at `path`.
    ///
    /// Missing intermediate maps are created. An intermediate list is re-keyed
    /// by position (`"0"`, `"1"`, ...) so its items survive, and any other
    /// intermediate scalar is replaced by an empty map. A missing (or null) target
    /// becomes a new list; any other non-list target is promoted to a
    /// one-element list holding the old value before `value` is pushed.
    fn append(&mut self, path: impl AsRef<str>, value: impl Into<Value>) -> Result<()>;

    /// Sets the value at `path`, replacing whatever was there.
    ///
    /// Missing intermediate maps are created on the way down. If an
    /// intermediate segment holds something other than a map the call fails
    /// with [`DataError::NotIndexable`](crate::DataError::NotIndexable) and
    /// the structure is left unchanged.
    fn set(&mut self, path: impl AsRef<str>, value: impl Into<Value>) -> Result<()>;

    /// Removes the value at `path`. Removing a missing path is a no-op.
    fn remove(&mut self, path: impl AsRef<str>) -> Result<()>;

    /// Returns the value at `path`.
    ///
    /// Fails with [`DataError::PathNotFound`](crate::DataError::PathNotFound)
    /// if any segment does not resolve.
    fn get(&self, path: impl AsRef<str>) -> Result<&Value>;

    /// Returns the value at `path`, or `default` if it does not resolve.
    fn get_or<'a>(&'a self, path: impl AsRef<str>, default: &'a Value) -> Result<&'a Value>;

    /// Returns whether `path` resolves to a value (null included).
    fn has(&self, path: impl AsRef<str>) -> Result<bool>;

    /// Returns a new accessor over a copy of the map at `path`.
    ///
    /// Fails with [`DataError::NotRepresentable`](crate::DataError::NotRepresentable)
    /// unless the value is associative, see
    /// [`is_associative`](crate::util::is_associative).
    fn get_data(&self, path: impl AsRef<str>) -> Result<Self>
    where
        Self: Sized;

    /// Deep-merges `data` into the root map.
    ///
    /// With `clobber` set, incoming leaves overwrite existing ones.
    fn import(&mut self, data: Map, clobber: bool);

    /// Deep-merges everything another accessor holds into this one.
    fn import_data(&mut self, data: &impl DataAccess, clobber: bool) {
        self.import(data.export(), clobber);
    }

    /// Returns a copy of the full root map.
    fn export(&self) -> Map;
}
