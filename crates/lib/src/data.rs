//! The path-addressed accessor over a nested map.
//!
//! [`Data`] owns a root [`Map`] and implements [`DataAccess`] on it. Reads walk
//! the live structure without copying; writes walk a chain of mutable borrows
//! down to the parent of the target key and mutate in place.
//!
//! # Usage
//!
//! ```
//! use dotdata::{Data, DataAccess, Value};
//!
//! let mut data = Data::from_json_str(r#"{"a": "A", "b": {"c": ["C1", "C2"]}}"#)?;
//!
//! assert_eq!(*data.get("b.c")?, Value::from(vec!["C1", "C2"]));
//! assert_eq!(data.get("b/c")?, data.get("b.c")?);
//! assert_eq!(*data.get_or("b/x", &Value::from("default"))?, "default");
//!
//! data.set("a.b.c", "x").unwrap_err();
//! data.remove("a")?;
//! data.set("a.b.c", "x")?;
//! assert!(data.set("a.b.c.d", "y").unwrap_err().is_not_indexable());
//! # Ok::<(), dotdata::Error>(())
//! ```

use std::{fmt, ops::Index};

use tracing::{debug, trace, warn};

use crate::{
    Result,
    errors::DataError,
    path::KeyPath,
    traits::DataAccess,
    util::{is_associative, merge_maps, positional_map},
    value::{Map, Value, fmt_map},
};

/// An accessor that reads and writes a nested map by path.
///
/// # Examples
///
/// ```
/// use dotdata::{Data, DataAccess};
///
/// let mut data = Data::new();
/// data.set("b/c", "C")?;
/// data.set("d.e", vec!["f", "g"])?;
///
/// assert_eq!(data["b.c"], "C");
/// assert!(data["missing.path"].is_null());
/// assert_eq!(data.to_json_string()?, r#"{"b":{"c":"C"},"d":{"e":["f","g"]}}"#);
/// # Ok::<(), dotdata::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Data {
    data: Map,
}

impl Data {
    /// Creates an accessor over an empty map
    pub fn new() -> Self {
        Self { data: Map::new() }
    }

    /// Parses a JSON object into a new accessor, keeping key order.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the root map as compact JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Borrows the root map
    pub fn as_map(&self) -> &Map {
        &self.data
    }

    /// Consumes the accessor and returns the root map
    pub fn into_map(self) -> Map {
        self.data
    }

    /// Returns true if the root map has no keys
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets the value at `path` converted with `TryFrom`.
    ///
    /// Returns `None` if the path is invalid, does not resolve, or holds a
    /// different type.
    ///
    /// ```
    /// # use dotdata::{Data, DataAccess};
    /// let mut data = Data::new();
    /// data.set("user.name", "Alice")?;
    /// data.set("user.age", 30)?;
    ///
    /// assert_eq!(data.get_as::<&str>("user.name"), Some("Alice"));
    /// assert_eq!(data.get_as::<i64>("user/age"), Some(30));
    /// assert_eq!(data.get_as::<i64>("user.name"), None);
    /// # Ok::<(), dotdata::Error>(())
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<str>) -> Option<T>
    where
        T: TryFrom<&'a Value>,
    {
        let value = self.get(path).ok()?;
        T::try_from(value).ok()
    }

    /// Resolves a parsed path against the root map.
    fn lookup(&self, path: &KeyPath<'_>) -> Option<&Value> {
        let mut segments = path.segments();
        let mut current = self.data.get(segments.next()?)?;
        for segment in segments {
            current = current.as_map()?.get(segment)?;
        }
        Some(current)
    }
}

impl DataAccess for Data {
    fn append(&mut self, path: impl AsRef<str>, value: impl Into<Value>) -> Result<()> {
        let path = KeyPath::parse(path.as_ref())?;
        let (parents, last) = path.split_last();
        trace!(path = %path, "Appending value");

        let mut current = &mut self.data;
        for segment in parents {
            let entry = current.entry(segment.to_string()).or_default();
            match entry {
                Value::Null | Value::Map(_) => {}
                Value::List(list) => {
                    trace!(
                        path = %path,
                        segment,
                        items = list.len(),
                        "Keying list by position"
                    );
                    let items = std::mem::take(list);
                    *entry = Value::Map(positional_map(items));
                }
                _ => warn!(
                    path = %path,
                    segment,
                    replaced = entry.type_name(),
                    "Replacing non-map value with an empty map to append through it"
                ),
            }
            current = entry.make_map();
        }

        let slot = current.entry(last.to_string()).or_default();
        let mut list = match std::mem::take(slot) {
            Value::Null => Vec::new(),
            Value::List(list) => list,
            other => vec![other],
        };
        list.push(value.into());
        *slot = Value::List(list);
        Ok(())
    }

    fn set(&mut self, path: impl AsRef<str>, value: impl Into<Value>) -> Result<()> {
        let path = KeyPath::parse(path.as_ref())?;
        let (parents, last) = path.split_last();
        trace!(path = %path, "Setting value");

        let mut current = &mut self.data;
        for segment in parents {
            let entry = current.entry(segment.to_string()).or_default();
            if entry.is_null() {
                *entry = Value::empty_map();
            }
            current = match entry {
                Value::Map(map) => map,
                other => {
                    debug!(
                        path = %path,
                        segment,
                        found = other.type_name(),
                        "Cannot set through non-map value"
                    );
                    return Err(DataError::NotIndexable {
                        segment: segment.to_string(),
                        path: path.to_string(),
                    }
                    .into());
                }
            };
        }

        current.insert(last.to_string(), value.into());
        Ok(())
    }

    fn remove(&mut self, path: impl AsRef<str>) -> Result<()> {
        let path = KeyPath::parse(path.as_ref())?;
        let (parents, last) = path.split_last();

        let mut current = &mut self.data;
        for segment in parents {
            match current.get_mut(segment) {
                Some(Value::Map(map)) => current = map,
                _ => {
                    trace!(path = %path, segment, "Nothing to remove");
                    return Ok(());
                }
            }
        }

        if current.shift_remove(last).is_some() {
            trace!(path = %path, "Removed value");
        }
        Ok(())
    }

    fn get(&self, path: impl AsRef<str>) -> Result<&Value> {
        let path = KeyPath::parse(path.as_ref())?;
        self.lookup(&path).ok_or_else(|| {
            DataError::PathNotFound {
                path: path.to_string(),
            }
            .into()
        })
    }

    fn get_or<'a>(&'a self, path: impl AsRef<str>, default: &'a Value) -> Result<&'a Value> {
        let path = KeyPath::parse(path.as_ref())?;
        Ok(self.lookup(&path).unwrap_or(default))
    }

    fn has(&self, path: impl AsRef<str>) -> Result<bool> {
        let path = KeyPath::parse(path.as_ref())?;
        Ok(self.lookup(&path).is_some())
    }

    fn get_data(&self, path: impl AsRef<str>) -> Result<Self> {
        let path = path.as_ref();
        let value = self.get(path)?;

        if !is_associative(value) {
            return Err(DataError::NotRepresentable {
                path: path.to_string(),
            }
            .into());
        }

        // An empty list is the only associative non-map
        Ok(match value {
            Value::Map(map) => Data::from(map.clone()),
            _ => Data::new(),
        })
    }

    fn import(&mut self, data: Map, clobber: bool) {
        debug!(keys = data.len(), clobber, "Importing data");
        self.data = merge_maps(std::mem::take(&mut self.data), data, clobber);
    }

    fn export(&self) -> Map {
        self.data.clone()
    }
}

/// Bracket-style reads with a null default.
///
/// # Panics
///
/// Panics if `path` is empty. Use [`DataAccess::get_or`] to handle that case
/// as an error.
impl Index<&str> for Data {
    type Output = Value;

    fn index(&self, path: &str) -> &Value {
        static NULL: Value = Value::Null;
        match KeyPath::parse(path) {
            Ok(path) => self.lookup(&path).unwrap_or(&NULL),
            Err(err) => panic!("{err}"),
        }
    }
}

impl From<Map> for Data {
    fn from(data: Map) -> Self {
        Self { data }
    }
}

impl From<Data> for Map {
    fn from(data: Data) -> Self {
        data.data
    }
}

impl TryFrom<serde_json::Value> for Data {
    type Error = crate::Error;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

impl FromIterator<(String, Value)> for Data {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_map(&self.data, f)
    }
}
