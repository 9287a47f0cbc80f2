//! Classification and deep-merge helpers for nested values.
//!
//! These functions are pure: they take their inputs by value or reference and
//! never touch a [`Data`](crate::Data) instance. [`Data::import`] is built on
//! [`merge_maps`].
//!
//! [`Data::import`]: crate::DataAccess::import

use indexmap::map::Entry;

use crate::value::{Map, Value};

/// Returns true if `key` is a canonical decimal integer (`"0"`, `"42"`,
/// `"-7"`), the form positional container keys take.
fn is_integer_key(key: &str) -> bool {
    key.parse::<i64>().is_ok_and(|n| n.to_string() == key)
}

/// Tests whether a container should be treated as a key-value map rather
/// than a positional list.
///
/// Empty containers count as associative. A non-empty list never does. A map
/// is associative only when none of its keys is an integer key. Scalars are
/// not containers and are never associative.
///
/// # Examples
///
/// ```
/// use dotdata::{Map, Value, util::is_associative};
///
/// assert!(is_associative(&Value::List(vec![])));
/// assert!(!is_associative(&Value::from(vec!["x", "y"])));
///
/// let mut map = Map::new();
/// map.insert("a".to_string(), Value::from("A"));
/// assert!(is_associative(&Value::Map(map)));
/// ```
pub fn is_associative(value: &Value) -> bool {
    match value {
        Value::List(list) => list.is_empty(),
        Value::Map(map) => is_associative_map(map),
        _ => false,
    }
}

/// Map-only form of [`is_associative`].
pub fn is_associative_map(map: &Map) -> bool {
    !map.keys().any(|key| is_integer_key(key))
}

/// Deep-merges `from` into `to` and returns the result.
///
/// Two maps merge key by key: keys missing from `to` (or holding null there)
/// adopt the incoming value, and keys present on both sides merge
/// recursively. Two lists merge the same way by position, and items past the
/// end of the shorter list are kept from whichever side has them. Any other
/// pairing is a conflict on a leaf: with `clobber` the incoming value wins,
/// without it `to` is kept.
///
/// A container merged into null adopts the container regardless of
/// `clobber`.
///
/// # Examples
///
/// ```
/// use dotdata::{Value, util::merge_assoc};
///
/// let to = Value::from(vec!["c1", "c2", "c3"]);
/// let from = Value::from(vec!["x"]);
///
/// assert_eq!(
///     merge_assoc(to.clone(), from.clone(), true),
///     Value::from(vec!["x", "c2", "c3"])
/// );
/// assert_eq!(merge_assoc(to.clone(), from, false), to);
/// ```
pub fn merge_assoc(to: Value, from: Value, clobber: bool) -> Value {
    match (to, from) {
        (Value::Map(to), Value::Map(from)) => Value::Map(merge_maps(to, from, clobber)),
        (Value::List(to), Value::List(from)) => Value::List(merge_lists(to, from, clobber)),
        (Value::Null, from @ (Value::Map(_) | Value::List(_))) => from,
        (to, from) => {
            if clobber {
                from
            } else {
                to
            }
        }
    }
}

/// Deep-merges the entries of `from` into `to`, see [`merge_assoc`].
///
/// Keys already in `to` keep their position; new keys are appended in the
/// order `from` yields them.
pub fn merge_maps(mut to: Map, from: Map, clobber: bool) -> Map {
    for (key, incoming) in from {
        match to.entry(key) {
            Entry::Occupied(mut slot) if !slot.get().is_null() => {
                let existing = slot.get_mut();
                let current = std::mem::take(existing);
                *existing = merge_assoc(current, incoming, clobber);
            }
            Entry::Occupied(mut slot) => {
                slot.insert(incoming);
            }
            Entry::Vacant(slot) => {
                slot.insert(incoming);
            }
        }
    }
    to
}

/// Position-wise form of [`merge_maps`] for two lists.
fn merge_lists(mut to: Vec<Value>, from: Vec<Value>, clobber: bool) -> Vec<Value> {
    for (index, incoming) in from.into_iter().enumerate() {
        match to.get_mut(index) {
            Some(existing) if !existing.is_null() => {
                let current = std::mem::take(existing);
                *existing = merge_assoc(current, incoming, clobber);
            }
            Some(existing) => *existing = incoming,
            None => to.push(incoming),
        }
    }
    to
}

/// Re-keys list items by position (`"0"`, `"1"`, ...) so the list can take
/// named keys alongside them.
///
/// The result is not associative unless `items` is empty.
pub fn positional_map(items: Vec<Value>) -> Map {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}
