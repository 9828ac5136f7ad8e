//! Ordered map type for JSON objects.
//!
//! This module provides [`JsonMap`], a wrapper around [`IndexMap`] that
//! preserves property insertion order. JSON objects parsed by this crate keep
//! their properties in source order, and canonical re-serialization emits
//! them in that same order, so an order-preserving map is load-bearing rather
//! than cosmetic.
//!
//! Duplicate property names follow last-write-wins semantics: inserting an
//! existing key replaces its value while keeping the key's original position.
//!
//! ## Examples
//!
//! ```rust
//! use json_pull::{JsonMap, Value};
//!
//! let mut map = JsonMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;

/// An insertion-ordered map of property names to JSON values.
///
/// # Examples
///
/// ```rust
/// use json_pull::{JsonMap, Value};
///
/// let mut map = JsonMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonMap(IndexMap<String, crate::Value>);

impl JsonMap {
    /// Creates an empty `JsonMap`.
    #[must_use]
    pub fn new() -> Self {
        JsonMap(IndexMap::new())
    }

    /// Creates an empty `JsonMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        JsonMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a property, replacing and returning any prior value for the
    /// same name. A replaced property keeps its original position.
    pub fn insert(&mut self, name: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(name, value)
    }

    /// Returns a reference to the value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&crate::Value> {
        self.0.get(name)
    }

    /// Returns `true` if the map holds a property called `name`.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of properties in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the property names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the property values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the properties, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl IntoIterator for JsonMap {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonMap {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for JsonMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        JsonMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_insertion_order_preserved() {
        let mut map = JsonMap::new();
        map.insert("z".to_string(), Value::from(1));
        map.insert("a".to_string(), Value::from(2));
        map.insert("m".to_string(), Value::from(3));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let mut map = JsonMap::new();
        map.insert("a".to_string(), Value::from(1));
        map.insert("b".to_string(), Value::from(2));
        let replaced = map.insert("a".to_string(), Value::from(3));

        assert_eq!(replaced, Some(Value::from(1)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::from(3)));
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_from_iterator() {
        let map: JsonMap = vec![
            ("x".to_string(), Value::from(1)),
            ("y".to_string(), Value::from(2)),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("x"));
    }
}
