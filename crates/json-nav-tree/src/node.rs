//! The recursive node type and its conversion boundary.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use json_nav_path::PathError;

/// One value position inside a [`Node`]: a mapping entry or an array element.
///
/// Wrapping converts every nested object into [`Slot::Child`] and every
/// nested array into [`Slot::List`], recursively; a `Slot::Scalar` never
/// holds an object or an array.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    /// A leaf: null, boolean, number, or string.
    Scalar(Value),
    /// A nested object, wrapped.
    Child(Node),
    /// A nested array; elements are slots themselves (arrays nest).
    List(Vec<Slot>),
}

impl Slot {
    /// Convert this slot back to a plain value, deeply.
    pub fn to_value(&self) -> Value {
        match self {
            Slot::Scalar(value) => value.clone(),
            Slot::Child(node) => node.to_value(),
            Slot::List(items) => Value::Array(items.iter().map(Slot::to_value).collect()),
        }
    }

    /// True if this slot is a scalar leaf.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Slot::Scalar(_))
    }

    /// The child node, if this slot holds one.
    pub fn as_child(&self) -> Option<&Node> {
        match self {
            Slot::Child(node) => Some(node),
            _ => None,
        }
    }
}

impl From<Value> for Slot {
    /// Wrap a plain value, recursively converting nested objects and arrays.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Slot::Child(Node::from_map(map)),
            Value::Array(arr) => Slot::List(arr.into_iter().map(Slot::from).collect()),
            scalar => Slot::Scalar(scalar),
        }
    }
}

/// A nested JSON object wrapped for uniform navigation.
///
/// Keys are unique and keep their insertion order; every traversal and
/// mutation is deterministic (depth-first, insertion order, then index
/// order). A node owns its entire subtree exclusively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub(crate) store: IndexMap<String, Slot>,
}

impl Node {
    /// Wrap a decoded document.
    ///
    /// The root must be a JSON object; top-level arrays and scalars are
    /// rejected with [`PathError::RootNotObject`].
    ///
    /// # Example
    ///
    /// ```
    /// use json_nav_tree::Node;
    /// use serde_json::json;
    ///
    /// assert!(Node::new(json!({"a": 1})).is_ok());
    /// assert!(Node::new(json!([1, 2])).is_err());
    /// ```
    pub fn new(doc: Value) -> Result<Self, PathError> {
        match doc {
            Value::Object(map) => Ok(Self::from_map(map)),
            _ => Err(PathError::RootNotObject),
        }
    }

    pub(crate) fn from_map(map: Map<String, Value>) -> Self {
        Node {
            store: map
                .into_iter()
                .map(|(key, value)| (key, Slot::from(value)))
                .collect(),
        }
    }

    /// Convert back to a plain value.
    ///
    /// The result is a deep, independent snapshot: round-trips the input of
    /// [`Node::new`] exactly when no mutation occurred, and never aliases the
    /// node's internal storage.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.store
                .iter()
                .map(|(key, slot)| (key.clone(), slot.to_value()))
                .collect(),
        )
    }

    /// Serialize to JSON text, as the external encoder would render
    /// [`Node::to_value`].
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.to_value())
    }

    /// Get the slot stored under a top-level key.
    pub fn get(&self, key: &str) -> Option<&Slot> {
        self.store.get(key)
    }

    /// Mutable variant of [`Node::get`].
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Slot> {
        self.store.get_mut(key)
    }

    /// Insert or replace a top-level entry, wrapping `value` recursively.
    ///
    /// Returns the previous slot, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Slot> {
        self.store.insert(key.into(), Slot::from(value))
    }

    /// Remove a top-level entry, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Slot> {
        self.store.shift_remove(key)
    }

    /// True if `key` exists ANYWHERE in the tree, not just at the top level.
    ///
    /// Use [`Node::top_level_keys`] to test only the node's own entries.
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.contains_key(key)
            || self.store.values().any(|slot| slot_contains_key(slot, key))
    }

    /// Total number of mapping entries at every depth.
    ///
    /// This counts nested keys, not just the node's own; an empty node has
    /// length zero.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// True if the node has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// The node's own keys, in insertion order (no recursion).
    pub fn top_level_keys(&self) -> Vec<String> {
        self.store.keys().cloned().collect()
    }

    pub(crate) fn merge_map(&mut self, map: Map<String, Value>) {
        for (key, value) in map {
            self.store.insert(key, Slot::from(value));
        }
    }
}

fn slot_contains_key(slot: &Slot, key: &str) -> bool {
    match slot {
        Slot::Scalar(_) => false,
        Slot::Child(node) => node.contains_key(key),
        Slot::List(items) => items.iter().any(|item| slot_contains_key(item, key)),
    }
}

impl TryFrom<Value> for Node {
    type Error = PathError;

    fn try_from(doc: Value) -> Result<Self, Self::Error> {
        Node::new(doc)
    }
}

impl fmt::Display for Node {
    /// Renders the converted document as JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}
