//! Traversal and search over a wrapped tree.
//!
//! Every operation here is deterministic depth-first: mapping entries in
//! insertion order before their children, array elements in index order.
//! Results are collected eagerly; ordering is part of the contract.

use serde_json::Value;

use json_nav_path::{Path, PathSegment};

use crate::node::{Node, Slot};

impl Node {
    /// Every key at every depth, duplicates included.
    ///
    /// Keys reachable through child nodes and through objects held in arrays
    /// are all yielded, each time they occur.
    pub fn keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_keys(self, &mut out);
        out
    }

    /// Every scalar leaf with its full access path.
    ///
    /// Child nodes are never yielded themselves, only their descendants;
    /// array-held scalars get their list position as an index segment.
    ///
    /// # Example
    ///
    /// ```
    /// use json_nav_tree::Node;
    /// use json_nav_path::path;
    /// use serde_json::json;
    ///
    /// let node = Node::new(json!({"links": {"alternate": [{"href": "somelink"}]}})).unwrap();
    /// assert_eq!(node.enumerate(),
    ///            vec![(path!["links", "alternate", 0, "href"], json!("somelink"))]);
    /// ```
    pub fn enumerate(&self) -> Vec<(Path, Value)> {
        let mut out = Vec::new();
        let mut path = Path::new();
        collect_leaves(self, &mut path, &mut out);
        out
    }

    /// The paths component of [`Node::enumerate`].
    pub fn paths(&self) -> Vec<Path> {
        self.enumerate().into_iter().map(|(path, _)| path).collect()
    }

    /// The values component of [`Node::enumerate`].
    pub fn values(&self) -> Vec<Value> {
        self.enumerate().into_iter().map(|(_, value)| value).collect()
    }

    /// Every mapping entry at every depth, as `(key, slot)` pairs.
    ///
    /// Unlike [`Node::enumerate`], entries holding children and lists are
    /// yielded too, not just scalar leaves.
    pub fn items(&self) -> Vec<(&str, &Slot)> {
        let mut out = Vec::new();
        collect_items(self, &mut out);
        out
    }

    /// Number of entries at any depth whose key equals `key`.
    pub fn count_key(&self, key: &str) -> usize {
        self.items()
            .into_iter()
            .filter(|(entry_key, _)| *entry_key == key)
            .count()
    }

    /// Every path to an entry whose key equals `key`.
    ///
    /// A matching entry is yielded AND its value is still recursed into, so a
    /// key nested under itself is reported at every level. (The path-algebra
    /// `key_paths` stops at a match; both behaviors are deliberate.)
    pub fn search_key(&self, key: &str) -> Vec<Path> {
        let mut out = Vec::new();
        let mut path = Path::new();
        collect_key_matches(self, key, &mut path, &mut out);
        out
    }

    /// Every path whose resolved value structurally equals `target`.
    ///
    /// A slot matches on its plain-value form, so a child node matches when
    /// its converted object equals `target`; children and lists are recursed
    /// into regardless of whether they matched.
    pub fn search_value(&self, target: &Value) -> Vec<Path> {
        let mut out = Vec::new();
        let mut path = Path::new();
        collect_value_matches(self, target, &mut path, &mut out);
        out
    }

    /// The parent node of every path where `key` resolves to `value`.
    ///
    /// For a length-1 path the node itself is the parent.
    ///
    /// # Example
    ///
    /// ```
    /// use json_nav_tree::Node;
    /// use serde_json::json;
    ///
    /// let node = Node::new(json!({"items": [{"type": "audio", "id": 1}]})).unwrap();
    /// let parents = node.pluck("type", &json!("audio"));
    /// assert_eq!(parents[0].to_value(), json!({"type": "audio", "id": 1}));
    /// ```
    pub fn pluck(&self, key: &str, value: &Value) -> Vec<&Node> {
        let mut out = Vec::new();
        for path in self.search_key(key) {
            let matches = self
                .slot_at(&path)
                .map(|slot| slot.to_value() == *value)
                .unwrap_or(false);
            if !matches {
                continue;
            }
            if path.len() > 1 {
                if let Some(parent) = self.node_at(&path[..path.len() - 1]) {
                    out.push(parent);
                }
            } else {
                out.push(self);
            }
        }
        out
    }

    /// The child node at `path`, if the path resolves to one.
    pub fn node_at(&self, path: &[PathSegment]) -> Option<&Node> {
        self.slot_at(path).ok().and_then(Slot::as_child)
    }
}

fn collect_keys(node: &Node, out: &mut Vec<String>) {
    for (key, slot) in &node.store {
        out.push(key.clone());
        collect_slot_keys(slot, out);
    }
}

fn collect_slot_keys(slot: &Slot, out: &mut Vec<String>) {
    match slot {
        Slot::Scalar(_) => {}
        Slot::Child(child) => collect_keys(child, out),
        Slot::List(items) => {
            for item in items {
                collect_slot_keys(item, out);
            }
        }
    }
}

fn collect_leaves(node: &Node, path: &mut Path, out: &mut Vec<(Path, Value)>) {
    for (key, slot) in &node.store {
        path.push(PathSegment::key(key));
        collect_slot_leaves(slot, path, out);
        path.pop();
    }
}

fn collect_slot_leaves(slot: &Slot, path: &mut Path, out: &mut Vec<(Path, Value)>) {
    match slot {
        Slot::Scalar(value) => out.push((path.clone(), value.clone())),
        Slot::Child(child) => collect_leaves(child, path, out),
        Slot::List(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(PathSegment::Index(index));
                collect_slot_leaves(item, path, out);
                path.pop();
            }
        }
    }
}

fn collect_items<'a>(node: &'a Node, out: &mut Vec<(&'a str, &'a Slot)>) {
    for (key, slot) in &node.store {
        out.push((key.as_str(), slot));
        collect_slot_items(slot, out);
    }
}

fn collect_slot_items<'a>(slot: &'a Slot, out: &mut Vec<(&'a str, &'a Slot)>) {
    match slot {
        Slot::Scalar(_) => {}
        Slot::Child(child) => collect_items(child, out),
        Slot::List(items) => {
            for item in items {
                collect_slot_items(item, out);
            }
        }
    }
}

fn collect_key_matches(node: &Node, key: &str, path: &mut Path, out: &mut Vec<Path>) {
    for (entry_key, slot) in &node.store {
        path.push(PathSegment::key(entry_key));
        if entry_key == key {
            out.push(path.clone());
        }
        collect_slot_key_matches(slot, key, path, out);
        path.pop();
    }
}

fn collect_slot_key_matches(slot: &Slot, key: &str, path: &mut Path, out: &mut Vec<Path>) {
    match slot {
        Slot::Scalar(_) => {}
        Slot::Child(child) => collect_key_matches(child, key, path, out),
        Slot::List(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(PathSegment::Index(index));
                collect_slot_key_matches(item, key, path, out);
                path.pop();
            }
        }
    }
}

fn collect_value_matches(node: &Node, target: &Value, path: &mut Path, out: &mut Vec<Path>) {
    for (key, slot) in &node.store {
        path.push(PathSegment::key(key));
        collect_slot_value_matches(slot, target, path, out);
        path.pop();
    }
}

fn collect_slot_value_matches(slot: &Slot, target: &Value, path: &mut Path, out: &mut Vec<Path>) {
    if slot.to_value() == *target {
        out.push(path.clone());
    }
    match slot {
        Slot::Scalar(_) => {}
        Slot::Child(child) => collect_value_matches(child, target, path, out),
        Slot::List(items) => {
            for (index, item) in items.iter().enumerate() {
                path.push(PathSegment::Index(index));
                collect_slot_value_matches(item, target, path, out);
                path.pop();
            }
        }
    }
}
