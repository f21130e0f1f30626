//! Path-driven navigation and mutation of a wrapped tree.

use serde_json::Value;

use json_nav_path::{format_path, materialize, Path, PathError, PathSegment};

use crate::node::{Node, Slot};

impl Node {
    /// Resolve `path` to the slot it addresses.
    ///
    /// # Errors
    ///
    /// - [`PathError::EmptyPath`] - `path` has no segments
    /// - [`PathError::KeyNotFound`] - a key segment is absent
    /// - [`PathError::IndexOutOfRange`] - an index segment is past a list end
    /// - [`PathError::TypeMismatch`] - segment kind vs. container kind (a key
    ///   against a list, an index against a node, anything against a scalar)
    pub fn slot_at(&self, path: &[PathSegment]) -> Result<&Slot, PathError> {
        let (first, rest) = path.split_first().ok_or(PathError::EmptyPath)?;
        let mut current = match first {
            PathSegment::Key(key) => self
                .store
                .get(key)
                .ok_or_else(|| PathError::KeyNotFound(key.clone()))?,
            PathSegment::Index(_) => return Err(PathError::TypeMismatch(first.to_string())),
        };
        for segment in rest {
            current = descend(current, segment)?;
        }
        Ok(current)
    }

    /// Mutable variant of [`Node::slot_at`].
    pub fn slot_at_mut(&mut self, path: &[PathSegment]) -> Result<&mut Slot, PathError> {
        let (first, rest) = path.split_first().ok_or(PathError::EmptyPath)?;
        let mut current = match first {
            PathSegment::Key(key) => self
                .store
                .get_mut(key)
                .ok_or_else(|| PathError::KeyNotFound(key.clone()))?,
            PathSegment::Index(_) => return Err(PathError::TypeMismatch(first.to_string())),
        };
        for segment in rest {
            current = descend_mut(current, segment)?;
        }
        Ok(current)
    }

    /// The plain value at the end of `path`.
    ///
    /// Resolving to a child or a list returns its converted form. Errors are
    /// those of [`Node::slot_at`].
    ///
    /// # Example
    ///
    /// ```
    /// use json_nav_tree::Node;
    /// use json_nav_path::path;
    /// use serde_json::json;
    ///
    /// let node = Node::new(json!({"attributes": {"tags": ["a", "b", "Cove"]}})).unwrap();
    /// assert_eq!(node.get_nested_value(&path!["attributes", "tags", 2]).unwrap(),
    ///            json!("Cove"));
    /// ```
    pub fn get_nested_value(&self, path: &[PathSegment]) -> Result<Value, PathError> {
        Ok(self.slot_at(path)?.to_value())
    }

    /// Like [`Node::get_nested_value`], but absence conditions (missing key,
    /// out-of-range index, type mismatch) return `default` instead.
    ///
    /// A zero-length path is a programmer error, not a data-absence
    /// condition, and still fails with [`PathError::EmptyPath`].
    pub fn get_nested_value_or(
        &self,
        path: &[PathSegment],
        default: Value,
    ) -> Result<Value, PathError> {
        match self.slot_at(path) {
            Ok(slot) => Ok(slot.to_value()),
            Err(err) if err.is_absence() => Ok(default),
            Err(err) => Err(err),
        }
    }

    /// Set the value at `path`, strictly.
    ///
    /// The parent chain must already resolve; the final segment is created or
    /// replaced for a node parent, and overwritten in range for a list
    /// parent. `value` is wrapped recursively on the way in. Use
    /// [`Node::set_or_create`] to materialize missing structure instead of
    /// failing.
    pub fn set_nested_value(&mut self, path: &[PathSegment], value: Value) -> Result<(), PathError> {
        let (last, parents) = path.split_last().ok_or(PathError::EmptyPath)?;
        if parents.is_empty() {
            return match last {
                PathSegment::Key(key) => {
                    self.store.insert(key.clone(), Slot::from(value));
                    Ok(())
                }
                PathSegment::Index(_) => Err(PathError::TypeMismatch(last.to_string())),
            };
        }
        match (self.slot_at_mut(parents)?, last) {
            (Slot::Child(node), PathSegment::Key(key)) => {
                node.store.insert(key.clone(), Slot::from(value));
                Ok(())
            }
            (Slot::List(items), PathSegment::Index(index)) => {
                if *index < items.len() {
                    items[*index] = Slot::from(value);
                    Ok(())
                } else {
                    Err(PathError::IndexOutOfRange(*index))
                }
            }
            _ => Err(PathError::TypeMismatch(last.to_string())),
        }
    }

    /// Set the value at `path`, creating missing structure as needed.
    ///
    /// This is the lenient counterpart of [`Node::set_nested_value`]: when
    /// strict assignment fails on a data-absence condition, the path is
    /// handed to [`Node::create_path`]. Only malformed paths
    /// ([`PathError::EmptyPath`] / [`PathError::BadPath`]) can still fail.
    ///
    /// # Example
    ///
    /// ```
    /// use json_nav_tree::Node;
    /// use json_nav_path::path;
    /// use serde_json::json;
    ///
    /// let mut node = Node::new(json!({"attributes": {"tags": ["a", "b", "Cove"]}})).unwrap();
    /// node.set_or_create(&path!["attributes", "tags", 5], json!("New")).unwrap();
    /// assert_eq!(node.to_value(),
    ///            json!({"attributes": {"tags": ["a", "b", "Cove", null, null, "New"]}}));
    /// ```
    pub fn set_or_create(&mut self, path: &[PathSegment], value: Value) -> Result<(), PathError> {
        match self.set_nested_value(path, value.clone()) {
            Err(err) if err.is_absence() => {
                self.create_path(path, value)?;
                Ok(())
            }
            other => other,
        }
    }

    /// Create `path` set to `value`, materializing whatever is missing while
    /// preserving existing structure.
    ///
    /// The longest prefix of `path` that still resolves is located by
    /// dropping trailing segments one at a time; what happens next depends on
    /// what that prefix holds:
    ///
    /// - nothing resolves: the whole path is materialized and merged into the
    ///   root as new top-level entries;
    /// - a list: the first missing segment must be an index (else
    ///   [`PathError::NonIntegerIndex`]); the remaining suffix is materialized
    ///   and backfilled into the list at that index, padding the gap with
    ///   nulls;
    /// - a child node: the missing suffix is materialized and its new keys
    ///   shallow-merged into that child, leaving sibling keys alone;
    /// - a scalar: the scalar is overwritten with the materialized suffix;
    /// - the whole path resolves: plain overwrite.
    ///
    /// The first segment must be an object key, since a document root is an
    /// object ([`PathError::BadPath`] otherwise, also for an empty path).
    /// Returns the node for chaining.
    pub fn create_path(
        &mut self,
        path: &[PathSegment],
        value: Value,
    ) -> Result<&mut Self, PathError> {
        match path.first() {
            None | Some(PathSegment::Index(_)) => {
                return Err(PathError::BadPath(format_path(path)));
            }
            Some(PathSegment::Key(_)) => {}
        }

        // longest resolvable prefix, found by shrinking from the right
        let mut split = path.len();
        while split > 0 && self.slot_at(&path[..split]).is_err() {
            split -= 1;
        }
        let (present, missing) = path.split_at(split);

        let Some((head, rest)) = missing.split_first() else {
            // the whole path already resolves
            self.set_nested_value(path, value)?;
            return Ok(self);
        };

        if present.is_empty() {
            // fully missing: build from scratch and merge at the top level
            if let Value::Object(map) = materialize(missing, value) {
                self.merge_map(map);
            }
            return Ok(self);
        }

        match self.slot_at_mut(present)? {
            Slot::List(items) => {
                let PathSegment::Index(index) = head else {
                    return Err(PathError::NonIntegerIndex(head.to_string()));
                };
                let item = if rest.is_empty() {
                    Slot::from(value)
                } else {
                    Slot::from(materialize(rest, value))
                };
                backfill_slot(items, *index, item);
            }
            Slot::Child(child) => {
                if head.as_key().is_none() {
                    return Err(PathError::TypeMismatch(head.to_string()));
                }
                if let Value::Object(map) = materialize(missing, value) {
                    child.merge_map(map);
                }
            }
            scalar @ Slot::Scalar(_) => {
                *scalar = Slot::from(materialize(missing, value));
            }
        }
        Ok(self)
    }

    /// Replace every occurrence of `target` with `replacement`.
    ///
    /// The matching paths are snapshotted before any mutation, so a
    /// replacement that would itself match is not revisited. Returns the
    /// paths that were replaced.
    pub fn find_and_replace(
        &mut self,
        target: &Value,
        replacement: &Value,
    ) -> Result<Vec<Path>, PathError> {
        let paths = self.search_value(target);
        for path in &paths {
            self.set_nested_value(path, replacement.clone())?;
        }
        Ok(paths)
    }

    /// Fold another tree's leaves into this one.
    ///
    /// Every `(path, value)` of `other.enumerate()` is applied with
    /// [`Node::set_nested_value`]; when a path does not fit this tree's
    /// structure, the fallback is coarse: `other`'s entire top-level entry
    /// for the path's first key is copied in, replacing a colliding entry or
    /// inserting a fresh one.
    pub fn update_from(&mut self, other: &Node) -> Result<(), PathError> {
        for (path, value) in other.enumerate() {
            match self.set_nested_value(&path, value) {
                Ok(()) => {}
                Err(err) if err.is_absence() => {
                    if let Some(PathSegment::Key(key)) = path.first() {
                        if let Some(slot) = other.get(key) {
                            self.store.insert(key.clone(), slot.clone());
                        }
                    }
                }
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

fn descend<'a>(current: &'a Slot, segment: &PathSegment) -> Result<&'a Slot, PathError> {
    match (current, segment) {
        (Slot::Child(node), PathSegment::Key(key)) => node
            .store
            .get(key)
            .ok_or_else(|| PathError::KeyNotFound(key.clone())),
        (Slot::List(items), PathSegment::Index(index)) => items
            .get(*index)
            .ok_or(PathError::IndexOutOfRange(*index)),
        _ => Err(PathError::TypeMismatch(segment.to_string())),
    }
}

fn descend_mut<'a>(current: &'a mut Slot, segment: &PathSegment) -> Result<&'a mut Slot, PathError> {
    match (current, segment) {
        (Slot::Child(node), PathSegment::Key(key)) => node
            .store
            .get_mut(key)
            .ok_or_else(|| PathError::KeyNotFound(key.clone())),
        (Slot::List(items), PathSegment::Index(index)) => items
            .get_mut(*index)
            .ok_or(PathError::IndexOutOfRange(*index)),
        _ => Err(PathError::TypeMismatch(segment.to_string())),
    }
}

// in-place counterpart of json_nav_path::backfill_insert, at the slot level
fn backfill_slot(items: &mut Vec<Slot>, index: usize, item: Slot) {
    if index < items.len() {
        items[index] = item;
    } else {
        items.resize(index, Slot::Scalar(Value::Null));
        items.push(item);
    }
}
