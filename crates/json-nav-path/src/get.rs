//! Path-driven reads and writes over plain JSON values.

use serde_json::Value;

use crate::types::PathSegment;
use crate::PathError;

/// Get a reference to the value at `path`.
///
/// Returns `None` when any segment fails to resolve: a key segment against a
/// non-object, an index segment against a non-array, a missing key, or an
/// index past the end of the array.
///
/// # Example
///
/// ```
/// use json_nav_path::{get, path};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [1, 2, 3]}});
/// assert_eq!(get(&doc, &path!["a", "b", 1]), Some(&json!(2)));
/// assert_eq!(get(&doc, &path!["a", "missing"]), None);
/// assert_eq!(get(&doc, &path!["a", "b", 9]), None);
/// ```
pub fn get<'a>(doc: &'a Value, path: &[PathSegment]) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path {
        match (current, segment) {
            (Value::Object(map), PathSegment::Key(key)) => {
                current = map.get(key)?;
            }
            (Value::Array(arr), PathSegment::Index(index)) => {
                current = arr.get(*index)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Get a mutable reference to the value at `path`.
///
/// Resolution rules are the same as [`get`].
pub fn get_mut<'a>(doc: &'a mut Value, path: &[PathSegment]) -> Option<&'a mut Value> {
    let mut current = doc;
    for segment in path {
        match (current, segment) {
            (Value::Object(map), PathSegment::Key(key)) => {
                current = map.get_mut(key)?;
            }
            (Value::Array(arr), PathSegment::Index(index)) => {
                current = arr.get_mut(*index)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Resolve `path` with typed errors instead of `None`.
///
/// # Errors
///
/// - [`PathError::EmptyPath`] - `path` has no segments
/// - [`PathError::KeyNotFound`] - a key segment is absent from its object
/// - [`PathError::IndexOutOfRange`] - an index segment is past the array end
/// - [`PathError::TypeMismatch`] - a segment's kind does not match the
///   container at that point (key vs. array, index vs. object, any segment
///   against a scalar)
pub fn resolve<'a>(doc: &'a Value, path: &[PathSegment]) -> Result<&'a Value, PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let mut current = doc;
    for segment in path {
        current = step(current, segment)?;
    }
    Ok(current)
}

/// Mutable variant of [`resolve`].
pub fn resolve_mut<'a>(
    doc: &'a mut Value,
    path: &[PathSegment],
) -> Result<&'a mut Value, PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let mut current = doc;
    for segment in path {
        current = step_mut(current, segment)?;
    }
    Ok(current)
}

fn step<'a>(current: &'a Value, segment: &PathSegment) -> Result<&'a Value, PathError> {
    match (current, segment) {
        (Value::Object(map), PathSegment::Key(key)) => map
            .get(key)
            .ok_or_else(|| PathError::KeyNotFound(key.clone())),
        (Value::Array(arr), PathSegment::Index(index)) => arr
            .get(*index)
            .ok_or(PathError::IndexOutOfRange(*index)),
        _ => Err(PathError::TypeMismatch(segment.to_string())),
    }
}

fn step_mut<'a>(current: &'a mut Value, segment: &PathSegment) -> Result<&'a mut Value, PathError> {
    match (current, segment) {
        (Value::Object(map), PathSegment::Key(key)) => map
            .get_mut(key)
            .ok_or_else(|| PathError::KeyNotFound(key.clone())),
        (Value::Array(arr), PathSegment::Index(index)) => arr
            .get_mut(*index)
            .ok_or(PathError::IndexOutOfRange(*index)),
        _ => Err(PathError::TypeMismatch(segment.to_string())),
    }
}

/// Set the value at `path`, strictly.
///
/// Every segment except the last must already resolve; no intermediate
/// structure is created. The final segment is created or overwritten for an
/// object parent, and overwritten in range for an array parent (growing an
/// array goes through [`crate::backfill_insert`]).
///
/// # Errors
///
/// [`PathError::EmptyPath`] for a zero-length path, plus every error
/// [`resolve`] can produce for the parent chain, plus
/// [`PathError::TypeMismatch`] / [`PathError::IndexOutOfRange`] for the final
/// segment against its container.
///
/// # Example
///
/// ```
/// use json_nav_path::{get, path, set};
/// use serde_json::json;
///
/// let mut doc = json!({"links": {"collection": [{"a": "b"}]}});
/// set(&mut doc, &path!["links", "collection", 0, "a"], json!("c")).unwrap();
/// assert_eq!(get(&doc, &path!["links", "collection", 0, "a"]), Some(&json!("c")));
/// ```
pub fn set(doc: &mut Value, path: &[PathSegment], value: Value) -> Result<(), PathError> {
    let (last, parents) = path.split_last().ok_or(PathError::EmptyPath)?;
    let parent = if parents.is_empty() {
        doc
    } else {
        resolve_mut(doc, parents)?
    };
    match (parent, last) {
        (Value::Object(map), PathSegment::Key(key)) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        (Value::Array(arr), PathSegment::Index(index)) => {
            if *index < arr.len() {
                arr[*index] = value;
                Ok(())
            } else {
                Err(PathError::IndexOutOfRange(*index))
            }
        }
        _ => Err(PathError::TypeMismatch(last.to_string())),
    }
}
