//! Constructing new nested structure from paths.

use serde_json::{Map, Value};

use crate::types::PathSegment;

/// Return a copy of `list` with `item` placed at `index`.
///
/// In range, the element is overwritten. Past the end, the copy is extended
/// with `null` placeholders for every position in `[len, index)` and `item`
/// is appended at `index`. The input slice is never modified; this is the
/// only way an array grows past its current bound.
///
/// # Example
///
/// ```
/// use json_nav_path::backfill_insert;
/// use serde_json::json;
///
/// let list = vec![json!("1"), json!("2")];
/// let out = backfill_insert(&list, 5, json!("6"));
/// assert_eq!(out, vec![json!("1"), json!("2"), json!(null), json!(null), json!(null), json!("6")]);
/// assert_eq!(list.len(), 2);
/// ```
pub fn backfill_insert(list: &[Value], index: usize, item: Value) -> Vec<Value> {
    let mut out = list.to_vec();
    if index < out.len() {
        out[index] = item;
    } else {
        out.resize(index, Value::Null);
        out.push(item);
    }
    out
}

/// Build a brand-new nested value representing exactly `value` at the end of
/// `path`, with nothing else.
///
/// A key segment wraps the remainder in a single-key object; an index segment
/// wraps the remainder in an array built via [`backfill_insert`] into an
/// empty list (so every position before the index is `null`). The empty path
/// returns `value` unchanged.
///
/// # Example
///
/// ```
/// use json_nav_path::{materialize, path};
/// use serde_json::json;
///
/// assert_eq!(materialize(&path![], json!("X")), json!("X"));
/// assert_eq!(materialize(&path!["one", "two"], json!("X")),
///            json!({"one": {"two": "X"}}));
/// assert_eq!(materialize(&path![1, 2], json!("X")),
///            json!([null, [null, null, "X"]]));
/// ```
pub fn materialize(path: &[PathSegment], value: Value) -> Value {
    match path.split_first() {
        None => value,
        Some((PathSegment::Key(key), rest)) => {
            let mut map = Map::new();
            map.insert(key.clone(), materialize(rest, value));
            Value::Object(map)
        }
        Some((PathSegment::Index(index), rest)) => {
            Value::Array(backfill_insert(&[], *index, materialize(rest, value)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    #[test]
    fn test_backfill_overwrites_in_range() {
        let list: Vec<Value> = (0..10).map(|n| json!(n)).collect();
        let out = backfill_insert(&list, 5, json!("TEST"));
        assert_eq!(out[5], json!("TEST"));
        assert_eq!(out.len(), 10);

        let out = backfill_insert(&list, 0, json!("TEST"));
        assert_eq!(out[0], json!("TEST"));
    }

    #[test]
    fn test_backfill_empty_list() {
        let out = backfill_insert(&[], 0, json!("TEST"));
        assert_eq!(out, vec![json!("TEST")]);
    }

    #[test]
    fn test_backfill_pads_with_null() {
        let list: Vec<Value> = (0..10).map(|n| json!(n)).collect();
        let out = backfill_insert(&list, 20, json!("TEST"));
        assert_eq!(out.len(), 21);
        for item in &out[10..20] {
            assert_eq!(*item, Value::Null);
        }
        assert_eq!(out[20], json!("TEST"));
        // the input is untouched
        assert_eq!(list.len(), 10);
        assert_eq!(list[9], json!(9));
    }

    #[test]
    fn test_materialize_base_case() {
        assert_eq!(materialize(&path![], json!("TEST")), json!("TEST"));
    }

    #[test]
    fn test_materialize_objects() {
        let built = materialize(
            &path!["one", "two", "three", "four", "five"],
            json!("VALUE"),
        );
        assert_eq!(
            built,
            json!({"one": {"two": {"three": {"four": {"five": "VALUE"}}}}})
        );
    }

    #[test]
    fn test_materialize_lists() {
        let built = materialize(&path![1, 2, 3, 4], json!("VALUE"));
        assert_eq!(
            built,
            json!([
                null,
                [null, null, [null, null, null, [null, null, null, null, "VALUE"]]]
            ])
        );
    }

    #[test]
    fn test_materialize_mixed() {
        let built = materialize(&path!["one", "two", 3, 0, "four"], json!("VALUE"));
        assert_eq!(
            built,
            json!({"one": {"two": [null, null, null, [{"four": "VALUE"}]]}})
        );
    }
}
