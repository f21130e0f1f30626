//! Path search over plain JSON values.
//!
//! Traversal is depth-first: object entries in insertion order before their
//! children, array elements in index order.

use serde_json::Value;

use crate::types::{Path, PathSegment};

/// Every path whose resolved value structurally equals `target`.
///
/// Object entries are compared before recursion and a matching entry is not
/// descended into; array elements are recursed into, with scalars compared at
/// the base case (a whole container held in an array is not itself compared).
///
/// # Example
///
/// ```
/// use json_nav_path::{find_value_paths, path};
/// use serde_json::json;
///
/// let doc = json!({"query": {"normalized": [{"from": "Monterey"}]}});
/// assert_eq!(find_value_paths(&doc, &json!("Monterey")),
///            vec![path!["query", "normalized", 0, "from"]]);
/// ```
pub fn find_value_paths(doc: &Value, target: &Value) -> Vec<Path> {
    let mut out = Vec::new();
    let mut path = Path::new();
    walk_value(doc, target, &mut path, &mut out);
    out
}

fn walk_value(doc: &Value, target: &Value, path: &mut Path, out: &mut Vec<Path>) {
    match doc {
        Value::Object(map) => {
            for (key, value) in map {
                path.push(PathSegment::key(key));
                if value == target {
                    out.push(path.clone());
                } else {
                    walk_value(value, target, path, out);
                }
                path.pop();
            }
        }
        Value::Array(arr) => {
            for (index, item) in arr.iter().enumerate() {
                path.push(PathSegment::Index(index));
                walk_value(item, target, path, out);
                path.pop();
            }
        }
        other => {
            if other == target {
                out.push(path.clone());
            }
        }
    }
}

/// Every path leading to an object entry whose key equals `key`.
///
/// A matching entry's value is NOT descended into; non-matching entries are
/// recursed through. (The tree model's `search_key` keeps recursing past a
/// match; both behaviors are deliberate and kept apart.)
pub fn key_paths(doc: &Value, key: &str) -> Vec<Path> {
    let mut out = Vec::new();
    let mut path = Path::new();
    walk_key(doc, key, &mut path, &mut out);
    out
}

fn walk_key(doc: &Value, key: &str, path: &mut Path, out: &mut Vec<Path>) {
    match doc {
        Value::Object(map) => {
            for (entry_key, value) in map {
                path.push(PathSegment::key(entry_key));
                if entry_key == key {
                    out.push(path.clone());
                } else {
                    walk_key(value, key, path, out);
                }
                path.pop();
            }
        }
        Value::Array(arr) => {
            for (index, item) in arr.iter().enumerate() {
                path.push(PathSegment::Index(index));
                walk_key(item, key, path, out);
                path.pop();
            }
        }
        _ => {}
    }
}

/// The first path leading to `key`, or `None` if the key never appears.
///
/// The path is assembled child-first while unwinding, then reversed. Only
/// meaningful when `key` is unique across the whole document; with duplicate
/// keys the result is traversal-order dependent.
///
/// # Example
///
/// ```
/// use json_nav_path::{first_key_path, path};
/// use serde_json::json;
///
/// let doc = json!({"links": [{"creator": "https://someurl"}]});
/// assert_eq!(first_key_path(&doc, "creator"), Some(path!["links", 0, "creator"]));
/// assert_eq!(first_key_path(&doc, "absent"), None);
/// ```
pub fn first_key_path(doc: &Value, key: &str) -> Option<Path> {
    let mut path = Path::new();
    if search_first(doc, key, &mut path) {
        path.reverse();
        Some(path)
    } else {
        None
    }
}

fn search_first(doc: &Value, key: &str, path: &mut Path) -> bool {
    match doc {
        Value::Object(map) => {
            for (entry_key, value) in map {
                if entry_key == key {
                    path.push(PathSegment::key(key));
                    return true;
                }
                if search_first(value, key, path) {
                    path.push(PathSegment::key(entry_key));
                    return true;
                }
            }
            false
        }
        Value::Array(arr) => {
            for (index, item) in arr.iter().enumerate() {
                if search_first(item, key, path) {
                    path.push(PathSegment::Index(index));
                    return true;
                }
            }
            false
        }
        _ => false,
    }
}

/// Every route through the document, including routes to nested containers.
///
/// Unlike leaf enumeration, paths to objects and arrays themselves are
/// yielded as well; every returned path resolves via [`crate::get`].
pub fn all_paths(doc: &Value) -> Vec<Path> {
    let mut out = Vec::new();
    let mut path = Path::new();
    walk_all(doc, &mut path, &mut out);
    out
}

fn walk_all(doc: &Value, path: &mut Path, out: &mut Vec<Path>) {
    match doc {
        Value::Object(map) => {
            for (key, value) in map {
                path.push(PathSegment::key(key));
                out.push(path.clone());
                if value.is_object() || value.is_array() {
                    walk_all(value, path, out);
                }
                path.pop();
            }
        }
        Value::Array(arr) => {
            for (index, item) in arr.iter().enumerate() {
                path.push(PathSegment::Index(index));
                walk_all(item, path, out);
                path.pop();
            }
        }
        _ => out.push(path.clone()),
    }
}

/// Number of object entries at any depth whose key equals `key`.
pub fn count_key(doc: &Value, key: &str) -> usize {
    match doc {
        Value::Object(map) => map
            .iter()
            .map(|(entry_key, value)| usize::from(entry_key == key) + count_key(value, key))
            .sum(),
        Value::Array(arr) => arr.iter().map(|item| count_key(item, key)).sum(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{get, path};
    use serde_json::json;

    fn media_item() -> Value {
        json!({
            "attributes": {
                "guid": "someGUID",
                "tags": ["someGUID", "news"]
            },
            "links": {
                "enclosure": [{"meta": {"program_guid": "someGUID"}}]
            }
        })
    }

    #[test]
    fn test_find_value_paths_single() {
        let doc = json!({"query": {"normalized": [{"from": "Monterey_Bay"}]}});
        let paths = find_value_paths(&doc, &json!("Monterey_Bay"));
        assert_eq!(paths, vec![path!["query", "normalized", 0, "from"]]);
    }

    #[test]
    fn test_find_value_paths_inside_lists() {
        let expected = vec![
            path!["attributes", "guid"],
            path!["attributes", "tags", 0],
            path!["links", "enclosure", 0, "meta", "program_guid"],
        ];
        let mut paths = find_value_paths(&media_item(), &json!("someGUID"));
        paths.sort_by_key(|p| crate::format_path(p));
        let mut expected = expected;
        expected.sort_by_key(|p| crate::format_path(p));
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_find_value_matching_object_entry_not_descended() {
        // the "a" entry matches as a whole; its inner "x" is not reported
        let doc = json!({"a": {"x": 1}, "b": {"inner": {"x": 1}}});
        let paths = find_value_paths(&doc, &json!({"x": 1}));
        assert_eq!(paths, vec![path!["a"], path!["b", "inner"]]);
    }

    #[test]
    fn test_key_paths_stops_at_match() {
        // a matching key whose value holds the same key again: only the outer
        // occurrence is reported
        let doc = json!({"extlinks": {"extlinks": 1}, "other": {"extlinks": 2}});
        let paths = key_paths(&doc, "extlinks");
        assert_eq!(paths, vec![path!["extlinks"], path!["other", "extlinks"]]);
    }

    #[test]
    fn test_key_paths_inside_lists() {
        let doc = json!({
            "links": {
                "profile": [{"type": "a"}],
                "enclosure": [{"type": "b"}]
            }
        });
        let paths = key_paths(&doc, "type");
        assert_eq!(
            paths,
            vec![
                path!["links", "profile", 0, "type"],
                path!["links", "enclosure", 0, "type"],
            ]
        );
    }

    #[test]
    fn test_first_key_path() {
        let doc = json!({
            "attributes": {"tags": ["x"]},
            "links": {
                "enclosure": [{"meta": {"premiere_date": "2014"}}],
                "documentation": "url"
            }
        });
        assert_eq!(
            first_key_path(&doc, "premiere_date"),
            Some(path!["links", "enclosure", 0, "meta", "premiere_date"])
        );
        assert_eq!(
            first_key_path(&doc, "documentation"),
            Some(path!["links", "documentation"])
        );
        assert_eq!(first_key_path(&doc, "NO PATH"), None);
    }

    #[test]
    fn test_all_paths_include_containers() {
        let doc = json!({"ISBN": {"thumbnail_url": "t", "preview": "p"}});
        let paths = all_paths(&doc);
        assert_eq!(
            paths,
            vec![
                path!["ISBN"],
                path!["ISBN", "thumbnail_url"],
                path!["ISBN", "preview"],
            ]
        );
        for p in &paths {
            assert!(get(&doc, p).is_some());
        }
    }

    #[test]
    fn test_all_paths_inside_lists() {
        let doc = json!({"tags": ["a", {"b": 1}]});
        let paths = all_paths(&doc);
        assert_eq!(
            paths,
            vec![path!["tags"], path!["tags", 0], path!["tags", 1, "b"]]
        );
    }

    #[test]
    fn test_count_key() {
        let doc = json!({
            "title": "outer",
            "pages": {"title": "inner", "images": [{"title": "a"}, {"title": "b"}]}
        });
        assert_eq!(count_key(&doc, "title"), 4);
        assert_eq!(count_key(&doc, "images"), 1);
        assert_eq!(count_key(&doc, "absent"), 0);
    }
}
