//! Typed path segments for nested JSON documents.

use std::fmt;

/// One step of a [`Path`]: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Addresses an entry of a JSON object.
    Key(String),
    /// Addresses an element of a JSON array.
    Index(usize),
}

/// An ordered sequence of segments addressing a location in a document.
pub type Path = Vec<PathSegment>;

impl PathSegment {
    /// Build a key segment.
    pub fn key(key: impl Into<String>) -> Self {
        PathSegment::Key(key.into())
    }

    /// Build an index segment.
    pub fn index(index: usize) -> Self {
        PathSegment::Index(index)
    }

    /// The key, if this is a key segment.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }

    /// The index, if this is an index segment.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            PathSegment::Key(_) => None,
            PathSegment::Index(index) => Some(*index),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{}", index),
        }
    }
}

/// Format a path as a `/`-separated string, e.g. `/links/alternate/0/href`.
///
/// The root (empty) path formats as the empty string.
///
/// # Example
///
/// ```
/// use json_nav_path::{format_path, path};
///
/// assert_eq!(format_path(&path![]), "");
/// assert_eq!(format_path(&path!["links", "alternate", 0, "href"]),
///            "/links/alternate/0/href");
/// ```
pub fn format_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for segment in path {
        out.push('/');
        out.push_str(&segment.to_string());
    }
    out
}

/// Build a [`Path`] from key and index literals.
///
/// # Example
///
/// ```
/// use json_nav_path::{path, PathSegment};
///
/// let p = path!["attributes", "tags", 2];
/// assert_eq!(p, vec![
///     PathSegment::key("attributes"),
///     PathSegment::key("tags"),
///     PathSegment::index(2),
/// ]);
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::new()
    };
    ($($segment:expr),+ $(,)?) => {
        vec![$($crate::PathSegment::from($segment)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_accessors() {
        let key = PathSegment::key("foo");
        assert_eq!(key.as_key(), Some("foo"));
        assert_eq!(key.as_index(), None);

        let index = PathSegment::index(3);
        assert_eq!(index.as_key(), None);
        assert_eq!(index.as_index(), Some(3));
    }

    #[test]
    fn test_path_macro() {
        let p = path!["a", 0, "b"];
        assert_eq!(
            p,
            vec![
                PathSegment::key("a"),
                PathSegment::index(0),
                PathSegment::key("b"),
            ]
        );
        assert_eq!(path![], Path::new());
    }

    #[test]
    fn test_format_path() {
        assert_eq!(format_path(&path![]), "");
        assert_eq!(format_path(&path!["foo"]), "/foo");
        assert_eq!(format_path(&path!["foo", 2, "bar"]), "/foo/2/bar");
    }
}
