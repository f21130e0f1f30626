//! Recursive tree wrapper over nested JSON objects.
//!
//! JSON is a recursive data structure, and exploring a document without
//! knowing exactly where things live (hypermedia payloads, API envelopes) is
//! awkward with raw values. [`Node`] wraps an object-rooted
//! [`serde_json::Value`] into a uniformly navigable tree: every nested object
//! becomes a child node (including objects held inside arrays, recursively),
//! so the whole document can be enumerated, searched, and edited by path.
//!
//! # Example
//!
//! ```
//! use json_nav_tree::Node;
//! use json_nav_path::path;
//! use serde_json::json;
//!
//! let content = json!({"links": {"alternate": [{"href": "somelink"}]}});
//! let mut node = Node::new(content.clone()).unwrap();
//!
//! // every scalar leaf with its full access path
//! let leaves = node.enumerate();
//! assert_eq!(leaves, vec![(path!["links", "alternate", 0, "href"], json!("somelink"))]);
//!
//! // read and write by path
//! assert_eq!(node.get_nested_value(&path!["links", "alternate", 0, "href"]).unwrap(),
//!            json!("somelink"));
//! node.set_nested_value(&path!["links", "alternate", 0, "href"], json!("newvalue")).unwrap();
//!
//! // paths that do not exist yet can be created, padding arrays with nulls
//! node.create_path(&path!["links", "extra", 2], json!("made")).unwrap();
//!
//! // and the tree converts back to a plain value at any time
//! let out = Node::new(content.clone()).unwrap().to_value();
//! assert_eq!(out, content);
//! ```
//!
//! Depth is bounded only by the host call stack; a document nested past that
//! bound aborts rather than erroring. Nodes are plain owned data with no
//! shared references, so concurrent use requires external serialization.

mod edit;
mod node;
mod traverse;

pub use node::{Node, Slot};

pub use json_nav_path::{format_path, path, Path, PathError, PathSegment};
