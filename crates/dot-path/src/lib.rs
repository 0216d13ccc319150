//! Dot-path primitives for nested JSON data.
//!
//! A dot path is a string such as `"a.b.c"` that names a location inside
//! nested [`serde_json::Value`] containers. This crate provides the parsing
//! and traversal building blocks as free functions over a root mapping; the
//! `dot-notation` crate layers a stateful accessor on top.
//!
//! Missing paths are never errors here: reads short-circuit to `None` and
//! removals are silent no-ops. Writes are permissive — a scalar sitting in
//! the middle of a written path is overwritten with a mapping.
//!
//! # Example
//!
//! ```
//! use dot_path::{get, parse_path};
//!
//! let doc = serde_json::json!({"a": 1, "b": {"bc": 2}});
//! let map = doc.as_object().unwrap();
//!
//! assert_eq!(get(map, &parse_path("b.bc")), Some(&serde_json::json!(2)));
//! assert_eq!(get(map, &parse_path("missing.deep")), None);
//! ```

use thiserror::Error;

pub mod add;
pub mod clear;
pub mod delete;
pub mod get;
pub mod path;
pub mod set;

pub use add::add;
pub use clear::clear;
pub use delete::delete;
pub use get::{get, get_mut, has};
pub use path::{format_path, parse_path, split_parent};
pub use set::set;

/// A single key between dots in a dot path.
pub type Segment = String;

/// A parsed dot path: an ordered sequence of segments.
pub type Path = Vec<Segment>;

/// Errors produced by the path primitives.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path has no segments, so there is no final segment to split off.
    #[error("empty path")]
    Empty,
}
