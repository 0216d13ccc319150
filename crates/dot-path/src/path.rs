//! Parsing and formatting of dot paths.

use crate::{Path, PathError, Segment};

/// Split a dot path into segments.
///
/// The split is exact: consecutive dots produce empty-string segments, and
/// the empty string parses to a single empty segment. Literal dots inside a
/// key cannot be escaped.
///
/// # Example
///
/// ```
/// use dot_path::parse_path;
///
/// assert_eq!(parse_path("a.b.c"), vec!["a", "b", "c"]);
/// assert_eq!(parse_path("a..c"), vec!["a", "", "c"]);
/// assert_eq!(parse_path(""), vec![""]);
/// ```
pub fn parse_path(path: &str) -> Path {
    path.split('.').map(str::to_string).collect()
}

/// Join segments back into a dot path.
///
/// Inverse of [`parse_path`] as long as no segment contains a literal dot.
pub fn format_path(path: &[Segment]) -> String {
    path.join(".")
}

/// Separate the final segment from its parent path.
pub fn split_parent(path: &[Segment]) -> Result<(&[Segment], &str), PathError> {
    match path.split_last() {
        Some((last, parents)) => Ok((parents, last.as_str())),
        None => Err(PathError::Empty),
    }
}
