//! Read-only traversal of nested values.

use serde_json::{Map, Value};

use crate::Segment;

/// Get a reference to the value at `path`, or `None` if any segment is
/// absent.
///
/// Objects are entered by key, arrays by numeric segment; anything else
/// ends the walk. Never mutates the data. An empty segment list resolves
/// to nothing — the root mapping itself is not addressable by segment.
pub fn get<'a>(data: &'a Map<String, Value>, path: &[Segment]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = data.get(first.as_str())?;
    for segment in rest {
        current = step(current, segment)?;
    }
    Some(current)
}

/// Mutable counterpart of [`get`].
pub fn get_mut<'a>(data: &'a mut Map<String, Value>, path: &[Segment]) -> Option<&'a mut Value> {
    let (first, rest) = path.split_first()?;
    let mut current = data.get_mut(first.as_str())?;
    for segment in rest {
        current = step_mut(current, segment)?;
    }
    Some(current)
}

/// Check whether `path` resolves.
///
/// Presence is containment, not truthiness: a stored `null` or `false`
/// still counts.
pub fn has(data: &Map<String, Value>, path: &[Segment]) -> bool {
    get(data, path).is_some()
}

fn step<'a>(value: &'a Value, segment: &str) -> Option<&'a Value> {
    match value {
        Value::Object(obj) => obj.get(segment),
        Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?),
        _ => None,
    }
}

fn step_mut<'a>(value: &'a mut Value, segment: &str) -> Option<&'a mut Value> {
    match value {
        Value::Object(obj) => obj.get_mut(segment),
        Value::Array(arr) => arr.get_mut(segment.parse::<usize>().ok()?),
        _ => None,
    }
}
