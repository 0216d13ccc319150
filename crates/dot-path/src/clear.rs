//! Resetting subtrees to empty mappings.

use serde_json::{Map, Value};

use crate::{split_parent, Segment};

/// Replace the value at `path` with an empty mapping.
///
/// Every segment, the final one included, must already hold a mapping;
/// otherwise the operation aborts silently. With `format` set, missing or
/// non-mapping steps are instead created as empty mappings along the way,
/// so the target location always ends up as an empty mapping.
pub fn clear(data: &mut Map<String, Value>, path: &[Segment], format: bool) {
    let Ok((parents, last)) = split_parent(path) else {
        return;
    };
    let mut current = data;
    for segment in parents {
        if !matches!(current.get(segment.as_str()), Some(Value::Object(_))) {
            if !format {
                return;
            }
            current.insert(segment.clone(), Value::Object(Map::new()));
        }
        current = match current.get_mut(segment.as_str()) {
            Some(Value::Object(obj)) => obj,
            _ => return,
        };
    }
    if !format && !matches!(current.get(last), Some(Value::Object(_))) {
        return;
    }
    current.insert(last.to_string(), Value::Object(Map::new()));
}
