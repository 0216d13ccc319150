//! Entry removal.

use serde_json::{Map, Value};

use crate::get::get_mut;
use crate::{split_parent, Segment};

/// Remove the entry at `path`.
///
/// Missing intermediate segments make the whole operation a silent no-op,
/// and so does removing an already-absent leaf — deleting twice observes
/// the same state as deleting once. Array parents are removed from by
/// index; insertion order of the surrounding entries is preserved.
pub fn delete(data: &mut Map<String, Value>, path: &[Segment]) {
    let Ok((parents, last)) = split_parent(path) else {
        return;
    };
    if parents.is_empty() {
        data.shift_remove(last);
        return;
    }
    match get_mut(data, parents) {
        Some(Value::Object(obj)) => {
            obj.shift_remove(last);
        }
        Some(Value::Array(arr)) => {
            if let Ok(idx) = last.parse::<usize>() {
                if idx < arr.len() {
                    arr.remove(idx);
                }
            }
        }
        _ => {}
    }
}
