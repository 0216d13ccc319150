//! Path-creating writes.

use serde_json::{Map, Value};

use crate::Segment;

/// Set `value` at `path`, creating intermediate mappings as needed.
///
/// Any non-final segment that is missing or does not hold a mapping is
/// overwritten with an empty mapping before descending; the prior value is
/// discarded. The final segment is assigned directly, replacing whatever
/// was there. An empty segment list is a no-op.
///
/// # Example
///
/// ```
/// use dot_path::{get, parse_path, set};
/// use serde_json::json;
///
/// let mut data = serde_json::Map::new();
/// set(&mut data, &parse_path("a.b.c"), json!(1));
/// assert_eq!(get(&data, &parse_path("a.b.c")), Some(&json!(1)));
/// ```
pub fn set(data: &mut Map<String, Value>, path: &[Segment], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };
    let Some(parent) = descend_forcing(data, parents) else {
        return;
    };
    parent.insert(last.clone(), value);
}

/// Walk `segments`, forcing each step to hold a mapping, and return the
/// innermost one.
pub(crate) fn descend_forcing<'a>(
    data: &'a mut Map<String, Value>,
    segments: &[Segment],
) -> Option<&'a mut Map<String, Value>> {
    let mut current = data;
    for segment in segments {
        if !matches!(current.get(segment.as_str()), Some(Value::Object(_))) {
            current.insert(segment.clone(), Value::Object(Map::new()));
        }
        current = match current.get_mut(segment.as_str()) {
            Some(Value::Object(obj)) => obj,
            _ => return None,
        };
    }
    Some(current)
}
