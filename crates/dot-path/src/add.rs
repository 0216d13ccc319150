//! Append-style writes.

use serde_json::{Map, Value};

use crate::set::descend_forcing;
use crate::Segment;

/// Append `value` at `path`, creating intermediate mappings as needed.
///
/// The leaf accumulates rather than replaces: an existing array gets the
/// value pushed, a non-empty mapping gets it inserted under the next free
/// numeric index key, and anything else (missing, scalar, empty mapping)
/// becomes a one-element array. Repeated calls at the same path therefore
/// build up an ordered collection.
///
/// With `pop` set, the final segment is dropped before the walk, so a path
/// that names an item placeholder appends into its parent.
pub fn add(data: &mut Map<String, Value>, path: &[Segment], value: Value, pop: bool) {
    let segments = if pop {
        match path.split_last() {
            Some((_, parents)) => parents,
            None => path,
        }
    } else {
        path
    };
    let Some((last, parents)) = segments.split_last() else {
        // Popped down to the root mapping itself.
        push_index(data, value);
        return;
    };
    let Some(parent) = descend_forcing(data, parents) else {
        return;
    };
    match parent.get_mut(last.as_str()) {
        Some(Value::Array(arr)) => arr.push(value),
        Some(Value::Object(obj)) if !obj.is_empty() => push_index(obj, value),
        _ => {
            parent.insert(last.clone(), Value::Array(vec![value]));
        }
    }
}

/// Insert under the smallest index past every existing numeric key.
fn push_index(obj: &mut Map<String, Value>, value: Value) {
    let next = obj
        .keys()
        .filter_map(|key| key.parse::<u64>().ok())
        .map(|idx| idx + 1)
        .max()
        .unwrap_or(0);
    obj.insert(next.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{get, parse_path};
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn add_accumulates_in_order() {
        let mut data = doc(json!({"a": 1}));
        add(&mut data, &parse_path("b"), json!("one"), false);
        add(&mut data, &parse_path("b"), json!("two"), false);
        assert_eq!(get(&data, &parse_path("b")), Some(&json!(["one", "two"])));
    }

    #[test]
    fn add_rewrites_scalars_as_single_element_arrays() {
        let mut data = doc(json!({"a": 1}));
        add(&mut data, &parse_path("a"), json!("one"), false);
        assert_eq!(get(&data, &parse_path("a")), Some(&json!(["one"])));
    }

    #[test]
    fn add_appends_to_mappings_under_numeric_keys() {
        let mut data = doc(json!({"a": {"name": "x", "3": true}}));
        add(&mut data, &parse_path("a"), json!("tail"), false);
        assert_eq!(get(&data, &parse_path("a.4")), Some(&json!("tail")));
        assert_eq!(get(&data, &parse_path("a.name")), Some(&json!("x")));
    }

    #[test]
    fn add_creates_missing_intermediates() {
        let mut data = Map::new();
        add(&mut data, &parse_path("x.y"), json!(1), false);
        assert_eq!(get(&data, &parse_path("x.y")), Some(&json!([1])));
    }

    #[test]
    fn add_with_pop_appends_into_the_parent() {
        let mut data = Map::new();
        add(&mut data, &parse_path("items.placeholder"), json!("a"), true);
        add(&mut data, &parse_path("items.placeholder"), json!("b"), true);
        assert_eq!(get(&data, &parse_path("items")), Some(&json!(["a", "b"])));
    }

    #[test]
    fn add_with_pop_on_single_segment_appends_at_root() {
        let mut data = doc(json!({"a": 1}));
        add(&mut data, &parse_path("placeholder"), json!("v"), true);
        assert_eq!(get(&data, &parse_path("0")), Some(&json!("v")));
    }
}
