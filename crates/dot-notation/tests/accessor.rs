use std::cell::RefCell;
use std::rc::Rc;

use dot_notation::{Data, Dot};
use serde_json::{json, Value};

#[test]
fn get_scenarios() {
    let dot = Dot::from_value(json!({"a": 1, "b": {"bc": 2}})).unwrap();
    assert_eq!(dot.get("a"), Some(json!(1)));
    assert!(dot.get("b").unwrap().is_object());
    assert_eq!(dot.get("b.bc"), Some(json!(2)));
    assert_eq!(dot.get("notexist"), None);
    assert_eq!(dot.get("notexist.deep"), None);
    assert_eq!(dot.get_or("test-default-false", json!(false)), json!(false));
}

#[test]
fn set_replaces_whole_subtrees() {
    let mut dot = Dot::from_value(json!({"a": 33, "b": {"bc": 33, "z": 1}})).unwrap();
    dot.set("a", json!(1)).set("b", json!({"bc": 2}));
    assert_eq!(dot.to_map(), *json!({"a": 1, "b": {"bc": 2}}).as_object().unwrap());
}

#[test]
fn set_through_scalar_discards_it() {
    let mut dot = Dot::from_value(json!({"a": 1})).unwrap();
    dot.set("a.b.c", json!("deep"));
    assert_eq!(dot.get("a"), Some(json!({"b": {"c": "deep"}})));
}

#[test]
fn set_many_applies_pairs_in_order() {
    let mut dot = Dot::new();
    dot.set_many([
        ("user.name", json!("andrey")),
        ("user.lang", json!("ru")),
        ("user.name", json!("overwritten")),
    ]);
    assert_eq!(dot.get("user.name"), Some(json!("overwritten")));
    assert_eq!(dot.get("user.lang"), Some(json!("ru")));
}

#[test]
fn add_builds_ordered_collections() {
    let mut dot = Dot::from_value(json!({"a": 1})).unwrap();
    dot.add("b", json!("one"));
    assert_eq!(dot.get("b").unwrap().as_array().unwrap().len(), 1);
    dot.add("b", json!("two"));
    assert_eq!(dot.get("b"), Some(json!(["one", "two"])));

    // Rewriting a scalar leaf
    dot.add("a", json!("one"));
    assert_eq!(dot.get("a"), Some(json!(["one"])));
}

#[test]
fn add_pop_appends_into_the_parent_path() {
    let mut dot = Dot::new();
    dot.add_pop("queue.item", json!("first"));
    dot.add_pop("queue.item", json!("second"));
    assert_eq!(dot.get("queue"), Some(json!(["first", "second"])));
}

#[test]
fn delete_is_silent_and_idempotent() {
    let mut dot = Dot::from_value(json!({"a": 1, "b": {"bc": 2}})).unwrap();
    dot.delete("b.bc");
    let once = dot.to_map();
    dot.delete("b.bc");
    assert_eq!(dot.to_map(), once);
    dot.delete("missing.deep");
    assert_eq!(dot.get("a"), Some(json!(1)));
}

#[test]
fn delete_many_removes_each_path() {
    let mut dot = Dot::from_value(json!({"a": 1, "b": {"bc": 2, "z": 3}, "c": 4})).unwrap();
    dot.delete_many(["a", "b.z", "missing"]);
    assert_eq!(dot.to_map(), *json!({"b": {"bc": 2}, "c": 4}).as_object().unwrap());
}

#[test]
fn clear_all_empties_the_structure() {
    let mut dot = Dot::from_value(json!({"a": 1, "b": {"bc": 2}})).unwrap();
    assert!(!dot.is_empty());
    dot.clear_all();
    assert!(dot.is_empty());
    assert_eq!(dot.len(), 0);
}

#[test]
fn clear_with_format_materializes_missing_paths() {
    let mut dot = Dot::new();
    dot.clear("a.b", true);
    assert_eq!(dot.get("a"), Some(json!({"b": {}})));

    let mut strict = Dot::new();
    strict.clear("a.b", false);
    assert!(strict.is_empty());
}

#[test]
fn clear_many_uses_one_format_flag() {
    let mut dot = Dot::from_value(json!({"a": {"x": 1}, "b": 2})).unwrap();
    dot.clear_many(["a", "c.d"], true);
    assert_eq!(dot.get("a"), Some(json!({})));
    assert_eq!(dot.get("c.d"), Some(json!({})));
}

#[test]
fn shared_handle_aliases_both_ways() {
    let data: Rc<RefCell<Data>> = Rc::new(RefCell::new(
        json!({"counter": 1}).as_object().cloned().unwrap(),
    ));
    let mut dot = Dot::from_shared(Rc::clone(&data));

    dot.set("counter", json!(2));
    assert_eq!(data.borrow().get("counter"), Some(&json!(2)));

    data.borrow_mut().insert("outside".to_string(), json!(true));
    assert!(dot.has("outside"));
}

#[test]
fn set_data_replaces_contents_for_all_aliases() {
    let mut dot = Dot::from_value(json!({"old": 1})).unwrap();
    let alias = dot.clone();
    dot.set_data(json!({"new": 2}).as_object().cloned().unwrap());
    assert_eq!(alias.get("new"), Some(json!(2)));
    assert!(!alias.has("old"));
}

#[test]
fn set_data_as_ref_rebinds_the_accessor() {
    let mut dot = Dot::from_value(json!({"old": 1})).unwrap();
    let cell: Rc<RefCell<Data>> = Rc::new(RefCell::new(
        json!({"new": 2}).as_object().cloned().unwrap(),
    ));
    dot.set_data_as_ref(Rc::clone(&cell));
    assert_eq!(dot.get("new"), Some(json!(2)));
    dot.set("added", json!(3));
    assert!(cell.borrow().contains_key("added"));
}

#[test]
fn to_json_is_pretty_and_keeps_unicode_literal() {
    let mut dot = Dot::new();
    dot.set("greeting", json!("привет"));
    let json = dot.to_json().unwrap();
    assert!(json.contains('\n'));
    assert!(json.contains("привет"));
    assert!(!json.contains("\\u"));

    let parsed: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, json!({"greeting": "привет"}));
}

#[test]
fn display_equals_json_export() {
    let mut dot = Dot::new();
    dot.set("a.b", json!([1, 2]));
    assert_eq!(format!("{dot}"), dot.to_json().unwrap());
}

#[test]
fn serde_roundtrips_as_the_backing_mapping() {
    let dot = Dot::from_value(json!({"a": 1, "b": {"bc": 2}})).unwrap();
    let encoded = serde_json::to_string(&dot).unwrap();
    assert_eq!(encoded, r#"{"a":1,"b":{"bc":2}}"#);

    let decoded: Dot = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, dot);
}

#[test]
fn len_counts_direct_entries_only() {
    let dot = Dot::from_value(json!({"a": 1, "b": {"x": 1, "y": 2, "z": 3}})).unwrap();
    assert_eq!(dot.len(), 2);
}
