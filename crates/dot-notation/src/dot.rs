//! The [`Dot`] accessor.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::iter::DotIter;

/// The backing structure: an insertion-ordered mapping from keys to values.
pub type Data = Map<String, Value>;

/// Dot notation accessor over a nested mapping.
///
/// The backing data lives in a shared mutable cell. Constructors taking
/// data by value allocate a private cell; [`Dot::from_shared`] aliases an
/// existing one, so several accessors (or outside code holding the handle)
/// observe each other's mutations. Cloning a `Dot` clones the handle, not
/// the data — use [`Dot::to_map`] for a detached snapshot.
///
/// Missing paths are never errors: reads fall back to a default, removals
/// are no-ops. Writes are permissive — a scalar sitting in the middle of a
/// written path is overwritten with a mapping. Instances are meant for
/// exclusive single-threaded use.
#[derive(Debug, Clone)]
pub struct Dot {
    data: Rc<RefCell<Data>>,
}

impl Dot {
    /// Create an accessor over an empty mapping.
    pub fn new() -> Self {
        Self::from_map(Data::new())
    }

    /// Create an accessor owning `data` in a private cell.
    pub fn from_map(data: Data) -> Self {
        Self {
            data: Rc::new(RefCell::new(data)),
        }
    }

    /// Create an accessor from a JSON value.
    ///
    /// Returns `None` when the value is not an object, since the root of
    /// the backing structure must be a mapping.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self::from_map(map)),
            _ => None,
        }
    }

    /// Create an accessor aliasing caller-owned data.
    ///
    /// External mutations through the handle are visible through the
    /// accessor, and vice versa.
    pub fn from_shared(data: Rc<RefCell<Data>>) -> Self {
        Self { data }
    }

    /// The shared handle to the backing data.
    pub fn shared(&self) -> Rc<RefCell<Data>> {
        Rc::clone(&self.data)
    }

    /// Get the value at `path`, or `None` when any segment is absent.
    ///
    /// The walk never mutates: descending into missing or scalar segments
    /// simply short-circuits.
    ///
    /// # Example
    ///
    /// ```
    /// use dot_notation::Dot;
    /// use serde_json::json;
    ///
    /// let dot = Dot::from_value(json!({"a": 1, "b": {"bc": 2}})).unwrap();
    /// assert_eq!(dot.get("a"), Some(json!(1)));
    /// assert_eq!(dot.get("b.bc"), Some(json!(2)));
    /// assert_eq!(dot.get("missing.deep"), None);
    /// ```
    pub fn get(&self, path: &str) -> Option<Value> {
        let data = self.data.borrow();
        dot_path::get(&data, &dot_path::parse_path(path)).cloned()
    }

    /// Get the value at `path`, or `default` when the path does not
    /// resolve.
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).unwrap_or(default)
    }

    /// Get the mapping at `path` wrapped in a new detached accessor.
    ///
    /// Returns `None` when the path does not resolve to a mapping. The
    /// wrapper holds its own copy; mutating it does not touch the parent.
    pub fn get_dot(&self, path: &str) -> Option<Dot> {
        Dot::from_value(self.get(path)?)
    }

    /// Check whether `path` resolves. Presence is containment, not
    /// truthiness: stored `null` and `false` values count.
    pub fn has(&self, path: &str) -> bool {
        let data = self.data.borrow();
        dot_path::has(&data, &dot_path::parse_path(path))
    }

    /// Set `value` at `path`, creating intermediate mappings as needed.
    /// Values along the way that are not mappings are discarded.
    ///
    /// # Example
    ///
    /// ```
    /// use dot_notation::Dot;
    /// use serde_json::json;
    ///
    /// let mut dot = Dot::new();
    /// dot.set("a.b", json!(1)).set("a.c", json!(2));
    /// assert_eq!(dot.get("a"), Some(json!({"b": 1, "c": 2})));
    /// ```
    pub fn set(&mut self, path: &str, value: Value) -> &mut Self {
        dot_path::set(
            &mut self.data.borrow_mut(),
            &dot_path::parse_path(path),
            value,
        );
        self
    }

    /// Set several `path → value` pairs, in iteration order. Later pairs
    /// win when paths overlap.
    pub fn set_many<I, K>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        for (path, value) in pairs {
            self.set(path.as_ref(), value);
        }
        self
    }

    /// Append `value` to the collection at `path`.
    ///
    /// An existing array gets the value pushed; anything else becomes a
    /// one-element array, so repeated calls accumulate in order.
    ///
    /// # Example
    ///
    /// ```
    /// use dot_notation::Dot;
    /// use serde_json::json;
    ///
    /// let mut dot = Dot::from_value(json!({"a": 1})).unwrap();
    /// dot.add("b", json!("one")).add("b", json!("two"));
    /// assert_eq!(dot.get("b"), Some(json!(["one", "two"])));
    ///
    /// dot.add("a", json!("one"));
    /// assert_eq!(dot.get("a"), Some(json!(["one"])));
    /// ```
    pub fn add(&mut self, path: &str, value: Value) -> &mut Self {
        dot_path::add(
            &mut self.data.borrow_mut(),
            &dot_path::parse_path(path),
            value,
            false,
        );
        self
    }

    /// [`Dot::add`], but the final path segment is dropped before the walk.
    ///
    /// Lets callers reuse a path that notionally includes a trailing item
    /// placeholder instead of building a second path for the parent.
    pub fn add_pop(&mut self, path: &str, value: Value) -> &mut Self {
        dot_path::add(
            &mut self.data.borrow_mut(),
            &dot_path::parse_path(path),
            value,
            true,
        );
        self
    }

    /// Append several `path → value` pairs, in iteration order.
    pub fn add_many<I, K>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        for (path, value) in pairs {
            self.add(path.as_ref(), value);
        }
        self
    }

    /// Remove the entry at `path`. Missing segments make this a silent
    /// no-op, so deleting twice observes the same state as deleting once.
    pub fn delete(&mut self, path: &str) -> &mut Self {
        dot_path::delete(&mut self.data.borrow_mut(), &dot_path::parse_path(path));
        self
    }

    /// Remove several paths, each through the single-path primitive.
    pub fn delete_many<I, K>(&mut self, paths: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for path in paths {
            self.delete(path.as_ref());
        }
        self
    }

    /// Replace the value at `path` with an empty mapping.
    ///
    /// With `format` set, missing or non-mapping steps are created along
    /// the way; otherwise any such step aborts the operation silently.
    pub fn clear(&mut self, path: &str, format: bool) -> &mut Self {
        dot_path::clear(
            &mut self.data.borrow_mut(),
            &dot_path::parse_path(path),
            format,
        );
        self
    }

    /// Reset the whole backing structure to an empty mapping.
    pub fn clear_all(&mut self) -> &mut Self {
        self.data.borrow_mut().clear();
        self
    }

    /// Clear several paths with the same `format` flag.
    pub fn clear_many<I, K>(&mut self, paths: I, format: bool) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for path in paths {
            self.clear(path.as_ref(), format);
        }
        self
    }

    /// Add `amount` to the number at `path` and write the result back.
    ///
    /// Absent or non-numeric values read as zero. Integral results within
    /// `i64` range are stored as integers. Returns the new value.
    pub fn plus(&mut self, path: &str, amount: f64) -> f64 {
        let current = self
            .get(path)
            .as_ref()
            .and_then(Value::as_f64)
            .unwrap_or(0.0);
        let next = current + amount;
        self.set(path, number_value(next));
        next
    }

    /// Subtract `amount` from the number at `path`. Counterpart of
    /// [`Dot::plus`].
    pub fn minus(&mut self, path: &str, amount: f64) -> f64 {
        self.plus(path, -amount)
    }

    /// Number of direct entries in the root mapping.
    pub fn len(&self) -> usize {
        self.data.borrow().len()
    }

    /// True when the root mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.borrow().is_empty()
    }

    /// Snapshot of the whole backing mapping. Use [`Dot::shared`] to reach
    /// the live data instead.
    pub fn to_map(&self) -> Data {
        self.data.borrow().clone()
    }

    /// Serialize the backing mapping to pretty-printed JSON. Non-ASCII
    /// characters are emitted literally, not escaped. Returns `None` when
    /// the structure cannot be serialized.
    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string_pretty(&*self.data.borrow()).ok()
    }

    /// Replace the backing data in place. Aliased accessors see the new
    /// contents; the shared handle stays the same.
    pub fn set_data(&mut self, data: Data) {
        *self.data.borrow_mut() = data;
    }

    /// Swap this accessor onto a caller-owned cell, detaching it from its
    /// previous data.
    pub fn set_data_as_ref(&mut self, data: Rc<RefCell<Data>>) {
        self.data = data;
    }

    /// Cursor over the root mapping's direct entries, in insertion order.
    pub fn iter(&self) -> DotIter {
        DotIter::new(self.shared())
    }
}

/// Store integral results as integers so that counters over integer data
/// stay integers.
fn number_value(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl Default for Dot {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Data> for Dot {
    fn from(data: Data) -> Self {
        Self::from_map(data)
    }
}

impl PartialEq for Dot {
    fn eq(&self, other: &Self) -> bool {
        *self.data.borrow() == *other.data.borrow()
    }
}

impl fmt::Display for Dot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().ok_or(fmt::Error)?;
        f.write_str(&json)
    }
}

impl Serialize for Dot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.data.borrow().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Dot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Dot::from_map(Data::deserialize(deserializer)?))
    }
}
