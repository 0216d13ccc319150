//! External-iterator cursor over the root mapping.

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::dot::{Data, Dot};

/// Restartable cursor over the direct entries of a [`Dot`]'s root mapping,
/// in insertion order.
///
/// The cursor snapshots the key list when created (and again on
/// [`DotIter::rewind`]) and looks values up lazily, so it can be paused and
/// resumed across calls. Structural mutation of the data mid-iteration is
/// not supported: entries removed after the snapshot are skipped, anything
/// else about the traversal is unspecified.
#[derive(Debug, Clone)]
pub struct DotIter {
    data: Rc<RefCell<Data>>,
    keys: Vec<String>,
    pos: usize,
}

impl DotIter {
    pub(crate) fn new(data: Rc<RefCell<Data>>) -> Self {
        let keys = data.borrow().keys().cloned().collect();
        Self { data, keys, pos: 0 }
    }

    /// Key at the cursor, or `None` when the cursor is exhausted.
    pub fn key(&self) -> Option<&str> {
        self.keys.get(self.pos).map(String::as_str)
    }

    /// Value at the cursor.
    pub fn current(&self) -> Option<Value> {
        self.data.borrow().get(self.key()?).cloned()
    }

    /// Whether the cursor still points at an entry.
    pub fn valid(&self) -> bool {
        self.pos < self.keys.len()
    }

    /// Restart from the first entry, re-reading the key list.
    pub fn rewind(&mut self) {
        self.keys = self.data.borrow().keys().cloned().collect();
        self.pos = 0;
    }
}

impl Iterator for DotIter {
    type Item = (String, Value);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.keys.len() {
            let key = self.keys[self.pos].clone();
            self.pos += 1;
            let value = self.data.borrow().get(&key).cloned();
            if let Some(value) = value {
                return Some((key, value));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a Dot {
    type Item = (String, Value);
    type IntoIter = DotIter;

    fn into_iter(self) -> DotIter {
        self.iter()
    }
}
