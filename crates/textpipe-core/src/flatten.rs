//! Lazy flattening of irregularly nested values.
//!
//! [`flatten`] walks a [`Value`] depth-first, left to right, yielding
//! leaf values in the order they appear. Strings are always leaves —
//! `["ab", ["c"]]` flattens to `"ab", "c"`, never to characters. Lists
//! are containers; a record is traversed into its single value. Empty
//! containers contribute nothing and never terminate the walk.
//!
//! The iterator keeps an explicit stack of child cursors instead of
//! recursing, so arbitrarily deep nesting cannot overflow the call
//! stack, and each pull does a bounded amount of work. A `Flattened`
//! instance is forward-only; call [`flatten`] again on the same value
//! for a fresh, independent traversal.

use crate::value::Value;

/// Lazy depth-first iterator over the leaves of a nested [`Value`].
#[derive(Debug)]
pub struct Flattened<'a> {
    /// Set when the root itself is a leaf.
    pending_leaf: Option<&'a Value>,
    stack: Vec<std::slice::Iter<'a, Value>>,
}

/// Flatten a nested value into a lazy sequence of its leaves.
pub fn flatten(value: &Value) -> Flattened<'_> {
    match value {
        Value::List(items) => Flattened {
            pending_leaf: None,
            stack: vec![items.iter()],
        },
        Value::Record(record) => Flattened {
            pending_leaf: None,
            stack: vec![std::slice::from_ref(record.value()).iter()],
        },
        leaf => Flattened {
            pending_leaf: Some(leaf),
            stack: Vec::new(),
        },
    }
}

/// Eagerly flatten into owned leaf values.
pub fn flatten_owned(value: &Value) -> Vec<Value> {
    flatten(value).cloned().collect()
}

impl<'a> Iterator for Flattened<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<&'a Value> {
        if let Some(leaf) = self.pending_leaf.take() {
            return Some(leaf);
        }
        while let Some(cursor) = self.stack.last_mut() {
            match cursor.next() {
                None => {
                    self.stack.pop();
                }
                Some(Value::List(items)) => self.stack.push(items.iter()),
                Some(Value::Record(record)) => {
                    self.stack.push(std::slice::from_ref(record.value()).iter());
                }
                Some(leaf) => return Some(leaf),
            }
        }
        None
    }
}
