//! Dynamic values exchanged between pipeline stages.
//!
//! Stages are unary functions over [`Value`]. The enum deliberately keeps
//! the boundary loose: a stage declares the shape it expects and errors on
//! anything else, mirroring the caller-responsibility typing contract of
//! the pipeline layer (the composer performs no checking of its own).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::Record;

/// A value flowing through a pipeline.
///
/// Strings are scalars here, never containers: the flattener and every
/// other structural consumer treats `Str` as a leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Record(Record),
}

impl Value {
    /// Borrow the string content, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the elements, if this is a `List`.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the record, if this is a `Record`.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// A human-readable name for the variant, used in stage error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Record(_) => "record",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Str(text) => f.write_str(text),
            Value::List(_) | Value::Record(_) => {
                let encoded = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&encoded)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Record(record)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_lists_convert_from_vec() {
        let value = Value::from(vec![vec!["a".to_string()], vec!["b".to_string()]]);
        let Value::List(outer) = value else {
            panic!("expected list");
        };
        assert_eq!(outer.len(), 2);
        assert_eq!(outer[0], Value::List(vec![Value::Str("a".to_string())]));
    }

    #[test]
    fn display_is_raw_for_strings_and_json_for_lists() {
        assert_eq!(Value::from("hello").to_string(), "hello");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(vec![1i64, 2]).to_string(), "[1,2]");
    }

    #[test]
    fn serde_round_trips_untagged() {
        let value = Value::List(vec![
            Value::Int(1),
            Value::Str("two".to_string()),
            Value::List(vec![]),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"[1,"two",[]]"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
