//! Per-invocation stage options.
//!
//! [`StageArgs`] is the options bag a caller passes when running a
//! composed pipeline. Unlike the pipeline input — which only the first
//! stage sees in raw form — the same args are handed to every stage in
//! the chain, so a single option set can steer several stages at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::Value;

#[derive(Debug, Error)]
pub enum ArgError {
    #[error("argument `{name}` expects a {expected}, found {found}")]
    WrongType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Named options threaded through every stage of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageArgs(BTreeMap<String, Value>);

impl StageArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// String option; `None` when absent.
    pub fn str_opt(&self, name: &str) -> Result<Option<&str>, ArgError> {
        match self.0.get(name) {
            None => Ok(None),
            Some(Value::Str(text)) => Ok(Some(text)),
            Some(other) => Err(ArgError::WrongType {
                name: name.to_string(),
                expected: "string",
                found: other.kind(),
            }),
        }
    }

    /// Boolean option; `None` when absent.
    pub fn bool_opt(&self, name: &str) -> Result<Option<bool>, ArgError> {
        match self.0.get(name) {
            None => Ok(None),
            Some(Value::Bool(flag)) => Ok(Some(*flag)),
            Some(other) => Err(ArgError::WrongType {
                name: name.to_string(),
                expected: "bool",
                found: other.kind(),
            }),
        }
    }

    /// Integer option; `None` when absent.
    pub fn int_opt(&self, name: &str) -> Result<Option<i64>, ArgError> {
        match self.0.get(name) {
            None => Ok(None),
            Some(Value::Int(value)) => Ok(Some(*value)),
            Some(other) => Err(ArgError::WrongType {
                name: name.to_string(),
                expected: "int",
                found: other.kind(),
            }),
        }
    }
}

impl FromIterator<(String, Value)> for StageArgs {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
