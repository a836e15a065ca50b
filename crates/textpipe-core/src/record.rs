//! The keyed record exchanged between pipeline stages and their caller.
//!
//! A [`Record`] is a single-field mapping: one static label, one value.
//! It is the canonical boundary shape a tabular caller consumes as "one
//! column per key". The exactly-one-entry invariant is structural — the
//! type has one key slot and one value slot, so it cannot be violated at
//! run time the way a general map could.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::value::Value;

/// Default record label used when a stage does not pick its own.
pub const OUTCOME_KEY: &str = "outcome";

/// A single-field keyed record.
///
/// Records are created when a stage's raw result is captured and never
/// mutated afterwards; the next stage (or the caller) consumes them
/// whole. The key is a label chosen by the wrapping stage, not derived
/// from the data.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    key: Cow<'static, str>,
    value: Box<Value>,
}

impl Record {
    /// Wrap a value under an explicit key.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: Box::new(value.into()),
        }
    }

    /// Wrap a value under the default [`OUTCOME_KEY`] label.
    ///
    /// Accepts any value unchanged, including [`Value::Null`].
    pub fn outcome(value: impl Into<Value>) -> Self {
        Self::new(OUTCOME_KEY, value)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Unwrap the record, discarding the key.
    pub fn into_value(self) -> Value {
        *self.value
    }

    pub fn into_parts(self) -> (Cow<'static, str>, Value) {
        (self.key, *self.value)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key.as_ref(), self.value.as_ref())?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, Value>::deserialize(deserializer)?;
        if entries.len() != 1 {
            return Err(D::Error::custom(format!(
                "record must hold exactly one entry, found {}",
                entries.len()
            )));
        }
        let (key, value) = entries
            .into_iter()
            .next()
            .ok_or_else(|| D::Error::custom("record must hold exactly one entry"))?;
        Ok(Record::new(key, value))
    }
}
