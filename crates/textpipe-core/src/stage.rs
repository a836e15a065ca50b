//! Named unary transformations and their output-normalizing wrappers.
//!
//! A [`Stage`] pairs a callable with a stable name. The name survives
//! wrapping: normalizing a stage's output produces a new stage that still
//! reports the inner stage's name, so pipelines stay debuggable after
//! decoration.
//!
//! Two normalizers are provided and neither is the default:
//!
//! - [`Stage::wrap_output`] always re-wraps the result in a [`Record`],
//!   for stages guaranteed never to produce one themselves.
//! - [`Stage::ensure_record`] wraps only when the result is not already a
//!   record, and is therefore idempotent under repeated application and
//!   under composition.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use anyhow::Result;

use crate::args::StageArgs;
use crate::record::Record;
use crate::value::Value;

type StageFn = dyn Fn(Value, &StageArgs) -> Result<Value> + Send + Sync;

/// One unary function in a pipeline, with an introspectable name.
#[derive(Clone)]
pub struct Stage {
    name: Cow<'static, str>,
    func: Arc<StageFn>,
}

impl Stage {
    /// Create a stage from a function that reads per-run options.
    pub fn new<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(Value, &StageArgs) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Create a stage from a plain unary function that ignores options.
    pub fn from_fn<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(Value) -> Result<Value> + Send + Sync + 'static,
    {
        Self::new(name, move |value, _args| func(value))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the stage. Errors from the underlying function propagate
    /// verbatim; no context is attached here.
    pub fn apply(&self, value: Value, args: &StageArgs) -> Result<Value> {
        (self.func)(value, args)
    }

    /// Unconditional output normalization: the result is always wrapped
    /// in a fresh [`Record`] under [`crate::OUTCOME_KEY`], even if the
    /// inner stage already produced a record. Use only when the inner
    /// stage is known never to return one.
    pub fn wrap_output(self) -> Stage {
        let name = self.name.clone();
        let inner = self.func;
        Stage {
            name,
            func: Arc::new(move |value, args| {
                let outcome = inner(value, args)?;
                Ok(Value::Record(Record::outcome(outcome)))
            }),
        }
    }

    /// Conditional output normalization: a result that is already a
    /// [`Record`] passes through unchanged, anything else is wrapped.
    /// Idempotent — applying this twice never nests records.
    pub fn ensure_record(self) -> Stage {
        let name = self.name.clone();
        let inner = self.func;
        Stage {
            name,
            func: Arc::new(move |value, args| {
                let outcome = inner(value, args)?;
                if outcome.is_record() {
                    Ok(outcome)
                } else {
                    Ok(Value::Record(Record::outcome(outcome)))
                }
            }),
        }
    }
}

impl fmt::Debug for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stage").field("name", &self.name).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn doubler() -> Stage {
        Stage::from_fn("double", |value| match value {
            Value::Int(n) => Ok(Value::Int(n * 2)),
            other => bail!("double expects an int, found {}", other.kind()),
        })
    }

    #[test]
    fn wrap_output_always_wraps() {
        let stage = doubler().wrap_output();
        let result = stage.apply(Value::Int(3), &StageArgs::new()).unwrap();
        let record = result.as_record().expect("wrapped result");
        assert_eq!(record.key(), crate::OUTCOME_KEY);
        assert_eq!(record.value(), &Value::Int(6));
    }

    #[test]
    fn wrap_output_on_record_producing_stage_nests() {
        // Documented hazard of the unconditional variant.
        let stage = doubler().wrap_output().wrap_output();
        let result = stage.apply(Value::Int(1), &StageArgs::new()).unwrap();
        let outer = result.as_record().unwrap();
        assert!(outer.value().is_record());
    }

    #[test]
    fn ensure_record_is_idempotent() {
        let once = doubler().ensure_record();
        let twice = doubler().ensure_record().ensure_record();

        let a = once.apply(Value::Int(2), &StageArgs::new()).unwrap();
        let b = twice.apply(Value::Int(2), &StageArgs::new()).unwrap();

        assert_eq!(a, b);
        let record = b.as_record().unwrap();
        assert!(!record.value().is_record(), "records must never nest");
        assert_eq!(record.value(), &Value::Int(4));
    }

    #[test]
    fn wrappers_preserve_the_stage_name() {
        assert_eq!(doubler().wrap_output().name(), "double");
        assert_eq!(doubler().ensure_record().name(), "double");
    }

    #[test]
    fn stage_errors_propagate_unmodified() {
        let stage = doubler().ensure_record();
        let error = stage
            .apply(Value::Str("oops".to_string()), &StageArgs::new())
            .unwrap_err();
        assert_eq!(error.to_string(), "double expects an int, found string");
    }
}
