//! Left-to-right composition of stages into a single runnable pipeline.
//!
//! Composition order is strictly **left to right in supply order**: the
//! first stage added (or the first element of the iterator handed to
//! [`compose`]) is applied first to the input. That is the reverse of the
//! mathematical `g ∘ f` convention, and matches how a chain reads in a
//! builder: `Pipeline::new().then(f).then(g)` computes `g(f(x))`.
//!
//! An empty pipeline is the identity. Stage errors abort the remaining
//! chain and propagate to the caller untouched — the composer neither
//! catches nor annotates them, and performs no per-stage recovery.

use anyhow::Result;
use tracing::trace;

use crate::args::StageArgs;
use crate::record::Record;
use crate::stage::Stage;
use crate::value::Value;

/// An ordered, immutable chain of stages composed into one callable.
///
/// Built once, reusable across any number of runs; running a pipeline
/// holds no shared mutable state, so a `Pipeline` may be invoked from
/// several threads at once as long as its stage functions allow it.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Create an empty pipeline (the identity function).
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit alias for the zero-stage pipeline: `identity().run(x) == x`.
    pub fn identity() -> Self {
        Self::new()
    }

    /// Build a pipeline from stages in application order.
    pub fn from_stages(stages: impl IntoIterator<Item = Stage>) -> Self {
        Self {
            stages: stages.into_iter().collect(),
        }
    }

    /// Append a stage to the end of the chain.
    pub fn then(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Prepend a forced record-wrapping step, so the pipeline input is
    /// first normalized to a [`Record`] and then threaded through the
    /// user stages. Gives callers a uniform entry point regardless of
    /// whether the first real stage expects raw or wrapped input.
    pub fn with_record_entry(mut self) -> Self {
        let entry = Stage::from_fn("record_entry", |value| {
            Ok(Value::Record(Record::outcome(value)))
        });
        self.stages.insert(0, entry);
        self
    }

    /// Run the pipeline with no per-run options.
    pub fn run(&self, value: Value) -> Result<Value> {
        self.run_with(value, &StageArgs::new())
    }

    /// Run the pipeline, handing `args` to **every** stage.
    ///
    /// Each stage receives only its predecessor's return value plus the
    /// shared `args`; the raw input is seen by the first stage alone.
    /// Fails fast on the first stage error.
    pub fn run_with(&self, value: Value, args: &StageArgs) -> Result<Value> {
        let mut current = value;
        for stage in &self.stages {
            trace!(stage = stage.name(), "applying pipeline stage");
            current = stage.apply(current, args)?;
        }
        Ok(current)
    }

    /// Stage names in application order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(Stage::name).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl FromIterator<Stage> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Stage>>(iter: I) -> Self {
        Self::from_stages(iter)
    }
}

impl Extend<Stage> for Pipeline {
    fn extend<I: IntoIterator<Item = Stage>>(&mut self, iter: I) {
        self.stages.extend(iter);
    }
}

/// Compose stages into a single pipeline, first-supplied applied first.
///
/// `compose([])` yields the identity pipeline.
pub fn compose(stages: impl IntoIterator<Item = Stage>) -> Pipeline {
    Pipeline::from_stages(stages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn add(n: i64) -> Stage {
        Stage::from_fn(format!("add_{n}"), move |value| match value {
            Value::Int(x) => Ok(Value::Int(x + n)),
            other => bail!("add expects an int, found {}", other.kind()),
        })
    }

    fn mul(n: i64) -> Stage {
        Stage::from_fn(format!("mul_{n}"), move |value| match value {
            Value::Int(x) => Ok(Value::Int(x * n)),
            other => bail!("mul expects an int, found {}", other.kind()),
        })
    }

    #[test]
    fn applies_stages_left_to_right() {
        // (3 + 1) * 10, not (3 * 10) + 1
        let pipeline = compose([add(1), mul(10)]);
        assert_eq!(pipeline.run(Value::Int(3)).unwrap(), Value::Int(40));
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = Pipeline::identity();
        let input = Value::from(vec!["unchanged"]);
        assert_eq!(pipeline.run(input.clone()).unwrap(), input);
    }

    #[test]
    fn builder_and_from_stages_agree() {
        let built = Pipeline::new().then(add(2)).then(mul(3));
        let composed = compose([add(2), mul(3)]);
        assert_eq!(
            built.run(Value::Int(5)).unwrap(),
            composed.run(Value::Int(5)).unwrap()
        );
    }

    #[test]
    fn record_entry_wraps_before_user_stages() {
        let unwrap_stage = Stage::from_fn("unwrap", |value| match value {
            Value::Record(record) => Ok(record.into_value()),
            other => bail!("expected a record, found {}", other.kind()),
        });
        let pipeline = Pipeline::new()
            .then(unwrap_stage)
            .then(add(1))
            .with_record_entry();

        assert_eq!(pipeline.stage_names()[0], "record_entry");
        assert_eq!(pipeline.run(Value::Int(9)).unwrap(), Value::Int(10));
    }

    #[test]
    fn args_reach_every_stage() {
        let scale = |name: &'static str| {
            Stage::new(name, |value, args: &StageArgs| {
                let factor = args.int_opt("factor")?.unwrap_or(1);
                match value {
                    Value::Int(x) => Ok(Value::Int(x * factor)),
                    other => bail!("expected an int, found {}", other.kind()),
                }
            })
        };
        let pipeline = compose([scale("first"), scale("second")]);
        let args = StageArgs::new().with("factor", 3i64);
        // Both stages observe factor=3: 2 * 3 * 3 = 18.
        assert_eq!(
            pipeline.run_with(Value::Int(2), &args).unwrap(),
            Value::Int(18)
        );
    }

    #[test]
    fn first_failure_aborts_the_chain() {
        let boom = Stage::from_fn("boom", |_| bail!("boom"));
        let pipeline = compose([add(1), boom, mul(10)]);
        let error = pipeline.run(Value::Int(0)).unwrap_err();
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn stage_names_follow_application_order() {
        let pipeline = compose([add(1), mul(2)]);
        assert_eq!(pipeline.stage_names(), vec!["add_1", "mul_2"]);
    }
}
