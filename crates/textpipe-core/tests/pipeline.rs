//! Integration tests for pipeline composition and output normalization.

use anyhow::bail;
use proptest::prelude::{ProptestConfig, prop_assert_eq, proptest};
use textpipe_core::{OUTCOME_KEY, Pipeline, Stage, StageArgs, Value, compose};

fn split_sentences() -> Stage {
    Stage::from_fn("split_sentences", |value| match value {
        Value::Str(text) => Ok(Value::from(
            text.split('.')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect::<Vec<_>>(),
        )),
        other => bail!("expected a string, found {}", other.kind()),
    })
}

fn split_words() -> Stage {
    Stage::from_fn("split_words", |value| match value {
        Value::List(sentences) => {
            let mut out = Vec::with_capacity(sentences.len());
            for sentence in sentences {
                let Value::Str(text) = sentence else {
                    bail!("expected a list of strings, found {}", sentence.kind());
                };
                out.push(Value::from(
                    text.split_whitespace().map(String::from).collect::<Vec<_>>(),
                ));
            }
            Ok(Value::List(out))
        }
        other => bail!("expected a list, found {}", other.kind()),
    })
}

#[test]
fn tokenization_chain_matches_manual_nesting() {
    let pipeline = compose([split_sentences(), split_words()]);
    let result = pipeline
        .run(Value::from("I do not care. I think."))
        .unwrap();

    let expected = Value::from(vec![
        vec![
            "I".to_string(),
            "do".to_string(),
            "not".to_string(),
            "care".to_string(),
        ],
        vec!["I".to_string(), "think".to_string()],
    ]);
    assert_eq!(result, expected);
}

#[test]
fn composition_equals_nested_application() {
    let pipeline = compose([split_sentences(), split_words()]);
    let input = Value::from("One two. Three.");

    let composed = pipeline.run(input.clone()).unwrap();
    let nested = split_words()
        .apply(
            split_sentences().apply(input, &StageArgs::new()).unwrap(),
            &StageArgs::new(),
        )
        .unwrap();

    assert_eq!(composed, nested);
}

#[test]
fn identity_pipeline_returns_input_unchanged() {
    let input = Value::from(vec![Value::Int(1), Value::from("x")]);
    assert_eq!(Pipeline::identity().run(input.clone()).unwrap(), input);
}

#[test]
fn conditional_normalization_survives_composition() {
    // Every stage normalized: the chain must still produce exactly one
    // un-nested record at the end.
    let pipeline = compose([
        split_sentences().ensure_record(),
        Stage::from_fn("unwrap", |value| match value {
            Value::Record(record) => Ok(record.into_value()),
            other => bail!("expected a record, found {}", other.kind()),
        }),
        split_words().ensure_record(),
    ]);

    let result = pipeline.run(Value::from("A b. C.")).unwrap();
    let record = result.as_record().expect("normalized output");
    assert_eq!(record.key(), OUTCOME_KEY);
    assert!(!record.value().is_record());
}

#[test]
fn record_entry_variant_normalizes_the_input() {
    let take_record = Stage::from_fn("take_record", |value| match value {
        Value::Record(record) => Ok(Value::from(record.key())),
        other => bail!("expected a record, found {}", other.kind()),
    });
    let pipeline = Pipeline::new().then(take_record).with_record_entry();
    let result = pipeline.run(Value::from("raw text")).unwrap();
    assert_eq!(result, Value::from(OUTCOME_KEY));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn composed_offsets_equal_their_sum(offsets in proptest::collection::vec(-1000i64..1000, 0..8), start in -1000i64..1000) {
        let stages = offsets.iter().map(|n| {
            let n = *n;
            Stage::from_fn(format!("add_{n}"), move |value| match value {
                Value::Int(x) => Ok(Value::Int(x + n)),
                other => bail!("expected an int, found {}", other.kind()),
            })
        });
        let pipeline = compose(stages);
        let expected = start + offsets.iter().sum::<i64>();
        prop_assert_eq!(pipeline.run(Value::Int(start)).unwrap(), Value::Int(expected));
    }
}
