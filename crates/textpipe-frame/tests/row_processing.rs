//! End-to-end: apply a pipeline per row, then merge the derived dataset
//! back onto the source by index.

use anyhow::bail;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use textpipe_core::{Stage, StageArgs, Value, compose};
use textpipe_frame::{apply_to_column, merge_on_index};

fn source_frame() -> DataFrame {
    let cols: Vec<Column> = vec![
        Series::new("id".into(), vec![111i64, 222, 333, 444]).into_column(),
        Series::new(
            "par_text".into(),
            vec![
                "",
                "I do not care. I think. Maybe not.",
                "I ate too much.",
                "I can see why",
            ],
        )
        .into_column(),
    ];
    DataFrame::new(cols).unwrap()
}

fn sentence_count() -> Stage {
    Stage::from_fn("sentence_count", |value| match value {
        Value::Str(text) => Ok(Value::Int(
            text.split(['.', '!', '?'])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .count() as i64,
        )),
        Value::Null => Ok(Value::Int(0)),
        other => bail!("expected text, found {}", other.kind()),
    })
}

#[test]
fn derived_column_joins_back_by_index() {
    let source = source_frame();
    let pipeline = compose([sentence_count()]);

    let enriched =
        apply_to_column(&source, "par_text", &pipeline, &StageArgs::new()).unwrap();
    let outcome = enriched.column("outcome").unwrap().str().unwrap();
    assert_eq!(outcome.get(0), Some("0"));
    assert_eq!(outcome.get(1), Some("3"));
    assert_eq!(outcome.get(2), Some("1"));
    assert_eq!(outcome.get(3), Some("1"));

    // A second labeled dataset sharing the id index, with partial coverage.
    let scores = DataFrame::new(vec![
        Series::new("id".into(), vec![222i64, 333]).into_column(),
        Series::new("score".into(), vec![0.5f64, -0.25]).into_column(),
    ])
    .unwrap();

    let merged = merge_on_index(&[enriched, scores], "id").unwrap();
    assert_eq!(merged.height(), 2);
    let mut names: Vec<String> = merged
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["id", "outcome", "par_text", "score"]);
}
