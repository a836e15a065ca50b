//! Row-wise pipeline application over a string column.

use anyhow::{Context, Result, ensure};
use polars::prelude::{DataFrame, NamedFrom, Series};
use textpipe_core::{OUTCOME_KEY, Pipeline, Record, StageArgs, Value};
use tracing::debug;

use crate::bridge::value_to_cell;

/// Run `pipeline` over every cell of `column`, appending one new column
/// named after the resulting record key.
///
/// Each row's raw cell enters the pipeline as a string value (null cells
/// enter as [`Value::Null`]); the row's result is normalized to a
/// [`Record`] — results that already are records pass through, anything
/// else is wrapped under [`OUTCOME_KEY`]. All rows of one application
/// must agree on the record key, since the key names the output column.
///
/// The first stage failure aborts the whole application: per-row error
/// isolation is the caller's concern, not this layer's.
pub fn apply_to_column(
    df: &DataFrame,
    column: &str,
    pipeline: &Pipeline,
    args: &StageArgs,
) -> Result<DataFrame> {
    let cells = df
        .column(column)
        .with_context(|| format!("column `{column}` not found"))?
        .str()
        .with_context(|| format!("column `{column}` is not a string column"))?;

    let mut key: Option<String> = None;
    let mut outcomes: Vec<String> = Vec::with_capacity(df.height());
    for cell in cells {
        let input = match cell {
            Some(text) => Value::Str(text.to_string()),
            None => Value::Null,
        };
        let result = pipeline.run_with(input, args)?;
        let record = match result {
            Value::Record(record) => record,
            other => Record::outcome(other),
        };
        match &key {
            None => key = Some(record.key().to_string()),
            Some(existing) => ensure!(
                existing == record.key(),
                "pipeline produced record key `{}` after `{existing}`",
                record.key()
            ),
        }
        outcomes.push(value_to_cell(record.value())?);
    }

    let name = key.unwrap_or_else(|| OUTCOME_KEY.to_string());
    debug!(
        column,
        output = name.as_str(),
        rows = outcomes.len(),
        stages = ?pipeline.stage_names(),
        "applied pipeline to column"
    );
    let mut out = df.clone();
    out.with_column(Series::new(name.into(), outcomes))?;
    Ok(out)
}
