//! CSV ingest and output for string frames.
//!
//! Ingest reads every cell as a string: type inference belongs to the
//! stages that consume the data, not to the reader. Headers and cells
//! are trimmed and stripped of a leading BOM.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use polars::prelude::{Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, SerWriter, Series};

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into an all-string [`DataFrame`].
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("reading headers of {}", path.display()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.with_context(|| format!("reading rows of {}", path.display()))?;
        for (idx, values) in columns.iter_mut().enumerate() {
            values.push(record.get(idx).map(normalize_cell).unwrap_or_default());
        }
    }

    let cols: Vec<Column> = headers
        .into_iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).context("building frame from CSV columns")
}

/// Write a frame as CSV with a header row.
pub fn write_csv_frame<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let mut df = df.clone();
    CsvWriter::new(writer)
        .include_header(true)
        .finish(&mut df)
        .context("writing CSV output")
}
