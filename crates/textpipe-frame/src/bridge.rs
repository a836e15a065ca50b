//! Bridging between pipeline [`Value`]s and tabular string cells.
//!
//! Scalars map to their plain text form; structured values (lists and
//! records) are JSON-encoded so they survive a trip through a CSV cell
//! and can be recovered on the way back in.

use anyhow::{Context, Result};
use textpipe_core::Value;

/// Render a value as a single table cell.
pub fn value_to_cell(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Int(number) => Ok(number.to_string()),
        Value::Float(number) => Ok(number.to_string()),
        Value::Str(text) => Ok(text.clone()),
        Value::List(_) | Value::Record(_) => {
            serde_json::to_string(value).context("encoding structured cell value")
        }
    }
}

/// Recover a value from a table cell.
///
/// Empty cells read as null; cells that look like JSON structures are
/// decoded, everything else stays a plain string.
pub fn cell_to_value(cell: &str) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    if cell.starts_with('[') || cell.starts_with('{') {
        if let Ok(value) = serde_json::from_str::<Value>(cell) {
            return value;
        }
    }
    Value::Str(cell.to_string())
}
