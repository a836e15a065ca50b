//! Subcommand implementations.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::info;

use textpipe_core::{StageArgs, Value};
use textpipe_frame::{apply_to_column, merge_on_index, read_csv_frame, write_csv_frame};
use textpipe_stages::StageRegistry;

use crate::cli::{ApplyArgs, MergeArgs};
use crate::listing::print_stages;

pub fn run_apply(args: &ApplyArgs) -> Result<()> {
    let df = read_csv_frame(&args.input)?;
    let registry = StageRegistry::standard();
    let names: Vec<&str> = args
        .stages
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        bail!("--stages must name at least one stage");
    }
    let pipeline = registry.build_pipeline(names)?;
    let stage_args = parse_stage_args(&args.args)?;

    info!(
        input = %args.input.display(),
        column = args.column.as_str(),
        stages = ?pipeline.stage_names(),
        "applying pipeline"
    );
    let out = apply_to_column(&df, &args.column, &pipeline, &stage_args)?;
    write_output(&out, args.output.as_deref())
}

pub fn run_merge(args: &MergeArgs) -> Result<()> {
    let frames: Vec<DataFrame> = args
        .inputs
        .iter()
        .map(|path| read_csv_frame(path))
        .collect::<Result<_>>()?;
    info!(
        inputs = frames.len(),
        index = args.index.as_str(),
        "merging datasets on index"
    );
    let merged = merge_on_index(&frames, &args.index)?;
    write_output(&merged, args.output.as_deref())
}

pub fn run_stages() {
    print_stages(&StageRegistry::standard());
}

/// Parse repeated `KEY=VALUE` options into [`StageArgs`].
///
/// Values parse as bool, then integer, then float, falling back to a
/// plain string.
pub fn parse_stage_args(pairs: &[String]) -> Result<StageArgs> {
    let mut args = StageArgs::new();
    for pair in pairs {
        let Some((key, raw)) = pair.split_once('=') else {
            bail!("invalid --arg `{pair}`: expected KEY=VALUE");
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("invalid --arg `{pair}`: empty key");
        }
        args.insert(key, parse_arg_value(raw));
    }
    Ok(args)
}

fn parse_arg_value(raw: &str) -> Value {
    match raw {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => {
            if let Ok(int) = raw.parse::<i64>() {
                Value::Int(int)
            } else if let Ok(float) = raw.parse::<f64>() {
                Value::Float(float)
            } else {
                Value::Str(raw.to_string())
            }
        }
    }
}

fn write_output(df: &DataFrame, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_csv_frame(df, file)?;
            info!(output = %path.display(), rows = df.height(), "wrote output");
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_csv_frame(df, &mut lock)?;
            lock.flush().context("flushing stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_values_parse_by_shape() {
        let args = parse_stage_args(&[
            "keep_negations=false".to_string(),
            "compound_symbol=-".to_string(),
            "limit=3".to_string(),
            "threshold=0.5".to_string(),
        ])
        .unwrap();

        assert_eq!(args.bool_opt("keep_negations").unwrap(), Some(false));
        assert_eq!(args.str_opt("compound_symbol").unwrap(), Some("-"));
        assert_eq!(args.int_opt("limit").unwrap(), Some(3));
        assert_eq!(args.get("threshold"), Some(&Value::Float(0.5)));
    }

    #[test]
    fn values_may_contain_equals_signs() {
        let args = parse_stage_args(&["keep=!=?".to_string()]).unwrap();
        assert_eq!(args.str_opt("keep").unwrap(), Some("!=?"));
    }

    #[test]
    fn malformed_args_are_rejected() {
        assert!(parse_stage_args(&["novalue".to_string()]).is_err());
        assert!(parse_stage_args(&["=x".to_string()]).is_err());
    }
}
