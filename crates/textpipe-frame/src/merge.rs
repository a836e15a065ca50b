//! Index-aligned merging of labeled datasets.
//!
//! [`merge_on_index`] combines frames that share a row-identity column by
//! a left-to-right chain of pairwise inner joins. Callers guarantee that
//! the same index value denotes the same logical row in every input; the
//! merge performs no semantic validation of that claim.
//!
//! Two silent shape changes are part of the contract, not defects:
//!
//! - indices absent from any input are dropped (inner-join semantics);
//! - duplicate index values within an input fan out into a per-key
//!   Cartesian product in the output.
//!
//! Non-index column collisions are disambiguated with a positional
//! suffix on the right-hand frame of each step (`_r1`, `_r2`, ...),
//! never silently overwritten.

use polars::prelude::{DataFrame, DataFrameJoinOps, JoinArgs, JoinType, PolarsError};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("merge requires at least one input frame")]
    NoInputs,
    #[error(transparent)]
    Polars(#[from] PolarsError),
}

/// Merge frames on a shared index column, pairwise from the left.
///
/// A single input is returned unchanged; zero inputs is an error.
pub fn merge_on_index(frames: &[DataFrame], index: &str) -> Result<DataFrame, MergeError> {
    let (first, rest) = frames.split_first().ok_or(MergeError::NoInputs)?;
    let mut merged = first.clone();
    for (position, right) in rest.iter().enumerate() {
        let suffix = format!("_r{}", position + 1);
        let args = JoinArgs::new(JoinType::Inner).with_suffix(Some(suffix.into()));
        merged = merged.join(right, [index], [index], args, None)?;
        debug!(
            step = position + 1,
            rows = merged.height(),
            columns = merged.width(),
            "merged frame pair"
        );
    }
    Ok(merged)
}
