//! JSON export of a decomposition run

use lustep_core::{Decomposition, Matrix, Step, Verification};
use serde::Serialize;

/// Everything a viewer needs to replay one run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecompositionReport<'a> {
    pub steps: &'a [Step],
    pub lower: &'a Matrix,
    pub upper: &'a Matrix,
    pub skipped_pivots: &'a [(usize, usize)],
    pub verification: Verification,
}

impl<'a> DecompositionReport<'a> {
    /// Borrow the run and compute its verification
    pub fn new(decomposition: &'a Decomposition) -> Self {
        Self {
            steps: decomposition.steps(),
            lower: decomposition.lower(),
            upper: decomposition.upper(),
            skipped_pivots: decomposition.skipped_pivots(),
            verification: decomposition.verify(),
        }
    }
}

/// Serialize the full run
pub fn to_json(decomposition: &Decomposition, pretty: bool) -> serde_json::Result<String> {
    let report = DecompositionReport::new(decomposition);
    if pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
}

/// Serialize a single snapshot
pub fn step_to_json(step: &Step, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(step)
    } else {
        serde_json::to_string(step)
    }
}
