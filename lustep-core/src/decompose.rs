//! Step-recording LU decomposition (Doolittle, no pivoting)
//!
//! `decompose` runs Gaussian elimination on a copy of the input and records a
//! snapshot of A, L and U around every row operation, so a viewer can walk
//! the elimination forwards and backwards by index.

use crate::fraction::format_value;
use crate::verify::{verify, Verification};
use crate::{LuError, Matrix, MatrixView, Result};
use tracing::{debug, trace};

/// What a snapshot records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum StepKind {
    /// Before any elimination
    Initial,
    /// Multiplier stored in L, U not yet updated for this row
    ComputeMultiplier,
    /// U row updated with the multiplier
    ApplyRowOperation,
    /// After all eliminations
    Final,
}

impl StepKind {
    /// Human-readable description stored on each snapshot
    pub const fn description(self) -> &'static str {
        match self {
            StepKind::Initial => "Initial state",
            StepKind::ComputeMultiplier => "Computing multiplier",
            StepKind::ApplyRowOperation => "Applying row operation",
            StepKind::Final => "Final result",
        }
    }
}

/// One immutable snapshot of the elimination
///
/// Every matrix field is an independent copy. `current_row` and `pivot_row`
/// are `None` on the initial and final snapshots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Step {
    pub kind: StepKind,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(rename = "A"))]
    pub a: Matrix,
    #[cfg_attr(feature = "serde", serde(rename = "L"))]
    pub l: Matrix,
    #[cfg_attr(feature = "serde", serde(rename = "U"))]
    pub u: Matrix,
    #[cfg_attr(feature = "serde", serde(with = "row_index"))]
    pub current_row: Option<usize>,
    #[cfg_attr(feature = "serde", serde(with = "row_index"))]
    pub pivot_row: Option<usize>,
    /// Multiplier used for display
    pub multiplier: f64,
    /// Unrounded multiplier, used for fraction rendering
    pub raw_multiplier: f64,
}

impl Step {
    fn boundary(kind: StepKind, a: &Matrix, l: &Matrix, u: &Matrix) -> Self {
        Self {
            kind,
            description: kind.description().to_string(),
            a: a.clone(),
            l: l.clone(),
            u: u.clone(),
            current_row: None,
            pivot_row: None,
            multiplier: 0.0,
            raw_multiplier: 0.0,
        }
    }

    fn elimination(
        kind: StepKind,
        a: &Matrix,
        l: &Matrix,
        u: &Matrix,
        row: usize,
        pivot: usize,
        multiplier: f64,
    ) -> Self {
        Self {
            kind,
            description: kind.description().to_string(),
            a: a.clone(),
            l: l.clone(),
            u: u.clone(),
            current_row: Some(row),
            pivot_row: Some(pivot),
            multiplier,
            raw_multiplier: multiplier,
        }
    }

    /// The row operation this snapshot belongs to, if any
    pub fn row_operation(&self) -> Option<RowOperation> {
        match (self.current_row, self.pivot_row) {
            (Some(target), Some(pivot)) => Some(RowOperation {
                target,
                pivot,
                multiplier: self.raw_multiplier,
            }),
            _ => None,
        }
    }
}

/// `r_target -> r_target - multiplier * r_pivot`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowOperation {
    /// Row being eliminated (0-based)
    pub target: usize,
    /// Pivot row (0-based)
    pub pivot: usize,
    pub multiplier: f64,
}

impl core::fmt::Display for RowOperation {
    /// Rows are shown 1-based, the multiplier as a fraction when possible
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let target = self.target + 1;
        let pivot = self.pivot + 1;
        let multiplier = format_value(self.multiplier);
        write!(f, "r{target} → r{target} - {multiplier} × r{pivot}")
    }
}

/// Full record of one decomposition run
///
/// Always holds at least the initial and final snapshots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDecomposition")
)]
pub struct Decomposition {
    steps: Vec<Step>,
    /// (pivot column, row) pairs skipped because the pivot was zero
    skipped: Vec<(usize, usize)>,
}

/// Unchecked wire form of [`Decomposition`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDecomposition {
    steps: Vec<Step>,
    skipped: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDecomposition> for Decomposition {
    type Error = LuError;

    fn try_from(raw: RawDecomposition) -> Result<Self> {
        let len = raw.steps.len();
        let bounded = len >= 2
            && raw.steps[0].kind == StepKind::Initial
            && raw.steps[len - 1].kind == StepKind::Final;
        if !bounded {
            return Err(LuError::StepOutOfRange {
                index: len.saturating_sub(1),
                len,
            });
        }
        Ok(Self {
            steps: raw.steps,
            skipped: raw.skipped,
        })
    }
}

impl Decomposition {
    /// All snapshots in chronological order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of snapshots
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a decomposition produced by `decompose`
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Snapshot at `index`
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Checked snapshot access
    pub fn step(&self, index: usize) -> Result<&Step> {
        self.steps.get(index).ok_or(LuError::StepOutOfRange {
            index,
            len: self.steps.len(),
        })
    }

    /// Snapshot by 1-based step number, with its 0-based index
    ///
    /// Step 0 and numbers past the end are rejected; the error carries the
    /// number as given.
    pub fn numbered_step(&self, number: usize) -> Result<(usize, &Step)> {
        number
            .checked_sub(1)
            .and_then(|index| self.steps.get(index).map(|step| (index, step)))
            .ok_or(LuError::StepOutOfRange {
                index: number,
                len: self.steps.len(),
            })
    }

    /// The "Initial state" snapshot
    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    /// The "Final result" snapshot
    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// The input matrix A
    pub fn original(&self) -> &Matrix {
        &self.last().a
    }

    /// Final lower factor
    pub fn lower(&self) -> &Matrix {
        &self.last().l
    }

    /// Final upper factor
    pub fn upper(&self) -> &Matrix {
        &self.last().u
    }

    /// Number of eliminations that were recorded
    pub fn eliminations(&self) -> usize {
        self.steps.len().saturating_sub(2) / 2
    }

    /// (pivot column, row) pairs that were skipped on a zero pivot
    pub fn skipped_pivots(&self) -> &[(usize, usize)] {
        &self.skipped
    }

    /// Multiply the final factors and compare with A
    pub fn verify(&self) -> Verification {
        verify(self.original(), self.lower(), self.upper())
    }
}

/// Decompose `a` into L and U, recording every step
///
/// The caller is responsible for passing a non-empty square matrix; see
/// [`try_decompose`] for a checked entry point. Rows whose pivot `U[k][k]`
/// is exactly zero are skipped, which leaves that part of the factorization
/// incomplete.
pub fn decompose(a: &Matrix) -> Decomposition {
    let n = a.size();
    let mut l = Matrix::identity(n);
    let mut u = a.clone();
    let mut steps = Vec::with_capacity(2 + n * n.saturating_sub(1));
    let mut skipped = Vec::new();

    steps.push(Step::boundary(StepKind::Initial, a, &l, &u));

    for k in 0..n {
        for i in (k + 1)..n {
            let pivot = u.get(k, k);
            if pivot == 0.0 {
                debug!(pivot_col = k, row = i, "zero pivot, skipping elimination");
                skipped.push((k, i));
                continue;
            }

            let multiplier = u.get(i, k) / pivot;
            l.set(i, k, multiplier);
            steps.push(Step::elimination(
                StepKind::ComputeMultiplier,
                a,
                &l,
                &u,
                i,
                k,
                multiplier,
            ));

            u.subtract_scaled_row(i, k, multiplier, k);
            trace!(row = i, pivot_row = k, multiplier, "row operation applied");
            steps.push(Step::elimination(
                StepKind::ApplyRowOperation,
                a,
                &l,
                &u,
                i,
                k,
                multiplier,
            ));
        }
    }

    steps.push(Step::boundary(StepKind::Final, a, &l, &u));
    debug!(
        size = n,
        steps = steps.len(),
        skipped = skipped.len(),
        "decomposition recorded"
    );

    Decomposition { steps, skipped }
}

/// Decompose after checking that `a` is non-empty and square
pub fn try_decompose(a: &Matrix) -> Result<Decomposition> {
    let (rows, cols) = a.dimensions();
    if rows == 0 {
        return Err(LuError::EmptyMatrix);
    }
    if rows != cols || a.rows().iter().any(|r| r.len() != cols) {
        return Err(LuError::NotSquare { rows, cols });
    }
    Ok(decompose(a))
}

/// Serde adapter writing a missing row index as `-1`
#[cfg(feature = "serde")]
mod row_index {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(index) => serializer.serialize_i64(*index as i64),
            None => serializer.serialize_i64(-1),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}
