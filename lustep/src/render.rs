//! Text rendering of matrices, steps and the final result
//!
//! Highlighted cells are wrapped in `( )`, the cell holding the current
//! multiplier in `[ ]`. Everything is returned as a `String` so callers
//! decide where it goes.

use crate::config::RenderConfig;
use lustep_core::{format_decimal, format_value, Decomposition, Matrix, Step};
use std::fmt::Write;

/// Which cells of a matrix to mark
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Highlight {
    pub row: Option<usize>,
    pub col: Option<usize>,
    /// Shown in place of the entry at (row, col)
    pub value: Option<f64>,
}

impl Highlight {
    /// Nothing highlighted
    pub const NONE: Self = Self {
        row: None,
        col: None,
        value: None,
    };

    /// Highlight a row only
    pub fn row(row: Option<usize>) -> Self {
        Self {
            row,
            ..Self::NONE
        }
    }
}

fn format_cell(value: f64, config: &RenderConfig) -> String {
    if config.fractions {
        format_value(value)
    } else {
        format_decimal(value)
    }
}

/// Render a matrix as bracketed rows
pub fn render_matrix(matrix: &Matrix, highlight: Highlight, config: &RenderConfig) -> String {
    if matrix.nrows() == 0 {
        return "No matrix data".to_string();
    }

    let texts: Vec<Vec<String>> = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, &value)| {
                    let specific = highlight.row == Some(i) && highlight.col == Some(j);
                    match highlight.value {
                        Some(shown) if specific => format_cell(shown, config),
                        _ => format_cell(value, config),
                    }
                })
                .collect()
        })
        .collect();

    let width = texts
        .iter()
        .flatten()
        .map(|t| t.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.cell_width);

    let mut out = String::new();
    for (i, row) in texts.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push('[');
        for (j, text) in row.iter().enumerate() {
            let in_row = highlight.row == Some(i);
            let in_col = highlight.col == Some(j);
            let (open, close) = match (config.highlight, in_row && in_col, in_row || in_col) {
                (false, _, _) => (' ', ' '),
                (true, true, _) => ('[', ']'),
                (true, false, true) => ('(', ')'),
                (true, false, false) => (' ', ' '),
            };
            let _ = write!(out, "{open}{text:>width$}{close}");
        }
        out.push(']');
    }
    out
}

/// Percentage of the way through `total` snapshots at `index`
pub fn progress_percent(index: usize, total: usize) -> u8 {
    if total <= 1 {
        return 100;
    }
    let ratio = index.min(total - 1) as f64 / (total - 1) as f64;
    (ratio * 100.0).round() as u8
}

fn progress_bar(percent: u8, width: usize) -> String {
    let filled = usize::from(percent) * width / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

fn section(out: &mut String, title: &str, body: &str) {
    let _ = write!(out, "\n\n{title}\n{body}");
}

/// Render one snapshot the way the step viewer shows it
pub fn render_step(step: &Step, index: usize, total: usize, config: &RenderConfig) -> String {
    let percent = progress_percent(index, total);
    let mut out = format!("Step {} of {total} ({percent}% Complete)", index + 1);
    if config.progress_width > 0 {
        let _ = write!(out, "\n{}", progress_bar(percent, config.progress_width));
    }
    let _ = write!(out, "\n{}", step.description);
    if let Some(op) = step.row_operation() {
        let _ = write!(out, "\n  {op}");
    }

    section(
        &mut out,
        "Matrix A",
        &render_matrix(&step.a, Highlight::NONE, config),
    );
    section(
        &mut out,
        "Lower Triangular (L)",
        &render_matrix(
            &step.l,
            Highlight {
                row: step.current_row,
                col: step.pivot_row,
                value: step.current_row.map(|_| step.multiplier),
            },
            config,
        ),
    );
    section(
        &mut out,
        "Upper Triangular (U)",
        &render_matrix(&step.u, Highlight::row(step.current_row), config),
    );
    out
}

/// Render the verification banner and the final matrices
///
/// Entries are always shown as decimals here.
pub fn render_result(decomposition: &Decomposition, config: &RenderConfig) -> String {
    let config = config.clone().with_fractions(false);
    let verification = decomposition.verify();

    let mut out = String::from("LU Decomposition Result");
    let mark = if verification.is_correct { "✓" } else { "✗" };
    let _ = write!(out, "\n\nVerification: {mark} {}", verification.message());
    if !decomposition.skipped_pivots().is_empty() {
        let _ = write!(
            out,
            "\n({} elimination(s) skipped on a zero pivot)",
            decomposition.skipped_pivots().len()
        );
    }

    let plain = |m: &Matrix| render_matrix(m, Highlight::NONE, &config);
    section(&mut out, "Lower Triangular (L)", &plain(decomposition.lower()));
    section(&mut out, "Upper Triangular (U)", &plain(decomposition.upper()));
    section(&mut out, "Original Matrix (A)", &plain(decomposition.original()));
    section(&mut out, "Product L × U", &plain(&verification.product));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lustep_core::{decompose, example_matrix};

    #[test]
    fn test_render_plain_matrix() {
        let m = Matrix::from([[4.0, 3.0], [6.0, 3.0]]);
        let text = render_matrix(&m, Highlight::NONE, &RenderConfig::plain());
        assert_eq!(text, "[ 4.00  3.00 ]\n[ 6.00  3.00 ]");
    }

    #[test]
    fn test_render_fraction_matrix_widths() {
        let m = Matrix::from([[1.0, 0.0], [1.5, 1.0]]);
        let config = RenderConfig::default().with_highlight(false).with_cell_width(1);
        let text = render_matrix(&m, Highlight::NONE, &config);
        assert_eq!(text, "[   1    0 ]\n[ 3/2    1 ]");
    }

    #[test]
    fn test_render_highlight_markers() {
        let m = Matrix::from([[1.0, 0.0], [1.5, 1.0]]);
        let hl = Highlight {
            row: Some(1),
            col: Some(0),
            value: Some(1.5),
        };
        let text = render_matrix(&m, hl, &RenderConfig::default().with_cell_width(1));
        assert_eq!(text, "[(  1)   0 ]\n[[3/2](  1)]");
    }

    #[test]
    fn test_render_empty_matrix() {
        assert_eq!(
            render_matrix(&Matrix::default(), Highlight::NONE, &RenderConfig::default()),
            "No matrix data"
        );
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 4), 0);
        assert_eq!(progress_percent(1, 4), 33);
        assert_eq!(progress_percent(2, 4), 67);
        assert_eq!(progress_percent(3, 4), 100);
        assert_eq!(progress_percent(0, 1), 100);
        assert_eq!(progress_bar(50, 10), "[#####-----]");
    }

    #[test]
    fn test_render_step() {
        let d = decompose(&example_matrix(2));
        let text = render_step(d.get(1).unwrap(), 1, d.len(), &RenderConfig::default());
        assert!(text.starts_with("Step 2 of 4 (33% Complete)"));
        assert!(text.contains("Computing multiplier"));
        assert!(text.contains("r2 → r2 - 3/2 × r1"));
        assert!(text.contains("Lower Triangular (L)"));
        assert!(text.contains("[ 3/2]"));

        let first = render_step(d.first(), 0, d.len(), &RenderConfig::default());
        assert!(first.contains("Initial state"));
        assert!(!first.contains('→'));
    }

    #[test]
    fn test_render_result() {
        let d = decompose(&example_matrix(2));
        let text = render_result(&d, &RenderConfig::default());
        assert!(text.contains("The decomposition is correct! A = L × U"));
        assert!(text.contains(" 0.00  -1.50 ]"));
        assert!(text.contains("Product L × U"));

        let skipped = decompose(&Matrix::from([[0.0, 1.0], [2.0, 3.0]]));
        let text = render_result(&skipped, &RenderConfig::default());
        assert!(text.contains("✓ The decomposition is correct! A = L × U"));
        assert!(text.contains("1 elimination(s) skipped on a zero pivot"));
        // U keeps the uneliminated row
        assert!(text.contains("Upper Triangular (U)\n[ 0.00  1.00 ]\n[ 2.00  3.00 ]"));
    }
}
