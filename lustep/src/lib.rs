//! lustep - Interactive LU decomposition stepper
//!
//! This library wraps `lustep-core` with everything user-facing: session
//! navigation, text rendering, random input, JSON export and the
//! line-driven interactive mode used by the `lustep` binary.
//!
//! ## Architecture
//!
//! - **lustep-core**: matrix type, step-recording decomposition, fraction
//!   formatting and verification (no I/O)
//! - **lustep**: session state, rendering and I/O on top of the core
//!
//! ## Quick Start
//!
//! ```rust
//! use lustep::{decompose, render_step, Matrix, RenderConfig};
//!
//! let a = Matrix::from([[4.0, 3.0], [6.0, 3.0]]);
//! let run = decompose(&a);
//! let config = RenderConfig::default();
//! for (i, step) in run.steps().iter().enumerate() {
//!     println!("{}", render_step(step, i, run.len(), &config));
//! }
//! assert!(run.verify().is_correct);
//! ```

// Re-export the core types and entry points
pub use lustep_core::{
    // Decomposition
    decompose, try_decompose, Decomposition, RowOperation, Step, StepKind,
    // Matrices and input
    example_matrix, parse_cell, parse_matrix, Matrix, MatrixInput, MatrixView,
    // Formatting and verification
    format_decimal, format_value, multiply, verify, Verification,
    // Error handling
    LuError, Result,
    // Validation
    validate_index, validate_size,
};
pub use lustep_core::constants;

pub mod config;
#[cfg(feature = "serde")]
pub mod export;
pub mod random;
pub mod render;
pub mod repl;
pub mod session;

pub use config::RenderConfig;
#[cfg(feature = "serde")]
pub use export::{to_json, DecompositionReport};
pub use random::random_matrix;
pub use render::{render_matrix, render_result, render_step, Highlight};
pub use session::{Session, View};
