//! lustep core - Step-by-step LU decomposition
//!
//! This crate provides the pure parts of the LU stepper: the dense matrix
//! type, the step-recording decomposition, fraction formatting for display,
//! verification of L × U against the input, and input parsing. It performs
//! no I/O.

pub mod constants;
pub mod decompose;
pub mod error;
pub mod fraction;
pub mod generate;
pub mod input;
pub mod matrix;
pub mod traits;
pub mod validation;
pub mod verify;

pub use decompose::{decompose, try_decompose, Decomposition, RowOperation, Step, StepKind};
pub use error::*;
pub use fraction::{format_decimal, format_value, parse_value, Fraction};
pub use generate::example_matrix;
pub use input::MatrixInput;
pub use matrix::Matrix;
pub use traits::*;
pub use validation::*;
pub use verify::{approx_equal, multiply, try_multiply, verify, Verification};
