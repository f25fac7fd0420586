//! Abstract interfaces shared by the dense matrix types
//!
//! Traits are pure interfaces; `Matrix` is the only concrete implementor in
//! this crate.

pub mod matrix;

pub use matrix::MatrixView;
