//! Input validation and parsing for matrix entry
//!
//! Pure functions with no I/O: size/index checks and text parsing. Bad cell
//! text is coerced or ignored; only structural problems become errors.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_index, validate_size};
pub use parsing::{parse_cell, parse_matrix};
