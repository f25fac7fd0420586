//! Tolerances and limits shared by the decomposition, formatter and verifier

/// Smallest matrix size offered for input
pub const MIN_SIZE: usize = 2;

/// Largest matrix size offered for input
pub const MAX_SIZE: usize = 5;

/// Size a fresh session starts with
pub const DEFAULT_SIZE: usize = 3;

/// Per-entry tolerance when comparing L × U against A
pub const VERIFY_EPSILON: f64 = 0.001;

/// Decimal places kept in each entry of the verification product
pub const PRODUCT_DECIMALS: i32 = 3;

/// Fraction search limits
pub mod fraction {
    /// Largest denominator tried while approximating a value
    pub const MAX_SEARCH_DENOMINATOR: u32 = 100;

    /// Largest reduced denominator still rendered as a fraction
    pub const MAX_DISPLAY_DENOMINATOR: u64 = 20;

    /// Approximation error below which the search stops early
    pub const EXACT_EPSILON: f64 = 1.0e-10;

    /// Approximation error above which the value is shown as a decimal
    pub const MAX_ERROR: f64 = 0.01;

    /// Decimal places used by the decimal fallback
    pub const DECIMAL_PLACES: usize = 2;
}
