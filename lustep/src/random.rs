//! Random integer matrices for practice input

use lustep_core::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest generated entry
pub const RANDOM_MIN: i32 = -3;

/// Largest generated entry
pub const RANDOM_MAX: i32 = 6;

/// n×n matrix of integers drawn uniformly from `RANDOM_MIN..=RANDOM_MAX`
pub fn random_matrix<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Matrix {
    Matrix::from_fn(n, |_, _| f64::from(rng.gen_range(RANDOM_MIN..=RANDOM_MAX)))
}

/// Generator seeded from `seed`, or from the OS when `None`
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
