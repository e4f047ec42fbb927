//! Weight initialization.
//!
//! Layer weights are drawn from a normal distribution at construction;
//! everything else starts at zero.

use crate::primitives::Matrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Normal distribution initialization.
///
/// Produces a `rows` x `cols` matrix whose entries are i.i.d. draws from
/// N(mean, std). A seed makes the draw reproducible; `None` seeds from
/// entropy.
///
/// # Example
///
/// ```
/// use reconocer::nn::init::normal;
///
/// let weights = normal(784, 128, 0.0, 0.1, Some(42));
/// assert_eq!(weights.shape(), (784, 128));
/// ```
#[must_use]
pub fn normal(rows: usize, cols: usize, mean: f32, std: f32, seed: Option<u64>) -> Matrix<f32> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    // Box-Muller transform for normal distribution
    let data: Vec<f32> = (0..rows * cols)
        .map(|_| {
            let u1: f32 = rng.gen_range(0.0001_f32..1.0_f32);
            let u2: f32 = rng.gen_range(0.0_f32..1.0_f32);
            let z = (-2.0_f32 * u1.ln()).sqrt() * (2.0_f32 * std::f32::consts::PI * u2).cos();
            mean + std * z
        })
        .collect();

    Matrix::from_vec(rows, cols, data).expect("generated data length matches rows * cols")
}
