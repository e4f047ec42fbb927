//! Stateless functions over matrices used by the forward and backward
//! passes.
//!
//! These are plain functions rather than layer objects: the model calls
//! them directly when composing `tanh(x · W + b)` chains.

use crate::primitives::Matrix;

/// Element-wise hyperbolic tangent.
///
/// Output values are bounded in (-1, 1).
#[must_use]
pub fn tanh(x: &Matrix<f32>) -> Matrix<f32> {
    map(x, f32::tanh)
}

/// Derivative of tanh expressed in terms of its output.
///
/// Takes a matrix of tanh *activations* `a` and returns `1 - a^2`.
#[must_use]
pub fn tanh_prime(activation: &Matrix<f32>) -> Matrix<f32> {
    map(activation, |a| 1.0 - a * a)
}

/// Row-wise softmax.
///
/// Each row is shifted by its maximum before exponentiating so that large
/// logits cannot overflow, then normalized by the row sum. Every output
/// row sums to 1.0 within floating tolerance.
#[must_use]
pub fn softmax(x: &Matrix<f32>) -> Matrix<f32> {
    let (rows, cols) = x.shape();
    let mut data = Vec::with_capacity(rows * cols);

    for row in 0..rows {
        let logits = x.row(row);
        let max = logits
            .as_slice()
            .iter()
            .fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let exp: Vec<f32> = logits.as_slice().iter().map(|&v| (v - max).exp()).collect();
        let sum: f32 = exp.iter().sum();
        data.extend(exp.iter().map(|&v| v / sum));
    }

    Matrix::from_vec(rows, cols, data).expect("softmax preserves the input shape")
}

/// Row-wise arg-max.
///
/// Returns the column index of each row's maximum value; ties are broken
/// by the first occurrence.
#[must_use]
pub fn argmax(x: &Matrix<f32>) -> Vec<usize> {
    let (rows, cols) = x.shape();
    (0..rows)
        .map(|row| {
            let mut best = 0;
            for col in 1..cols {
                if x.get(row, col) > x.get(row, best) {
                    best = col;
                }
            }
            best
        })
        .collect()
}

fn map(x: &Matrix<f32>, f: impl Fn(f32) -> f32) -> Matrix<f32> {
    let (rows, cols) = x.shape();
    let data = x.as_slice().iter().map(|&v| f(v)).collect();
    Matrix::from_vec(rows, cols, data).expect("element-wise map preserves the input shape")
}
