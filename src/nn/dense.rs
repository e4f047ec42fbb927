//! Fully connected layer.
//!
//! A `Dense` layer owns a weight matrix, a bias vector, and its learning
//! rate. The model evaluates the forward expression `input · W + b`
//! itself; the layer's job is holding the parameters and applying the
//! gradient update step.

use super::init;
use crate::error::{ReconocerError, Result};
use crate::primitives::{Axis, Matrix, Vector};

/// Standard deviation of the normal distribution used for weight init.
const WEIGHT_STD: f32 = 0.1;

/// One fully connected transform: weights (in x out) and bias (out).
///
/// Weights are sampled from N(0, 0.1) at construction; bias starts at
/// zero. Parameters are mutated in place by [`Dense::update`] and never
/// resized.
pub struct Dense {
    weights: Matrix<f32>,
    bias: Vector<f32>,
    lr: f32,
    in_features: usize,
    out_features: usize,
}

impl Dense {
    /// Create a new layer with entropy-seeded weights.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either dimension is zero or the
    /// learning rate is not a positive finite number.
    pub fn new(in_features: usize, out_features: usize, lr: f32) -> Result<Self> {
        Self::with_seed(in_features, out_features, lr, None)
    }

    /// Create a new layer with a specific random seed.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Dense::new`].
    pub fn with_seed(
        in_features: usize,
        out_features: usize,
        lr: f32,
        seed: Option<u64>,
    ) -> Result<Self> {
        if in_features == 0 {
            return Err(ReconocerError::invalid_argument(
                "in_features",
                in_features,
                "> 0",
            ));
        }
        if out_features == 0 {
            return Err(ReconocerError::invalid_argument(
                "out_features",
                out_features,
                "> 0",
            ));
        }
        if !lr.is_finite() || lr <= 0.0 {
            return Err(ReconocerError::invalid_argument(
                "learning_rate",
                lr,
                "a positive finite number",
            ));
        }

        Ok(Self {
            weights: init::normal(in_features, out_features, 0.0, WEIGHT_STD, seed),
            bias: Vector::zeros(out_features),
            lr,
            in_features,
            out_features,
        })
    }

    /// Number of input features.
    #[must_use]
    pub fn in_features(&self) -> usize {
        self.in_features
    }

    /// Number of output features.
    #[must_use]
    pub fn out_features(&self) -> usize {
        self.out_features
    }

    /// Current weight matrix (in x out).
    #[must_use]
    pub fn weights(&self) -> &Matrix<f32> {
        &self.weights
    }

    /// Current bias vector.
    #[must_use]
    pub fn bias(&self) -> &Vector<f32> {
        &self.bias
    }

    /// Replace the weight matrix.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the replacement isn't in x out.
    pub fn set_weights(&mut self, weights: Matrix<f32>) -> Result<()> {
        if weights.shape() != (self.in_features, self.out_features) {
            return Err(ReconocerError::shape_mismatch(
                format!("{}x{}", self.in_features, self.out_features),
                format!("{}x{}", weights.n_rows(), weights.n_cols()),
            ));
        }
        self.weights = weights;
        Ok(())
    }

    /// Replace the bias vector.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the replacement length isn't the output
    /// width.
    pub fn set_bias(&mut self, bias: Vector<f32>) -> Result<()> {
        if bias.len() != self.out_features {
            return Err(ReconocerError::shape_mismatch(
                format!("length {}", self.out_features),
                format!("length {}", bias.len()),
            ));
        }
        self.bias = bias;
        Ok(())
    }

    /// Apply one gradient step given the activations that fed this layer
    /// and the gradient of the loss with respect to this layer's
    /// pre-activation output.
    ///
    /// The weight gradient is the per-example outer product of input and
    /// gradient averaged over the batch, `inputᵀ · grad / batch`; the bias
    /// gradient is the batch mean of `grad`. Both are scaled by the
    /// learning rate and subtracted in place. This is the only mutation
    /// path for the layer's parameters.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `input` isn't batch x in or `grad`
    /// isn't batch x out.
    pub fn update(&mut self, input: &Matrix<f32>, grad: &Matrix<f32>) -> Result<()> {
        if input.n_rows() != grad.n_rows() || input.n_cols() != self.in_features {
            return Err(ReconocerError::shape_mismatch(
                format!("{}x{}", grad.n_rows(), self.in_features),
                format!("{}x{}", input.n_rows(), input.n_cols()),
            ));
        }
        if grad.n_cols() != self.out_features {
            return Err(ReconocerError::shape_mismatch(
                format!("{}x{}", grad.n_rows(), self.out_features),
                format!("{}x{}", grad.n_rows(), grad.n_cols()),
            ));
        }

        let batch = input.n_rows() as f32;
        let weight_grad = input.transpose().matmul(grad)?.mul_scalar(1.0 / batch);
        let bias_grad = grad.mean(Axis::Rows)?;

        self.weights = self.weights.sub(&weight_grad.mul_scalar(self.lr))?;
        self.bias = self.bias.sub(&bias_grad.scale(self.lr))?;

        Ok(())
    }
}

impl std::fmt::Debug for Dense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dense")
            .field("in_features", &self.in_features)
            .field("out_features", &self.out_features)
            .field("lr", &self.lr)
            .finish_non_exhaustive()
    }
}
