//! Multi-layer perceptron classifier.
//!
//! The model owns an ordered stack of [`Dense`] layers and drives both
//! directions of training: the forward pass that retains every
//! intermediate activation, and the backward pass that walks the layers
//! last-to-first applying the chain rule by hand.

use super::architecture::Architecture;
use super::dense::Dense;
use super::functional;
use crate::dataset::Split;
use crate::error::{ReconocerError, Result};
use crate::primitives::{Matrix, Vector};

/// Activation snapshots retained by one forward pass.
///
/// Holds the flattened input batch, the post-tanh output of every hidden
/// layer in forward order, and the final softmax distribution. One
/// snapshot per layer plus the input: the backward pass reads each
/// layer's input activation from here. Produced by [`Mlp::predict`],
/// consumed by the paired backward pass, then dropped.
#[derive(Debug, Clone)]
pub struct Activations {
    input: Matrix<f32>,
    hidden: Vec<Matrix<f32>>,
    output: Matrix<f32>,
}

impl Activations {
    /// The softmax prediction distribution (batch x classes).
    #[must_use]
    pub fn output(&self) -> &Matrix<f32> {
        &self.output
    }

    /// The activation matrix that fed layer `layer` during the forward
    /// pass: the flattened input for layer 0, otherwise the previous
    /// hidden layer's output.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `layer` is out of range.
    pub fn layer_input(&self, layer: usize) -> Result<&Matrix<f32>> {
        if layer == 0 {
            Ok(&self.input)
        } else {
            self.hidden.get(layer - 1).ok_or_else(|| {
                ReconocerError::invalid_argument(
                    "layer",
                    layer,
                    &format!("< {}", self.hidden.len() + 1),
                )
            })
        }
    }

    /// Number of retained matrices: layer count + 1.
    #[must_use]
    pub fn num_snapshots(&self) -> usize {
        self.hidden.len() + 2
    }
}

/// Result of evaluating the model on a dataset split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Fraction of examples classified correctly.
    pub accuracy: f32,
    /// Number of examples classified correctly.
    pub correct: usize,
}

/// Feed-forward digit classifier.
///
/// # Example
///
/// ```
/// use reconocer::nn::{Architecture, Mlp};
/// use reconocer::primitives::Matrix;
///
/// let arch = Architecture::parse("784-16-10").unwrap();
/// let model = Mlp::with_seed(&arch, 0.1, Some(42)).unwrap();
///
/// let images = vec![Matrix::zeros(28, 28); 3];
/// let trace = model.predict(&images).unwrap();
/// assert_eq!(trace.output().shape(), (3, 10));
/// ```
pub struct Mlp {
    layers: Vec<Dense>,
}

impl Mlp {
    /// Build one layer per adjacent width pair with entropy seeding.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the learning rate is not a positive
    /// finite number.
    pub fn new(arch: &Architecture, lr: f32) -> Result<Self> {
        Self::with_seed(arch, lr, None)
    }

    /// Build the model with reproducible layer weights.
    ///
    /// Each layer derives its own seed from the base seed so that layers
    /// don't share identical initial weights.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Mlp::new`].
    pub fn with_seed(arch: &Architecture, lr: f32, seed: Option<u64>) -> Result<Self> {
        let layers = arch
            .layer_dims()
            .enumerate()
            .map(|(i, (input, output))| {
                Dense::with_seed(input, output, lr, seed.map(|s| s.wrapping_add(i as u64)))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { layers })
    }

    /// Number of fully connected layers.
    #[must_use]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Access a layer by index.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `index` is out of range.
    pub fn layer(&self, index: usize) -> Result<&Dense> {
        self.layers.get(index).ok_or_else(|| {
            ReconocerError::invalid_argument("index", index, &format!("< {}", self.layers.len()))
        })
    }

    /// Run the forward pass over a batch of images.
    ///
    /// Each image is flattened row-major into a feature row; hidden layers
    /// apply `tanh(x · W + b)`, the output layer applies `x · W + b`
    /// followed by row-wise softmax. Every intermediate activation is
    /// retained in the returned [`Activations`] for the backward pass.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty batch and `ShapeMismatch`
    /// if an image's pixel count doesn't match the input width.
    pub fn predict(&self, images: &[Matrix<f32>]) -> Result<Activations> {
        let (last, hidden_layers) = self
            .layers
            .split_last()
            .ok_or_else(|| ReconocerError::invalid_argument("layers", 0, ">= 1"))?;

        let input = flatten(images, self.layers[0].in_features())?;

        let mut hidden = Vec::with_capacity(hidden_layers.len());
        let mut prev = input.clone();
        for layer in hidden_layers {
            let pre = prev.matmul(layer.weights())?.broadcast_add(layer.bias())?;
            let act = functional::tanh(&pre);
            prev = act.clone();
            hidden.push(act);
        }

        let logits = prev.matmul(last.weights())?.broadcast_add(last.bias())?;
        let output = functional::softmax(&logits);

        Ok(Activations {
            input,
            hidden,
            output,
        })
    }

    /// Train on every batch of the split once.
    ///
    /// Per batch: predict, seed the gradient with
    /// `softmax output - one_hot(labels)` (the combined softmax/
    /// cross-entropy gradient), then walk the layers from last to first.
    /// The gradient handed to the previous layer is
    /// `(grad · Wᵀ) ⊙ (1 - a²)` where `a` is that layer's input
    /// activation; it must be formed from the pre-update weights, so the
    /// propagation happens before the layer's own update step.
    ///
    /// # Errors
    ///
    /// Propagates shape errors from the algebra layer; these indicate a
    /// configuration defect, not a transient condition.
    pub fn train_epoch(&mut self, split: &Split, batch_size: usize) -> Result<()> {
        for batch in split.batches(batch_size) {
            let trace = self.predict(&batch.images)?;

            let labels =
                Vector::from_vec(batch.labels.iter().map(|&l| f32::from(l)).collect::<Vec<_>>());
            let gold = labels.one_hot(trace.output().n_cols())?;

            let mut grad = trace.output().sub(&gold)?;
            for i in (0..self.layers.len()).rev() {
                let input = trace.layer_input(i)?;

                let propagated = if i > 0 {
                    let weights_t = self.layers[i].weights().transpose();
                    Some(
                        grad.matmul(&weights_t)?
                            .hadamard(&functional::tanh_prime(input))?,
                    )
                } else {
                    None
                };

                self.layers[i].update(input, &grad)?;

                if let Some(next) = propagated {
                    grad = next;
                }
            }
        }

        Ok(())
    }

    /// Classify every batch of the split and count correct predictions.
    ///
    /// Takes the arg-max of the prediction distribution per example and
    /// compares it to the integer label. Parameters are not mutated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty split; propagates shape
    /// errors from prediction.
    pub fn evaluate(&self, split: &Split, batch_size: usize) -> Result<Evaluation> {
        if split.is_empty() {
            return Err(ReconocerError::invalid_argument(
                "split",
                "0 examples",
                "a non-empty split",
            ));
        }

        let mut correct = 0;
        for batch in split.batches(batch_size) {
            let trace = self.predict(&batch.images)?;
            let predicted = functional::argmax(trace.output());
            correct += predicted
                .iter()
                .zip(batch.labels.iter())
                .filter(|(p, l)| **p == **l as usize)
                .count();
        }

        Ok(Evaluation {
            accuracy: correct as f32 / split.len() as f32,
            correct,
        })
    }
}

impl std::fmt::Debug for Mlp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mlp")
            .field("num_layers", &self.layers.len())
            .finish_non_exhaustive()
    }
}

/// Stack a batch of 2D images into one row-major feature matrix.
fn flatten(images: &[Matrix<f32>], features: usize) -> Result<Matrix<f32>> {
    if images.is_empty() {
        return Err(ReconocerError::invalid_argument(
            "images",
            0,
            "a non-empty batch",
        ));
    }

    let mut data = Vec::with_capacity(images.len() * features);
    for image in images {
        let (rows, cols) = image.shape();
        if rows * cols != features {
            return Err(ReconocerError::shape_mismatch(
                format!("{features} pixels per image"),
                format!("{rows}x{cols} = {} pixels", rows * cols),
            ));
        }
        data.extend_from_slice(image.as_slice());
    }

    Matrix::from_vec(images.len(), features, data)
}
