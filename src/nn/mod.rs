//! Neural network building blocks and the digit classifier.
//!
//! The model is a stack of fully connected layers trained with
//! hand-derived backpropagation:
//!
//! - [`Architecture`]: validated dash-separated layer widths
//! - [`Dense`]: one fully connected layer (weights, bias, update step)
//! - [`Mlp`]: the classifier (forward pass, backward pass, evaluation)
//! - [`functional`]: stateless tanh/softmax/argmax over matrices
//! - [`init`]: random weight initialization
//!
//! # Example
//!
//! ```
//! use reconocer::nn::{Architecture, Mlp};
//! use reconocer::primitives::Matrix;
//!
//! let arch = Architecture::parse("784-128-10").unwrap();
//! let model = Mlp::with_seed(&arch, 0.1, Some(42)).unwrap();
//!
//! let batch = vec![Matrix::zeros(28, 28); 4];
//! let trace = model.predict(&batch).unwrap();
//! assert_eq!(trace.output().shape(), (4, 10));
//! ```

mod architecture;
mod dense;
pub mod functional;
pub mod init;
mod mlp;

pub use architecture::Architecture;
pub use dense::Dense;
pub use mlp::{Activations, Evaluation, Mlp};
