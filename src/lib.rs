//! Reconocer: a handwritten-digit classifier built on hand-derived
//! backpropagation.
//!
//! The crate trains a small feed-forward network (a stack of fully
//! connected layers) over a dense matrix library. No automatic
//! differentiation: every gradient is derived by hand and threaded
//! through the layers from last to first.
//!
//! # Quick Start
//!
//! ```
//! use reconocer::prelude::*;
//!
//! // Two layers: 784 inputs, 16 hidden units, 10 digit classes.
//! let arch = Architecture::parse("784-16-10").unwrap();
//! let model = Mlp::with_seed(&arch, 0.1, Some(42)).unwrap();
//!
//! // Predict a batch of blank 28x28 images.
//! let images = vec![Matrix::zeros(28, 28); 2];
//! let trace = model.predict(&images).unwrap();
//!
//! // Each output row is a probability distribution over the 10 digits.
//! assert_eq!(trace.output().shape(), (2, 10));
//! let sum: f32 = trace.output().row(0).as_slice().iter().sum();
//! assert!((sum - 1.0).abs() < 1e-5);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: dense Vector and Matrix algebra
//! - [`nn`]: layers, initialization, activations, and the classifier
//! - [`dataset`]: MNIST loading and batching
//! - [`error`]: the crate error type

pub mod dataset;
pub mod error;
pub mod nn;
pub mod prelude;
pub mod primitives;

pub use error::{ReconocerError, Result};
pub use primitives::{Matrix, Vector};
