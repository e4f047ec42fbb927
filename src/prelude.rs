//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use reconocer::prelude::*;
//! ```

pub use crate::dataset::{Batch, Mnist, Split};
pub use crate::error::{ReconocerError, Result};
pub use crate::nn::{Activations, Architecture, Dense, Evaluation, Mlp};
pub use crate::primitives::{Axis, Matrix, Vector};
