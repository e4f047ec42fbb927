//! Dataset splits and batching.
//!
//! A [`Split`] owns the images and labels of one portion of a dataset
//! (training or test) and hands them out as fixed-size [`Batch`]es. The
//! MNIST loader in [`mnist`] produces the splits from the classic IDX
//! files.

mod mnist;

pub use mnist::Mnist;

use crate::error::{ReconocerError, Result};
use crate::primitives::Matrix;

/// One batch of examples: parallel arrays of 2D pixel grids and integer
/// labels.
#[derive(Debug, Clone)]
pub struct Batch {
    /// Raw images, each a rows x cols pixel grid.
    pub images: Vec<Matrix<f32>>,
    /// Integer class labels, parallel to `images`.
    pub labels: Vec<u8>,
}

/// One dataset split (e.g. training or test).
#[derive(Debug, Clone)]
pub struct Split {
    images: Vec<Matrix<f32>>,
    labels: Vec<u8>,
}

impl Split {
    /// Create a split from parallel image and label arrays.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the arrays have different lengths.
    pub fn new(images: Vec<Matrix<f32>>, labels: Vec<u8>) -> Result<Self> {
        if images.len() != labels.len() {
            return Err(ReconocerError::shape_mismatch(
                format!("{} labels", images.len()),
                format!("{} labels", labels.len()),
            ));
        }
        Ok(Self { images, labels })
    }

    /// Total number of examples in the split.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the split holds no examples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Iterate the split as batches of `batch_size` examples.
    ///
    /// The final batch may be smaller than `batch_size` when the split
    /// doesn't divide evenly.
    ///
    /// # Panics
    ///
    /// Panics if `batch_size` is zero.
    #[must_use]
    pub fn batches(&self, batch_size: usize) -> Batches<'_> {
        assert!(batch_size > 0, "batch_size must be positive");
        Batches {
            split: self,
            batch_size,
            cursor: 0,
        }
    }
}

/// Iterator over the batches of a [`Split`].
#[derive(Debug)]
pub struct Batches<'a> {
    split: &'a Split,
    batch_size: usize,
    cursor: usize,
}

impl Iterator for Batches<'_> {
    type Item = Batch;

    fn next(&mut self) -> Option<Batch> {
        if self.cursor >= self.split.len() {
            return None;
        }

        let end = (self.cursor + self.batch_size).min(self.split.len());
        let batch = Batch {
            images: self.split.images[self.cursor..end].to_vec(),
            labels: self.split.labels[self.cursor..end].to_vec(),
        };
        self.cursor = end;

        Some(batch)
    }
}
