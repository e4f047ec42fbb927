//! Vector type for 1D numeric data.

use super::Matrix;
use crate::error::{ReconocerError, Result};
use serde::{Deserialize, Serialize};

/// A fixed-length vector of floating-point values.
///
/// # Examples
///
/// ```
/// use reconocer::primitives::Vector;
///
/// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
/// assert_eq!(v.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Copy> Vector<T> {
    /// Creates a vector that takes ownership of the data.
    #[must_use]
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Creates a vector by copying a slice.
    #[must_use]
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> std::ops::Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl Vector<f32> {
    /// Creates a vector of zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Adds another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if lengths differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(ReconocerError::shape_mismatch(
                format!("length {}", self.len()),
                format!("length {}", other.len()),
            ));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();

        Ok(Self { data })
    }

    /// Subtracts another vector element-wise.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if lengths differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.len() != other.len() {
            return Err(ReconocerError::shape_mismatch(
                format!("length {}", self.len()),
                format!("length {}", other.len()),
            ));
        }

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();

        Ok(Self { data })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: f32) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
        }
    }

    /// Expands the vector into a one-hot matrix.
    ///
    /// A vector of length N becomes an N x `num_classes` matrix with a
    /// single 1.0 per row at the column equal to the element's integer
    /// value, zeros elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `num_classes` is zero or any element
    /// is not an integer in `[0, num_classes)`.
    pub fn one_hot(&self, num_classes: usize) -> Result<Matrix<f32>> {
        if num_classes == 0 {
            return Err(ReconocerError::invalid_argument(
                "num_classes",
                num_classes,
                "> 0",
            ));
        }

        let mut data = vec![0.0; self.len() * num_classes];
        for (row, &value) in self.data.iter().enumerate() {
            if value < 0.0 || value.fract() != 0.0 || value as usize >= num_classes {
                return Err(ReconocerError::invalid_argument(
                    "label",
                    value,
                    &format!("integer in [0, {num_classes})"),
                ));
            }
            data[row * num_classes + value as usize] = 1.0;
        }

        Matrix::from_vec(self.len(), num_classes, data)
    }
}
