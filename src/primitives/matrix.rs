//! Matrix type for 2D numeric data.

use super::Vector;
use crate::error::{ReconocerError, Result};
use serde::{Deserialize, Serialize};

/// Reduction axis for operations that collapse one matrix dimension.
///
/// Spelling the axis out keeps callers from mixing up "mean of each
/// column" and "mean of each row" behind an integer flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Collapse the rows: the result has one entry per column.
    Rows,
    /// Collapse the columns: the result has one entry per row.
    Cols,
}

/// A 2D matrix of floating-point values (row-major storage).
///
/// # Examples
///
/// ```
/// use reconocer::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(ReconocerError::shape_mismatch(
                format!("{} elements ({rows}x{cols})", rows * cols),
                format!("{} elements", data.len()),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f32> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the inner dimensions don't match.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(ReconocerError::shape_mismatch(
                format!("{}x{} * {}x_", self.rows, self.cols, self.cols),
                format!("{}x{} * {}x{}", self.rows, self.cols, other.rows, other.cols),
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies element-wise with another matrix (Hadamard product).
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if dimensions don't match.
    pub fn hadamard(&self, other: &Self) -> Result<Self> {
        self.check_same_shape(other)?;

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a * b)
            .collect();

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Adds a vector to every row of the matrix.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the vector length doesn't equal the
    /// column count.
    pub fn broadcast_add(&self, vec: &Vector<f32>) -> Result<Self> {
        if vec.len() != self.cols {
            return Err(ReconocerError::shape_mismatch(
                format!("vector of length {}", self.cols),
                format!("vector of length {}", vec.len()),
            ));
        }

        let mut data = self.data.clone();
        for row in 0..self.rows {
            for col in 0..self.cols {
                data[row * self.cols + col] += vec[col];
            }
        }

        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Arithmetic mean along the given axis.
    ///
    /// `Axis::Rows` collapses the rows and yields the mean of each column
    /// (a vector of length `cols`); `Axis::Cols` collapses the columns and
    /// yields the mean of each row (a vector of length `rows`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the collapsed dimension is empty.
    pub fn mean(&self, axis: Axis) -> Result<Vector<f32>> {
        match axis {
            Axis::Rows => {
                if self.rows == 0 {
                    return Err(ReconocerError::invalid_argument("rows", self.rows, "> 0"));
                }
                let mut sums = vec![0.0; self.cols];
                for row in 0..self.rows {
                    for col in 0..self.cols {
                        sums[col] += self.data[row * self.cols + col];
                    }
                }
                let scale = 1.0 / self.rows as f32;
                Ok(Vector::from_vec(sums.iter().map(|s| s * scale).collect()))
            }
            Axis::Cols => {
                if self.cols == 0 {
                    return Err(ReconocerError::invalid_argument("cols", self.cols, "> 0"));
                }
                let scale = 1.0 / self.cols as f32;
                let means = (0..self.rows)
                    .map(|row| {
                        let start = row * self.cols;
                        let sum: f32 = self.data[start..start + self.cols].iter().sum();
                        sum * scale
                    })
                    .collect();
                Ok(Vector::from_vec(means))
            }
        }
    }

    fn check_same_shape(&self, other: &Self) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(ReconocerError::shape_mismatch(
                format!("{}x{}", self.rows, self.cols),
                format!("{}x{}", other.rows, other.cols),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
