//! MNIST loader for the classic IDX file format.
//!
//! Expects the four standard files in one directory:
//! `train-images-idx3-ubyte`, `train-labels-idx1-ubyte`,
//! `t10k-images-idx3-ubyte`, `t10k-labels-idx1-ubyte`.

use super::Split;
use crate::error::{ReconocerError, Result};
use crate::primitives::Matrix;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

const IMAGE_MAGIC: u32 = 2051;
const LABEL_MAGIC: u32 = 2049;
const IMAGE_SIDE: usize = 28;

/// The MNIST dataset: a training split and a test split.
#[derive(Debug, Clone)]
pub struct Mnist {
    /// 60k training examples.
    pub train: Split,
    /// 10k held-out test examples.
    pub test: Split,
}

impl Mnist {
    /// Load both splits from a directory of IDX files.
    ///
    /// Pixels are scaled from bytes to [0, 1].
    ///
    /// # Errors
    ///
    /// Returns `Io` if a file can't be read and `FormatError` if a file
    /// doesn't follow the IDX layout (wrong magic, wrong image size,
    /// image/label counts that disagree, or labels outside 0-9).
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            train: load_split(dir, "train-images-idx3-ubyte", "train-labels-idx1-ubyte")?,
            test: load_split(dir, "t10k-images-idx3-ubyte", "t10k-labels-idx1-ubyte")?,
        })
    }
}

fn load_split(dir: &Path, images_name: &str, labels_name: &str) -> Result<Split> {
    let images = read_images(&dir.join(images_name))?;
    let labels = read_labels(&dir.join(labels_name))?;

    if images.len() != labels.len() {
        return Err(ReconocerError::FormatError {
            message: format!(
                "{images_name} holds {} images but {labels_name} holds {} labels",
                images.len(),
                labels.len()
            ),
        });
    }

    Split::new(images, labels)
}

fn read_images(path: &Path) -> Result<Vec<Matrix<f32>>> {
    let mut reader = BufReader::new(File::open(path)?);

    let magic = read_u32_be(&mut reader)?;
    if magic != IMAGE_MAGIC {
        return Err(ReconocerError::FormatError {
            message: format!("{}: image magic {magic}, expected {IMAGE_MAGIC}", path.display()),
        });
    }

    let count = read_u32_be(&mut reader)? as usize;
    let rows = read_u32_be(&mut reader)? as usize;
    let cols = read_u32_be(&mut reader)? as usize;
    if rows != IMAGE_SIDE || cols != IMAGE_SIDE {
        return Err(ReconocerError::FormatError {
            message: format!(
                "{}: images are {rows}x{cols}, expected {IMAGE_SIDE}x{IMAGE_SIDE}",
                path.display()
            ),
        });
    }

    let mut images = Vec::with_capacity(count);
    let mut pixels = vec![0_u8; rows * cols];
    for _ in 0..count {
        reader.read_exact(&mut pixels)?;
        let data = pixels.iter().map(|&p| f32::from(p) / 255.0).collect();
        images.push(Matrix::from_vec(rows, cols, data)?);
    }

    Ok(images)
}

fn read_labels(path: &Path) -> Result<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path)?);

    let magic = read_u32_be(&mut reader)?;
    if magic != LABEL_MAGIC {
        return Err(ReconocerError::FormatError {
            message: format!("{}: label magic {magic}, expected {LABEL_MAGIC}", path.display()),
        });
    }

    let count = read_u32_be(&mut reader)? as usize;
    let mut labels = vec![0_u8; count];
    reader.read_exact(&mut labels)?;

    if let Some(&bad) = labels.iter().find(|&&l| l > 9) {
        return Err(ReconocerError::FormatError {
            message: format!("{}: label {bad} outside 0-9", path.display()),
        });
    }

    Ok(labels)
}

fn read_u32_be(reader: &mut impl Read) -> std::io::Result<u32> {
    let mut buf = [0_u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}
