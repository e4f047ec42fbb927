//! Architecture descriptors.
//!
//! A network is described by a dash-separated list of layer widths such
//! as `784-128-10`. The first and last widths are pinned to the input
//! pixel count and the digit class count; a descriptor that disagrees is
//! corrected rather than rejected, and the correction is observable
//! through [`Architecture::was_corrected`].

use crate::error::{ReconocerError, Result};
use std::fmt;

/// Validated sequence of layer widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Architecture {
    widths: Vec<usize>,
    corrected: bool,
}

impl Architecture {
    /// Input width: one feature per pixel of a 28x28 image.
    pub const INPUT_WIDTH: usize = 784;

    /// Output width: one class per digit.
    pub const OUTPUT_WIDTH: usize = 10;

    /// Hidden width used when a descriptor is too short to name one.
    pub const DEFAULT_HIDDEN_WIDTH: usize = 20;

    /// Parse and validate a dash-separated descriptor.
    ///
    /// A descriptor with fewer than three widths is replaced by the
    /// default `784-20-10`. The first and last widths are forced to
    /// [`Self::INPUT_WIDTH`] and [`Self::OUTPUT_WIDTH`]; any substitution
    /// is reported by [`Self::was_corrected`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidArchitecture` if any field is not a positive
    /// integer.
    pub fn parse(descriptor: &str) -> Result<Self> {
        let fields: Vec<&str> = descriptor.trim().split('-').collect();

        let (mut widths, mut corrected) = if fields.len() < 3 {
            (
                vec![
                    Self::INPUT_WIDTH,
                    Self::DEFAULT_HIDDEN_WIDTH,
                    Self::OUTPUT_WIDTH,
                ],
                true,
            )
        } else {
            let mut widths = Vec::with_capacity(fields.len());
            for field in fields {
                let width: usize = field.parse().map_err(|_| {
                    ReconocerError::InvalidArchitecture {
                        descriptor: descriptor.to_string(),
                        reason: format!("{field:?} is not a positive integer"),
                    }
                })?;
                if width == 0 {
                    return Err(ReconocerError::InvalidArchitecture {
                        descriptor: descriptor.to_string(),
                        reason: "layer widths must be positive".to_string(),
                    });
                }
                widths.push(width);
            }
            (widths, false)
        };

        if widths[0] != Self::INPUT_WIDTH {
            widths[0] = Self::INPUT_WIDTH;
            corrected = true;
        }
        let last = widths.len() - 1;
        if widths[last] != Self::OUTPUT_WIDTH {
            widths[last] = Self::OUTPUT_WIDTH;
            corrected = true;
        }

        Ok(Self { widths, corrected })
    }

    /// The validated layer widths, endpoints included.
    #[must_use]
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Whether parsing substituted the default or forced an endpoint.
    #[must_use]
    pub fn was_corrected(&self) -> bool {
        self.corrected
    }

    /// Number of fully connected layers the widths describe.
    #[must_use]
    pub fn num_layers(&self) -> usize {
        self.widths.len() - 1
    }

    /// (input, output) dimension pairs for each layer in forward order.
    pub fn layer_dims(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.widths.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for width in &self.widths {
            if !first {
                write!(f, "-")?;
            }
            write!(f, "{width}")?;
            first = false;
        }
        Ok(())
    }
}
