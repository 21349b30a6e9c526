// rover_core/src/mapping/mask.rs

use crate::types::Frame;
use nalgebra::DMatrix;

/// A boolean pixel set over a map grid, indexed `(row, col)` with row 0 at the
/// top of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelMask(DMatrix<bool>);

impl PixelMask {
    /// Marks every pixel whose `channel` value is non-zero.
    pub fn from_channel(frame: &Frame, channel: usize) -> Self {
        let (width, height) = frame.dimensions();
        Self(DMatrix::from_fn(height as usize, width as usize, |r, c| {
            frame.get_pixel(c as u32, r as u32)[channel] > 0
        }))
    }

    pub fn from_matrix(cells: DMatrix<bool>) -> Self {
        Self(cells)
    }

    /// `(rows, cols)` of the underlying grid.
    pub fn shape(&self) -> (usize, usize) {
        self.0.shape()
    }

    /// Number of pixels in the set.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&set| set).count()
    }

    /// Pixels in both sets. Both masks must have the same shape.
    pub fn intersection(&self, other: &PixelMask) -> PixelMask {
        PixelMask(self.0.zip_map(&other.0, |a, b| a && b))
    }

    /// Pixels in `self` but not in `other`. Both masks must have the same shape.
    pub fn difference(&self, other: &PixelMask) -> PixelMask {
        PixelMask(self.0.zip_map(&other.0, |a, b| a && !b))
    }
}
