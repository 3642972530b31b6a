//! Gradient-threshold edge detection.
//!
//! Two steps, both public:
//!
//! 1. [`grayscale`](super::color::grayscale) the input in place.
//! 2. [`edge_map`]: central differences on the (now gray) red channel,
//!    thresholded to black (edge) or white (flat).
//!
//! [`detect_edges`] runs both. Callers that need the input kept in colour
//! should clone first or call the steps themselves.

use super::calculations::gradient_magnitude;
use super::color::grayscale;
use super::operations::{Result, ensure_valid};
use super::params::Threshold;
use crate::raster::{Pixel, Raster};

/// Grayscale `raster` in place, then return its [`edge_map`].
///
/// The in-place grayscale is part of the contract: afterwards `raster` holds
/// the gray image the gradients were computed from.
pub fn detect_edges(raster: &mut Raster, threshold: Threshold) -> Result<Raster> {
    ensure_valid(raster, "edge-detection")?;
    grayscale(raster)?;
    edge_map(raster, threshold)
}

/// Threshold the gradient magnitude of a gray raster.
///
/// Interior pixels become black when the magnitude exceeds `threshold`,
/// white otherwise. Border pixels are copied unchanged. Only the red channel
/// is read, so a colour input is treated as its red plane.
pub fn edge_map(gray: &Raster, threshold: Threshold) -> Result<Raster> {
    ensure_valid(gray, "edge-detection")?;
    let (rows, cols) = gray.dimensions();
    let limit = threshold.value() as f64;

    Ok(Raster::from_fn(rows, cols, |row, col| {
        if row == 0 || col == 0 || row == rows - 1 || col == cols - 1 {
            return gray[(row, col)];
        }
        let magnitude = gradient_magnitude(
            gray[(row - 1, col)].r,
            gray[(row + 1, col)].r,
            gray[(row, col - 1)].r,
            gray[(row, col + 1)].r,
        );
        if magnitude > limit {
            Pixel::BLACK
        } else {
            Pixel::WHITE
        }
    }))
}
