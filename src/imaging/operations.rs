//! Operation dispatch.
//!
//! [`apply`] runs one [`Operation`] and hands back the raster to persist:
//! the recoloured input for in-place operations, the freshly allocated result
//! otherwise.

use super::params::Operation;
use super::{color, edges, geometry};
use crate::raster::Raster;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    #[error("{operation} given an invalid raster ({rows}x{cols} with {len} pixels)")]
    InvalidRaster {
        operation: &'static str,
        rows: usize,
        cols: usize,
        len: usize,
    },
}

/// Result type for raster transforms.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Refuse rasters whose pixel buffer is missing or the wrong length.
///
/// Logs the rejection so in-place callers that ignore the `Err` still leave a trace.
pub(crate) fn ensure_valid(raster: &Raster, operation: &'static str) -> Result<()> {
    if raster.is_valid() {
        return Ok(());
    }
    let err = TransformError::InvalidRaster {
        operation,
        rows: raster.rows(),
        cols: raster.cols(),
        len: raster.pixels().len(),
    };
    log::error!("{err}");
    Err(err)
}

/// Run `operation` on `raster`.
pub fn apply(operation: &Operation, mut raster: Raster) -> Result<Raster> {
    log::debug!(
        "applying {operation} to {}x{} raster{}",
        raster.rows(),
        raster.cols(),
        if operation.is_in_place() { " in place" } else { "" }
    );
    match operation {
        Operation::Grayscale => {
            color::grayscale(&mut raster)?;
            Ok(raster)
        }
        Operation::Swap => {
            color::swap_channels(&mut raster)?;
            Ok(raster)
        }
        Operation::Invert => {
            color::invert(&mut raster)?;
            Ok(raster)
        }
        Operation::ZoomOut => geometry::zoom_out(&raster),
        Operation::RotateRight => geometry::rotate_right(&raster),
        Operation::Swirl(params) => geometry::swirl(&raster, params),
        Operation::EdgeDetection(threshold) => edges::detect_edges(&mut raster, *threshold),
    }
}
