//! Transforms that change shape or remap positions: zoom out, rotate, swirl.
//!
//! Each borrows its input and allocates a new raster. The input is never
//! modified.

use super::calculations::{
    block_mean, downsampled_dimensions, rotated_right_position, swirl_source,
};
use super::operations::{Result, ensure_valid};
use super::params::SwirlParams;
use crate::raster::{Pixel, Raster};

/// Halve both dimensions by averaging non-overlapping 2×2 blocks.
///
/// A trailing odd row or column is dropped. Each channel is the truncated
/// mean of its four samples.
pub fn zoom_out(raster: &Raster) -> Result<Raster> {
    ensure_valid(raster, "zoom-out")?;
    let (rows, cols) = downsampled_dimensions(raster.rows(), raster.cols());

    Ok(Raster::from_fn(rows, cols, |row, col| {
        let (r0, c0) = (row * 2, col * 2);
        let block = [
            raster[(r0, c0)],
            raster[(r0, c0 + 1)],
            raster[(r0 + 1, c0)],
            raster[(r0 + 1, c0 + 1)],
        ];
        Pixel::new(
            block_mean(block.map(|p| p.r)),
            block_mean(block.map(|p| p.g)),
            block_mean(block.map(|p| p.b)),
        )
    }))
}

/// Rotate 90° clockwise. The result has the input's dimensions swapped.
pub fn rotate_right(raster: &Raster) -> Result<Raster> {
    ensure_valid(raster, "rotate-right")?;
    let (rows, cols) = raster.dimensions();
    let mut rotated = Raster::new(cols, rows);

    for (row, line) in raster.row_slices().enumerate() {
        for (col, &pixel) in line.iter().enumerate() {
            rotated[rotated_right_position(row, col, rows)] = pixel;
        }
    }
    Ok(rotated)
}

/// Whirlpool distortion by inverse mapping.
///
/// Every destination pixel looks up the source pixel whose position, rotated
/// about the centre by `distance / strength` radians, lands on it. Lookups
/// that fall outside the raster produce black.
pub fn swirl(raster: &Raster, params: &SwirlParams) -> Result<Raster> {
    ensure_valid(raster, "swirl")?;
    let cx = params.cx.resolve(raster.cols());
    let cy = params.cy.resolve(raster.rows());
    let strength = params.strength.value();
    log::debug!("swirl centre ({cx}, {cy}), strength {strength}");

    Ok(Raster::from_fn(raster.rows(), raster.cols(), |row, col| {
        let (src_row, src_col) = swirl_source(row as i64, col as i64, cx, cy, strength);
        raster
            .get_signed(src_row, src_col)
            .copied()
            .unwrap_or(Pixel::BLACK)
    }))
}
