//! In-place recolouring: grayscale, channel swap, invert.
//!
//! These never reallocate. An invalid raster is reported and left untouched.

use super::calculations::luma;
use super::operations::{Result, ensure_valid};
use crate::raster::{Pixel, Raster};

/// Set every pixel's three channels to its [`luma`].
pub fn grayscale(raster: &mut Raster) -> Result<()> {
    ensure_valid(raster, "grayscale")?;
    for pixel in raster.pixels_mut() {
        *pixel = Pixel::gray(luma(*pixel));
    }
    Ok(())
}

/// Rotate channels: red takes green, green takes blue, blue takes red.
///
/// Three applications restore the original.
pub fn swap_channels(raster: &mut Raster) -> Result<()> {
    ensure_valid(raster, "swap")?;
    for pixel in raster.pixels_mut() {
        let Pixel { r, g, b } = *pixel;
        *pixel = Pixel::new(g, b, r);
    }
    Ok(())
}

/// Replace each channel `x` with `255 - x`.
pub fn invert(raster: &mut Raster) -> Result<()> {
    ensure_valid(raster, "invert")?;
    for pixel in raster.pixels_mut() {
        *pixel = Pixel::from_channels(pixel.channels().map(|c| 255 - c));
    }
    Ok(())
}
