//! Shared raster fixtures for the unit tests.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let raster = gradient_raster(4, 6);      // colourful, non-uniform
//! let broken = released_raster(3, 3);      // dimensions kept, pixel buffer gone
//! let bytes = ppm_bytes(&raster);          // P6 encoding of `raster`
//! ```

use crate::imaging::ppm::write_ppm;
use crate::raster::{Pixel, Raster};

/// A colourful, non-uniform raster. Pixel `(0, 0)` has three different channels.
pub fn gradient_raster(rows: usize, cols: usize) -> Raster {
    Raster::from_fn(rows, cols, |r, c| {
        Pixel::new(
            (r * 37 + c * 11) as u8,
            (r * 5 + c * 53 + 1) as u8,
            (200 + r * 3 + c * 7) as u8 ^ 0x5a,
        )
    })
}

/// A raster whose pixel buffer has been taken away.
pub fn released_raster(rows: usize, cols: usize) -> Raster {
    let mut raster = Raster::new(rows, cols);
    raster.take_pixels();
    raster
}

/// Encode `raster` as binary PPM in memory.
pub fn ppm_bytes(raster: &Raster) -> Vec<u8> {
    let mut bytes = Vec::new();
    write_ppm(&mut bytes, raster).unwrap();
    bytes
}
