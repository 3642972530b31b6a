//! The raster data model shared by every transform.
//!
//! A [`Raster`] is a `rows × cols` grid of [`Pixel`]s stored row-major in a
//! single `Vec`: element `(row, col)` lives at `row * cols + col`. All access
//! goes through `(row, col)` so the linear index math lives in one place.
//!
//! ```text
//!          col 0   col 1   col 2
//! row 0  [  0   ][  1   ][  2   ]
//! row 1  [  3   ][  4   ][  5   ]
//! ```
//!
//! A raster is *valid* while `pixels.len() == rows * cols`. The only way to
//! break that is [`Raster::take_pixels`], which hands the buffer to the
//! caller and leaves the raster without one; transforms check
//! [`Raster::is_valid`] before touching pixels.

use std::ops::{Index, IndexMut};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RasterError {
    #[error("pixel buffer holds {len} pixels, expected {rows}x{cols} = {expected}")]
    LengthMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        len: usize,
    },
}

/// One 8-bit-per-channel RGB pixel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A pixel with all three channels set to `value`.
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Row-major RGB raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    rows: usize,
    cols: usize,
    pixels: Vec<Pixel>,
}

impl Raster {
    /// An all-black raster.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, Pixel::BLACK)
    }

    pub fn filled(rows: usize, cols: usize, pixel: Pixel) -> Self {
        Self {
            rows,
            cols,
            pixels: vec![pixel; rows * cols],
        }
    }

    /// Wrap an existing row-major buffer. The length must be `rows * cols`.
    pub fn from_pixels(rows: usize, cols: usize, pixels: Vec<Pixel>) -> Result<Self, RasterError> {
        let expected = rows * cols;
        if pixels.len() != expected {
            return Err(RasterError::LengthMismatch {
                rows,
                cols,
                expected,
                len: pixels.len(),
            });
        }
        Ok(Self { rows, cols, pixels })
    }

    /// Build a raster by evaluating `f(row, col)` for every position.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                pixels.push(f(row, col));
            }
        }
        Self { rows, cols, pixels }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True while the pixel buffer matches the declared dimensions.
    pub fn is_valid(&self) -> bool {
        self.pixels.len() == self.rows * self.cols
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Move the pixel buffer out, leaving the raster without one.
    ///
    /// The dimensions are kept, so a non-empty raster is invalid afterwards.
    pub fn take_pixels(&mut self) -> Vec<Pixel> {
        std::mem::take(&mut self.pixels)
    }

    /// Iterate over rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks_exact panics on 0, and a zero-width raster has no pixels anyway
        self.pixels.chunks_exact(self.cols.max(1))
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        self.index_of(row, col).map(|i| &self.pixels[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Pixel> {
        self.index_of(row, col).map(move |i| &mut self.pixels[i])
    }

    /// Signed lookup for callers that compute coordinates which may fall
    /// outside the grid.
    pub fn get_signed(&self, row: i64, col: i64) -> Option<&Pixel> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.get(row, col)
    }

    fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols && self.is_valid() {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

impl Index<(usize, usize)> for Raster {
    type Output = Pixel;

    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        let (rows, cols) = (self.rows, self.cols);
        self.get(row, col)
            .unwrap_or_else(|| panic!("pixel ({row}, {col}) out of bounds for {rows}x{cols} raster"))
    }
}

impl IndexMut<(usize, usize)> for Raster {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
        let (rows, cols) = (self.rows, self.cols);
        self.get_mut(row, col)
            .unwrap_or_else(|| panic!("pixel ({row}, {col}) out of bounds for {rows}x{cols} raster"))
    }
}
