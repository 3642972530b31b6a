//! Pure per-pixel and coordinate math.
//!
//! Nothing here touches a [`Raster`](crate::raster::Raster); every function
//! maps numbers to numbers so the transforms stay thin and these stay unit
//! testable.

use crate::raster::Pixel;

/// NTSC luma weights for red, green, blue.
pub const LUMA_WEIGHTS: [f64; 3] = [0.30, 0.59, 0.11];

/// Single-channel intensity of a pixel.
///
/// `0.30*R + 0.59*G + 0.11*B`, truncated toward zero (never rounded).
///
/// # Examples
/// ```
/// # use rastershop::imaging::luma;
/// # use rastershop::raster::Pixel;
/// assert_eq!(luma(Pixel::new(200, 100, 50)), 124); // 124.5 truncates
/// assert_eq!(luma(Pixel::new(255, 0, 0)), 76);
/// ```
pub fn luma(pixel: Pixel) -> u8 {
    let [wr, wg, wb] = LUMA_WEIGHTS;
    (wr * pixel.r as f64 + wg * pixel.g as f64 + wb * pixel.b as f64) as u8
}

/// Output dimensions of a 2×2 block downsample: `(rows/2, cols/2)`.
///
/// Odd trailing rows and columns are dropped, never rounded up.
pub fn downsampled_dimensions(rows: usize, cols: usize) -> (usize, usize) {
    (rows / 2, cols / 2)
}

/// Truncated mean of four channel samples: `floor(0.25 * (a + b + c + d))`.
pub fn block_mean(samples: [u8; 4]) -> u8 {
    let sum: u16 = samples.iter().map(|&s| s as u16).sum();
    (sum / 4) as u8
}

/// Where `(row, col)` lands after a 90° clockwise rotation of a raster with
/// `rows` rows: `(col, rows - 1 - row)`.
pub fn rotated_right_position(row: usize, col: usize, rows: usize) -> (usize, usize) {
    (col, rows - 1 - row)
}

/// Source coordinate sampled by the swirl destination pixel `(row, col)`.
///
/// The displacement from the centre `(cx, cy)` is rotated by
/// `distance / strength` radians and the centre is added back. The result is
/// truncated toward zero and may lie outside the raster; callers bounds-check.
///
/// Returns `(src_row, src_col)`.
pub fn swirl_source(row: i64, col: i64, cx: i64, cy: i64, strength: i32) -> (i64, i64) {
    let dx = (col - cx) as f64;
    let dy = (row - cy) as f64;
    let distance = (dx * dx + dy * dy).sqrt();
    let angle = distance / strength as f64;
    let (sin, cos) = angle.sin_cos();

    let src_col = dx * cos - dy * sin + cx as f64;
    let src_row = dx * sin + dy * cos + cy as f64;

    // `as` truncates toward zero
    (src_row as i64, src_col as i64)
}

/// Central-difference gradient magnitude from the four axial neighbours.
///
/// `dx` runs along rows (`below - above`), `dy` along columns
/// (`right - left`); each is halved before taking `sqrt(dx² + dy²)`.
pub fn gradient_magnitude(above: u8, below: u8, left: u8, right: u8) -> f64 {
    let dx = (below as f64 - above as f64) / 2.0;
    let dy = (right as f64 - left as f64) / 2.0;
    (dx * dx + dy * dy).sqrt()
}
