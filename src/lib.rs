//! # Rastershop
//!
//! Pixel-level transforms for RGB rasters: grayscale, channel swap, colour
//! inversion, 2× zoom-out, 90° clockwise rotation, swirl distortion, and
//! threshold edge detection. Rasters are read from and written to binary PPM
//! (P6) files, or any format the `image` crate decodes, picked by extension.
//!
//! # Architecture
//!
//! One run is a straight pipeline:
//!
//! ```text
//! input ──RasterStore::load──▶ Raster ──imaging::apply(op)──▶ Raster ──RasterStore::save──▶ output
//! ```
//!
//! The transforms are pure functions over [`raster::Raster`]; only the store
//! touches the filesystem, so everything above it is unit testable with an
//! in-memory mock.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`raster`] | `Pixel` and the row-major `Raster` container |
//! | [`imaging`] | The seven transforms, their validated parameters, the PPM codec, and raster storage |
//! | [`process`] | Load → transform → save, producing a [`process::ProcessReport`] |
//! | [`config`] | Optional `rastershop.toml`: logging level and decoder limits |
//! | [`cli`] | Command parsing and exit-code mapping for the binary |
//! | [`output`] | Usage text and run report formatting |
//!
//! # Design Decisions
//!
//! ## Validated Parameters
//!
//! Operation arguments are checked once, at the command-line boundary, and
//! cross into the core as types that cannot hold bad values: a swirl
//! [`imaging::Strength`] is never zero, and a swirl centre is either an
//! explicit coordinate or [`imaging::CenterCoord::Middle`].
//!
//! ## Invalid Rasters Are Errors, Not Panics
//!
//! A raster whose pixel buffer has been released (see
//! [`raster::Raster::take_pixels`]) is rejected by every transform with
//! [`imaging::TransformError::InvalidRaster`]. The rejection is logged and
//! nothing is mutated or allocated.
//!
//! ## Exit Codes
//!
//! The binary keeps a fixed table of exit codes (see [`cli`]) so scripts can
//! tell a missing file from a bad argument from a failed write.

pub mod cli;
pub mod config;
pub mod imaging;
pub mod output;
pub mod process;
pub mod raster;

#[cfg(test)]
pub(crate) mod test_helpers;
