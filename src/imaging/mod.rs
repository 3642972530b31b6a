//! Raster transforms and raster I/O.
//!
//! | Operation | Function | Output |
//! |---|---|---|
//! | **Grayscale** | [`color::grayscale`] | input, in place |
//! | **Swap** | [`color::swap_channels`] | input, in place |
//! | **Invert** | [`color::invert`] | input, in place |
//! | **Zoom out** | [`geometry::zoom_out`] | new `rows/2 × cols/2` raster |
//! | **Rotate right** | [`geometry::rotate_right`] | new `cols × rows` raster |
//! | **Swirl** | [`geometry::swirl`] | new raster, same size |
//! | **Edge detection** | [`edges::detect_edges`] | new raster; input grayscaled in place |
//!
//! The module is split into:
//! - **Calculations**: Pure per-pixel and coordinate math (unit testable)
//! - **Parameters**: Validated descriptions of what to run
//! - **Transforms**: `color`, `geometry`, `edges`
//! - **Operations**: [`apply`] dispatch over [`Operation`]
//! - **Storage**: [`RasterStore`] trait, [`FileStore`], and the P6 adapter over `image`'s PNM codec

pub mod backend;
mod calculations;
pub mod color;
pub mod edges;
pub mod file_store;
pub mod geometry;
pub mod operations;
mod params;
pub mod ppm;

pub use backend::{RasterStore, StoreError};
pub use calculations::{gradient_magnitude, luma, swirl_source};
pub use file_store::{FileStore, RasterFormat, supported_extensions};
pub use operations::{TransformError, apply};
pub use params::{CenterCoord, Operation, ParamError, Strength, SwirlParams, Threshold};
pub use ppm::{DecodeLimits, PpmError, read_ppm, write_ppm};
