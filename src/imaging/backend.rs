//! Raster storage trait and shared error type.
//!
//! The [`RasterStore`] trait is the seam between the pipeline and the
//! filesystem: load a raster from a path, save one to a path. The production
//! implementation is [`FileStore`](super::file_store::FileStore); tests use a
//! recording mock.

use crate::raster::Raster;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The file could not be opened for reading.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file could not be created for writing.
    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file was readable but is not a raster we understand.
    #[error("failed to decode {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
    /// Encoding or writing the output failed part-way.
    #[error("failed to write {}: {reason}", path.display())]
    Encode { path: PathBuf, reason: String },
}

/// Load and save rasters by path.
pub trait RasterStore {
    fn load(&self, path: &Path) -> Result<Raster, StoreError>;

    fn save(&self, path: &Path, raster: &Raster) -> Result<(), StoreError>;
}
