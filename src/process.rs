//! Load → transform → save.
//!
//! One run reads a single raster through a [`RasterStore`], applies one
//! [`Operation`], and writes the result. The store is a trait object seam so
//! the pipeline can be exercised against a mock without touching disk.
//!
//! ```text
//! input.ppm ──load──▶ Raster ──apply(op)──▶ Raster ──save──▶ output.ppm
//! ```
//!
//! Nothing is written when loading or the transform fails.

use crate::imaging::{Operation, RasterStore, StoreError, TransformError, apply};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("{0}")]
    Load(StoreError),
    #[error("{0}")]
    Transform(#[from] TransformError),
    #[error("{0}")]
    Save(StoreError),
}

/// What one run did, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessReport {
    pub operation: Operation,
    pub input: PathBuf,
    pub output: PathBuf,
    /// `(rows, cols)` of the loaded raster.
    pub input_dims: (usize, usize),
    /// `(rows, cols)` of the written raster.
    pub output_dims: (usize, usize),
}

/// Run `operation` on the raster at `input` and write the result to `output`.
pub fn process(
    store: &impl RasterStore,
    input: &Path,
    output: &Path,
    operation: &Operation,
) -> Result<ProcessReport, ProcessError> {
    let raster = store.load(input).map_err(ProcessError::Load)?;
    let input_dims = raster.dimensions();
    log::info!(
        "loaded {} ({}x{})",
        input.display(),
        input_dims.0,
        input_dims.1
    );

    let result = apply(operation, raster)?;
    let output_dims = result.dimensions();

    store.save(output, &result).map_err(ProcessError::Save)?;
    log::info!(
        "wrote {} ({}x{})",
        output.display(),
        output_dims.0,
        output_dims.1
    );

    Ok(ProcessReport {
        operation: *operation,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        input_dims,
        output_dims,
    })
}
