//! Filesystem-backed [`RasterStore`].
//!
//! ## Format mapping
//!
//! | Extension | Codec |
//! |---|---|
//! | `ppm`, anything unknown, none | `image` crate PNM, narrowed to `P6` by [`ppm`](super::ppm) |
//! | `png` | `image` crate |
//! | `jpg`, `jpeg` | `image` crate |
//! | `tif`, `tiff` | `image` crate |
//! | `webp` | `image` crate (lossless) |
//!
//! Everything decoded through the `image` crate is converted to 8-bit RGB;
//! alpha is dropped. Rasters with a zero dimension are never written, whatever
//! the codec.

use super::backend::{RasterStore, StoreError};
use super::ppm::{DecodeLimits, read_ppm, write_ppm};
use crate::raster::{Pixel, Raster};
use image::{ImageFormat, ImageReader, RgbImage};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Extensions handled by the `image` crate.
const ENCODED_FORMATS: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

/// How a path will be decoded or encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    Ppm,
    Encoded(ImageFormat),
}

impl RasterFormat {
    /// Pick a codec from the file extension (case-insensitive).
    pub fn for_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        ENCODED_FORMATS
            .iter()
            .find(|(name, _)| *name == ext)
            .map(|(_, fmt)| Self::Encoded(*fmt))
            .unwrap_or(Self::Ppm)
    }
}

/// Extensions with a codec compiled in, PPM first.
pub fn supported_extensions() -> Vec<&'static str> {
    std::iter::once("ppm")
        .chain(ENCODED_FORMATS.iter().map(|(ext, _)| *ext))
        .collect()
}

/// Reads and writes rasters on disk.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    limits: DecodeLimits,
}

impl FileStore {
    pub fn new(limits: DecodeLimits) -> Self {
        Self { limits }
    }

    fn load_ppm(&self, path: &Path) -> Result<Raster, StoreError> {
        let file = File::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        read_ppm(BufReader::new(file), &self.limits).map_err(|e| StoreError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn load_encoded(&self, path: &Path, format: ImageFormat) -> Result<Raster, StoreError> {
        let decode_err = |reason: String| StoreError::Decode {
            path: path.to_path_buf(),
            reason,
        };

        let mut reader = ImageReader::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        reader.set_format(format);
        let img = reader.decode().map_err(|e| decode_err(e.to_string()))?.into_rgb8();

        let (cols, rows) = (img.width() as usize, img.height() as usize);
        if (rows as u64) * (cols as u64) > self.limits.max_pixels {
            return Err(decode_err(format!(
                "{cols}x{rows} raster exceeds the {} pixel limit",
                self.limits.max_pixels
            )));
        }
        let pixels = img
            .into_raw()
            .chunks_exact(3)
            .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
            .collect();
        Raster::from_pixels(rows, cols, pixels).map_err(|e| decode_err(e.to_string()))
    }

    fn save_ppm(&self, path: &Path, raster: &Raster) -> Result<(), StoreError> {
        let file = File::create(path).map_err(|source| StoreError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        write_ppm(BufWriter::new(file), raster).map_err(|e| StoreError::Encode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn save_encoded(
        &self,
        path: &Path,
        raster: &Raster,
        format: ImageFormat,
    ) -> Result<(), StoreError> {
        let encode_err = |reason: String| StoreError::Encode {
            path: path.to_path_buf(),
            reason,
        };

        let bytes: Vec<u8> = raster.pixels().iter().flat_map(|p| p.channels()).collect();
        let img = RgbImage::from_raw(raster.cols() as u32, raster.rows() as u32, bytes)
            .ok_or_else(|| encode_err("pixel buffer does not match dimensions".into()))?;

        let file = File::create(path).map_err(|source| StoreError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        img.write_to(&mut writer, format)
            .map_err(|e| encode_err(e.to_string()))?;
        writer.flush().map_err(|e| encode_err(e.to_string()))
    }
}

impl RasterStore for FileStore {
    fn load(&self, path: &Path) -> Result<Raster, StoreError> {
        log::debug!("loading {}", path.display());
        match RasterFormat::for_path(path) {
            RasterFormat::Ppm => self.load_ppm(path),
            RasterFormat::Encoded(format) => self.load_encoded(path, format),
        }
    }

    fn save(&self, path: &Path, raster: &Raster) -> Result<(), StoreError> {
        log::debug!(
            "saving {}x{} raster to {}",
            raster.rows(),
            raster.cols(),
            path.display()
        );
        if raster.rows() == 0 || raster.cols() == 0 {
            return Err(StoreError::Encode {
                path: path.to_path_buf(),
                reason: format!(
                    "cannot write an empty {}x{} raster",
                    raster.cols(),
                    raster.rows()
                ),
            });
        }
        match RasterFormat::for_path(path) {
            RasterFormat::Ppm => self.save_ppm(path, raster),
            RasterFormat::Encoded(format) => self.save_encoded(path, raster, format),
        }
    }
}
