//! Binary PPM (`P6`) on top of the `image` crate's PNM codec.
//!
//! The `image` decoder accepts every PNM flavour and rescales odd maxvals;
//! this adapter narrows it to 8-bit binary pixmaps and applies
//! [`DecodeLimits`] to the header before any pixel buffer is allocated.
//! Rasters with a zero dimension are refused in both directions.

use crate::raster::{Pixel, Raster};
use image::codecs::pnm::{PnmDecoder, PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ExtendedColorType, ImageDecoder, ImageEncoder, ImageError};
use std::io::{self, BufRead, Read, Write};
use thiserror::Error;

const SUBTYPE: PnmSubtype = PnmSubtype::Pixmap(SampleEncoding::Binary);
const MAXVAL: u32 = 255;

#[derive(Error, Debug)]
pub enum PpmError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Image(#[from] ImageError),
    #[error("not a binary PPM (P6): found {0:?}")]
    NotBinaryPixmap(PnmSubtype),
    #[error("unsupported maxval {0}, only 255 is supported")]
    UnsupportedMaxval(u32),
    #[error("{cols}x{rows} raster exceeds the {max_pixels} pixel limit")]
    TooLarge {
        rows: usize,
        cols: usize,
        max_pixels: u64,
    },
    #[error("{cols}x{rows} raster has no pixels")]
    Empty { rows: usize, cols: usize },
    #[error("cannot encode a raster without a valid pixel buffer")]
    InvalidRaster,
}

/// Caps applied while decoding, before any pixel memory is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    pub max_pixels: u64,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_pixels: 1 << 28,
        }
    }
}

/// Decode a `P6` raster.
pub fn read_ppm<R: BufRead>(mut reader: R, limits: &DecodeLimits) -> Result<Raster, PpmError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    // Header pass: `into_inner` is the only way to reach maxval.
    let (_, header) = PnmDecoder::new(bytes.as_slice())?.into_inner();
    if header.subtype() != SUBTYPE {
        return Err(PpmError::NotBinaryPixmap(header.subtype()));
    }
    if header.maximal_sample() != MAXVAL {
        return Err(PpmError::UnsupportedMaxval(header.maximal_sample()));
    }
    let (rows, cols) = (header.height() as usize, header.width() as usize);
    if rows == 0 || cols == 0 {
        return Err(PpmError::Empty { rows, cols });
    }
    if (rows as u64) * (cols as u64) > limits.max_pixels {
        return Err(PpmError::TooLarge {
            rows,
            cols,
            max_pixels: limits.max_pixels,
        });
    }

    let decoder = PnmDecoder::new(bytes.as_slice())?;
    let mut data = vec![0u8; decoder.total_bytes() as usize];
    decoder.read_image(&mut data)?;

    let pixels = data
        .chunks_exact(3)
        .map(|rgb| Pixel::new(rgb[0], rgb[1], rgb[2]))
        .collect();
    Raster::from_pixels(rows, cols, pixels).map_err(|_| PpmError::InvalidRaster)
}

/// Encode `raster` as `P6`.
pub fn write_ppm<W: Write>(mut writer: W, raster: &Raster) -> Result<(), PpmError> {
    if !raster.is_valid() {
        return Err(PpmError::InvalidRaster);
    }
    let (rows, cols) = raster.dimensions();
    if rows == 0 || cols == 0 {
        return Err(PpmError::Empty { rows, cols });
    }

    let body: Vec<u8> = raster.pixels().iter().flat_map(|p| p.channels()).collect();
    PnmEncoder::new(&mut writer).with_subtype(SUBTYPE).write_image(
        &body,
        cols as u32,
        rows as u32,
        ExtendedColorType::Rgb8,
    )?;
    writer.flush()?;
    Ok(())
}
