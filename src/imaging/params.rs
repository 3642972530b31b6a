//! Parameter types for raster operations.
//!
//! These types describe *what* to do, not *how*. Numeric arguments are
//! validated once, when the value is constructed, so the transforms can take
//! their preconditions for granted.
//!
//! ## Types
//!
//! - [`Strength`]: swirl twist scale. Non-zero by construction.
//! - [`Threshold`]: edge-detection gradient cutoff. Any `i32`.
//! - [`CenterCoord`]: one swirl centre coordinate, either explicit or the raster middle.
//! - [`SwirlParams`]: centre + strength.
//! - [`Operation`]: one of the seven transforms with its parameters.

use std::fmt;
use std::num::NonZeroI32;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("swirl strength must be non-zero")]
    ZeroStrength,
}

/// Swirl twist scale: the rotation angle at distance `d` from the centre is
/// `d / strength` radians. Larger magnitudes twist less; the sign picks the
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strength(NonZeroI32);

impl Strength {
    pub fn new(value: i32) -> Result<Self, ParamError> {
        NonZeroI32::new(value)
            .map(Self)
            .ok_or(ParamError::ZeroStrength)
    }

    pub fn value(self) -> i32 {
        self.0.get()
    }
}

/// Gradient magnitude above which an interior pixel is marked as an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Threshold(pub i32);

impl Threshold {
    pub fn value(self) -> i32 {
        self.0
    }
}

/// One coordinate of the swirl centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterCoord {
    /// Half the raster extent along this axis (integer division).
    Middle,
    /// Used as given, even outside the raster.
    At(i32),
}

impl CenterCoord {
    /// Command-line value meaning "use the middle".
    pub const SENTINEL: i32 = -1;

    /// Map the `-1` sentinel to [`CenterCoord::Middle`]; anything else is explicit.
    pub fn from_arg(value: i32) -> Self {
        if value == Self::SENTINEL {
            Self::Middle
        } else {
            Self::At(value)
        }
    }

    /// Resolve against the raster extent along this axis.
    pub fn resolve(self, extent: usize) -> i64 {
        match self {
            Self::Middle => (extent / 2) as i64,
            Self::At(v) => v as i64,
        }
    }
}

/// Parameters for a swirl: centre column (`cx`), centre row (`cy`), strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwirlParams {
    pub cx: CenterCoord,
    pub cy: CenterCoord,
    pub strength: Strength,
}

impl SwirlParams {
    /// Swirl around the raster middle.
    pub fn centered(strength: Strength) -> Self {
        Self {
            cx: CenterCoord::Middle,
            cy: CenterCoord::Middle,
            strength,
        }
    }
}

/// A single raster transform with its validated parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Grayscale,
    Swap,
    Invert,
    ZoomOut,
    RotateRight,
    Swirl(SwirlParams),
    EdgeDetection(Threshold),
}

impl Operation {
    /// Command names, in usage order.
    pub const NAMES: [&'static str; 7] = [
        "grayscale",
        "swap",
        "invert",
        "zoom-out",
        "rotate-right",
        "swirl",
        "edge-detection",
    ];

    /// The command-line name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Swap => "swap",
            Self::Invert => "invert",
            Self::ZoomOut => "zoom-out",
            Self::RotateRight => "rotate-right",
            Self::Swirl(_) => "swirl",
            Self::EdgeDetection(_) => "edge-detection",
        }
    }

    /// Whether the operation recolours pixels in place (vs. allocating a new raster).
    pub fn is_in_place(&self) -> bool {
        matches!(self, Self::Grayscale | Self::Swap | Self::Invert)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swirl(p) => {
                let coord = |c: CenterCoord| match c {
                    CenterCoord::Middle => "mid".to_string(),
                    CenterCoord::At(v) => v.to_string(),
                };
                write!(
                    f,
                    "swirl cx={} cy={} s={}",
                    coord(p.cx),
                    coord(p.cy),
                    p.strength.value()
                )
            }
            Self::EdgeDetection(t) => write!(f, "edge-detection threshold={}", t.value()),
            other => f.write_str(other.name()),
        }
    }
}
