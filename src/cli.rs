//! Command-line dispatch: operation parsing and exit codes.
//!
//! The binary takes `<input> <output> <command> [args...]`. This module turns
//! the command name and its raw arguments into a validated [`Operation`] and
//! maps every failure to a stable process exit code.
//!
//! | Code | Meaning |
//! |---|---|
//! | 0 | success |
//! | 1 | missing input/output filename |
//! | 2 | input or output file could not be opened |
//! | 3 | input is not a valid raster file |
//! | 4 | no operation, or unknown operation |
//! | 5 | wrong number of operation arguments |
//! | 6 | operation argument not an integer, or out of range |
//! | 7 | writing the output failed |
//! | 8 | anything else |

use crate::config::ConfigError;
use crate::imaging::{
    CenterCoord, Operation, ParamError, StoreError, Strength, SwirlParams, Threshold,
};
use crate::process::ProcessError;
use thiserror::Error;

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    MissingFilename = 1,
    OpenFailed = 2,
    InvalidRaster = 3,
    InvalidOperation = 4,
    InvalidOpArgs = 5,
    OpArgsRange = 6,
    WriteFailed = 7,
    Unspecified = 8,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Missing input/output filenames")]
    MissingFilename,
    #[error("No operation specified")]
    MissingOperation,
    #[error("No valid operation specified: {0:?}")]
    UnknownOperation(String),
    #[error("Invalid number of arguments: {operation} takes {expected}, got {actual}")]
    WrongArgCount {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Invalid type of one or more arguments: {operation} got {value:?}, expected an integer")]
    NotAnInteger {
        operation: &'static str,
        value: String,
    },
    #[error("{operation}: {source}")]
    OutOfRange {
        operation: &'static str,
        source: ParamError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

impl CliError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Self::MissingFilename => ExitStatus::MissingFilename,
            Self::MissingOperation | Self::UnknownOperation(_) => ExitStatus::InvalidOperation,
            Self::WrongArgCount { .. } => ExitStatus::InvalidOpArgs,
            Self::NotAnInteger { .. } | Self::OutOfRange { .. } => ExitStatus::OpArgsRange,
            Self::Config(_) => ExitStatus::Unspecified,
            Self::Process(err) => match err {
                ProcessError::Load(StoreError::Open { .. }) => ExitStatus::OpenFailed,
                ProcessError::Load(StoreError::Decode { .. }) => ExitStatus::InvalidRaster,
                ProcessError::Save(StoreError::Open { .. } | StoreError::Create { .. }) => {
                    ExitStatus::OpenFailed
                }
                ProcessError::Save(_) => ExitStatus::WriteFailed,
                ProcessError::Load(_) | ProcessError::Transform(_) => ExitStatus::Unspecified,
            },
        }
    }

    /// Whether the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self.exit_status(),
            ExitStatus::MissingFilename
                | ExitStatus::InvalidOperation
                | ExitStatus::InvalidOpArgs
                | ExitStatus::OpArgsRange
        )
    }
}

/// Build an [`Operation`] from its command name and raw arguments.
pub fn parse_operation(name: &str, args: &[String]) -> Result<Operation, CliError> {
    let operation = match name {
        "grayscale" => Operation::Grayscale,
        "swap" => Operation::Swap,
        "invert" => Operation::Invert,
        "zoom-out" => Operation::ZoomOut,
        "rotate-right" => Operation::RotateRight,
        "swirl" => {
            let [cx, cy, s] = integer_args::<3>("swirl", args)?;
            let strength = Strength::new(s).map_err(|source| CliError::OutOfRange {
                operation: "swirl",
                source,
            })?;
            return Ok(Operation::Swirl(SwirlParams {
                cx: CenterCoord::from_arg(cx),
                cy: CenterCoord::from_arg(cy),
                strength,
            }));
        }
        "edge-detection" => {
            let [threshold] = integer_args::<1>("edge-detection", args)?;
            return Ok(Operation::EdgeDetection(Threshold(threshold)));
        }
        other => return Err(CliError::UnknownOperation(other.to_string())),
    };
    integer_args::<0>(operation.name(), args)?;
    Ok(operation)
}

/// Parse exactly `N` arguments as `i32`.
fn integer_args<const N: usize>(
    operation: &'static str,
    args: &[String],
) -> Result<[i32; N], CliError> {
    if args.len() != N {
        return Err(CliError::WrongArgCount {
            operation,
            expected: N,
            actual: args.len(),
        });
    }
    let mut values = [0i32; N];
    for (slot, raw) in values.iter_mut().zip(args) {
        *slot = raw.trim().parse().map_err(|_| CliError::NotAnInteger {
            operation,
            value: raw.clone(),
        })?;
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::TransformError;
    use std::path::PathBuf;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_parameterless_operations() {
        for (name, expected) in [
            ("grayscale", Operation::Grayscale),
            ("swap", Operation::Swap),
            ("invert", Operation::Invert),
            ("zoom-out", Operation::ZoomOut),
            ("rotate-right", Operation::RotateRight),
        ] {
            assert_eq!(parse_operation(name, &[]).unwrap(), expected);
        }
    }

    #[test]
    fn parses_swirl_with_sentinel_center() {
        let op = parse_operation("swirl", &args(&["-1", "12", "-40"])).unwrap();
        assert_eq!(
            op,
            Operation::Swirl(SwirlParams {
                cx: CenterCoord::Middle,
                cy: CenterCoord::At(12),
                strength: Strength::new(-40).unwrap(),
            })
        );
    }

    #[test]
    fn parses_edge_detection_threshold() {
        let op = parse_operation("edge-detection", &args(&["30"])).unwrap();
        assert_eq!(op, Operation::EdgeDetection(Threshold(30)));
    }

    #[test]
    fn unknown_operation_is_code_4() {
        let err = parse_operation("blur", &[]).unwrap_err();
        assert!(matches!(&err, CliError::UnknownOperation(n) if n == "blur"));
        assert_eq!(err.exit_status().code(), 4);
        assert!(err.shows_usage());
    }

    #[test]
    fn wrong_arg_count_is_code_5() {
        for (name, values) in [
            ("swirl", vec!["1", "2"]),
            ("edge-detection", vec![]),
            ("edge-detection", vec!["1", "2"]),
            ("invert", vec!["1"]),
        ] {
            let err = parse_operation(name, &args(&values)).unwrap_err();
            assert_eq!(err.exit_status(), ExitStatus::InvalidOpArgs, "{name} {values:?}");
        }
    }

    #[test]
    fn non_integer_is_code_6() {
        for values in [["a", "1", "1"], ["1", "2.5", "1"], ["1", "1", "12abc"]] {
            let err = parse_operation("swirl", &args(&values)).unwrap_err();
            assert!(matches!(err, CliError::NotAnInteger { .. }));
            assert_eq!(err.exit_status(), ExitStatus::OpArgsRange);
        }
    }

    #[test]
    fn zero_strength_is_code_6() {
        let err = parse_operation("swirl", &args(&["-1", "-1", "0"])).unwrap_err();
        assert!(matches!(
            err,
            CliError::OutOfRange {
                source: ParamError::ZeroStrength,
                ..
            }
        ));
        assert_eq!(err.exit_status().code(), 6);
    }

    #[test]
    fn process_errors_map_to_codes() {
        let io = || std::io::Error::new(std::io::ErrorKind::NotFound, "nope");
        let path = PathBuf::from("x.ppm");
        let cases = [
            (
                ProcessError::Load(StoreError::Open {
                    path: path.clone(),
                    source: io(),
                }),
                2,
            ),
            (
                ProcessError::Load(StoreError::Decode {
                    path: path.clone(),
                    reason: "bad".into(),
                }),
                3,
            ),
            (
                ProcessError::Save(StoreError::Create {
                    path: path.clone(),
                    source: io(),
                }),
                2,
            ),
            (
                ProcessError::Save(StoreError::Encode {
                    path: path.clone(),
                    reason: "disk full".into(),
                }),
                7,
            ),
            (
                ProcessError::Transform(TransformError::InvalidRaster {
                    operation: "swap",
                    rows: 1,
                    cols: 1,
                    len: 0,
                }),
                8,
            ),
        ];
        for (err, code) in cases {
            let err = CliError::from(err);
            assert_eq!(err.exit_status().code(), code, "{err}");
            assert!(!err.shows_usage());
        }
    }

    #[test]
    fn missing_filename_shows_usage() {
        assert_eq!(CliError::MissingFilename.exit_status().code(), 1);
        assert!(CliError::MissingFilename.shows_usage());
        assert_eq!(CliError::MissingOperation.exit_status().code(), 4);
    }
}
