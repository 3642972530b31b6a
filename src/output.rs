//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Usage
//!
//! ```text
//! USAGE: rastershop [--config <file>] <input-image> <output-image> <command-name> <command-args>
//! SUPPORTED COMMANDS:
//!    grayscale
//!    swap
//!    ...
//!    edge-detection <threshold>
//! ```
//!
//! ## Run report
//!
//! ```text
//! swirl cx=mid cy=mid s=40
//!     Source: photo.ppm (640x480)
//!     Output: out.ppm (640x480)
//! ```
//!
//! Dimensions are shown as `width x height`.
//!
//! # Architecture
//!
//! Each display has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.

use crate::imaging::supported_extensions;
use crate::process::ProcessReport;
use std::path::Path;

/// Every command with its argument synopsis, in usage order.
const COMMANDS: &[(&str, &str)] = &[
    ("grayscale", ""),
    ("swap", ""),
    ("invert", ""),
    ("zoom-out", ""),
    ("rotate-right", ""),
    ("swirl", "<cx> <cy> <strength>"),
    ("edge-detection", "<threshold>"),
];

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_line(label: &str, path: &Path, (rows, cols): (usize, usize)) -> String {
    format!("{}{label}: {} ({cols}x{rows})", indent(1), path.display())
}

// ============================================================================
// Usage
// ============================================================================

pub fn format_usage() -> Vec<String> {
    let mut lines = vec![
        "USAGE: rastershop [--config <file>] <input-image> <output-image> <command-name> <command-args>"
            .to_string(),
        "SUPPORTED COMMANDS:".to_string(),
    ];
    for (name, args) in COMMANDS {
        if args.is_empty() {
            lines.push(format!("   {name}"));
        } else {
            lines.push(format!("   {name} {args}"));
        }
    }
    lines.push(format!(
        "FORMATS (by extension): {}",
        supported_extensions().join(", ")
    ));
    lines.push("Pass -1 as <cx> or <cy> to swirl around the image centre.".to_string());
    lines
}

pub fn print_usage() {
    for line in format_usage() {
        println!("{}", line);
    }
}

// ============================================================================
// Run report
// ============================================================================

pub fn format_report(report: &ProcessReport) -> Vec<String> {
    vec![
        report.operation.to_string(),
        file_line("Source", &report.input, report.input_dims),
        file_line("Output", &report.output, report.output_dims),
    ]
}

pub fn print_report(report: &ProcessReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{Operation, Strength, SwirlParams, Threshold};
    use std::path::PathBuf;

    #[test]
    fn usage_lists_every_operation() {
        let usage = format_usage();
        for name in Operation::NAMES {
            assert!(
                usage.iter().any(|l| l.trim_start().starts_with(name)),
                "{name} missing from usage"
            );
        }
    }

    #[test]
    fn usage_shows_argument_synopsis() {
        let usage = format_usage();
        assert!(usage[0].starts_with("USAGE: rastershop"));
        assert!(usage.contains(&"   swirl <cx> <cy> <strength>".to_string()));
        assert!(usage.contains(&"   edge-detection <threshold>".to_string()));
        assert!(usage.contains(&"   invert".to_string()));
    }

    #[test]
    fn usage_lists_formats() {
        let usage = format_usage();
        let formats = usage.iter().find(|l| l.starts_with("FORMATS")).unwrap();
        assert!(formats.contains("ppm"));
        assert!(formats.contains("png"));
    }

    #[test]
    fn report_shows_operation_and_files() {
        let report = ProcessReport {
            operation: Operation::ZoomOut,
            input: PathBuf::from("in.ppm"),
            output: PathBuf::from("out.ppm"),
            input_dims: (480, 640),
            output_dims: (240, 320),
        };
        assert_eq!(
            format_report(&report),
            vec![
                "zoom-out",
                "    Source: in.ppm (640x480)",
                "    Output: out.ppm (320x240)",
            ]
        );
    }

    #[test]
    fn report_header_includes_parameters() {
        let swirl = ProcessReport {
            operation: Operation::Swirl(SwirlParams::centered(Strength::new(40).unwrap())),
            input: PathBuf::from("a.ppm"),
            output: PathBuf::from("b.ppm"),
            input_dims: (2, 2),
            output_dims: (2, 2),
        };
        assert_eq!(format_report(&swirl)[0], "swirl cx=mid cy=mid s=40");

        let edges = ProcessReport {
            operation: Operation::EdgeDetection(Threshold(30)),
            ..swirl
        };
        assert_eq!(format_report(&edges)[0], "edge-detection threshold=30");
    }
}
