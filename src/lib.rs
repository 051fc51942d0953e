//! rectoverlap: overlap detection for labeled axis-aligned rectangles.
//!
//! Given a set of rectangles, each tagged with a unique identifier,
//! rectoverlap finds every sub-rectangle covered by two or more of them and
//! reports, per region, the identifiers of all rectangles covering it. A
//! typical caller is a region or window allocator that wants to detect
//! conflicting claims.
//!
//! # Modules
//!
//! - [`geom`]: Points, rectangles, identifiers, and rectangle-set file I/O
//! - [`detect`]: The overlap detector and its report type
//! - [`error`]: Error types for rectoverlap operations
//!
//! # Example
//!
//! ```
//! use rectoverlap::detect::OverlapDetector;
//! use rectoverlap::geom::{Rect, RectId};
//!
//! let detector: OverlapDetector = [
//!     (RectId(77), Rect::from_corners(2, 2, 2, 3)),
//!     (RectId(99), Rect::from_corners(2, 3, 2, 4)),
//! ]
//! .into_iter()
//! .collect();
//!
//! let overlaps = detector.overlaps();
//! let (region, ids) = overlaps.iter().next().unwrap();
//! assert_eq!(*region, Rect::from_corners(2, 3, 2, 3));
//! assert!(ids.contains(&RectId(77)) && ids.contains(&RectId(99)));
//! ```

pub mod detect;
pub mod error;
pub mod geom;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

pub use detect::{OverlapDetector, OverlapMap, OverlapReport};
pub use error::OverlapError;

/// The rectoverlap CLI application.
#[derive(Parser)]
#[command(name = "rectoverlap")]
#[command(version, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Find regions claimed by two or more rectangles.
    Detect(DetectArgs),
}

/// Arguments for the detect subcommand.
#[derive(clap::Args)]
struct DetectArgs {
    /// Input file with labeled rectangles.
    input: PathBuf,

    /// Input format ('json' or 'csv').
    #[arg(long, default_value = "json")]
    format: String,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,

    /// Exit non-zero if any overlap is found.
    #[arg(long)]
    fail_on_overlap: bool,
}

/// Run the rectoverlap CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), OverlapError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Detect(args)) => run_detect(args),
        None => {
            println!("rectoverlap {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Detects overlapping regions among labeled rectangles.");
            println!();
            println!("Run 'rectoverlap --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the detect subcommand.
fn run_detect(args: DetectArgs) -> Result<(), OverlapError> {
    let rects = match args.format.as_str() {
        "json" => geom::io_json::read_rects_json(&args.input)?,
        "csv" => geom::io_csv::read_rects_csv(&args.input)?,
        other => {
            return Err(OverlapError::UnsupportedFormat(format!(
                "'{}' (supported: json, csv)",
                other
            )));
        }
    };

    // Reject a bad --output before doing any work
    if !matches!(args.output.as_str(), "text" | "json") {
        return Err(OverlapError::UnsupportedFormat(format!(
            "'{}' (supported output: text, json)",
            args.output
        )));
    }

    info!(
        "loaded {} rectangle(s) from {}",
        rects.len(),
        args.input.display()
    );

    let detector = OverlapDetector::<geom::RectId>::try_from(rects)?;
    let report = OverlapReport::from(detector.overlaps());

    match args.output.as_str() {
        "json" => {
            let json = report
                .to_json_string()
                .map_err(|source| OverlapError::JsonWrite { source })?;
            println!("{json}");
        }
        _ => print!("{report}"),
    }

    if args.fail_on_overlap && !report.is_clean() {
        Err(OverlapError::OverlapsFound {
            count: report.overlap_count,
        })
    } else {
        Ok(())
    }
}
