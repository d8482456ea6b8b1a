//! `lastrim` command-line entry point.
//!
//! Truncates a LAS/LAZ file to a box of given X and Y size from a corner of
//! its bounding box. The original is renamed to `<stem>_original<suffix>` and
//! the result is written under the original name.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Result};
use clap::{Parser, ValueEnum};
use lastrim::{truncate_file, Corner, TruncateOutcome, TruncateRequest};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lastrim", version)]
#[command(
    about = "Truncate a LAS/LAZ file to a box of given X and Y size anchored at a corner of its bounding box"
)]
struct Args {
    /// Input LAS/LAZ file path
    input: PathBuf,

    /// Box width in meters (X direction)
    #[arg(long = "x_len", visible_alias = "x-len", allow_negative_numbers = true)]
    x_len: f64,

    /// Box height in meters (Y direction)
    #[arg(long = "y_len", visible_alias = "y-len", allow_negative_numbers = true)]
    y_len: f64,

    /// Bounding-box corner the box grows from
    #[arg(long, value_enum, default_value_t = CornerArg::LowerRight)]
    corner: CornerArg,

    /// Log level, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CornerArg {
    LowerLeft,
    LowerRight,
    UpperLeft,
    UpperRight,
}

impl From<CornerArg> for Corner {
    fn from(arg: CornerArg) -> Self {
        match arg {
            CornerArg::LowerLeft => Corner::LowerLeft,
            CornerArg::LowerRight => Corner::LowerRight,
            CornerArg::UpperLeft => Corner::UpperLeft,
            CornerArg::UpperRight => Corner::UpperRight,
        }
    }
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_tracing(&args.log_level) {
        eprintln!("Error: failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    run(&args)
}

/// Runs one truncation and maps its result to the process exit status.
fn run(args: &Args) -> ExitCode {
    let request = TruncateRequest::new(args.x_len, args.y_len).with_corner(args.corner.into());

    match truncate_file(&args.input, &request) {
        Ok(TruncateOutcome::Written { kept, backup, .. }) => {
            info!(
                "Wrote {} points to '{}' (original moved to '{}')",
                kept,
                args.input.display(),
                backup.display()
            );
            ExitCode::SUCCESS
        }
        Ok(TruncateOutcome::NoMatches { .. }) => {
            info!("No points found in the specified box; no output written.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
