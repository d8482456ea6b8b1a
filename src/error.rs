use std::path::PathBuf;

use lastrim_core::Axis;
use lastrim_io::LasIoError;
use thiserror::Error;

/// Reasons a truncation run aborts. Every variant maps to exit status 1.
#[derive(Debug, Error)]
pub enum TruncateError {
    #[error("'{}' does not exist", path.display())]
    MissingInput { path: PathBuf },

    #[error("{} must be a finite, non-negative length (got {value})", axis.length_name())]
    InvalidLength { axis: Axis, value: f64 },

    #[error("backup path '{}' already exists; refusing to overwrite it", path.display())]
    BackupExists { path: PathBuf },

    #[error("error renaming '{}' to '{}': {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The original now lives only at `path`.
    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: LasIoError,
    },

    #[error("'{}' contains no points", path.display())]
    EmptyInput { path: PathBuf },

    #[error("error writing '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: LasIoError,
    },
}
