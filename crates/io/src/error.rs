use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LasIoError {
    #[error("failed to open LAS file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: las::Error,
    },

    #[error("failed to read LAS point {index} from {}: {source}", path.display())]
    ReadPoint {
        path: PathBuf,
        index: u64,
        #[source]
        source: las::Error,
    },

    #[error("failed to create LAS file {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: las::Error,
    },

    #[error("failed to write LAS point {index} to {}: {source}", path.display())]
    WritePoint {
        path: PathBuf,
        index: u64,
        #[source]
        source: las::Error,
    },

    #[error("failed to finalize LAS file {}: {source}", path.display())]
    Close {
        path: PathBuf,
        #[source]
        source: las::Error,
    },
}

pub type Result<T> = std::result::Result<T, LasIoError>;
