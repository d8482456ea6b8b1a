use std::fs;
use std::path::{Path, PathBuf};

use lastrim_core::{anchored_rect, Axis, Corner, CropRect};
use lastrim_filters::{count_mask, crop_mask};
use lastrim_io::{read_las, write_las, LasCloud};
use tracing::{debug, info, warn};

use crate::backup::backup_path;
use crate::error::TruncateError;

/// Size and anchor of the region to keep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncateRequest {
    pub x_len: f64,
    pub y_len: f64,
    pub corner: Corner,
}

impl TruncateRequest {
    /// Anchored at the lower-right corner `(max_x, min_y)`.
    pub fn new(x_len: f64, y_len: f64) -> Self {
        Self {
            x_len,
            y_len,
            corner: Corner::default(),
        }
    }

    pub fn with_corner(mut self, corner: Corner) -> Self {
        self.corner = corner;
        self
    }

    fn validate(&self) -> Result<(), TruncateError> {
        for (axis, value) in [(Axis::X, self.x_len), (Axis::Y, self.y_len)] {
            if !value.is_finite() || value < 0.0 {
                return Err(TruncateError::InvalidLength { axis, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TruncateOutcome {
    /// `kept` points were written back to the input path.
    Written {
        total: usize,
        kept: usize,
        rect: CropRect,
        backup: PathBuf,
    },
    /// Nothing fell inside `rect`; the input path was left empty.
    NoMatches {
        total: usize,
        rect: CropRect,
        backup: PathBuf,
    },
}

impl TruncateOutcome {
    pub fn backup(&self) -> &Path {
        match self {
            TruncateOutcome::Written { backup, .. } | TruncateOutcome::NoMatches { backup, .. } => {
                backup
            }
        }
    }

    pub fn kept(&self) -> usize {
        match self {
            TruncateOutcome::Written { kept, .. } => *kept,
            TruncateOutcome::NoMatches { .. } => 0,
        }
    }

    pub fn rect(&self) -> &CropRect {
        match self {
            TruncateOutcome::Written { rect, .. } | TruncateOutcome::NoMatches { rect, .. } => rect,
        }
    }
}

/// Moves `input` to its backup path, crops the points to the requested
/// rectangle and writes the survivors back to `input`.
///
/// The rename happens before anything is read, so on any later failure the
/// untouched original is still at [`TruncateOutcome::backup`]'s path. Nothing
/// is rolled back.
pub fn truncate_file(
    input: impl AsRef<Path>,
    request: &TruncateRequest,
) -> Result<TruncateOutcome, TruncateError> {
    let input = input.as_ref();

    if !input.exists() {
        return Err(TruncateError::MissingInput {
            path: input.to_path_buf(),
        });
    }
    request.validate()?;

    let backup = backup_path(input);
    if backup.exists() {
        return Err(TruncateError::BackupExists { path: backup });
    }

    fs::rename(input, &backup).map_err(|source| TruncateError::Rename {
        from: input.to_path_buf(),
        to: backup.clone(),
        source,
    })?;
    info!(from = %input.display(), to = %backup.display(), "moved original aside");

    let cloud = read_las(&backup).map_err(|source| TruncateError::Read {
        path: backup.clone(),
        source,
    })?;
    let Some(bounds) = cloud.bounds() else {
        return Err(TruncateError::EmptyInput { path: backup });
    };
    debug!(
        min_x = bounds.min_x,
        max_x = bounds.max_x,
        min_y = bounds.min_y,
        max_y = bounds.max_y,
        points = cloud.len(),
        "computed bounding box"
    );

    let anchored = anchored_rect(&bounds, request.corner, request.x_len, request.y_len);
    for warning in &anchored.warnings {
        warn!("{warning}");
    }
    let rect = anchored.rect;
    debug!(
        x0 = rect.x0,
        x1 = rect.x1,
        y0 = rect.y0,
        y1 = rect.y1,
        corner = ?request.corner,
        "derived crop rectangle"
    );

    let mask = crop_mask(&cloud.xs(), &cloud.ys(), &rect);
    let kept = count_mask(&mask);
    let total = cloud.len();

    if kept == 0 {
        debug!(total, "no points inside crop rectangle");
        return Ok(TruncateOutcome::NoMatches {
            total,
            rect,
            backup,
        });
    }

    persist(input, &cloud.select_mask(&mask))?;
    debug!(
        kept,
        total,
        path = %input.display(),
        backup = %backup.display(),
        "wrote truncated point cloud"
    );

    Ok(TruncateOutcome::Written {
        total,
        kept,
        rect,
        backup,
    })
}

fn persist(path: &Path, cloud: &LasCloud) -> Result<(), TruncateError> {
    write_las(path, cloud).map_err(|source| TruncateError::Write {
        path: path.to_path_buf(),
        source,
    })
}
