//! Crop a LAS/LAZ point cloud to a rectangle anchored at a corner of its
//! bounding box, keeping the original next to it as `<stem>_original<suffix>`.

#![forbid(unsafe_code)]

pub mod backup;
pub mod error;
pub mod truncate;

pub use backup::backup_path;
pub use error::TruncateError;
pub use lastrim_core::{Axis, Corner, CropRect};
pub use truncate::{truncate_file, TruncateOutcome, TruncateRequest};
