#![forbid(unsafe_code)]

pub mod crop_mask;

pub use crop_mask::{count_mask, crop_mask, select_by_mask};
