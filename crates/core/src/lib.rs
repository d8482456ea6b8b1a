#![forbid(unsafe_code)]

pub mod bbox;
pub mod crop;

pub use bbox::Aabb2;
pub use crop::{anchored_rect, AnchoredRect, Axis, ClampWarning, Corner, CropRect};
