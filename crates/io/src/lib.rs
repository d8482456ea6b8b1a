#![forbid(unsafe_code)]

pub mod error;
pub mod las;

pub use crate::error::{LasIoError, Result};
pub use crate::las::{read_las, write_las, LasCloud};
