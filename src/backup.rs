use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Sibling path the original file is moved to: `<stem>_original<suffix>`.
///
/// Only the last extension counts as the suffix, so `tile.v2.laz` becomes
/// `tile.v2_original.laz`.
pub fn backup_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push("_original");
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
