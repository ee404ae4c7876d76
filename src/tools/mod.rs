// src/tools/mod.rs
pub mod fs_tools;

use std::path::Path;

/// Splits a path into its directory and UTF-8 file name.
///
/// Returns `None` when the path has no file name or the name is not valid
/// UTF-8; such entries are never renamed.
pub(crate) fn split_name(path: &Path) -> Option<(&Path, &str)> {
    let name = path.file_name()?.to_str()?;
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    Some((dir, name))
}
