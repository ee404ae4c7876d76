// src/tools/fs_tools.rs
use std::{fs, path::{Path, PathBuf}};
use crate::error::{Error, Result};
use crate::normalize::MD_MARKER;

/// Collects every non-directory entry below `root`, depth first.
///
/// Symlinks are reported as files and never followed. The order of the
/// returned paths is not meaningful.
pub fn walk(root: &Path) -> Result<Vec<PathBuf>> {
    log::debug!("Walking {}", root.display());
    let mut stack = vec![root.to_path_buf()];
    let mut files = Vec::new();

    while let Some(current) = stack.pop() {
        let read_err = |source| Error::ReadDir { path: current.clone(), source };
        let entries = fs::read_dir(&current).map_err(read_err)?;
        for entry_result in entries {
            let entry = entry_result.map_err(read_err)?;
            let full = entry.path();
            if entry.file_type().map_err(read_err)?.is_dir() {
                stack.push(full);
            } else {
                files.push(full);
            }
        }
    }

    log::debug!("Found {} file(s) under {}", files.len(), root.display());
    Ok(files)
}

/// Returns `target` if it is free, otherwise the first free `<base>-<n>.md`
/// next to it.
pub fn unique_path(target: &Path) -> PathBuf {
    unique_path_with(target, |p| p.exists())
}

/// Like [`unique_path`], with the occupancy test supplied by the caller.
pub fn unique_path_with<F>(target: &Path, is_taken: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    if !is_taken(target) {
        return target.to_path_buf();
    }

    let dir = target.parent().unwrap_or_else(|| Path::new(""));
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = name.strip_suffix(MD_MARKER).unwrap_or(&name);

    let mut counter: u64 = 1;
    loop {
        let candidate = dir.join(format!("{}-{}{}", base, counter, MD_MARKER));
        if !is_taken(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

pub fn rename_file(from: &Path, to: &Path) -> Result<()> {
    log::debug!("Renaming {} -> {}", from.display(), to.display());
    fs::rename(from, to).map_err(|source| Error::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
