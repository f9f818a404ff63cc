//! Non-destructive recursive copy.
//!
//! Files from the source overwrite files of the same name in the
//! destination; anything only present in the destination is left alone.

use std::fs;
use std::path::Path;

use crate::error::{DeployError, Result};

/// Merge-copy `src` into `dst`, creating `dst` and subdirectories as needed.
///
/// Returns the number of files copied. Symlinks are followed.
pub fn merge_tree(src: &Path, dst: &Path) -> Result<usize> {
    fs::create_dir_all(dst).map_err(|e| DeployError::io(dst, e))?;

    let mut copied = 0;
    for entry in fs::read_dir(src).map_err(|e| DeployError::io(src, e))? {
        let entry = entry.map_err(|e| DeployError::io(src, e))?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        let meta = fs::metadata(&from).map_err(|e| DeployError::io(&from, e))?;

        if meta.is_dir() {
            copied += merge_tree(&from, &to)?;
        } else if meta.is_file() {
            fs::copy(&from, &to).map_err(|e| DeployError::io(&to, e))?;
            copied += 1;
        } else {
            return Err(DeployError::io(
                &from,
                std::io::Error::other("unsupported filesystem entry type"),
            ));
        }
    }
    Ok(copied)
}

/// Names of the immediate subdirectories of `dir`, sorted.
pub fn list_dir_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| DeployError::io(dir, e))? {
        let entry = entry.map_err(|e| DeployError::io(dir, e))?;
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}
