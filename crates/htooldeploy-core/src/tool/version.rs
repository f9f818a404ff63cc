//! Version sniffing from `__version__ = "X"` assignments.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{DeployError, Result};

static VERSION_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^__version__\s*=\s*["']([^"']+)["']"#).expect("static pattern")
});

/// Extract the version from a single line, if it is a version assignment.
pub fn parse_version_line(line: &str) -> Option<&str> {
    VERSION_ASSIGNMENT
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Scan root-level files of `root` for a version assignment.
///
/// With `only` set, just those file names are considered; otherwise every
/// regular file directly under `root`. Files are visited in name order and
/// the first match wins. Files that are not UTF-8 text are skipped.
pub fn find_version(root: &Path, only: Option<&[String]>) -> Result<Option<String>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| DeployError::io(root, e))? {
        let entry = entry.map_err(|e| DeployError::io(root, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if let Some(only) = only
            && !only.iter().any(|allowed| *allowed == name)
        {
            continue;
        }
        candidates.push((name, path));
    }
    candidates.sort();

    for (_, path) in candidates {
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                debug!("Skipping {} while searching for version: {err}", path.display());
                continue;
            }
        };
        if let Some(version) = content.lines().find_map(parse_version_line) {
            debug!("Version found in {}", path.display());
            return Ok(Some(version.to_string()));
        }
    }

    Ok(None)
}
