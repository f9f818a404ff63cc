//! Houdini package manifests for develop-mode installs.
//!
//! A manifest is a single JSON object `{"path": "<payload root>"}` that
//! Houdini picks up from `<target>/packages/` to extend `HOUDINI_PATH`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use crate::error::{DeployError, IntegrityError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub path: PathBuf,
}

impl PackageManifest {
    pub fn new(payload_root: impl Into<PathBuf>) -> Self {
        Self {
            path: payload_root.into(),
        }
    }

    /// Render with four-space indentation and a trailing newline.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        buf.push(b'\n');
        // serde_json only emits UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Write `manifest` to `path`, then read it back and compare.
///
/// The comparison is structural over the whole JSON document, so a file
/// that gained or lost keys fails even if `path` still matches.
pub fn write_manifest(path: &Path, manifest: &PackageManifest) -> Result<()> {
    let rendered = manifest.to_json().map_err(|e| DeployError::io(path, e.into()))?;
    fs::write(path, rendered).map_err(|e| DeployError::io(path, e))?;
    verify_manifest(path, manifest)?;
    debug!("JSON readback successful");
    Ok(())
}

/// Check that the manifest on disk is exactly `expected`.
pub fn verify_manifest(path: &Path, expected: &PackageManifest) -> Result<()> {
    let bytes = fs::read(path).map_err(|e| DeployError::io(path, e))?;
    let found: Value =
        serde_json::from_slice(&bytes).map_err(|source| IntegrityError::ManifestUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
    let expected_value =
        serde_json::to_value(expected).map_err(|e| DeployError::io(path, e.into()))?;

    if found != expected_value {
        return Err(IntegrityError::ManifestMismatch {
            path: path.to_path_buf(),
            expected: expected_value.to_string(),
            found: found.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Read a manifest from disk.
pub fn read_manifest(path: &Path) -> Result<PackageManifest> {
    let bytes = fs::read(path).map_err(|e| DeployError::io(path, e))?;
    serde_json::from_slice(&bytes).map_err(|source| {
        IntegrityError::ManifestUnreadable {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn renders_four_space_indent() {
        let manifest = PackageManifest::new("/tools/my_tool/source");
        let json = manifest.to_json().unwrap();
        assert_eq!(json, "{\n    \"path\": \"/tools/my_tool/source\"\n}\n");
    }

    #[test]
    fn write_then_read_is_equal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("my_tool.json");
        let manifest = PackageManifest::new(temp.path().join("repo/source"));

        write_manifest(&path, &manifest).unwrap();

        assert_eq!(read_manifest(&path).unwrap(), manifest);
    }

    #[test]
    fn extra_keys_fail_verification() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("my_tool.json");
        let manifest = PackageManifest::new("/tools/my_tool/source");
        fs::write(
            &path,
            r#"{"path": "/tools/my_tool/source", "enable": false}"#,
        )
        .unwrap();

        let err = verify_manifest(&path, &manifest).unwrap_err();
        assert!(matches!(
            err,
            DeployError::Integrity(IntegrityError::ManifestMismatch { .. })
        ));
    }

    #[test]
    fn garbage_fails_verification() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("my_tool.json");
        fs::write(&path, "path = '/tools'").unwrap();

        let err = verify_manifest(&path, &PackageManifest::new("/tools")).unwrap_err();
        assert!(matches!(
            err,
            DeployError::Integrity(IntegrityError::ManifestUnreadable { .. })
        ));
    }
}
