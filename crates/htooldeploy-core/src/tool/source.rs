//! A tool repository resolved from user input.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::DeployConfig;
use crate::error::{DeployError, ResolutionError, Result};
use crate::paths::resolve_payload_root;

use super::version::find_version;

/// A site-structured tool repository.
///
/// `name` is the repo's basename, `payload_root` the absolute convention
/// directory (`<root>/source`) whose children are installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSource {
    root: PathBuf,
    name: String,
    version: Option<String>,
    payload_root: PathBuf,
}

impl ToolSource {
    /// Resolve a repo root into a tool source.
    ///
    /// Fails when no repo is given or the convention directory is missing.
    pub fn resolve(repo_root: Option<&Path>, config: &DeployConfig) -> Result<Self> {
        let repo_root = repo_root.ok_or(ResolutionError::NoRepoSupplied)?;
        let payload_root = resolve_payload_root(Some(repo_root), &config.repo_convention)?;
        let root = std::path::absolute(repo_root).map_err(|e| DeployError::io(repo_root, e))?;
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!("Searching for version string for {name}");
        let version = find_version(&root, config.version_files.as_deref())?.filter(|version| {
            let usable = !version.contains(['/', '\\']);
            if !usable {
                debug!("Ignoring version {version:?}: it would nest the package file");
            }
            usable
        });
        match &version {
            Some(version) => info!("{name} version: {version}"),
            None => debug!("No version for {name} found"),
        }

        Ok(Self {
            root,
            name,
            version,
            payload_root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn payload_root(&self) -> &Path {
        &self.payload_root
    }

    /// File name of this tool's package manifest: `<name>[-<version>].json`.
    pub fn package_file_name(&self) -> String {
        match &self.version {
            Some(version) => format!("{}-{}.json", self.name, version),
            None => format!("{}.json", self.name),
        }
    }
}
