//! Path inference from partial user input.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::DeployConfig;
use crate::error::{DeployError, ResolutionError, Result};
use crate::types::HoudiniVersion;

use super::HostEnvironment;

/// Locate the payload directory of a tool repo.
///
/// The repo is expected to hold its site directories under `convention`
/// (typically `source/`). The returned path is absolute.
pub fn resolve_payload_root(repo_root: Option<&Path>, convention: &str) -> Result<PathBuf> {
    let repo_root = repo_root.ok_or(ResolutionError::NoRepoSupplied)?;
    let payload = repo_root.join(convention);
    if !payload.is_dir() {
        return Err(ResolutionError::ConventionDirMissing {
            tool: tool_name_of(repo_root),
            convention: convention.to_string(),
        }
        .into());
    }
    absolute(&payload)
}

/// Pick the directory to install into.
///
/// An explicit path wins; otherwise `user_pref_dir` is consulted, and only
/// then. In develop mode the packages subdirectory is appended.
pub fn resolve_install_target<F>(
    explicit: Option<&Path>,
    develop: bool,
    packages_dir: &str,
    user_pref_dir: F,
) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let base = match explicit {
        Some(path) => absolute(path)?,
        None => absolute(&user_pref_dir()?)?,
    };
    if develop {
        Ok(base.join(packages_dir))
    } else {
        Ok(base)
    }
}

/// Find the user's Houdini preference directory.
///
/// With an override that contains `token`, the token is replaced by the
/// version (explicit, else the latest found). An override without the token
/// is taken as is. Without an override, `<home>/<prefix><version>` is used.
/// The result must exist; a missing directory means Houdini itself is not
/// set up for this user, so there is no further fallback.
pub fn resolve_user_pref_dir<F>(
    env_override: Option<&str>,
    version_override: Option<HoudiniVersion>,
    token: &str,
    home_dir: Option<&Path>,
    prefix: &str,
    latest_version: F,
) -> Result<PathBuf>
where
    F: FnOnce() -> Result<HoudiniVersion>,
{
    let resolve_version = || -> Result<HoudiniVersion> {
        match version_override {
            Some(version) => Ok(version),
            None => latest_version(),
        }
    };

    let user_prefs = match env_override {
        Some(value) if value.contains(token) => {
            let version = resolve_version()?;
            debug!("Searching Houdini version: {version}");
            PathBuf::from(value.replace(token, &version.to_string()))
        }
        Some(value) => PathBuf::from(value),
        None => {
            let home = home_dir.ok_or(ResolutionError::NoHomeDir)?;
            let version = resolve_version()?;
            debug!("Searching Houdini version: {version}");
            home.join(format!("{prefix}{version}"))
        }
    };

    if !user_prefs.is_dir() {
        return Err(ResolutionError::DirectoryNotFound(user_prefs).into());
    }

    debug!("User Preferences directory: {}", user_prefs.display());
    Ok(user_prefs)
}

/// Highest `<prefix>MAJOR.MINOR` directory directly under `home_dir`.
pub fn discover_latest_version(home_dir: &Path, prefix: &str) -> Result<HoudiniVersion> {
    let entries = fs::read_dir(home_dir).map_err(|e| DeployError::io(home_dir, e))?;

    let mut latest: Option<HoudiniVersion> = None;
    for entry in entries {
        let entry = entry.map_err(|e| DeployError::io(home_dir, e))?;
        let name = entry.file_name();
        let Some(version) = name.to_str().and_then(|n| parse_version_dir(n, prefix)) else {
            continue;
        };
        if !entry.path().is_dir() {
            continue;
        }
        if latest.is_none_or(|current| version > current) {
            latest = Some(version);
        }
    }

    latest.ok_or_else(|| ResolutionError::NoVersionsFound(home_dir.to_path_buf()).into())
}

fn parse_version_dir(name: &str, prefix: &str) -> Option<HoudiniVersion> {
    let rest = name.strip_prefix(prefix)?;
    let (major, minor) = rest.split_once('.')?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(major) || !all_digits(minor) {
        return None;
    }
    Some(HoudiniVersion::new(major.parse().ok()?, minor.parse().ok()?))
}

fn tool_name_of(repo_root: &Path) -> String {
    repo_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| repo_root.display().to_string())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| DeployError::io(path, e))
}

/// Resolution bound to one configuration and environment snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PathResolver<'a> {
    config: &'a DeployConfig,
    env: &'a HostEnvironment,
}

impl<'a> PathResolver<'a> {
    pub fn new(config: &'a DeployConfig, env: &'a HostEnvironment) -> Self {
        Self { config, env }
    }

    pub fn payload_root(&self, repo_root: Option<&Path>) -> Result<PathBuf> {
        resolve_payload_root(repo_root, &self.config.repo_convention)
    }

    pub fn install_target(
        &self,
        explicit: Option<&Path>,
        develop: bool,
        version_override: Option<HoudiniVersion>,
    ) -> Result<PathBuf> {
        resolve_install_target(explicit, develop, &self.config.packages_dir, || {
            self.user_pref_dir(version_override)
        })
    }

    pub fn user_pref_dir(&self, version_override: Option<HoudiniVersion>) -> Result<PathBuf> {
        resolve_user_pref_dir(
            self.env.pref_dir_override(),
            version_override,
            &self.config.version_token,
            self.env.home_dir(),
            &self.config.pref_dir_prefix,
            || self.latest_version(),
        )
    }

    pub fn latest_version(&self) -> Result<HoudiniVersion> {
        let home = self.env.home_dir().ok_or(ResolutionError::NoHomeDir)?;
        discover_latest_version(home, &self.config.pref_dir_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_dir_names() {
        assert_eq!(
            parse_version_dir("houdini19.5", "houdini"),
            Some(HoudiniVersion::new(19, 5))
        );
        assert_eq!(
            parse_version_dir("houdini20.10", "houdini"),
            Some(HoudiniVersion::new(20, 10))
        );
        assert_eq!(parse_version_dir("houdini19", "houdini"), None);
        assert_eq!(parse_version_dir("houdini19.5.1", "houdini"), None);
        assert_eq!(parse_version_dir("houdini+19.5", "houdini"), None);
        assert_eq!(parse_version_dir("maya2024.1", "houdini"), None);
    }

    #[test]
    fn tool_name_is_repo_basename() {
        assert_eq!(tool_name_of(Path::new("/tools/my_tool")), "my_tool");
    }
}
