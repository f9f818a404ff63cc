//! What an install did, or would do under dry-run.

use std::path::PathBuf;

use crate::fs::InstallMode;

use super::manifest::PackageManifest;

/// A single filesystem step of an install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedAction {
    CreateDir(PathBuf),
    CopyTree { from: PathBuf, to: PathBuf },
    WriteManifest { path: PathBuf, manifest: PackageManifest },
    RemoveSource(PathBuf),
}

impl std::fmt::Display for PlannedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlannedAction::CreateDir(path) => write!(f, "Create {}", path.display()),
            PlannedAction::CopyTree { from, to } => {
                write!(f, "Copy {} to {}", from.display(), to.display())
            }
            PlannedAction::WriteManifest { path, manifest } => write!(
                f,
                "Write package {} -> {}",
                path.display(),
                manifest.path.display()
            ),
            PlannedAction::RemoveSource(path) => write!(f, "Remove {}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InstallReport {
    pub tool: String,
    pub mode: InstallMode,
    pub target: PathBuf,
    pub dry_run: bool,
    /// Steps in execution order. Under dry-run none of them were performed.
    pub actions: Vec<PlannedAction>,
    /// Non-fatal problems, such as a failed cleanup.
    pub warnings: Vec<String>,
    /// Manifest written in link mode.
    pub manifest: Option<PathBuf>,
}

impl InstallReport {
    pub(crate) fn new(tool: &str, mode: InstallMode, target: PathBuf, dry_run: bool) -> Self {
        Self {
            tool: tool.to_string(),
            mode,
            target,
            dry_run,
            actions: Vec::new(),
            warnings: Vec::new(),
            manifest: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum InstallOutcome {
    Completed(InstallReport),
    /// The user declined to overwrite an existing package.
    Declined,
}

impl InstallOutcome {
    pub fn report(&self) -> Option<&InstallReport> {
        match self {
            InstallOutcome::Completed(report) => Some(report),
            InstallOutcome::Declined => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, InstallOutcome::Completed(_))
    }
}
