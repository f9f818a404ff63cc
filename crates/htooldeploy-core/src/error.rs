//! Error taxonomy for resolution, installation and scaffolding.
//!
//! Resolution and precondition errors are raised before anything on disk is
//! touched. An [`IntegrityError`] means a manifest was written but did not
//! read back as expected, so the target may hold a bad package file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to work out where things live.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("No tool repo supplied")]
    NoRepoSupplied,

    #[error("No {convention}/ directory found in tool {tool}")]
    ConventionDirMissing { tool: String, convention: String },

    #[error("{} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("No Houdini version directories found in {}", .0.display())]
    NoVersionsFound(PathBuf),

    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// The request is well formed but the filesystem does not allow it.
#[derive(Debug, Error)]
pub enum PreconditionError {
    #[error("{tool} is uninstallable: no site directories exist in {}", .payload.display())]
    NotInstallable { tool: String, payload: PathBuf },

    #[error(
        "Missing the following site directories in installation target: {}. Try running again with --force",
        format_dirs(.0)
    )]
    MissingTargetDirectories(Vec<String>),

    #[error(
        "Missing packages directory {} in installation target. Try running again with --force",
        .0.display()
    )]
    MissingPackagesDir(PathBuf),

    #[error("Develop mode cannot be combined with cleanup")]
    ConflictingModes,
}

/// A written manifest did not survive the read-back check.
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("Package {} reads back as {found}, expected {expected}", .path.display())]
    ManifestMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },

    #[error("Package {} could not be read back: {source}", .path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum DeployError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Integrity(#[from] IntegrityError),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DeployError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DeployError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("{} already exists", .0.display())]
    AlreadyExists(PathBuf),

    #[error("'{0}' does not contain any usable name characters")]
    InvalidName(String),

    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to initialise git repository: {0}")]
    Git(#[from] git2::Error),
}

impl TemplateError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TemplateError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = DeployError> = std::result::Result<T, E>;

fn format_dirs(dirs: &[String]) -> String {
    dirs.iter()
        .map(|d| format!("{d}/"))
        .collect::<Vec<_>>()
        .join(", ")
}
