//! Install orchestration: resolve, check, then copy or link.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::DeployConfig;
use crate::error::{DeployError, PreconditionError, Result};
use crate::fs::{InstallMode, list_dir_names, merge_tree};
use crate::paths::{HostEnvironment, PathResolver};
use crate::tool::ToolSource;
use crate::types::HoudiniVersion;

use super::confirm::OverwritePrompt;
use super::manifest::{PackageManifest, write_manifest};
use super::report::{InstallOutcome, InstallReport, PlannedAction};

/// Flags controlling how a resolved tool is installed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    pub mode: InstallMode,
    /// Create missing target directories and overwrite packages without asking
    pub force: bool,
    /// Remove the tool repo after a successful copy
    pub cleanup: bool,
    /// Report actions without touching the filesystem
    pub dry_run: bool,
}

impl InstallOptions {
    /// Reject combinations that cannot be honoured together.
    pub fn validate(&self) -> Result<()> {
        if self.mode == InstallMode::Link && self.cleanup {
            return Err(PreconditionError::ConflictingModes.into());
        }
        Ok(())
    }
}

/// Raw user input for an install, before any path is resolved.
#[derive(Debug, Clone, Default)]
pub struct InstallRequest {
    /// Tool repo root
    pub source: Option<PathBuf>,
    /// Install destination; defaults to the user preference directory
    pub destination: Option<PathBuf>,
    /// Houdini version to use instead of the latest found
    pub hou_version: Option<HoudiniVersion>,
    pub options: InstallOptions,
}

impl InstallRequest {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_hou_version(mut self, version: HoudiniVersion) -> Self {
        self.hou_version = Some(version);
        self
    }

    pub fn with_develop(mut self, develop: bool) -> Self {
        self.options.mode = InstallMode::from_develop_flag(develop);
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.options.force = force;
        self
    }

    pub fn with_cleanup(mut self, cleanup: bool) -> Self {
        self.options.cleanup = cleanup;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.options.dry_run = dry_run;
        self
    }
}

/// True when `payload_root` holds at least one recognized site directory.
pub fn check_installable(payload_root: &Path, site_roles: &[String]) -> Result<bool> {
    let names = list_dir_names(payload_root)?;
    Ok(names.iter().any(|name| site_roles.contains(name)))
}

#[derive(Debug, Clone)]
pub struct InstallEngine {
    config: DeployConfig,
    env: HostEnvironment,
}

impl InstallEngine {
    pub fn new(config: DeployConfig, env: HostEnvironment) -> Self {
        Self { config, env }
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    /// True when the payload holds at least one configured site role.
    pub fn check_installable(&self, payload_root: &Path) -> Result<bool> {
        check_installable(payload_root, &self.config.site_roles)
    }

    /// Resolve `request` and install the tool it names.
    ///
    /// Every resolution and precondition check runs before the first write.
    pub fn install(
        &self,
        request: &InstallRequest,
        prompt: &mut dyn OverwritePrompt,
    ) -> Result<InstallOutcome> {
        request.options.validate()?;

        let tool = ToolSource::resolve(request.source.as_deref(), &self.config)?;
        if !self.check_installable(tool.payload_root())? {
            return Err(PreconditionError::NotInstallable {
                tool: tool.name().to_string(),
                payload: tool.payload_root().to_path_buf(),
            }
            .into());
        }
        info!("{} is installable", tool.name());

        let resolver = PathResolver::new(&self.config, &self.env);
        let target = resolver.install_target(
            request.destination.as_deref(),
            request.options.mode == InstallMode::Link,
            request.hou_version,
        )?;
        debug!("Tool source: {}", tool.payload_root().display());
        debug!("Install path: {}", target.display());

        self.install_tool(&tool, &target, &request.options, prompt)
    }

    /// Install an already resolved tool into `target`.
    ///
    /// In link mode `target` is the packages directory itself.
    pub fn install_tool(
        &self,
        tool: &ToolSource,
        target: &Path,
        options: &InstallOptions,
        prompt: &mut dyn OverwritePrompt,
    ) -> Result<InstallOutcome> {
        options.validate()?;
        match options.mode {
            InstallMode::Copy => {
                info!("Installing {}", tool.name());
                self.copy_install(tool, target, options)
                    .map(InstallOutcome::Completed)
            }
            InstallMode::Link => {
                info!("Installing in Development Mode");
                self.link_install(tool, target, options, prompt)
            }
        }
    }

    /// Payload directories that will be copied: visible, recognized, directories.
    pub fn site_dirs(&self, payload_root: &Path) -> Result<Vec<String>> {
        Ok(list_dir_names(payload_root)?
            .into_iter()
            .filter(|name| !name.starts_with('.') && self.config.is_site_role(name))
            .collect())
    }

    fn copy_install(
        &self,
        tool: &ToolSource,
        target: &Path,
        options: &InstallOptions,
    ) -> Result<InstallReport> {
        let mut report = InstallReport::new(
            tool.name(),
            InstallMode::Copy,
            target.to_path_buf(),
            options.dry_run,
        );

        let source_dirs = self.site_dirs(tool.payload_root())?;
        let existing = if target.is_dir() {
            list_dir_names(target)?
        } else {
            Vec::new()
        };
        let missing: Vec<String> = source_dirs
            .iter()
            .filter(|dir| !existing.contains(dir))
            .cloned()
            .collect();

        if !missing.is_empty() {
            if !options.force {
                return Err(PreconditionError::MissingTargetDirectories(missing).into());
            }
            for dir in &missing {
                report.actions.push(PlannedAction::CreateDir(target.join(dir)));
            }
        }

        for dir in &source_dirs {
            let from = tool.payload_root().join(dir);
            let to = target.join(dir);
            info!("Copying {} to {}", from.display(), to.display());
            if !options.dry_run {
                let copied = merge_tree(&from, &to)?;
                debug!("Copied {copied} files into {}", to.display());
            }
            report.actions.push(PlannedAction::CopyTree { from, to });
        }

        if options.cleanup {
            info!("Removing {}", tool.root().display());
            report
                .actions
                .push(PlannedAction::RemoveSource(tool.root().to_path_buf()));
            if !options.dry_run {
                remove_source(tool.root(), &mut report, |root| fs::remove_dir_all(root));
            }
        }

        Ok(report)
    }

    fn link_install(
        &self,
        tool: &ToolSource,
        packages_dir: &Path,
        options: &InstallOptions,
        prompt: &mut dyn OverwritePrompt,
    ) -> Result<InstallOutcome> {
        let mut report = InstallReport::new(
            tool.name(),
            InstallMode::Link,
            packages_dir.to_path_buf(),
            options.dry_run,
        );
        debug!("Creating JSON Package");
        debug!("Adding package to {}", packages_dir.display());

        let package_file = packages_dir.join(tool.package_file_name());
        if package_file.is_file() && !options.force {
            warn!("A Houdini Package with this name already exists.");
            let confirmed = prompt
                .confirm_overwrite(&package_file)
                .map_err(|e| DeployError::io(&package_file, e))?;
            if !confirmed {
                warn!("Try removing the existing file, or running again with the \"--force\" flag");
                return Ok(InstallOutcome::Declined);
            }
        } else if !packages_dir.is_dir() {
            if !options.force {
                return Err(
                    PreconditionError::MissingPackagesDir(packages_dir.to_path_buf()).into(),
                );
            }
            debug!("Creating packages directory {}", packages_dir.display());
            report
                .actions
                .push(PlannedAction::CreateDir(packages_dir.to_path_buf()));
            if !options.dry_run {
                fs::create_dir_all(packages_dir).map_err(|e| DeployError::io(packages_dir, e))?;
            }
        }

        let manifest = PackageManifest::new(tool.payload_root());
        report.actions.push(PlannedAction::WriteManifest {
            path: package_file.clone(),
            manifest: manifest.clone(),
        });

        if options.dry_run {
            debug!("Package contents: {}", manifest.path.display());
            return Ok(InstallOutcome::Completed(report));
        }

        write_manifest(&package_file, &manifest)?;
        report.manifest = Some(package_file);
        Ok(InstallOutcome::Completed(report))
    }
}

/// Delete the tool repo after a copy. Failure leaves the install in place and
/// is recorded as a warning.
fn remove_source(
    root: &Path,
    report: &mut InstallReport,
    remove: impl FnOnce(&Path) -> std::io::Result<()>,
) {
    if let Err(err) = remove(root) {
        let message = format!("Unable to clean up {}: {err}", root.display());
        warn!("{message}");
        report.warnings.push(message);
    }
}
