//! Scaffolding a new tool repository on disk.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::DeployConfig;
use crate::error::TemplateError;
use crate::naming::title_case;

use super::assets::{GITIGNORE, OTLS_SCRIPTS};
use super::shelf::render_shelf;
use super::spec::TemplateSpec;

type Result<T> = std::result::Result<T, TemplateError>;

/// Optional pieces of a tool skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scaffold {
    PythonLib,
    Shelf,
    HelpCards,
    VersionControl,
}

/// Everything a template run wrote.
#[derive(Debug, Clone, Default)]
pub struct TemplateReport {
    pub root: PathBuf,
    /// Directories and files created, in creation order
    pub created: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct TemplateEngine {
    config: DeployConfig,
}

impl TemplateEngine {
    pub fn new(config: DeployConfig) -> Self {
        Self { config }
    }

    /// Create the tool skeleton described by `spec`.
    ///
    /// The tool root must not exist yet; if it does nothing is written.
    pub fn create(&self, spec: TemplateSpec) -> Result<TemplateReport> {
        if spec.name().is_empty() {
            return Err(TemplateError::InvalidName(spec.raw_name().to_string()));
        }

        let root = spec.root();
        fs::create_dir_all(spec.parent_dir()).map_err(|e| TemplateError::io(spec.parent_dir(), e))?;
        match fs::create_dir(&root) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(TemplateError::AlreadyExists(root));
            }
            Err(e) => return Err(TemplateError::io(&root, e)),
        }
        info!("Creating {} at {}", spec.name(), root.display());

        let mut report = TemplateReport {
            root: root.clone(),
            created: vec![root.clone()],
            warnings: Vec::new(),
        };

        let source = root.join(&self.config.repo_convention);
        ensure_dir(&source, &mut report)?;
        ensure_dir(&source.join("otls"), &mut report)?;

        let scaffolds = [
            (spec.python_lib(), Scaffold::PythonLib),
            (spec.shelf(), Scaffold::Shelf),
            (spec.help(), Scaffold::HelpCards),
            (spec.vcs(), Scaffold::VersionControl),
        ];
        for (enabled, scaffold) in scaffolds {
            if enabled {
                debug!("Adding {scaffold:?}");
                self.scaffold(scaffold, &spec, &source, &mut report)?;
            }
        }

        write_file(&root.join("README.md"), &readme(&spec), &mut report)?;
        write_file(
            &root.join("_version"),
            &format!("__version__ = \"{}\"\n", spec.version()),
            &mut report,
        )?;

        info!("Template complete");
        Ok(report)
    }

    fn scaffold(
        &self,
        scaffold: Scaffold,
        spec: &TemplateSpec,
        source: &Path,
        report: &mut TemplateReport,
    ) -> Result<()> {
        match scaffold {
            Scaffold::PythonLib => {
                let package = source.join(&self.config.python_lib_dir).join(spec.name());
                ensure_dir(&package, report)?;
                write_file(&package.join("__init__.py"), "", report)
            }
            Scaffold::Shelf => {
                let toolbar = source.join("toolbar");
                ensure_dir(&toolbar, report)?;
                let shelf = render_shelf(spec.name(), &title_case(spec.name()));
                write_file(&toolbar.join(format!("{}.shelf", spec.name())), &shelf, report)
            }
            Scaffold::HelpCards => {
                let nodes = source.join("help").join("nodes");
                for category in &self.config.help_categories {
                    ensure_dir(&nodes.join(category), report)?;
                }
                Ok(())
            }
            Scaffold::VersionControl => self.scaffold_vcs(&spec.root(), source, report),
        }
    }

    fn scaffold_vcs(&self, root: &Path, source: &Path, report: &mut TemplateReport) -> Result<()> {
        let ignore = root.join(".gitignore");
        match OpenOptions::new().write(true).create_new(true).open(&ignore) {
            Ok(mut file) => {
                file.write_all(GITIGNORE.as_bytes())
                    .map_err(|e| TemplateError::io(&ignore, e))?;
                report.created.push(ignore);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                let message = format!("{} already exists, leaving it alone", ignore.display());
                warn!("{message}");
                report.warnings.push(message);
            }
            Err(e) => return Err(TemplateError::io(&ignore, e)),
        }

        let otls = source.join("otls");
        for (name, contents) in OTLS_SCRIPTS {
            let script = otls.join(name);
            write_file(&script, contents, report)?;
            make_executable(&script)?;
        }

        git2::Repository::init(root)?;
        info!("Initialised git repository at {}", root.display());
        Ok(())
    }
}

fn readme(spec: &TemplateSpec) -> String {
    let mut contents = format!("# {} {}\n", title_case(spec.name()), spec.version());
    if let Some(author) = spec.author() {
        contents.push_str(&format!("Created by {author}\n"));
    }
    contents
}

/// Create `dir` and its parents; an existing directory is fine.
fn ensure_dir(dir: &Path, report: &mut TemplateReport) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|e| TemplateError::io(dir, e))?;
    report.created.push(dir.to_path_buf());
    Ok(())
}

fn write_file(path: &Path, contents: &str, report: &mut TemplateReport) -> Result<()> {
    fs::write(path, contents).map_err(|e| TemplateError::io(path, e))?;
    debug!("Wrote {}", path.display());
    report.created.push(path.to_path_buf());
    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| TemplateError::io(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
