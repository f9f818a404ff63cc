use std::path::{Path, PathBuf};

use crate::naming::sanitize;

pub const DEFAULT_TOOL_NAME: &str = "my_tool";
pub const DEFAULT_VERSION: &str = "0.0.1";

/// What to scaffold for a new tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    parent_dir: PathBuf,
    raw_name: String,
    name: String,
    author: Option<String>,
    version: String,
    python_lib: bool,
    shelf: bool,
    help: bool,
    vcs: bool,
}

impl TemplateSpec {
    /// A spec with the default toggles: python library and shelf on,
    /// help cards and version control off.
    pub fn new(parent_dir: impl Into<PathBuf>, name: &str) -> Self {
        Self {
            parent_dir: parent_dir.into(),
            raw_name: name.to_string(),
            name: sanitize(name),
            author: None,
            version: DEFAULT_VERSION.to_string(),
            python_lib: true,
            shelf: true,
            help: false,
            vcs: false,
        }
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = author.filter(|a| !a.trim().is_empty());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_python_lib(mut self, enabled: bool) -> Self {
        self.python_lib = enabled;
        self
    }

    pub fn with_shelf(mut self, enabled: bool) -> Self {
        self.shelf = enabled;
        self
    }

    pub fn with_help(mut self, enabled: bool) -> Self {
        self.help = enabled;
        self
    }

    pub fn with_vcs(mut self, enabled: bool) -> Self {
        self.vcs = enabled;
        self
    }

    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }

    /// The name as the user typed it.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Sanitized name used for directories and files.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn python_lib(&self) -> bool {
        self.python_lib
    }

    pub fn shelf(&self) -> bool {
        self.shelf
    }

    pub fn help(&self) -> bool {
        self.help
    }

    pub fn vcs(&self) -> bool {
        self.vcs
    }

    /// `<parent_dir>/<name>`
    pub fn root(&self) -> PathBuf {
        self.parent_dir.join(&self.name)
    }
}
