//! Configuration schema for config.toml
//!
//! Every field is optional in the file. Anything left out falls back to the
//! defaults below, which describe a standard Houdini site layout.

use serde::{Deserialize, Serialize};

/// Directory names that carry meaning inside a Houdini site.
pub const DEFAULT_SITE_ROLES: &[&str] = &[
    "desktop",
    "dso",
    "gallery",
    "geo",
    "help",
    "ocio",
    "otls",
    "presets",
    "python_libs",
    "python2.7libs",
    "python3.7libs",
    "python3.9libs",
    "python3.10libs",
    "python3.11libs",
    "python_panels",
    "scripts",
    "soho",
    "toolbar",
    "vex",
    "vop",
    "viewer_states",
];

/// Node categories that get a help card directory.
pub const DEFAULT_HELP_CATEGORIES: &[&str] = &["obj", "sop", "dop", "cop2", "out"];

/// Root configuration structure for config.toml
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployConfig {
    /// Recognized site roles, in order
    pub site_roles: Vec<String>,

    /// Subdirectory of a tool repo holding the payload
    pub repo_convention: String,

    /// Root-level files to scan for `__version__`; `None` scans every file
    pub version_files: Option<Vec<String>>,

    /// Directory under the install target that holds package manifests
    pub packages_dir: String,

    /// Environment variable overriding the user preference directory
    pub pref_dir_env: String,

    /// Placeholder in the override that is replaced by `MAJOR.MINOR`
    pub version_token: String,

    /// Prefix of versioned preference directories under home
    pub pref_dir_prefix: String,

    /// Site role used for a template's python library stub
    pub python_lib_dir: String,

    /// Node categories created under `help/nodes/`
    pub help_categories: Vec<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            site_roles: DEFAULT_SITE_ROLES.iter().map(|s| s.to_string()).collect(),
            repo_convention: "source".to_string(),
            version_files: None,
            packages_dir: "packages".to_string(),
            pref_dir_env: "HOUDINI_USER_PREF_DIR".to_string(),
            version_token: "__HVER__".to_string(),
            pref_dir_prefix: "houdini".to_string(),
            python_lib_dir: "python_libs".to_string(),
            help_categories: DEFAULT_HELP_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl DeployConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` is one of the recognized site roles.
    pub fn is_site_role(&self, name: &str) -> bool {
        self.site_roles.iter().any(|role| role == name)
    }

    /// Validate values that would otherwise produce surprising paths.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.site_roles.is_empty() {
            anyhow::bail!("site_roles cannot be empty");
        }
        for role in &self.site_roles {
            ensure_plain_name("site_roles", role)?;
        }
        ensure_plain_name("repo_convention", &self.repo_convention)?;
        ensure_plain_name("packages_dir", &self.packages_dir)?;
        ensure_plain_name("python_lib_dir", &self.python_lib_dir)?;
        for category in &self.help_categories {
            ensure_plain_name("help_categories", category)?;
        }
        if let Some(files) = &self.version_files {
            for file in files {
                ensure_plain_name("version_files", file)?;
            }
        }
        if self.version_token.is_empty() {
            anyhow::bail!("version_token cannot be empty");
        }
        if self.pref_dir_env.is_empty() {
            anyhow::bail!("pref_dir_env cannot be empty");
        }
        Ok(())
    }
}

fn ensure_plain_name(field: &str, value: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        anyhow::bail!("Invalid {field}: empty name");
    }
    if value == "." || value == ".." || value.contains(['/', '\\']) {
        anyhow::bail!("Invalid {field}: '{value}' must be a single directory name");
    }
    Ok(())
}
