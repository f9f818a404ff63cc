//! Config path resolution helpers.

use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "htooldeploy";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub fn config_path_in(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

/// Default location of config.toml.
///
/// The home directory is only consulted (as `~/.config`) when the platform
/// has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    config_dir_or_home(dirs::config_dir(), dirs::home_dir).map(|dir| config_path_in(&dir))
}

fn config_dir_or_home(
    config_dir: Option<PathBuf>,
    home_dir: impl FnOnce() -> Option<PathBuf>,
) -> Option<PathBuf> {
    config_dir.or_else(|| home_dir().map(|home| home.join(".config")))
}
