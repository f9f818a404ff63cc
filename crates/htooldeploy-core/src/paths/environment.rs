//! Snapshot of the process environment consumed by path resolution.

use std::path::{Path, PathBuf};

use crate::config::DeployConfig;

/// The parts of the host environment that influence path resolution.
///
/// Captured once by the caller and handed to [`super::PathResolver`], so
/// resolution can be exercised in tests without mutating process state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEnvironment {
    home_dir: Option<PathBuf>,
    pref_dir_override: Option<String>,
}

impl HostEnvironment {
    pub fn new(home_dir: Option<PathBuf>, pref_dir_override: Option<String>) -> Self {
        Self {
            home_dir,
            pref_dir_override: pref_dir_override.filter(|value| !value.is_empty()),
        }
    }

    /// Read the home directory and the override variable named in `config`.
    pub fn capture(config: &DeployConfig) -> Self {
        Self::new(
            dirs::home_dir(),
            std::env::var(&config.pref_dir_env).ok(),
        )
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    pub fn pref_dir_override(&self) -> Option<&str> {
        self.pref_dir_override.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_override_counts_as_unset() {
        let env = HostEnvironment::new(Some(PathBuf::from("/home/artist")), Some(String::new()));
        assert_eq!(env.pref_dir_override(), None);
        assert_eq!(env.home_dir(), Some(Path::new("/home/artist")));
    }
}
