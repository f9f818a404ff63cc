//! Per-invocation context shared by the install and template flows.

use std::path::Path;

use crate::config::{ConfigStore, DeployConfig};
use crate::install::InstallEngine;
use crate::paths::{HostEnvironment, PathResolver};
use crate::template::TemplateEngine;

/// Configuration plus a snapshot of the host environment.
///
/// Frontends build this once per process and hand out engines from it.
#[derive(Debug, Clone)]
pub struct DeployContext {
    config: DeployConfig,
    env: HostEnvironment,
}

impl DeployContext {
    pub fn new(config: DeployConfig, env: HostEnvironment) -> Self {
        Self { config, env }
    }

    /// Load the user config from its default location and capture the environment.
    pub fn with_defaults() -> anyhow::Result<Self> {
        let config = ConfigStore::from_defaults()?.load()?;
        Ok(Self::from_config(config))
    }

    /// Load config from an explicit file and capture the environment.
    pub fn from_config_path(path: &Path) -> anyhow::Result<Self> {
        let config = ConfigStore::from_path(path.to_path_buf()).load()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: DeployConfig) -> Self {
        let env = HostEnvironment::capture(&config);
        Self { config, env }
    }

    pub fn config(&self) -> &DeployConfig {
        &self.config
    }

    pub fn env(&self) -> &HostEnvironment {
        &self.env
    }

    pub fn path_resolver(&self) -> PathResolver<'_> {
        PathResolver::new(&self.config, &self.env)
    }

    pub fn install_engine(&self) -> InstallEngine {
        InstallEngine::new(self.config.clone(), self.env.clone())
    }

    pub fn template_engine(&self) -> TemplateEngine {
        TemplateEngine::new(self.config.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let ctx = DeployContext::from_config_path(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(ctx.config(), &DeployConfig::default());
    }

    #[test]
    fn resolver_sees_injected_environment() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("houdini20.5")).unwrap();
        let env = HostEnvironment::new(Some(temp.path().to_path_buf()), None);
        let ctx = DeployContext::new(DeployConfig::default(), env);

        let pref = ctx.path_resolver().user_pref_dir(None).unwrap();
        assert_eq!(pref, temp.path().join("houdini20.5"));
    }
}
