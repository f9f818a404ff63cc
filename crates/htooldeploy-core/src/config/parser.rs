//! Reading and writing config.toml.

use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::schema::DeployConfig;

/// Read and validate a config file.
pub fn parse_config_toml(path: &Path) -> Result<DeployConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_config_toml_str(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}

/// Parse and validate config content. Missing keys take their defaults.
pub fn parse_config_toml_str(content: &str) -> Result<DeployConfig> {
    let config: DeployConfig =
        toml::from_str(content).map_err(|e| describe_toml_error(&e, content))?;
    config.validate()?;
    Ok(config)
}

pub fn to_toml(config: &DeployConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize configuration to TOML")
}

/// Quote the offending line when the parser reports a location.
fn describe_toml_error(error: &toml::de::Error, content: &str) -> anyhow::Error {
    let Some(span) = error.span() else {
        return anyhow!("TOML parsing error: {}", error.message());
    };
    let before = content.get(..span.start).unwrap_or(content);
    let line_no = before.matches('\n').count() + 1;
    let line = content.lines().nth(line_no - 1).unwrap_or_default();
    anyhow!(
        "TOML parsing error on line {line_no}: {}\n{line_no:>5} | {line}",
        error.message()
    )
}
