//! Deployment configuration.
//!
//! The recognized site roles, the payload convention directory and the
//! version-search breadth are configuration rather than constants, so a
//! studio can adapt them without rebuilding.

pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use parser::{parse_config_toml, parse_config_toml_str, to_toml};
pub use paths::{config_path_in, default_config_path};
pub use schema::{DEFAULT_HELP_CATEGORIES, DEFAULT_SITE_ROLES, DeployConfig};
pub use store::ConfigStore;
