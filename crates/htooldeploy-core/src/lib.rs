//! htooldeploy core library
//!
//! Installs site-structured Houdini tool repositories into a user
//! preference directory, either by copying their payload or by linking it
//! through a package manifest, and scaffolds new tool repositories.

pub mod config;
pub mod context;
pub mod error;
pub mod fs;
pub mod install;
pub mod naming;
pub mod paths;
pub mod template;
pub mod tool;
pub mod types;
pub mod wizard;

/// Re-exports of commonly used types
pub mod prelude {
    pub use crate::config::{ConfigStore, DeployConfig};
    pub use crate::context::DeployContext;
    pub use crate::error::{
        DeployError, IntegrityError, PreconditionError, ResolutionError, TemplateError,
    };
    pub use crate::fs::InstallMode;
    pub use crate::install::{
        InstallEngine, InstallOptions, InstallOutcome, InstallReport, InstallRequest,
        OverwritePrompt, PackageManifest, PlannedAction,
    };
    pub use crate::naming::{sanitize, title_case};
    pub use crate::paths::{HostEnvironment, PathResolver};
    pub use crate::template::{TemplateEngine, TemplateReport, TemplateSpec};
    pub use crate::tool::ToolSource;
    pub use crate::types::HoudiniVersion;
    pub use crate::wizard::{LineIo, PromptIo, TemplateWizard};
}
