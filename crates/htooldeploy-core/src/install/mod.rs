//! Installing a tool repo into a Houdini preference directory.
//!
//! Two modes are supported. Copy mode merges every recognized site
//! directory of the payload into the target. Link mode writes a package
//! manifest into `<target>/packages/` pointing back at the repo, so edits
//! in the repo are live.

pub mod confirm;
pub mod engine;
pub mod manifest;
pub mod report;

pub use confirm::OverwritePrompt;
pub use engine::{InstallEngine, InstallOptions, InstallRequest, check_installable};
pub use manifest::{PackageManifest, read_manifest, verify_manifest, write_manifest};
pub use report::{InstallOutcome, InstallReport, PlannedAction};
