//! Source, target and user preference path inference.
//!
//! Nothing here caches: every call looks at the filesystem as it is now.

pub mod environment;
pub mod resolver;

pub use environment::HostEnvironment;
pub use resolver::{
    PathResolver, discover_latest_version, resolve_install_target, resolve_payload_root,
    resolve_user_pref_dir,
};
