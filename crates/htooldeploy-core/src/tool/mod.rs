//! Tool repositories: identity, version and payload location.

pub mod source;
pub mod version;

pub use source::ToolSource;
pub use version::{find_version, parse_version_line};
