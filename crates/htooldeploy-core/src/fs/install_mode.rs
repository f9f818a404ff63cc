use serde::{Deserialize, Serialize};

/// How a tool's payload reaches the install target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMode {
    /// Copy site directories into the target.
    #[default]
    Copy,
    /// Leave the payload in place and register it with a package manifest.
    Link,
}

impl InstallMode {
    pub fn from_develop_flag(develop: bool) -> Self {
        if develop {
            InstallMode::Link
        } else {
            InstallMode::Copy
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InstallMode::Copy => "copy",
            InstallMode::Link => "link",
        }
    }
}
