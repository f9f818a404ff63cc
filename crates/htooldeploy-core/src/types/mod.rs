//! Shared value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Houdini `MAJOR.MINOR` version as used in preference directory names.
///
/// Ordering is numeric on major, then minor, so `20.10` sorts after `20.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HoudiniVersion {
    pub major: u32,
    pub minor: u32,
}

impl HoudiniVersion {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for HoudiniVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for HoudiniVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .trim()
            .split_once('.')
            .ok_or_else(|| format!("Expected MAJOR.MINOR, got '{s}'"))?;
        let major = major
            .parse()
            .map_err(|_| format!("Invalid major version in '{s}'"))?;
        let minor = minor
            .parse()
            .map_err(|_| format!("Invalid minor version in '{s}'"))?;
        Ok(Self { major, minor })
    }
}
