//! Caller-supplied confirmation for overwriting an existing package.

use std::io;
use std::path::Path;

/// Asked before an existing package manifest is replaced without `force`.
///
/// Returning `Ok(false)` aborts the install cleanly.
pub trait OverwritePrompt {
    fn confirm_overwrite(&mut self, manifest: &Path) -> io::Result<bool>;
}

impl<F> OverwritePrompt for F
where
    F: FnMut(&Path) -> io::Result<bool>,
{
    fn confirm_overwrite(&mut self, manifest: &Path) -> io::Result<bool> {
        self(manifest)
    }
}
