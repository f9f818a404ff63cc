//! Filesystem primitives shared across features.

pub mod install_mode;
pub mod merge_copy;

pub use install_mode::InstallMode;
pub use merge_copy::{list_dir_names, merge_tree};
