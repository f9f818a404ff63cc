//! Static files bundled into the binary.

pub const GITIGNORE: &str = include_str!("assets/gitignore");

/// Helper scripts dropped into `source/otls/`, as `(file name, contents)`.
pub const OTLS_SCRIPTS: &[(&str, &str)] = &[
    ("ascii_to_bin.sh", include_str!("assets/ascii_to_bin.sh")),
    ("bin_to_ascii.sh", include_str!("assets/bin_to_ascii.sh")),
];
