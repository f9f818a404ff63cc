#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use htooldeploy_core::config::DeployConfig;
use htooldeploy_core::install::InstallEngine;
use htooldeploy_core::paths::HostEnvironment;

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create_dir_all should succeed in test temp dirs");
    }
    fs::write(path, content).expect("write should succeed in test temp dirs");
}

pub fn mkdir(path: &Path) {
    fs::create_dir_all(path).expect("create_dir_all should succeed in test temp dirs");
}

/// A tool repo with `source/otls/a.hda` and `source/toolbar/t.shelf`.
pub fn make_tool_repo(parent: &Path, name: &str) -> PathBuf {
    let repo = parent.join(name);
    write_file(&repo.join("source/otls/a.hda"), "hda");
    write_file(&repo.join("source/toolbar/t.shelf"), "<shelfDocument/>");
    write_file(&repo.join("README.md"), "# Tool\n");
    repo
}

/// Every file under `root`, relative and sorted.
pub fn snapshot(root: &Path) -> Vec<PathBuf> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries {
            let path = entry.expect("read_dir entry").path();
            out.push(path.strip_prefix(root).expect("under root").to_path_buf());
            if path.is_dir() {
                walk(root, &path, out);
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

/// Engine whose home directory is `home` and with no preference override.
pub fn engine_with_home(home: &Path) -> InstallEngine {
    InstallEngine::new(
        DeployConfig::default(),
        HostEnvironment::new(Some(home.to_path_buf()), None),
    )
}

pub fn answer(value: bool) -> impl FnMut(&Path) -> io::Result<bool> {
    move |_| Ok(value)
}

/// Fails the test if the overwrite prompt is ever shown.
pub fn never_asked() -> impl FnMut(&Path) -> io::Result<bool> {
    |manifest| panic!("unexpected overwrite prompt for {}", manifest.display())
}
