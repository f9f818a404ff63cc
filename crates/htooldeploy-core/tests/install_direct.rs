mod support;

use std::fs;

use tempfile::TempDir;

use htooldeploy_core::error::{DeployError, PreconditionError};
use htooldeploy_core::install::{InstallOutcome, InstallRequest, PlannedAction};

use support::{engine_with_home, make_tool_repo, mkdir, never_asked, snapshot, write_file};

#[test]
fn missing_target_dirs_without_force_changes_nothing() {
    let tmp = TempDir::new().expect("tempdir should succeed");
    let repo = make_tool_repo(tmp.path(), "tool");
    let target = tmp.path().join("prefs");
    mkdir(&target.join("otls"));
    let before = snapshot(&target);

    let err = engine_with_home(tmp.path())
        .install(
            &InstallRequest::new(&repo).with_destination(&target),
            &mut never_asked(),
        )
        .expect_err("install should refuse without force");

    match err {
        DeployError::Precondition(PreconditionError::MissingTargetDirectories(missing)) => {
            assert_eq!(missing, vec!["toolbar".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(snapshot(&target), before);
}

#[test]
fn force_into_empty_target_copies_every_site_dir() {
    let tmp = TempDir::new().expect("tempdir should succeed");
    let repo = make_tool_repo(tmp.path(), "tool");
    write_file(&repo.join("source/scripts/123.py"), "print('hi')");
    write_file(&repo.join("source/notes/todo.txt"), "ignored");
    write_file(&repo.join("source/.hidden/x"), "ignored");
    let target = tmp.path().join("prefs");
    mkdir(&target);

    let outcome = engine_with_home(tmp.path())
        .install(
            &InstallRequest::new(&repo)
                .with_destination(&target)
                .with_force(true),
            &mut never_asked(),
        )
        .expect("forced install should succeed");

    assert!(outcome.is_completed());
    assert_eq!(fs::read_to_string(target.join("otls/a.hda")).unwrap(), "hda");
    assert!(target.join("toolbar/t.shelf").is_file());
    assert!(target.join("scripts/123.py").is_file());
    assert!(!target.join("notes").exists());
    assert!(!target.join(".hidden").exists());
}

#[test]
fn copies_hda_and_shelf_into_fresh_target() {
    let tmp = TempDir::new().expect("tempdir should succeed");
    let repo = make_tool_repo(tmp.path(), "tool");
    let target = tmp.path().join("empty");
    mkdir(&target);

    let outcome = engine_with_home(tmp.path())
        .install(
            &InstallRequest::new(&repo)
                .with_destination(&target)
                .with_force(true)
                .with_develop(false),
            &mut never_asked(),
        )
        .expect("install should succeed");

    assert!(matches!(outcome, InstallOutcome::Completed(_)));
    assert!(target.join("otls/a.hda").is_file());
    assert!(target.join("toolbar/t.shelf").is_file());
    assert!(repo.exists(), "repo is kept without cleanup");
}

#[test]
fn merge_keeps_target_only_files() {
    let tmp = TempDir::new().expect("tempdir should succeed");
    let repo = make_tool_repo(tmp.path(), "tool");
    let target = tmp.path().join("prefs");
    write_file(&target.join("otls/a.hda"), "old");
    write_file(&target.join("otls/mine.hda"), "mine");
    mkdir(&target.join("toolbar"));

    engine_with_home(tmp.path())
        .install(
            &InstallRequest::new(&repo).with_destination(&target),
            &mut never_asked(),
        )
        .expect("install into complete target should succeed");

    assert_eq!(fs::read_to_string(target.join("otls/a.hda")).unwrap(), "hda");
    assert_eq!(fs::read_to_string(target.join("otls/mine.hda")).unwrap(), "mine");
}

#[test]
fn dry_run_reports_without_writing() {
    let tmp = TempDir::new().expect("tempdir should succeed");
    let repo = make_tool_repo(tmp.path(), "tool");
    let target = tmp.path().join("prefs");
    mkdir(&target);

    let outcome = engine_with_home(tmp.path())
        .install(
            &InstallRequest::new(&repo)
                .with_destination(&target)
                .with_force(true)
                .with_cleanup(true)
                .with_dry_run(true),
            &mut never_asked(),
        )
        .expect("dry run should succeed");

    let report = outcome.report().expect("dry run completes");
    assert!(report.dry_run);
    assert!(report.actions.contains(&PlannedAction::CreateDir(target.join("otls"))));
    assert!(
        report
            .actions
            .iter()
            .any(|a| matches!(a, PlannedAction::CopyTree { to, .. } if to == &target.join("toolbar")))
    );
    assert!(matches!(report.actions.last(), Some(PlannedAction::RemoveSource(_))));
    assert!(snapshot(&target).is_empty());
    assert!(repo.exists());
}

#[test]
fn cleanup_removes_repo_after_copy() {
    let tmp = TempDir::new().expect("tempdir should succeed");
    let repo = make_tool_repo(tmp.path(), "tool");
    let target = tmp.path().join("prefs");
    mkdir(&target);

    let outcome = engine_with_home(tmp.path())
        .install(
            &InstallRequest::new(&repo)
                .with_destination(&target)
                .with_force(true)
                .with_cleanup(true),
            &mut never_asked(),
        )
        .expect("install with cleanup should succeed");

    assert!(outcome.report().unwrap().warnings.is_empty());
    assert!(target.join("otls/a.hda").is_file());
    assert!(!repo.exists());
}

#[cfg(unix)]
#[test]
fn failed_cleanup_still_completes_with_warning() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().expect("tempdir should succeed");
    let locked = tmp.path().join("locked");
    let repo = make_tool_repo(&locked, "tool");
    let target = tmp.path().join("prefs");
    mkdir(&target);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o555))
        .expect("chmod should succeed");

    // Privileged users can remove entries from read-only directories.
    if fs::write(locked.join("write_check"), "").is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
            .expect("chmod should succeed");
        return;
    }

    let outcome = engine_with_home(tmp.path()).install(
        &InstallRequest::new(&repo)
            .with_destination(&target)
            .with_force(true)
            .with_cleanup(true),
        &mut never_asked(),
    );
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))
        .expect("chmod should succeed");

    let outcome = outcome.expect("install should succeed even when cleanup fails");
    assert!(outcome.is_completed());
    let report = outcome.report().expect("completed install has a report");
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("Unable to clean up"));
    assert!(target.join("otls/a.hda").is_file());
    assert!(target.join("toolbar/t.shelf").is_file());
    assert!(repo.exists());
}

#[test]
fn repo_without_site_dirs_is_not_installable() {
    let tmp = TempDir::new().expect("tempdir should succeed");
    let repo = tmp.path().join("docs_only");
    write_file(&repo.join("source/docs/index.md"), "# Docs");
    let target = tmp.path().join("prefs");
    mkdir(&target);

    let err = engine_with_home(tmp.path())
        .install(
            &InstallRequest::new(&repo).with_destination(&target),
            &mut never_asked(),
        )
        .expect_err("install should fail");

    assert!(matches!(
        err,
        DeployError::Precondition(PreconditionError::NotInstallable { .. })
    ));
}

#[test]
fn missing_source_repo_is_reported() {
    let tmp = TempDir::new().expect("tempdir should succeed");

    let err = engine_with_home(tmp.path())
        .install(&InstallRequest::default(), &mut never_asked())
        .expect_err("install should fail");

    assert!(matches!(err, DeployError::Resolution(_)));
}
