mod utils;

use std::path::PathBuf;

use tempfile::TempDir;

use graft::cli::{Args, Runner};
use graft::error::Error;
use graft::fetch::LocalFetcher;
use utils::{init_git_repo, template_fixture, write_manifest};

fn args_for(target: &std::path::Path) -> Args {
    Args {
        target_dir: target.to_path_buf(),
        repository: "org/templates".to_string(),
        branch: "main".to_string(),
        force: false,
        verbose: 0,
    }
}

#[test]
fn rejects_a_missing_target_directory() {
    let args = args_for(&PathBuf::from("/path/that/does/not/exist"));
    let err = Runner::new(args).run_with(&LocalFetcher::new("/unused")).unwrap_err();
    assert!(matches!(err, Error::InvalidTarget { .. }));
}

#[test]
fn rejects_a_target_that_is_not_a_git_repository() {
    let target = TempDir::new().unwrap();
    let args = args_for(target.path());
    let err = Runner::new(args).run_with(&LocalFetcher::new("/unused")).unwrap_err();
    assert!(matches!(err, Error::InvalidTarget { .. }));
}

#[test]
fn full_run_creates_manifest_and_materializes_defaults() {
    let template = TempDir::new().unwrap();
    template_fixture(template.path());
    let target = TempDir::new().unwrap();
    init_git_repo(target.path());

    let args = args_for(target.path());
    Runner::new(args).run_with(&LocalFetcher::new(template.path())).unwrap();

    // The default manifest was created on first use.
    assert!(target.path().join(".graft.yml").is_file());

    // Default includes present in the fixture are materialized; the
    // default exclude keeps docker.yml out of the copied .github tree.
    assert!(target.path().join(".github/workflows/ci.yml").is_file());
    assert!(!target.path().join(".github/workflows/docker.yml").exists());
    assert!(target.path().join(".editorconfig").is_file());
    assert!(target.path().join("Makefile").is_file());
    // Absent from the fixture: a warning, not a failure.
    assert!(!target.path().join(".pre-commit-config.yaml").exists());
}

#[test]
fn rerun_without_force_is_safe() {
    let template = TempDir::new().unwrap();
    template_fixture(template.path());
    let target = TempDir::new().unwrap();
    init_git_repo(target.path());
    write_manifest(target.path(), "org/templates", &["/.editorconfig"], &[]);

    Runner::new(args_for(target.path()))
        .run_with(&LocalFetcher::new(template.path()))
        .unwrap();
    std::fs::write(target.path().join(".editorconfig"), "tweaked\n").unwrap();

    // Second run must leave the local tweak alone.
    Runner::new(args_for(target.path()))
        .run_with(&LocalFetcher::new(template.path()))
        .unwrap();
    assert_eq!(
        std::fs::read_to_string(target.path().join(".editorconfig")).unwrap(),
        "tweaked\n"
    );
}

#[test]
fn fetch_failure_aborts_the_run() {
    let target = TempDir::new().unwrap();
    init_git_repo(target.path());
    write_manifest(target.path(), "org/templates", &[".github"], &[]);

    // LocalFetcher pointed at a missing root behaves like a bad remote.
    let err = Runner::new(args_for(target.path()))
        .run_with(&LocalFetcher::new(target.path().join("no-such-template")))
        .unwrap_err();
    assert!(matches!(err, Error::FetchFailed { .. }));
    assert!(!target.path().join(".github").exists());
}
