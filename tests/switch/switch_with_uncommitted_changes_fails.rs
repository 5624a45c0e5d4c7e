use crate::common::command::{init_repository_dir, read_branches, run_svcs_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn switch_with_staged_file_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_svcs_command(repository_dir.path(), &["branch", "dev"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("wip.txt"), "wip".to_string()));
    run_svcs_command(repository_dir.path(), &["add", "wip.txt"])
        .assert()
        .success();

    run_svcs_command(repository_dir.path(), &["switch", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot switch branches with uncommitted changes"));

    assert_eq!(read_branches(repository_dir.path())?["current"], serde_json::json!("main"));

    Ok(())
}

#[rstest]
fn switch_with_modified_staged_file_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_svcs_command(repository_dir.path(), &["branch", "dev"])
        .assert()
        .success();
    run_svcs_command(repository_dir.path(), &["add", "1.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("1.txt"), "changed".to_string()));

    run_svcs_command(repository_dir.path(), &["switch", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("uncommitted changes"));

    Ok(())
}

#[rstest]
fn switch_with_only_untracked_files_succeeds(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_svcs_command(repository_dir.path(), &["branch", "dev"])
        .assert()
        .success();
    write_file(FileSpec::new(repository_dir.path().join("scratch.txt"), "notes".to_string()));

    run_svcs_command(repository_dir.path(), &["switch", "dev"])
        .assert()
        .success();

    Ok(())
}
