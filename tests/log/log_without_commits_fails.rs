use crate::common::command::{repository_dir, run_svcs_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn log_without_commits_fails(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    run_svcs_command(repository_dir.path(), &["log"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch main has no commits yet"));

    Ok(())
}
