use crate::common::command::{init_repository_dir, run_svcs_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn merge_into_itself_fails(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(init_repository_dir.path(), &["merge", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot merge branch main into itself"));

    Ok(())
}
