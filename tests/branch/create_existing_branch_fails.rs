use crate::common::command::{init_repository_dir, run_svcs_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn create_existing_branch_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;

    run_svcs_command(repository_dir.path(), &["branch", "dev"])
        .assert()
        .success();

    run_svcs_command(repository_dir.path(), &["branch", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("branch already exists: dev"));

    run_svcs_command(repository_dir.path(), &["branch", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    Ok(())
}
