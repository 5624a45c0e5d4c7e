use crate::common::command::{branch_head, init_repository_dir, svcs_commit};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_with_empty_staging_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = branch_head(repository_dir.path(), "main")?;

    svcs_commit(repository_dir.path(), "Nothing to see")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no changes staged"));

    assert_eq!(branch_head(repository_dir.path(), "main")?, head);

    Ok(())
}
