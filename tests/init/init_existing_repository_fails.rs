use crate::common::command::{init_repository_dir, read_branches, run_svcs_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn init_existing_repository_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let branches_before = read_branches(repository_dir.path())?;

    run_svcs_command(repository_dir.path(), &["init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("repository already exists"));

    // the existing history is untouched
    pretty_assertions::assert_eq!(read_branches(repository_dir.path())?, branches_before);

    Ok(())
}
