use crate::common::command::{read_branches, read_staging, repository_dir, run_svcs_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir_absolute_path = repository_dir.path().canonicalize()?.display().to_string();

    run_svcs_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    assert_eq!(
        read_branches(repository_dir.path())?,
        serde_json::json!({ "main": null, "current": "main" })
    );
    assert_eq!(read_staging(repository_dir.path())?, serde_json::json!({}));
    assert!(repository_dir.path().join(".repo").join("commits").is_dir());

    Ok(())
}

#[rstest]
fn init_repository_at_given_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let target = repository_dir.path().join("nested").join("project");

    run_svcs_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    assert!(target.join(".repo").join("branches.json").is_file());

    Ok(())
}
