use crate::common::command::{branch_head, init_repository_dir, read_branches, run_svcs_command};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("dev")]
#[case("feature/login")]
#[case("release-1_0")]
fn create_branch_at_current_head(
    init_repository_dir: TempDir,
    #[case] branch_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let repository_dir = init_repository_dir;
    let head = branch_head(repository_dir.path(), "main")?;

    run_svcs_command(repository_dir.path(), &["branch", branch_name])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Created branch {branch_name}")));

    let branches = read_branches(repository_dir.path())?;
    assert_eq!(branches[branch_name], serde_json::json!(head));
    // creating a branch does not switch to it
    assert_eq!(branches["current"], serde_json::json!("main"));

    Ok(())
}
