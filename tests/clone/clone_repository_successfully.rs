use crate::common::command::{
    branch_head, commit_file, init_repository_dir, read_branches, read_staging, run_svcs_command,
};
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn clone_repository_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = init_repository_dir.path();
    commit_file(source, "1.txt", "one, revised", "Revise one");
    run_svcs_command(source, &["branch", "dev"]).assert().success();

    let destination_dir = TempDir::new()?;
    let destination = destination_dir.path().join("copy");
    let destination_arg = destination.display().to_string();

    run_svcs_command(source, &["clone", ".", &destination_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloned repository from"))
        .stdout(predicate::str::contains(destination_arg.as_str()));

    assert_eq!(read_branches(&destination)?, read_branches(source)?);
    assert_eq!(read_staging(&destination)?, serde_json::json!({}));

    let head = branch_head(&destination, "main")?;
    assert!(
        destination
            .join(".repo")
            .join("commits")
            .join(format!("{head}.json"))
            .is_file()
    );

    // the working tree holds the tree at the head, including older files
    assert_eq!(std::fs::read_to_string(destination.join("1.txt"))?, "one, revised");
    assert_eq!(std::fs::read_to_string(destination.join("a/2.txt"))?, "two");
    assert_eq!(std::fs::read_to_string(destination.join("a/b/3.txt"))?, "three");
    assert_eq!(
        std::fs::read_to_string(destination.join(".svcignore"))?,
        std::fs::read_to_string(source.join(".svcignore"))?
    );

    // the clone is a working repository of its own
    run_svcs_command(&destination, &["log", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("commit {head}")));

    Ok(())
}
