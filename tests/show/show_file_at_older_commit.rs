use crate::common::command::{branch_head, commit_file, init_repository_dir, run_svcs_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_file_at_older_commit(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let first = branch_head(dir, "main")?;
    commit_file(dir, "a/2.txt", "two, revised", "Revise two");

    run_svcs_command(dir, &["show", "a/2.txt"])
        .assert()
        .success()
        .stdout("two, revised\n");

    run_svcs_command(dir, &["show", "a/2.txt", "--commit", &first])
        .assert()
        .success()
        .stdout("two\n");

    // a unique prefix resolves like the full id
    run_svcs_command(dir, &["show", "a/2.txt", "--commit", &first[..10]])
        .assert()
        .success()
        .stdout("two\n");

    Ok(())
}

#[rstest]
fn show_file_on_other_branch(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    run_svcs_command(dir, &["branch", "dev"]).assert().success();
    commit_file(dir, "1.txt", "main only", "Change on main");

    run_svcs_command(dir, &["show", "1.txt", "--commit", "dev"])
        .assert()
        .success()
        .stdout("one\n");

    Ok(())
}
