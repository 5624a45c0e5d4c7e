use crate::common::command::{
    AUTHOR_NAME, branch_head, read_commit, read_staging, repository_dir, run_svcs_command,
    sha256_hex, svcs_commit,
};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn first_commit_has_no_parent(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = write_generated_files(repository_dir.path(), 3);
    let mut args = vec!["add".to_string()];
    args.extend(
        files
            .iter()
            .filter_map(|file| file.path.file_name())
            .map(|name| name.to_string_lossy().into_owned()),
    );
    let args = args.iter().map(String::as_str).collect::<Vec<_>>();
    run_svcs_command(repository_dir.path(), &args)
        .assert()
        .success();

    svcs_commit(repository_dir.path(), "  Initial commit\n")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Created commit [0-9a-f]{8}\n$")?);

    let head = branch_head(repository_dir.path(), "main")?;
    let commit = read_commit(repository_dir.path(), &head)?;

    assert_eq!(commit["parent"], serde_json::Value::Null);
    assert_eq!(commit["message"], serde_json::json!("Initial commit"));
    assert_eq!(commit["author"], serde_json::json!(AUTHOR_NAME));
    assert_eq!(commit["timestamp"], serde_json::json!("2023-01-01T12:00:00Z"));

    for file in &files {
        let name = file
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or("generated file has no name")?;
        assert_eq!(
            commit["changes"][&name]["hash"],
            serde_json::json!(sha256_hex(file.content.as_bytes()))
        );
    }

    // the staging area is cleared by a successful commit
    assert_eq!(read_staging(repository_dir.path())?, serde_json::json!({}));

    Ok(())
}
