use crate::common::command::{read_staging, repository_dir, run_svcs_command, sha256_hex};
use crate::common::file::write_generated_files;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn adding_same_file_twice_keeps_one_entry(
    repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_svcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = write_generated_files(repository_dir.path(), 1);
    let file_name = files[0]
        .path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or("generated file has no name")?
        .to_string();

    for _ in 0..2 {
        run_svcs_command(repository_dir.path(), &["add", &file_name])
            .assert()
            .success();
    }

    let staging = read_staging(repository_dir.path())?;
    let entries = staging.as_object().ok_or("staging table is not an object")?;

    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries[&file_name]["hash"],
        serde_json::json!(sha256_hex(files[0].content.as_bytes()))
    );

    Ok(())
}
