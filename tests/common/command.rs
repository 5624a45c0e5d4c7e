use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";
pub const AUTHOR_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Repository with one commit on `main` holding `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_svcs_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    let files = [
        ("1.txt", "one"),
        ("a/2.txt", "two"),
        ("a/b/3.txt", "three"),
    ];
    for (path, content) in files {
        write_file(FileSpec::new(
            repository_dir.path().join(path),
            content.to_string(),
        ));
    }

    run_svcs_command(repository_dir.path(), &["add", "1.txt", "a/2.txt", "a/b/3.txt"])
        .assert()
        .success();

    svcs_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_svcs_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("svcs").expect("Failed to find svcs binary");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("SVCS_LOG");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn svcs_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_svcs_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![
        ("SVCS_AUTHOR_NAME", AUTHOR_NAME),
        ("SVCS_AUTHOR_DATE", AUTHOR_DATE), // %Y-%m-%d %H:%M:%S %z
    ]);
    cmd
}

/// Write `content` at `path`, stage it and commit it
pub fn commit_file(dir: &Path, path: &str, content: &str, message: &str) {
    write_file(FileSpec::new(dir.join(path), content.to_string()));

    run_svcs_command(dir, &["add", path]).assert().success();
    svcs_commit(dir, message).assert().success();
}

/// The branch table as stored in `.repo/branches.json`
pub fn read_branches(dir: &Path) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(dir.join(".repo").join("branches.json"))?;
    Ok(serde_json::from_str(&content)?)
}

/// The staging table as stored in `.repo/staging.json`
pub fn read_staging(dir: &Path) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(dir.join(".repo").join("staging.json"))?;
    Ok(serde_json::from_str(&content)?)
}

/// Head commit id of `branch`
pub fn branch_head(dir: &Path, branch: &str) -> Result<String, Box<dyn std::error::Error>> {
    read_branches(dir)?[branch]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| format!("branch {branch} has no commits").into())
}

/// A stored commit record
pub fn read_commit(
    dir: &Path,
    commit_id: &str,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let path = dir
        .join(".repo")
        .join("commits")
        .join(format!("{commit_id}.json"));
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn sha256_hex(content: &[u8]) -> String {
    use sha2::Digest;

    hex::encode(sha2::Sha256::digest(content))
}
