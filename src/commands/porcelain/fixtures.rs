use crate::areas::repository::Repository;
use crate::artifacts::objects::digest::Digest;
use crate::config::Config;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use rstest::fixture;
use std::path::Path;

pub type TestResult<T = ()> = std::result::Result<T, Box<dyn std::error::Error>>;

pub type TestRepository = (TempDir, Repository);

pub fn test_config() -> Config {
    Config {
        author_name: "tester".to_string(),
        ..Config::default()
    }
}

pub fn empty_repository(dir: &TempDir) -> TestResult<Repository> {
    Ok(Repository::with_config(dir.path(), test_config())?)
}

#[fixture]
pub fn repository() -> TestResult<TestRepository> {
    let dir = TempDir::new()?;
    let repository = empty_repository(&dir)?;
    repository.init()?;

    Ok((dir, repository))
}

pub fn write_file(dir: &TempDir, path: &str, content: &str) -> TestResult {
    dir.child(path).write_str(content)?;

    Ok(())
}

/// Write, stage and commit a single file
pub fn commit_file(
    dir: &TempDir,
    repository: &Repository,
    path: &str,
    content: &str,
    message: &str,
) -> TestResult<Digest> {
    write_file(dir, path, content)?;
    repository.stage_file(Path::new(path))?;

    Ok(repository.commit(message, None)?)
}
