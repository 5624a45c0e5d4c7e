use crate::areas::index::Index;
use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::objects::digest::ContentHasher;
use crate::artifacts::status::ignore_rules::IgnoreRules;
use crate::errors::{Result, SvcsError};
use std::path::{Path, PathBuf};

/// Outcome of staging a batch of paths
#[derive(Debug, Default)]
pub struct AddReport {
    /// Keys of the files staged, in argument order
    pub staged: Vec<String>,
    /// Paths that could not be staged, with the reason
    pub failed: Vec<(PathBuf, SvcsError)>,
}

impl AddReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Repository {
    /// Stage every path, attempting all of them even when some fail
    ///
    /// Per-path failures end up in the report; only failures that affect the
    /// whole batch (uninitialized repository, unreadable staging table) are
    /// returned as errors.
    pub fn add(&self, paths: &[PathBuf]) -> Result<AddReport> {
        self.ensure_initialized()?;

        self.lock().with_lock(LockMode::Exclusive, || {
            let mut index = self.index();
            index.rehydrate()?;

            let rules = self.workspace().ignore_rules()?;
            let mut report = AddReport::default();

            for path in paths {
                match self.stage_path(&mut index, &rules, path) {
                    Ok(key) => report.staged.push(key),
                    Err(error) => {
                        tracing::warn!(path = %path.display(), %error, "failed to stage file");
                        report.failed.push((path.clone(), error));
                    }
                }
            }

            if index.is_changed() {
                index.write_updates()?;
            }

            Ok(report)
        })
    }

    /// Stage a single file and return its key
    pub fn stage_file(&self, path: &Path) -> Result<String> {
        let mut report = self.add(&[path.to_path_buf()])?;

        match report.failed.pop() {
            Some((_, error)) => Err(error),
            None => Ok(report.staged.pop().unwrap_or_default()),
        }
    }

    fn stage_path(&self, index: &mut Index, rules: &IgnoreRules, path: &Path) -> Result<String> {
        let workspace = self.workspace();
        let key = workspace.resolve(path)?;
        workspace.check_stageable(&key, rules)?;

        let content = workspace.read_file(&key)?;
        let digest = ContentHasher::hash(&content);
        self.database().store_blob(&digest, &content)?;

        tracing::debug!(path = %key, digest = %digest.to_short(), "staged file");
        index.add(key.clone(), digest);

        Ok(key)
    }
}
