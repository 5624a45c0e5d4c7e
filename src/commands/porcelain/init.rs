use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_table::BranchTable;
use crate::artifacts::status::ignore_rules::DEFAULT_IGNORE_CONTENT;
use crate::errors::{Result, SvcsError};
use std::fs;

impl Repository {
    /// Create the marker directory with empty staging and branch tables
    ///
    /// An existing `.svcignore` is kept; otherwise the default one is written.
    pub fn init(&self) -> Result<()> {
        if self.repo_path().exists() {
            return Err(SvcsError::AlreadyInitialized(self.path().to_path_buf()));
        }

        fs::create_dir_all(self.database().commits_path())?;
        fs::create_dir_all(self.database().blobs_path())?;

        self.lock().with_lock(LockMode::Exclusive, || {
            let mut index = self.index();
            index.clear();
            index.write_updates()?;

            self.refs().save(&BranchTable::default())?;

            let ignore_file = self.workspace().ignore_file_path();
            if !ignore_file.exists() {
                fs::write(ignore_file, DEFAULT_IGNORE_CONTENT)?;
            }

            Ok(())
        })?;

        tracing::info!(path = %self.path().display(), "initialized repository");

        Ok(())
    }
}
