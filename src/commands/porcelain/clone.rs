use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::errors::{Result, SvcsError};
use std::fs;
use std::path::Path;

impl Repository {
    /// Copy this repository into `destination` and check out its current branch
    ///
    /// The destination must not exist or be an empty directory. Commits,
    /// blobs, branches and the ignore file are copied; every file recorded
    /// along the current head's history is written into the new working tree,
    /// at its newest recorded version. The staging area starts empty.
    pub fn clone_into(&self, destination: &Path) -> Result<Repository> {
        self.ensure_initialized()?;

        if destination.exists()
            && (!destination.is_dir() || fs::read_dir(destination)?.next().is_some())
        {
            return Err(SvcsError::DestinationNotEmpty(destination.to_path_buf()));
        }

        let target = Repository::with_config(destination, self.config().clone())?;
        target.init()?;

        self.lock().with_lock(LockMode::Shared, || {
            target
                .lock()
                .with_lock(LockMode::Exclusive, || self.copy_into(&target))
        })?;

        tracing::info!(
            source = %self.path().display(),
            destination = %target.path().display(),
            "cloned repository"
        );

        Ok(target)
    }

    fn copy_into(&self, target: &Repository) -> Result<()> {
        // loading verifies integrity, so a corrupted source fails the clone
        for commit_id in self.database().list_commits()? {
            let commit = self.database().load_commit(&commit_id)?;
            target.database().store_commit(&commit)?;
        }

        for digest in self.database().list_blobs()? {
            if let Some(content) = self.database().load_blob(&digest)? {
                target.database().store_blob(&digest, &content)?;
            }
        }

        let branches = self.refs().load()?;
        target.refs().save(&branches)?;

        let ignore_file = self.workspace().ignore_file_path();
        if ignore_file.is_file() {
            fs::copy(ignore_file, target.workspace().ignore_file_path())?;
        }

        let Some(head) = branches.current_head() else {
            return Ok(());
        };

        for (path, entry) in self.graph().tree_at(head)? {
            match self.recorded_content(&path, &entry.digest)? {
                Some(content) => target.workspace().write_file(&path, &content)?,
                None => tracing::warn!(path = %path, "no content recorded for file, skipping"),
            }
        }

        Ok(())
    }
}
