use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::digest::Digest;
use crate::errors::{Result, SvcsError};

impl Repository {
    /// Commit the staged changes on the current branch
    ///
    /// The commit record is persisted first, then the branch pointer moves,
    /// then the staging area is cleared. An interruption between steps leaves
    /// at worst an unreferenced commit.
    pub fn commit(&self, message: &str, author: Option<&str>) -> Result<Digest> {
        self.ensure_initialized()?;

        self.lock().with_lock(LockMode::Exclusive, || {
            let mut index = self.index();
            index.rehydrate()?;

            if index.is_empty() {
                return Err(SvcsError::EmptyStaging);
            }

            let mut branches = self.refs().load()?;
            let parent = branches.current_head().cloned();
            let author = author
                .map(str::to_string)
                .unwrap_or_else(|| self.config().author_name.clone());

            let commit_id = self.graph().commit(
                message.trim().to_string(),
                author,
                self.config().commit_time(),
                index.snapshot(),
                parent,
            )?;

            branches.update_current_head(commit_id.clone());
            self.refs().save(&branches)?;

            index.clear();
            index.write_updates()?;

            Ok(commit_id)
        })
    }

    /// Load the commit named by `revision` (branch, id or id prefix)
    pub fn get_commit(&self, revision: &str) -> Result<Commit> {
        self.ensure_initialized()?;

        self.lock().with_lock(LockMode::Shared, || {
            let commit_id = self.resolve_commit(revision)?;
            self.graph().get(&commit_id)
        })
    }
}
