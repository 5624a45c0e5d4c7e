use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::branch_table::BranchHeads;
use crate::artifacts::objects::digest::Digest;
use crate::errors::Result;

impl Repository {
    /// Create a branch at the current branch's head
    pub fn create_branch(&self, name: &str) -> Result<()> {
        self.ensure_initialized()?;
        let branch_name = BranchName::try_parse(name)?;

        self.lock().with_lock(LockMode::Exclusive, || {
            let mut branches = self.refs().load()?;
            branches.create(branch_name)?;
            self.refs().save(&branches)?;

            tracing::info!(branch = name, from = branches.current(), "created branch");

            Ok(())
        })
    }

    /// Every branch with its head, without the current-branch marker
    pub fn list_branches(&self) -> Result<BranchHeads> {
        self.ensure_initialized()?;

        self.lock()
            .with_lock(LockMode::Shared, || Ok(self.refs().load()?.heads().clone()))
    }

    pub fn current_branch(&self) -> Result<String> {
        self.ensure_initialized()?;

        self.lock()
            .with_lock(LockMode::Shared, || Ok(self.refs().load()?.current().to_string()))
    }

    pub fn current_head(&self) -> Result<Option<Digest>> {
        self.ensure_initialized()?;

        self.lock()
            .with_lock(LockMode::Shared, || Ok(self.refs().load()?.current_head().cloned()))
    }
}
