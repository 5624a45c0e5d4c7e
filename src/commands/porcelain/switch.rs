use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::errors::{Result, SvcsError};

impl Repository {
    /// Make `name` the current branch
    ///
    /// Only the branch pointer changes; working tree files are left as they
    /// are, which is why the tree must be clean.
    pub fn switch_branch(&self, name: &str) -> Result<()> {
        self.ensure_initialized()?;

        self.lock().with_lock(LockMode::Exclusive, || {
            let mut branches = self.refs().load()?;

            if !branches.contains(name) {
                return Err(SvcsError::BranchNotFound(name.to_string()));
            }
            self.ensure_clean("switch branches")?;

            let previous = branches.current().to_string();
            branches.set_current(name)?;
            self.refs().save(&branches)?;

            tracing::info!(from = %previous, to = name, "switched branch");

            Ok(())
        })
    }
}
