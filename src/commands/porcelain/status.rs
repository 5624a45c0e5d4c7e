use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::status::status_info::StatusInfo;
use crate::errors::{Result, SvcsError};

/// Working tree status together with the branch it was taken on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub branch: String,
    pub info: StatusInfo,
}

impl Repository {
    pub fn working_tree_status(&self) -> Result<StatusReport> {
        self.ensure_initialized()?;

        self.lock().with_lock(LockMode::Shared, || {
            let mut index = self.index();
            index.rehydrate()?;

            let info = self.status().initialize(&index)?;
            let branch = self.refs().load()?.current().to_string();

            Ok(StatusReport { branch, info })
        })
    }

    /// Fail unless nothing is staged or modified
    ///
    /// Runs inside the caller's locked section.
    pub(crate) fn ensure_clean(&self, operation: &'static str) -> Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        let info = self.status().initialize(&index)?;
        if !info.is_clean() {
            tracing::debug!(
                staged = info.staged.len(),
                modified = info.modified.len(),
                "working tree is dirty"
            );
            return Err(SvcsError::DirtyWorkingTree(operation));
        }

        Ok(())
    }
}
