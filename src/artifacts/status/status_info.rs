use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::errors::{Result, SvcsError};
use derive_new::new;
use std::collections::BTreeSet;

pub type FileSet = BTreeSet<String>;

/// Working tree files grouped by their relation to the staging area
///
/// - `staged`: in the staging area and unchanged since staging
/// - `modified`: in the staging area but changed, deleted or no longer a
///   regular file since staging
/// - `untracked`: neither staged nor ignored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub staged: FileSet,
    pub modified: FileSet,
    pub untracked: FileSet,
}

impl StatusInfo {
    /// No staged or modified files; untracked files do not count
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty() && self.modified.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.is_clean() && self.untracked.is_empty()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl Status<'_> {
    pub fn initialize(&self, index: &Index) -> Result<StatusInfo> {
        let workspace = self.repository.workspace();
        let rules = workspace.ignore_rules()?;
        let mut status = StatusInfo::default();

        for (path, entry) in index.entries() {
            match workspace.hash_file(path) {
                Ok(digest) if digest == entry.digest => status.staged.insert(path.clone()),
                Ok(_) | Err(SvcsError::FileNotFound(_)) => status.modified.insert(path.clone()),
                // replaced by a directory or some other non-file entry
                Err(_) if !workspace.is_file(path) => status.modified.insert(path.clone()),
                Err(error) => return Err(error),
            };
        }

        status.untracked = workspace
            .list_files(&rules)
            .into_iter()
            .filter(|path| index.entry_by_path(path).is_none())
            .collect();

        Ok(status)
    }
}
