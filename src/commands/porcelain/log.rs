use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::digest::Digest;
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: Digest,
    pub commit: Commit,
}

impl Repository {
    /// History of `revision` (current head when omitted), newest first
    pub fn log(&self, revision: Option<&str>, max_count: Option<usize>) -> Result<Vec<LogEntry>> {
        self.ensure_initialized()?;

        self.lock().with_lock(LockMode::Shared, || {
            let start = match revision {
                Some(revision) => self.resolve_commit(revision)?,
                None => self.require_current_head()?,
            };

            let graph = self.graph();
            graph
                .ancestor_chain(&start)?
                .into_iter()
                .take(max_count.unwrap_or(usize::MAX))
                .map(|id| {
                    let commit = graph.get(&id)?;
                    Ok(LogEntry { id, commit })
                })
                .collect()
        })
    }
}
