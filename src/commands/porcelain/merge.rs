use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::merge::three_way::{MergeOutcome, ThreeWayMerge};
use crate::artifacts::objects::digest::Digest;
use crate::errors::{Result, SvcsError};

/// Result of analysing a merge of `source` into the current branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub source: String,
    pub target: String,
    pub base: Digest,
    pub outcome: MergeOutcome,
}

impl Repository {
    /// Classify every path touched by either branch tip as merged or conflicting
    ///
    /// Nothing is written: no files, no commit. A clean merge still needs a
    /// follow-up commit by the caller.
    pub fn merge_branch(&self, source: &str) -> Result<MergeReport> {
        self.ensure_initialized()?;

        self.lock().with_lock(LockMode::Exclusive, || {
            let branches = self.refs().load()?;
            let source_head = branches.head(source)?.cloned();
            let target = branches.current().to_string();

            if source == target {
                return Err(SvcsError::SelfMerge(source.to_string()));
            }
            self.ensure_clean("merge")?;

            let (source_head, target_head) = match (source_head, branches.current_head()) {
                (Some(source_head), Some(target_head)) => (source_head, target_head.clone()),
                _ => {
                    return Err(SvcsError::NoCommonAncestor {
                        ours: target,
                        theirs: source.to_string(),
                    });
                }
            };

            let graph = self.graph();
            let base = graph.common_ancestor(&source_head, &target_head)?;

            let base_commit = graph.get(&base)?;
            let source_commit = graph.get(&source_head)?;
            let target_commit = graph.get(&target_head)?;
            let outcome = ThreeWayMerge::new(&base_commit, &source_commit, &target_commit).outcome();

            tracing::info!(
                source,
                target = %target,
                base = %base.to_short(),
                merged = outcome.merged.len(),
                conflicts = outcome.conflicts.len(),
                "analysed merge"
            );

            Ok(MergeReport {
                source: source.to_string(),
                target,
                base,
                outcome,
            })
        })
    }
}
