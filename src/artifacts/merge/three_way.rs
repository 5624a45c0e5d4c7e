//! Three-way merge classification
//!
//! Given the tip commit of the branch being merged (`source`), the tip of the
//! current branch (`target`) and their common ancestor (`base`), every path
//! recorded in either tip is classified using its digest on each side (a path
//! absent from a commit has no digest):
//!
//! | source vs base | target vs base | source vs target | result   |
//! |----------------|----------------|------------------|----------|
//! | changed        | changed        | different        | conflict |
//! | any other combination                              || merged   |
//!
//! The classification is metadata only: no file content is merged or written
//! and no commit is created.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::digest::Digest;
use derive_new::new;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Merged,
    Conflict,
}

impl Resolution {
    /// Classify one path from its digest at the base and on both sides
    pub fn classify(
        base: Option<&Digest>,
        source: Option<&Digest>,
        target: Option<&Digest>,
    ) -> Self {
        if source != base && target != base && source != target {
            Resolution::Conflict
        } else {
            Resolution::Merged
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub merged: BTreeSet<String>,
    pub conflicts: BTreeSet<String>,
}

impl MergeOutcome {
    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty()
    }
}

#[derive(new)]
pub struct ThreeWayMerge<'c> {
    base: &'c Commit,
    source: &'c Commit,
    target: &'c Commit,
}

impl ThreeWayMerge<'_> {
    pub fn outcome(&self) -> MergeOutcome {
        let paths = self
            .source
            .changes
            .keys()
            .chain(self.target.changes.keys())
            .collect::<BTreeSet<_>>();

        paths
            .into_iter()
            .fold(MergeOutcome::default(), |mut outcome, path| {
                let resolution = Resolution::classify(
                    self.base.digest_of(path),
                    self.source.digest_of(path),
                    self.target.digest_of(path),
                );

                match resolution {
                    Resolution::Conflict => outcome.conflicts.insert(path.clone()),
                    Resolution::Merged => outcome.merged.insert(path.clone()),
                };

                outcome
            })
    }
}
