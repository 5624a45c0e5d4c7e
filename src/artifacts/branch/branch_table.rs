//! Branch table record
//!
//! Persisted as `.repo/branches.json`: every branch name maps to its head
//! commit id (or `null` before the first commit) and the reserved `current`
//! key names the active branch.
//!
//! ```text
//! { "main": "<sha256>", "dev": null, "current": "main" }
//! ```
//!
//! Invariant: `current` always names an existing branch. Every mutation
//! below preserves it and [`BranchTable::validate`] checks it on load.

use crate::artifacts::branch::DEFAULT_BRANCH;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::digest::Digest;
use crate::errors::{Result, SvcsError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type BranchHeads = BTreeMap<String, Option<Digest>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchTable {
    #[serde(flatten)]
    heads: BranchHeads,
    current: String,
}

impl Default for BranchTable {
    fn default() -> Self {
        Self {
            heads: BranchHeads::from([(DEFAULT_BRANCH.to_string(), None)]),
            current: DEFAULT_BRANCH.to_string(),
        }
    }
}

impl BranchTable {
    pub fn validate(self) -> Result<Self> {
        if !self.heads.contains_key(&self.current) {
            return Err(SvcsError::InvalidBranchTable(format!(
                "current branch {} does not exist",
                self.current
            )));
        }

        Ok(self)
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn current_head(&self) -> Option<&Digest> {
        self.heads.get(&self.current).and_then(Option::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.heads.contains_key(name)
    }

    /// Head of `name`; `Ok(None)` when the branch exists but has no commits
    pub fn head(&self, name: &str) -> Result<Option<&Digest>> {
        self.heads
            .get(name)
            .map(Option::as_ref)
            .ok_or_else(|| SvcsError::BranchNotFound(name.to_string()))
    }

    /// Fork a new branch at the current branch's head
    pub fn create(&mut self, name: BranchName) -> Result<()> {
        if self.heads.contains_key(name.as_ref()) {
            return Err(SvcsError::BranchExists(name.into_inner()));
        }

        let head = self.current_head().cloned();
        self.heads.insert(name.into_inner(), head);

        Ok(())
    }

    pub fn set_current(&mut self, name: &str) -> Result<()> {
        if !self.heads.contains_key(name) {
            return Err(SvcsError::BranchNotFound(name.to_string()));
        }

        self.current = name.to_string();
        Ok(())
    }

    /// Advance the current branch to `commit_id`
    pub fn update_current_head(&mut self, commit_id: Digest) {
        self.heads.insert(self.current.clone(), Some(commit_id));
    }

    pub fn heads(&self) -> &BranchHeads {
        &self.heads
    }
}
