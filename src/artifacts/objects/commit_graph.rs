//! Commit graph
//!
//! Creation of commit records and traversal of their parent links, on top of
//! the object store. Commits are immutable once written; the graph never
//! rewrites or deletes them.

use crate::areas::database::Database;
use crate::artifacts::merge::common_ancestor::AncestorWalker;
use crate::artifacts::objects::commit::{Changes, Commit};
use crate::artifacts::objects::digest::Digest;
use crate::errors::{Result, SvcsError};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(new)]
pub struct CommitGraph<'d> {
    database: &'d Database,
}

impl CommitGraph<'_> {
    /// Persist a new commit over `snapshot` and return its id
    ///
    /// Only the commit record is written. Moving the branch pointer and
    /// clearing the staging area are left to the caller, so a crash in between
    /// leaves an unreferenced commit and nothing worse.
    pub fn commit(
        &self,
        message: String,
        author: String,
        created_at: DateTime<Utc>,
        snapshot: Changes,
        parent: Option<Digest>,
    ) -> Result<Digest> {
        if snapshot.is_empty() {
            return Err(SvcsError::EmptyStaging);
        }

        let commit = Commit::new(message, author, created_at, parent, snapshot);
        let commit_id = self.database.store_commit(&commit)?;

        tracing::info!(
            commit = %commit_id.to_short(),
            files = commit.changes.len(),
            root = commit.is_root(),
            "created commit"
        );

        Ok(commit_id)
    }

    pub fn get(&self, commit_id: &Digest) -> Result<Commit> {
        self.database.load_commit(commit_id)
    }

    /// Ids from `commit_id` up to the root, newest-first
    pub fn ancestor_chain(&self, commit_id: &Digest) -> Result<Vec<Digest>> {
        self.walker().chain(commit_id)
    }

    /// Nearest commit in the history of both `a` and `b`
    pub fn common_ancestor(&self, a: &Digest, b: &Digest) -> Result<Digest> {
        self.walker()
            .common_ancestor(a, b)?
            .ok_or_else(|| SvcsError::NoCommonAncestor {
                ours: a.to_short(),
                theirs: b.to_short(),
            })
    }

    /// Files recorded anywhere in the history of `commit_id`
    ///
    /// Each commit only records the files staged for it, so the tree checked
    /// out for a commit is the union of the changes along its chain, newer
    /// entries taking precedence. Lookups of a single commit's content use
    /// that commit's own `changes` instead.
    pub fn tree_at(&self, commit_id: &Digest) -> Result<Changes> {
        let mut tree = Changes::new();

        for id in self.ancestor_chain(commit_id)? {
            for (path, entry) in self.get(&id)?.changes {
                tree.entry(path).or_insert(entry);
            }
        }

        Ok(tree)
    }

    fn walker(&self) -> AncestorWalker<impl Fn(&Digest) -> Result<Option<Digest>> + '_> {
        AncestorWalker::new(|id: &Digest| Ok(self.database.load_commit(id)?.parent))
    }
}
