//! Ancestor-chain traversal and common ancestor discovery
//!
//! Every commit has at most one parent, so the history reachable from a commit
//! is a single chain ending at the root. Two chains that were forked from a
//! shared point converge on a common suffix; the nearest common ancestor is
//! the first commit of one chain (newest-first) that also appears in the other.
//!
//! ## Algorithm Overview
//!
//! 1. Walk `parent` links from `a` up to the root and collect the ids.
//! 2. Walk `parent` links from `b`, newest-first, and return the first id
//!    already collected in step 1.
//!
//! A corrupted store could contain parent links that loop. Both walks track
//! visited ids and fail with [`SvcsError::CorruptedHistory`] instead of
//! looping forever.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let walker = AncestorWalker::new(|id| Ok(database.load_commit(id)?.parent));
//! let base = walker.common_ancestor(&ours, &theirs)?;
//! ```

use crate::artifacts::objects::digest::Digest;
use crate::errors::{Result, SvcsError};
use std::collections::HashSet;

/// Walks parent links using a caller-supplied lookup
///
/// The lookup returns the parent of the given commit (`None` for the root) and
/// fails with [`SvcsError::CommitNotFound`] when the commit cannot be loaded.
pub struct AncestorWalker<F>
where
    F: Fn(&Digest) -> Result<Option<Digest>>,
{
    parent_of: F,
}

impl<F> AncestorWalker<F>
where
    F: Fn(&Digest) -> Result<Option<Digest>>,
{
    pub fn new(parent_of: F) -> Self {
        Self { parent_of }
    }

    /// Ids from `start` up to the root, inclusive, newest-first
    pub fn chain(&self, start: &Digest) -> Result<Vec<Digest>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(start.clone());

        while let Some(id) = current {
            if !visited.insert(id.clone()) {
                return Err(SvcsError::CorruptedHistory(id));
            }

            current = (self.parent_of)(&id)?;
            chain.push(id);
        }

        tracing::debug!(start = %start.to_short(), length = chain.len(), "walked ancestor chain");

        Ok(chain)
    }

    /// Nearest commit reachable from both `a` and `b`
    ///
    /// Returns `None` when the two histories never join.
    pub fn common_ancestor(&self, a: &Digest, b: &Digest) -> Result<Option<Digest>> {
        let ancestors_of_a = self.chain(a)?.into_iter().collect::<HashSet<_>>();

        let base = self
            .chain(b)?
            .into_iter()
            .find(|id| ancestors_of_a.contains(id));

        tracing::debug!(
            a = %a.to_short(),
            b = %b.to_short(),
            base = ?base.as_ref().map(Digest::to_short),
            "searched common ancestor"
        );

        Ok(base)
    }
}
