//! Commit records
//!
//! A commit is an immutable snapshot of the staging area together with its
//! metadata:
//! - The commit message and author
//! - The creation timestamp
//! - The parent commit id (absent only for the root of the graph)
//! - The staged changes, keyed by relative path
//!
//! ## Identity
//!
//! A commit's id is the SHA-256 digest of its canonical JSON encoding. Field
//! order is fixed by the struct declaration and `changes` is an ordered map,
//! so identical content always yields an identical id.
//!
//! ## Format
//!
//! On disk (`.repo/commits/<id>.json`):
//! ```text
//! {
//!   "message": "first",
//!   "author": "alice",
//!   "timestamp": "2024-01-01T12:00:00Z",
//!   "parent": null,
//!   "changes": { "f.txt": { "hash": "<digest>", "timestamp": "..." } }
//! }
//! ```

use crate::artifacts::index::staging_entry::StagingEntry;
use crate::artifacts::objects::digest::{ContentHasher, Digest};
use crate::errors::Result;
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of staged changes, keyed by relative path
pub type Changes = BTreeMap<String, StagingEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct Commit {
    pub message: String,
    pub author: String,
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    pub parent: Option<Digest>,
    pub changes: Changes,
}

impl Commit {
    /// Compute the content-addressed id of this commit
    pub fn id(&self) -> Result<Digest> {
        let mut hasher = ContentHasher::new();
        serde_json::to_writer(&mut hasher, self)?;

        Ok(hasher.finalize())
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// First line of the commit message
    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Digest recorded for `path` in this commit's changes
    pub fn digest_of(&self, path: &str) -> Option<&Digest> {
        self.changes.get(path).map(|entry| &entry.digest)
    }

    /// Format the creation time for display
    ///
    /// # Returns
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.created_at
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }
}
