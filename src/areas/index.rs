//! Staging area
//!
//! The staging area tracks which file versions go into the next commit. It
//! maps relative paths to [`StagingEntry`] records and is persisted as
//! `.repo/staging.json`.
//!
//! ## Lifecycle
//!
//! - `rehydrate`: load the table from disk at the start of an operation
//! - `add`: insert or overwrite the entry of a path
//! - `snapshot`: copy of the entries handed to the commit graph
//! - `clear`: empty the table, only as the final step of a successful commit
//! - `write_updates`: persist the table atomically

use crate::areas::database::{read_record, write_record};
use crate::artifacts::index::staging_entry::StagingEntry;
use crate::artifacts::objects::commit::Changes;
use crate::artifacts::objects::digest::Digest;
use crate::errors::Result;
use std::path::Path;

pub const STAGING_FILE: &str = "staging.json";

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the staging file (typically `.repo/staging.json`)
    path: Box<Path>,
    /// Staged files mapped by relative path
    entries: Changes,
    /// Flag indicating if the table has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Changes::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the staging table from disk
    ///
    /// A missing file is treated as an empty table.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries = if self.path.exists() {
            read_record(&self.path)?
        } else {
            Changes::new()
        };
        self.changed = false;

        tracing::debug!(entries = self.entries.len(), "loaded staging area");

        Ok(())
    }

    /// Stage `digest` for `path`, overwriting any previous entry
    pub fn add(&mut self, path: String, digest: Digest) {
        self.entries.insert(path, StagingEntry::staged_now(digest));
        self.changed = true;
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&StagingEntry> {
        self.entries.get(path)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &StagingEntry)> {
        self.entries.iter()
    }

    pub fn snapshot(&self) -> Changes {
        self.entries.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.changed = true;
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn write_updates(&mut self) -> Result<()> {
        write_record(&self.path, &self.entries)?;
        self.changed = false;

        Ok(())
    }
}
