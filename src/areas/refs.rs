//! Branch references
//!
//! Branches are mutable, human-readable names pointing at commits. All of them
//! live in a single table, `.repo/branches.json`, together with the name of
//! the current branch:
//!
//! ```text
//! { "main": "<sha256>", "dev": null, "current": "main" }
//! ```
//!
//! The table is read, modified and written back as a whole; callers hold the
//! repository lock across that sequence.

use crate::areas::database::{read_record, write_record};
use crate::artifacts::branch::branch_table::BranchTable;
use crate::errors::Result;
use derive_new::new;
use std::path::Path;

pub const BRANCHES_FILE: &str = "branches.json";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the branch table (typically `.repo/branches.json`)
    path: Box<Path>,
}

impl Refs {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the branch table
    pub fn load(&self) -> Result<BranchTable> {
        let table: BranchTable = read_record(&self.path)?;

        table.validate()
    }

    pub fn save(&self, table: &BranchTable) -> Result<()> {
        write_record(&self.path, table)?;
        tracing::debug!(current = table.current(), "saved branch table");

        Ok(())
    }
}
