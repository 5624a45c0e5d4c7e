//! Staging area records
//!
//! The staging table (`.repo/staging.json`) maps each relative path to the
//! digest and time it was staged:
//!
//! ```text
//! {
//!   "src/main.rs": { "hash": "<sha256>", "timestamp": "2024-01-01T12:00:00Z" }
//! }
//! ```
//!
//! The table is empty when nothing is staged and is cleared as the final step
//! of every successful commit.

pub mod staging_entry;
