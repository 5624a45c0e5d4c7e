//! A minimal snapshot-based version control engine
//!
//! Tracks snapshots of a working tree as immutable, content-addressed commits
//! linked by parent pointers, with named branches pointing into that history.
//!
//! - `areas`: the persisted state of a repository and the facade over it
//! - `artifacts`: data types and algorithms (digests, commits, merge analysis)
//! - `commands`: the user-facing operations
//! - `config`, `errors`, `logging`: ambient concerns

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging;
