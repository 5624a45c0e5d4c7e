//! Working tree status inspection
//!
//! This module provides functionality for analyzing the state of the working
//! directory by comparing it against the staging area.
//!
//! ## Components
//!
//! - `ignore_rules`: `.svcignore` parsing and path matching
//! - `status_info`: classification of files into staged, modified and untracked

pub mod ignore_rules;
pub mod status_info;
