//! User-facing repository operations
//!
//! Each operation is an `impl Repository` block that checks the repository is
//! initialized, takes the repository lock, and returns a typed result for the
//! binary to render.
//!
//! - `init`: create the marker directory and empty tables
//! - `add`: stage files, storing their content
//! - `commit`: record the staged snapshot on the current branch
//! - `status`: staged, modified and untracked files
//! - `branch`: create and list branches
//! - `switch`: change the current branch on a clean tree
//! - `merge`: three-way conflict analysis against another branch
//! - `clone`: copy a repository and check out its current branch
//! - `show`: file content at a commit
//! - `log`: commit history

pub mod add;
pub mod branch;
pub mod clone;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod show;
pub mod status;
pub mod switch;

#[cfg(test)]
pub(crate) mod fixtures;
