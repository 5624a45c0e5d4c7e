//! Error taxonomy for repository operations
//!
//! Every operation exposed by [`crate::areas::repository::Repository`] returns
//! a [`SvcsError`] variant the caller can match on. The binary maps them to a
//! non-zero exit status and a message on stderr.

use crate::artifacts::objects::digest::Digest;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SvcsError>;

#[derive(Debug, Error)]
pub enum SvcsError {
    #[error("not a repository: {}", .0.display())]
    NotInitialized(PathBuf),

    #[error("repository already exists at {}", .0.display())]
    AlreadyInitialized(PathBuf),

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("file is ignored: {}", .0.display())]
    IgnoredFile(PathBuf),

    #[error("path is outside the repository: {}", .0.display())]
    PathOutsideRepository(PathBuf),

    #[error("no changes staged for commit")]
    EmptyStaging,

    #[error("commit not found: {0}")]
    CommitNotFound(String),

    #[error("commit prefix {0} is ambiguous")]
    AmbiguousCommit(String),

    #[error("file {} not found in commit {}", .path.display(), .commit.to_short())]
    FileNotInCommit { path: PathBuf, commit: Digest },

    #[error("branch already exists: {0}")]
    BranchExists(String),

    #[error("branch not found: {0}")]
    BranchNotFound(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("branch {0} has no commits yet")]
    UnbornBranch(String),

    #[error("branch table is invalid: {0}")]
    InvalidBranchTable(String),

    #[error("cannot merge branch {0} into itself")]
    SelfMerge(String),

    #[error("cannot {0} with uncommitted changes")]
    DirtyWorkingTree(&'static str),

    #[error("no common ancestor found between {ours} and {theirs}")]
    NoCommonAncestor { ours: String, theirs: String },

    #[error("destination {} exists and is not an empty directory", .0.display())]
    DestinationNotEmpty(PathBuf),

    #[error("invalid digest: {0}")]
    InvalidDigest(String),

    #[error("commit history is corrupted: parent cycle reached {0}")]
    CorruptedHistory(Digest),

    #[error("commit {expected} is corrupted: its content hashes to {actual}")]
    IntegrityMismatch { expected: Digest, actual: Digest },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed record: {0}")]
    Serialization(#[from] serde_json::Error),
}

