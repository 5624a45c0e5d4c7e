//! Content-addressed objects
//!
//! Everything the repository stores immutably is identified by a SHA-256
//! digest:
//!
//! - **Blob**: raw file content, keyed by the digest of its bytes
//! - **Commit**: a snapshot of the staging area with message, author,
//!   timestamp and parent link, keyed by the digest of its canonical encoding
//!
//! - `digest`: the digest type and the hasher producing it
//! - `commit`: the commit record
//! - `commit_graph`: commit creation and ancestry traversal

pub mod commit;
pub mod commit_graph;
pub mod digest;

/// Length of a SHA-256 digest in hexadecimal format
pub const DIGEST_LENGTH: usize = 64;
