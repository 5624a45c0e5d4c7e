//! Repository-wide advisory lock
//!
//! Every porcelain operation runs while holding a lock on `.repo/lock`:
//! exclusive for operations that write metadata, shared for read-only ones.
//! Acquisition blocks until the lock is available.
//!
//! Locks are taken once per operation, at the entry point. The underlying
//! `fcntl` locks are per process, so nested acquisitions on the same file would
//! release the outer lock when the inner file handle is closed.

use crate::errors::Result;
use derive_new::new;
use file_guard::Lock;
use std::path::Path;

pub const LOCK_FILE: &str = "lock";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    Shared,
    Exclusive,
}

impl From<LockMode> for Lock {
    fn from(mode: LockMode) -> Self {
        match mode {
            LockMode::Shared => Lock::Shared,
            LockMode::Exclusive => Lock::Exclusive,
        }
    }
}

#[derive(Debug, new)]
pub struct RepositoryLock {
    /// Path to the lock file (typically `.repo/lock`)
    path: Box<Path>,
}

impl RepositoryLock {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `operation` while holding the lock in the given mode
    pub fn with_lock<T>(&self, mode: LockMode, operation: impl FnOnce() -> Result<T>) -> Result<T> {
        let mut lock_file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;
        let _guard = file_guard::lock(&mut lock_file, mode.into(), 0, 1)?;

        tracing::trace!(?mode, "acquired repository lock");

        operation()
    }
}
