use crate::areas::lock::LockMode;
use crate::areas::repository::Repository;
use crate::artifacts::objects::digest::Digest;
use crate::errors::{Result, SvcsError};
use bytes::Bytes;
use std::path::{Path, PathBuf};

impl Repository {
    /// Content of `path` as recorded at `revision` (current head when omitted)
    ///
    /// The path must be among the changes recorded by that commit itself.
    /// Content comes from the blob store; when the blob is missing the working
    /// tree copy is used.
    pub fn get_file_content(&self, path: &Path, revision: Option<&str>) -> Result<Bytes> {
        self.ensure_initialized()?;

        self.lock().with_lock(LockMode::Shared, || {
            let key = self.workspace().resolve(path)?;
            let commit_id = match revision {
                Some(revision) => self.resolve_commit(revision)?,
                None => self.require_current_head()?,
            };

            let commit = self.graph().get(&commit_id)?;
            let digest = commit.digest_of(&key).ok_or_else(|| SvcsError::FileNotInCommit {
                path: PathBuf::from(&key),
                commit: commit_id.clone(),
            })?;

            self.recorded_content(&key, digest)?
                .ok_or_else(|| SvcsError::FileNotFound(PathBuf::from(&key)))
        })
    }

    /// Stored bytes for `digest`, falling back to the working tree file at `key`
    pub(crate) fn recorded_content(&self, key: &str, digest: &Digest) -> Result<Option<Bytes>> {
        if let Some(content) = self.database().load_blob(digest)? {
            return Ok(Some(content));
        }

        tracing::debug!(path = key, blob = %digest.to_short(), "blob missing, reading working tree");

        match self.workspace().read_file(key) {
            Ok(content) => Ok(Some(content)),
            Err(SvcsError::FileNotFound(_)) => Ok(None),
            Err(error) => Err(error),
        }
    }
}
