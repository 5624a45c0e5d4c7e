//! Object store
//!
//! Persists the immutable, content-addressed records of the repository:
//!
//! - Commits as pretty-printed JSON under `.repo/commits/<id>.json`
//! - Blobs (file contents) zlib-compressed under `.repo/blobs/<xx>/<rest>`
//!
//! It also provides the atomic record I/O used by the mutable metadata tables
//! (staging and branches): every write goes to a temporary file in the target
//! directory, is flushed to disk, then renamed over the destination, so a
//! reader never observes a half-written record.

use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::digest::Digest;
use crate::errors::{Result, SvcsError};
use bytes::Bytes;
use derive_new::new;
use fake::rand;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const COMMITS_DIR: &str = "commits";
pub const BLOBS_DIR: &str = "blobs";

const COMMIT_EXTENSION: &str = "json";

#[derive(Debug, new)]
pub struct Database {
    /// Path to the repository marker directory (typically `.repo`)
    path: Box<Path>,
}

impl Database {
    pub fn commits_path(&self) -> PathBuf {
        self.path.join(COMMITS_DIR)
    }

    pub fn blobs_path(&self) -> PathBuf {
        self.path.join(BLOBS_DIR)
    }

    fn commit_path(&self, id: &Digest) -> PathBuf {
        self.commits_path()
            .join(id.as_ref())
            .with_extension(COMMIT_EXTENSION)
    }

    /// Persist a commit and return its id
    ///
    /// Writing a commit that already exists is a no-op: the id fixes the content.
    pub fn store_commit(&self, commit: &Commit) -> Result<Digest> {
        let id = commit.id()?;
        let commit_path = self.commit_path(&id);

        if !commit_path.exists() {
            write_record(&commit_path, commit)?;
            tracing::debug!(commit = %id.to_short(), "stored commit");
        }

        Ok(id)
    }

    /// Load a commit and verify it still hashes to its id
    pub fn load_commit(&self, id: &Digest) -> Result<Commit> {
        let commit_path = self.commit_path(id);

        if !commit_path.is_file() {
            return Err(SvcsError::CommitNotFound(id.to_string()));
        }

        let commit: Commit = read_record(&commit_path)?;
        let actual = commit.id()?;

        if &actual != id {
            return Err(SvcsError::IntegrityMismatch {
                expected: id.clone(),
                actual,
            });
        }

        Ok(commit)
    }

    pub fn has_commit(&self, id: &Digest) -> bool {
        self.commit_path(id).is_file()
    }

    /// Ids of every stored commit, in no particular order
    pub fn list_commits(&self) -> Result<Vec<Digest>> {
        let commits_path = self.commits_path();
        if !commits_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut commits = Vec::new();
        for entry in std::fs::read_dir(&commits_path)? {
            let path = entry?.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some(COMMIT_EXTENSION) {
                continue;
            }

            if let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| Digest::try_parse(stem).ok())
            {
                commits.push(id);
            }
        }

        Ok(commits)
    }

    /// Find all commits whose id starts with the given prefix
    ///
    /// Used to resolve abbreviated ids. More than one match means the prefix
    /// is ambiguous.
    pub fn find_commits_by_prefix(&self, prefix: &str) -> Result<Vec<Digest>> {
        let prefix = prefix.to_ascii_lowercase();

        Ok(self
            .list_commits()?
            .into_iter()
            .filter(|id| id.as_ref().starts_with(&prefix))
            .collect())
    }

    /// Persist file content under its digest unless it is already stored
    pub fn store_blob(&self, digest: &Digest, data: &[u8]) -> Result<()> {
        let blob_path = self.blobs_path().join(digest.to_path());

        if blob_path.exists() {
            return Ok(());
        }

        write_atomic(&blob_path, &Self::compress(data)?)?;
        tracing::debug!(blob = %digest.to_short(), size = data.len(), "stored blob");

        Ok(())
    }

    /// Load file content stored under `digest`, if present
    pub fn load_blob(&self, digest: &Digest) -> Result<Option<Bytes>> {
        let blob_path = self.blobs_path().join(digest.to_path());

        if !blob_path.is_file() {
            return Ok(None);
        }

        let compressed = std::fs::read(&blob_path)?;
        Ok(Some(Self::decompress(&compressed)?))
    }

    /// Digests of every stored blob
    pub fn list_blobs(&self) -> Result<Vec<Digest>> {
        let blobs_path = self.blobs_path();
        if !blobs_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut blobs = Vec::new();
        for entry in WalkDir::new(&blobs_path).min_depth(2).max_depth(2) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            // blobs/<aa>/<rest> joins back into the full id
            let digest = entry
                .path()
                .strip_prefix(&blobs_path)
                .ok()
                .map(|relative| {
                    relative
                        .components()
                        .map(|component| component.as_os_str().to_string_lossy())
                        .collect::<String>()
                })
                .and_then(|id| Digest::try_parse(id).ok());

            match digest {
                Some(digest) => blobs.push(digest),
                None => tracing::debug!(path = %entry.path().display(), "skipping stray blob file"),
            }
        }

        Ok(blobs)
    }

    fn compress(data: &[u8]) -> Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;

        Ok(encoder.finish()?)
    }

    fn decompress(data: &[u8]) -> Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder.read_to_end(&mut decompressed_content)?;

        Ok(decompressed_content.into())
    }
}

/// Read a JSON record
pub(crate) fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read(path)?;

    Ok(serde_json::from_slice(&content)?)
}

/// Write a JSON record atomically
pub(crate) fn write_record<T: Serialize>(path: &Path, record: &T) -> Result<()> {
    let content = serde_json::to_vec_pretty(record)?;

    write_atomic(path, &content)
}

/// Write `content` to a temp file next to `path`, flush it, then rename it into place
pub(crate) fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let dir = path.parent().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("invalid record path {}", path.display()),
        )
    })?;
    std::fs::create_dir_all(dir)?;

    let temp_path = dir.join(generate_temp_name());
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;

    file.write_all(content)?;
    file.sync_all()?;
    drop(file);

    if let Err(error) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(error.into());
    }

    // make the rename itself durable
    #[cfg(unix)]
    std::fs::File::open(dir)?.sync_all()?;

    Ok(())
}

fn generate_temp_name() -> String {
    format!("tmp-rec-{}", rand::random::<u32>())
}
