//! Content digests (SHA-256)
//!
//! A [`Digest`] is the fingerprint of a byte sequence, rendered as 64 lowercase
//! hexadecimal characters. It identifies both file contents (blobs) and
//! commits, whose id is the digest of their canonical serialized form.
//!
//! ## Storage
//!
//! Blobs are stored under `.repo/blobs/<first-2-chars>/<remaining-62-chars>`,
//! commits under `.repo/commits/<digest>.json`.

use crate::artifacts::objects::DIGEST_LENGTH;
use crate::errors::{Result, SvcsError};
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::io;
use std::path::PathBuf;

/// Number of characters shown for abbreviated digests
const SHORT_LENGTH: usize = 8;

/// SHA-256 fingerprint of some content
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digest(String);

impl Digest {
    /// Parse and validate a digest from its hexadecimal form
    pub fn try_parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();

        if id.len() != DIGEST_LENGTH || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(SvcsError::InvalidDigest(id));
        }

        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Whether `prefix` could abbreviate a digest
    pub fn is_valid_prefix(prefix: &str) -> bool {
        !prefix.is_empty()
            && prefix.len() <= DIGEST_LENGTH
            && prefix.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// Split the digest as `XX/YYYY...` for fan-out storage
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    pub fn to_short(&self) -> String {
        self.0[..SHORT_LENGTH].to_string()
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Digest {
    type Error = SvcsError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::try_parse(value)
    }
}

impl From<Digest> for String {
    fn from(value: Digest) -> Self {
        value.0
    }
}

/// Incremental SHA-256 hasher producing [`Digest`]s
///
/// Implements [`io::Write`] so serializers can stream straight into it.
#[derive(Debug, Clone, Default)]
pub struct ContentHasher {
    hasher: Sha256,
}

impl ContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hash a complete byte sequence in one call
    pub fn hash(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    pub fn update(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    pub fn finalize(self) -> Digest {
        Digest(hex::encode(self.hasher.finalize()))
    }
}

impl io::Write for ContentHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
