//! Staging entry representation
//!
//! Each entry records the digest of a file's content at the moment it was
//! staged. Entries are keyed by their relative path in the staging table and
//! copied verbatim into the `changes` of the next commit.

use crate::artifacts::objects::digest::Digest;
use chrono::{DateTime, Utc};
use derive_new::new;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct StagingEntry {
    #[serde(rename = "hash")]
    pub digest: Digest,
    #[serde(rename = "timestamp")]
    pub staged_at: DateTime<Utc>,
}

impl StagingEntry {
    pub fn staged_now(digest: Digest) -> Self {
        Self::new(digest, Utc::now())
    }
}
