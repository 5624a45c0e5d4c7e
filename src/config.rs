//! Environment-driven configuration
//!
//! | Variable           | Meaning                                         |
//! |--------------------|-------------------------------------------------|
//! | `SVCS_AUTHOR_NAME` | commit author (fallback `USER`, then `unknown`) |
//! | `SVCS_AUTHOR_DATE` | fixed commit timestamp, RFC 3339 or git-style   |
//! | `SVCS_LOG`         | log filter (fallback `RUST_LOG`, then `warn`)   |

use chrono::{DateTime, Utc};

pub const AUTHOR_NAME_VAR: &str = "SVCS_AUTHOR_NAME";
pub const AUTHOR_DATE_VAR: &str = "SVCS_AUTHOR_DATE";
pub const LOG_VAR: &str = "SVCS_LOG";

const DEFAULT_AUTHOR: &str = "unknown";
const DEFAULT_LOG_FILTER: &str = "warn";
const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub author_name: String,
    pub author_date: Option<DateTime<Utc>>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author_name: DEFAULT_AUTHOR.to_string(),
            author_date: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Log filter alone, so logging can be installed before the rest is read
    pub fn log_filter_from_env() -> String {
        Self::log_filter_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn log_filter_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> String {
        non_empty(&lookup, LOG_VAR)
            .or_else(|| non_empty(&lookup, "RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| non_empty(&lookup, key);

        let author_name = var(AUTHOR_NAME_VAR)
            .or_else(|| var("USER"))
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string());

        let author_date = var(AUTHOR_DATE_VAR).and_then(|raw| {
            let parsed = parse_date(&raw);
            if parsed.is_none() {
                tracing::warn!(value = %raw, "ignoring unparsable {}", AUTHOR_DATE_VAR);
            }
            parsed
        });

        let log_filter = Self::log_filter_from_lookup(&lookup);

        Self {
            author_name,
            author_date,
            log_filter,
        }
    }

    /// Timestamp for a new commit
    pub fn commit_time(&self) -> DateTime<Utc> {
        self.author_date.unwrap_or_else(Utc::now)
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}

fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, GIT_DATE_FORMAT))
        .map(|date| date.with_timezone(&Utc))
        .ok()
}
