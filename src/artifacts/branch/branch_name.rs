use crate::artifacts::branch::{CURRENT_KEY, INVALID_BRANCH_NAME_REGEX};
use crate::errors::{Result, SvcsError};
use regex::Regex;
use std::sync::LazyLock;

static INVALID_BRANCH_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INVALID_BRANCH_NAME_REGEX).expect("branch name regex is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BranchName(String);

impl BranchName {
    pub fn try_parse(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() || name == CURRENT_KEY || INVALID_BRANCH_NAME.is_match(&name) {
            return Err(SvcsError::InvalidBranchName(name));
        }

        Ok(Self(name))
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for BranchName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BranchName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
