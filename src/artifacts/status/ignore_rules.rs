//! Ignore rules for the working tree
//!
//! Rules come from `.svcignore` at the tree root: one glob pattern per line,
//! blank lines and lines starting with `#` skipped. A trailing `/` is accepted
//! and ignored. Relative patterns match the trailing components of a path (so
//! `*.pyc` matches `a/b/c.pyc`); a pattern that matches a directory also
//! ignores everything beneath it. Patterns starting with `/` are anchored at
//! the tree root.
//!
//! The repository marker directory is always ignored, whatever the file says.

use glob::{MatchOptions, Pattern};

/// Name of the ignore file at the tree root
pub const IGNORE_FILE: &str = ".svcignore";

/// Content written by `init` when no ignore file exists yet
pub const DEFAULT_IGNORE_CONTENT: &str = "# Ignored files and directories\n.repo/\ntarget/\n__pycache__/\n*.pyc\n";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
struct Rule {
    pattern: Pattern,
    components: usize,
    anchored: bool,
}

#[derive(Debug, Clone)]
pub struct IgnoreRules {
    marker_dir: String,
    rules: Vec<Rule>,
}

impl IgnoreRules {
    /// Rules that only ignore the repository marker directory
    pub fn new(marker_dir: &str) -> Self {
        Self {
            marker_dir: marker_dir.to_string(),
            rules: Vec::new(),
        }
    }

    /// Parse the content of an ignore file
    ///
    /// Invalid patterns are skipped with a warning.
    pub fn parse(marker_dir: &str, content: &str) -> Self {
        let rules = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let anchored = line.starts_with('/');
                let line = line.trim_matches('/');

                match Pattern::new(line) {
                    Ok(pattern) => Some(Rule {
                        pattern,
                        components: line.split('/').count(),
                        anchored,
                    }),
                    Err(error) => {
                        tracing::warn!(pattern = line, %error, "skipping invalid ignore pattern");
                        None
                    }
                }
            })
            .collect();

        Self {
            marker_dir: marker_dir.to_string(),
            rules,
        }
    }

    /// Whether a `/`-separated path relative to the tree root is ignored
    pub fn is_ignored(&self, path: &str) -> bool {
        let components = path.split('/').filter(|c| !c.is_empty()).collect::<Vec<_>>();

        if components.first() == Some(&self.marker_dir.as_str()) {
            return true;
        }

        // check the path itself and every directory above it
        (1..=components.len()).any(|depth| {
            let prefix = &components[..depth];
            self.rules.iter().any(|rule| rule.matches(prefix))
        })
    }
}

impl Rule {
    fn matches(&self, components: &[&str]) -> bool {
        if components.len() < self.components || (self.anchored && components.len() != self.components) {
            return false;
        }

        let tail = components[components.len() - self.components..].join("/");
        self.pattern.matches_with(&tail, MATCH_OPTIONS)
    }
}
