use crate::artifacts::objects::digest::{ContentHasher, Digest};
use crate::artifacts::status::ignore_rules::{IGNORE_FILE, IgnoreRules};
use crate::errors::{Result, SvcsError};
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Name of the repository marker directory at the tree root
pub const REPO_DIR: &str = ".repo";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn ignore_file_path(&self) -> PathBuf {
        self.path.join(IGNORE_FILE)
    }

    /// Load the ignore rules from `.svcignore`, if present
    pub fn ignore_rules(&self) -> Result<IgnoreRules> {
        let ignore_file = self.ignore_file_path();

        if !ignore_file.is_file() {
            return Ok(IgnoreRules::new(REPO_DIR));
        }

        let content = std::fs::read_to_string(ignore_file)?;
        Ok(IgnoreRules::parse(REPO_DIR, &content))
    }

    /// Every regular, non-ignored file under the tree root, as relative keys
    pub fn list_files(&self, rules: &IgnoreRules) -> Vec<String> {
        WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                Self::relative_key(&self.path, entry.path())
                    .is_some_and(|key| !rules.is_ignored(&key))
            })
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| Self::relative_key(&self.path, entry.path()))
            .collect()
    }

    /// Resolve a user-supplied path to its `/`-separated key relative to the root
    ///
    /// Relative paths are taken relative to the tree root. The path does not
    /// need to exist, but it must stay inside the tree.
    pub fn resolve(&self, path: &Path) -> Result<String> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        };

        // follow symlinks when possible so canonical roots compare equal
        let absolute = absolute.canonicalize().unwrap_or(absolute);
        let normalized = Self::normalize(&absolute);

        let key = Self::relative_key(&self.path, &normalized)
            .ok_or_else(|| SvcsError::PathOutsideRepository(path.to_path_buf()))?;

        // the tree root itself
        if key.is_empty() {
            return Err(SvcsError::NotAFile(path.to_path_buf()));
        }

        Ok(key)
    }

    /// Check that `key` names a regular file that may be staged
    pub fn check_stageable(&self, key: &str, rules: &IgnoreRules) -> Result<()> {
        let absolute = self.path.join(key);

        if !absolute.exists() {
            return Err(SvcsError::FileNotFound(PathBuf::from(key)));
        }
        if !absolute.is_file() {
            return Err(SvcsError::NotAFile(PathBuf::from(key)));
        }
        if rules.is_ignored(key) {
            return Err(SvcsError::IgnoredFile(PathBuf::from(key)));
        }

        Ok(())
    }

    /// Whether `key` currently names a regular file
    pub fn is_file(&self, key: &str) -> bool {
        self.path.join(key).is_file()
    }

    pub fn read_file(&self, key: &str) -> Result<Bytes> {
        let file_path = self.path.join(key);

        match std::fs::read(&file_path) {
            Ok(content) => Ok(content.into()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                Err(SvcsError::FileNotFound(PathBuf::from(key)))
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn hash_file(&self, key: &str) -> Result<Digest> {
        let content = self.read_file(key)?;

        Ok(ContentHasher::hash(&content))
    }

    /// Write `content` at `key`, creating parent directories as needed
    pub fn write_file(&self, key: &str, content: &[u8]) -> Result<()> {
        let file_path = self.path.join(key);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(file_path, content)?;

        Ok(())
    }

    fn relative_key(root: &Path, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(root).ok()?;

        let components = relative
            .components()
            .map(|component| match component {
                Component::Normal(name) => name.to_str().map(str::to_string),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()?;

        Some(components.join("/"))
    }

    /// Lexically resolve `.` and `..` components
    fn normalize(path: &Path) -> PathBuf {
        path.components()
            .fold(PathBuf::new(), |mut normalized, component| {
                match component {
                    Component::CurDir => {}
                    Component::ParentDir => {
                        normalized.pop();
                    }
                    other => normalized.push(other),
                }
                normalized
            })
    }
}
