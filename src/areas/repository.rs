use crate::areas::database::Database;
use crate::areas::index::{Index, STAGING_FILE};
use crate::areas::lock::{LOCK_FILE, RepositoryLock};
use crate::areas::refs::{BRANCHES_FILE, Refs};
use crate::areas::workspace::{REPO_DIR, Workspace};
use crate::artifacts::objects::commit_graph::CommitGraph;
use crate::artifacts::objects::digest::Digest;
use crate::artifacts::status::status_info::Status;
use crate::config::Config;
use crate::errors::{Result, SvcsError};
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

pub struct Repository {
    path: Box<Path>,
    config: Config,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    lock: RepositoryLock,
}

impl Repository {
    /// Open the repository rooted at `path`, configured from the environment
    pub fn new(path: &Path) -> Result<Self> {
        Self::with_config(path, Config::from_env())
    }

    /// Open the repository rooted at `path`
    ///
    /// Nothing is read or written until an operation runs; `init` creates the
    /// root directory when it does not exist yet.
    pub fn with_config(path: &Path, config: Config) -> Result<Self> {
        let path = if path.exists() {
            path.canonicalize()?
        } else {
            std::path::absolute(path)?
        };
        let repo_path = path.join(REPO_DIR);

        let index = Index::new(repo_path.join(STAGING_FILE).into_boxed_path());
        let database = Database::new(repo_path.clone().into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(repo_path.join(BRANCHES_FILE).into_boxed_path());
        let lock = RepositoryLock::new(repo_path.join(LOCK_FILE).into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            config,
            index: RefCell::new(index),
            database,
            workspace,
            refs,
            lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path to the marker directory
    pub fn repo_path(&self) -> PathBuf {
        self.path.join(REPO_DIR)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn lock(&self) -> &RepositoryLock {
        &self.lock
    }

    pub fn graph(&self) -> CommitGraph<'_> {
        CommitGraph::new(&self.database)
    }

    pub fn status(&self) -> Status<'_> {
        Status::new(self)
    }

    pub fn is_initialized(&self) -> bool {
        self.repo_path().is_dir() && self.refs.path().is_file()
    }

    pub fn ensure_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(SvcsError::NotInitialized(self.path.to_path_buf()))
        }
    }

    /// Resolve a revision to a commit id
    ///
    /// A revision is a branch name, a full commit id or an unambiguous prefix
    /// of one. Branch names take precedence.
    pub fn resolve_commit(&self, revision: &str) -> Result<Digest> {
        let branches = self.refs.load()?;

        if branches.contains(revision) {
            return branches
                .head(revision)?
                .cloned()
                .ok_or_else(|| SvcsError::UnbornBranch(revision.to_string()));
        }

        if !Digest::is_valid_prefix(revision) {
            return Err(SvcsError::CommitNotFound(revision.to_string()));
        }

        let mut candidates = self.database.find_commits_by_prefix(revision)?;
        match candidates.len() {
            0 => Err(SvcsError::CommitNotFound(revision.to_string())),
            1 => Ok(candidates.remove(0)),
            _ => Err(SvcsError::AmbiguousCommit(revision.to_string())),
        }
    }

    /// Head of the current branch, failing when it has no commits yet
    pub fn require_current_head(&self) -> Result<Digest> {
        let branches = self.refs.load()?;

        branches
            .current_head()
            .cloned()
            .ok_or_else(|| SvcsError::UnbornBranch(branches.current().to_string()))
    }
}
