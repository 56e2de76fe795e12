//! Git operations abstraction layer
//!
//! The bump workflow only needs two things from version control: the most
//! recent release tag, and the commits made since it. Both are behind the
//! [Repository] trait so the workflow can run against a real repository
//! ([repository::Git2Repository]) or an in-memory one ([mock::MockRepository]).
//!
//! ```rust
//! # use verbump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> verbump::Result<()> {
//! let tag = repo.last_tag()?;
//! let commits = repo.commits_since(tag.as_deref(), &["services/api".to_string()])?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Commit information for analysis
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The full commit hash
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
    /// The commit author
    pub author: String,
}

/// Read-only view of the version-control history
pub trait Repository {
    /// Most recent tag reachable from HEAD
    ///
    /// Equivalent to `git describe --tags --abbrev=0`.
    ///
    /// # Returns
    /// * `Ok(Some(name))` - Name of the nearest tag
    /// * `Ok(None)` - If no tag is reachable from HEAD
    /// * `Err` - If there's a Git error
    fn last_tag(&self) -> Result<Option<String>>;

    /// Commits reachable from HEAD but not from `tag`, newest first
    ///
    /// # Arguments
    /// * `tag` - Lower bound (exclusive); `None` walks the whole history
    /// * `paths` - Only keep commits touching one of these paths, relative to
    ///   the directory the repository was opened from. An empty slice, or one
    ///   holding `.`, keeps every commit under that directory.
    ///
    /// # Returns
    /// * `Ok(Vec<CommitInfo>)` - Matching commits
    /// * `Err` - If the tag can't be resolved or there's a Git error
    fn commits_since(&self, tag: Option<&str>, paths: &[String]) -> Result<Vec<CommitInfo>>;

    /// Full hash of the HEAD commit
    fn head_hash(&self) -> Result<String>;
}

/// Strip `./` and trailing slashes; `None` when the path names the root.
fn normalize(path: &str) -> Option<&str> {
    let trimmed = path.trim();
    let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);
    let trimmed = trimmed.trim_end_matches('/');

    if trimmed.is_empty() || trimmed == "." {
        None
    } else {
        Some(trimmed)
    }
}

/// Normalize include paths into pathspecs.
///
/// `./services/api/` becomes `services/api`. Returns an empty list when any
/// entry names the repository root, since that matches every commit anyway.
pub fn pathspecs(paths: &[String]) -> Vec<String> {
    let mut specs = Vec::new();

    for path in paths {
        match normalize(path) {
            Some(spec) => specs.push(spec.to_string()),
            None => return Vec::new(),
        }
    }

    specs
}

/// Pathspecs for include paths given relative to `prefix`, a `/`-separated
/// folder inside the work tree. An empty prefix is the work tree root.
///
/// Inside a prefix, `.` (or no path at all) means the prefix itself.
pub fn scoped_pathspecs(prefix: &str, paths: &[String]) -> Vec<String> {
    if prefix.is_empty() {
        return pathspecs(paths);
    }

    if paths.is_empty() {
        return vec![prefix.to_string()];
    }

    paths
        .iter()
        .map(|path| match normalize(path) {
            Some(spec) => format!("{}/{}", prefix, spec),
            None => prefix.to_string(),
        })
        .collect()
}
