use crate::error::{Result, VerbumpError};
use crate::git::{scoped_pathspecs, CommitInfo};
use git2::{
    Commit, DescribeFormatOptions, DescribeOptions, DiffOptions, ErrorCode,
    Repository as Git2Repo, Sort,
};
use std::fs;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    /// Folder the repository was opened from, relative to the work tree root,
    /// `/`-separated. Empty at the root.
    prefix: String,
}

impl Git2Repository {
    /// Open or discover a git repository
    ///
    /// Include paths passed to `commits_since` are resolved against `path`,
    /// which may be a folder inside the work tree.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path)?;
        let prefix = match repo.workdir() {
            Some(workdir) => work_tree_prefix(workdir, path)?,
            None => String::new(),
        };
        tracing::debug!(prefix = %prefix, "opened repository");

        Ok(Git2Repository { repo, prefix })
    }

    /// Create from existing git2::Repository, scoped to its work tree root
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo,
            prefix: String::new(),
        }
    }

    /// Whether the commit's diff against its first parent touches any pathspec
    fn touches_paths(&self, commit: &Commit<'_>, specs: &[String]) -> Result<bool> {
        let tree = commit.tree()?;
        let parent_tree = if commit.parent_count() > 0 {
            Some(commit.parent(0)?.tree()?)
        } else {
            None
        };

        let mut options = DiffOptions::new();
        for spec in specs {
            options.pathspec(spec);
        }

        let diff =
            self.repo
                .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut options))?;

        Ok(diff.deltas().len() > 0)
    }
}

/// `/`-joined components of `path` below `workdir`.
fn work_tree_prefix(workdir: &Path, path: &Path) -> Result<String> {
    let workdir = fs::canonicalize(workdir)?;
    let path = fs::canonicalize(path)?;

    let components: Vec<String> = path
        .strip_prefix(&workdir)
        .map(|relative| {
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();

    Ok(components.join("/"))
}

impl super::Repository for Git2Repository {
    fn last_tag(&self) -> Result<Option<String>> {
        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = match self.repo.describe(&options) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound => {
                tracing::debug!("no tag reachable from HEAD: {}", e);
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        Ok(Some(describe.format(Some(&format))?))
    }

    fn commits_since(&self, tag: Option<&str>, paths: &[String]) -> Result<Vec<CommitInfo>> {
        let specs = scoped_pathspecs(&self.prefix, paths);

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;

        if let Some(tag) = tag {
            let tagged = self
                .repo
                .find_reference(&format!("refs/tags/{}", tag))
                .and_then(|reference| reference.peel_to_commit())
                .map_err(|e| VerbumpError::tag(format!("Cannot resolve tag '{}': {}", tag, e)))?;
            revwalk.hide(tagged.id())?;
        }

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let commit = self.repo.find_commit(oid_result?)?;

            if !specs.is_empty() && !self.touches_paths(&commit, &specs)? {
                continue;
            }

            let subject = commit.summary().unwrap_or_default().to_string();
            let author = commit.author().name().unwrap_or("unknown").to_string();

            commits.push(CommitInfo {
                hash: commit.id().to_string(),
                subject,
                author,
            });
        }

        tracing::debug!(
            tag = tag.unwrap_or("<none>"),
            paths = ?specs,
            count = commits.len(),
            "collected commits"
        );

        Ok(commits)
    }

    fn head_hash(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;
        Ok(head.id().to_string())
    }
}
