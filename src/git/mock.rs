use crate::error::{Result, VerbumpError};
use crate::git::{pathspecs, CommitInfo, Repository};

/// Mock repository for testing without actual git operations
///
/// History is linear: commits are recorded oldest first and a tag marks the
/// commit that was most recent when it was added.
pub struct MockRepository {
    commits: Vec<(CommitInfo, Vec<String>)>,
    tags: Vec<(String, usize)>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Record a commit touching `paths` on top of the current history
    pub fn add_commit(&mut self, subject: impl Into<String>, paths: &[&str]) {
        let index = self.commits.len() + 1;
        self.commits.push((
            CommitInfo {
                hash: format!("{:040x}", index),
                subject: subject.into(),
                author: "Test Author".to_string(),
            },
            paths.iter().map(|p| p.to_string()).collect(),
        ));
    }

    /// Tag the current tip
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push((name.into(), self.commits.len()));
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn touches(paths: &[String], specs: &[String]) -> bool {
    paths.iter().any(|path| {
        specs
            .iter()
            .any(|spec| path == spec || path.starts_with(&format!("{}/", spec)))
    })
}

impl Repository for MockRepository {
    fn last_tag(&self) -> Result<Option<String>> {
        Ok(self.tags.last().map(|(name, _)| name.clone()))
    }

    fn commits_since(&self, tag: Option<&str>, paths: &[String]) -> Result<Vec<CommitInfo>> {
        let start = match tag {
            Some(name) => self
                .tags
                .iter()
                .find(|(tag_name, _)| tag_name == name)
                .map(|(_, position)| *position)
                .ok_or_else(|| VerbumpError::tag(format!("Tag not found: {}", name)))?,
            None => 0,
        };

        let specs = pathspecs(paths);

        Ok(self.commits[start..]
            .iter()
            .rev()
            .filter(|(_, touched)| specs.is_empty() || touches(touched, &specs))
            .map(|(info, _)| info.clone())
            .collect())
    }

    fn head_hash(&self) -> Result<String> {
        self.commits
            .last()
            .map(|(info, _)| info.hash.clone())
            .ok_or_else(|| VerbumpError::tag("Repository has no commits"))
    }
}
