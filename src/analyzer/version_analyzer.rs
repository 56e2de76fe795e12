use crate::conventional::classify;
use crate::domain::ChangeMagnitude;
use crate::error::Result;
use crate::git::{CommitInfo, Repository};

/// Commits since the last release and the change they imply
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub last_tag: Option<String>,
    /// Newest first
    pub commits: Vec<CommitInfo>,
    pub change: ChangeMagnitude,
}

impl Analysis {
    pub fn subjects(&self) -> Vec<String> {
        self.commits.iter().map(|c| c.subject.clone()).collect()
    }
}

/// Analyzes commits to determine the version change
pub struct VersionAnalyzer {
    include: Vec<String>,
}

impl VersionAnalyzer {
    /// Create a new version analyzer scoped to `include` paths
    pub fn new(include: Vec<String>) -> Self {
        VersionAnalyzer { include }
    }

    /// Analyze the commits made since the last tag reachable from HEAD
    pub fn analyze_repository<R: Repository>(&self, repo: &R) -> Result<Analysis> {
        let last_tag = repo.last_tag()?;
        let commits = repo.commits_since(last_tag.as_deref(), &self.include)?;
        let change = classify(
            &commits
                .iter()
                .map(|c| c.subject.as_str())
                .collect::<Vec<_>>(),
        );

        tracing::debug!(
            last_tag = last_tag.as_deref().unwrap_or("<none>"),
            commits = commits.len(),
            %change,
            "analyzed repository"
        );

        Ok(Analysis {
            last_tag,
            commits,
            change,
        })
    }
}
