use std::fmt;

/// Non-fatal conditions met while computing a bump.
/// These should be reported to the user but do not stop the bump.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No tag is reachable from HEAD, so the whole history was analysed
    NoTagFound,
    /// No new commits since the latest tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// Requested pre-release label differs from the current one; counter restarts at 0
    PreReleaseLabelChanged { from: String, to: String },
    /// A pre-release version was bumped without a label and becomes a release
    PreReleaseDropped { version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoTagFound => {
                write!(f, "No tag found, analysing the entire history")
            }
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                let short_hash = if current_commit_hash.len() > 7 {
                    &current_commit_hash[..7]
                } else {
                    current_commit_hash.as_str()
                };
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag, short_hash
                )
            }
            BoundaryWarning::PreReleaseLabelChanged { from, to } => {
                write!(
                    f,
                    "Pre-release label changed from '{}' to '{}', counter restarts at 0",
                    from, to
                )
            }
            BoundaryWarning::PreReleaseDropped { version } => {
                write!(
                    f,
                    "No pre-release label given, releasing '{}' as a final version",
                    version
                )
            }
        }
    }
}
