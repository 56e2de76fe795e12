//! Bump workflow orchestration
//!
//! Keeps the bump pipeline separate from CLI argument parsing so it can be
//! driven programmatically, and against any [Repository] implementation.

use std::path::PathBuf;

use crate::analyzer::VersionAnalyzer;
use crate::boundary::BoundaryWarning;
use crate::domain::{
    increment, pre_release_label, version_from_tag, ChangeMagnitude, PreRelease, SemanticVersion,
};
use crate::error::{Result, VerbumpError};
use crate::git::Repository;
use crate::version_file::{read_version, write_version};

/// Arguments for the bump workflow
///
/// Settings are already resolved: CLI flags merged over the configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Subfolders whose commits are analysed
    pub include: Vec<String>,

    /// File holding the current version; rewritten with the new one
    pub version_file: Option<PathBuf>,

    /// Explicit current version, taking precedence over the version file
    pub current_version: Option<String>,

    /// Pre-release label to append
    pub pre_release: Option<String>,

    /// Forced change, skipping commit classification
    pub change: Option<ChangeMagnitude>,

    /// Prefix stripped from the last tag when it is the version source
    pub tag_prefix: String,

    /// Compute only, never write the version file
    pub dry_run: bool,
}

impl Default for BumpWorkflowArgs {
    fn default() -> Self {
        BumpWorkflowArgs {
            include: vec![".".to_string()],
            version_file: None,
            current_version: None,
            pre_release: None,
            change: None,
            tag_prefix: "v".to_string(),
            dry_run: false,
        }
    }
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub previous_version: String,
    pub new_version: SemanticVersion,
    pub change: ChangeMagnitude,
    pub last_tag: Option<String>,
    /// Subjects of the analysed commits, newest first
    pub commit_subjects: Vec<String>,
    pub version_file: Option<PathBuf>,
    /// Whether the version file was rewritten
    pub written: bool,
    pub warnings: Vec<BoundaryWarning>,
}

/// Main bump workflow
///
/// 1. Validate the pre-release label
/// 2. Collect the commits since the last tag and classify them
/// 3. Resolve the current version
/// 4. Increment it and, unless this is a dry run, write it back
pub fn run_bump_workflow<R: Repository>(repo: &R, args: &BumpWorkflowArgs) -> Result<BumpOutcome> {
    let label = args.pre_release.as_deref().filter(|label| !label.is_empty());
    if let Some(label) = label {
        PreRelease::validate_label(label)?;
    }

    let mut warnings = Vec::new();

    let analysis = VersionAnalyzer::new(args.include.clone()).analyze_repository(repo)?;
    match &analysis.last_tag {
        None => warnings.push(BoundaryWarning::NoTagFound),
        Some(tag) if analysis.commits.is_empty() => {
            warnings.push(BoundaryWarning::NoNewCommits {
                latest_tag: tag.clone(),
                current_commit_hash: repo.head_hash()?,
            });
        }
        Some(_) => {}
    }

    let change = match args.change {
        Some(forced) => {
            tracing::debug!(%forced, detected = %analysis.change, "change overridden");
            forced
        }
        None => analysis.change,
    };

    let previous_version = resolve_current_version(args, analysis.last_tag.as_deref())?;
    let new_version = increment(&previous_version, change, label)?;

    if let Some(existing) = pre_release_label(&previous_version) {
        match label {
            Some(label) if label != existing => {
                warnings.push(BoundaryWarning::PreReleaseLabelChanged {
                    from: existing.to_string(),
                    to: label.to_string(),
                });
            }
            None => warnings.push(BoundaryWarning::PreReleaseDropped {
                version: new_version.to_string(),
            }),
            Some(_) => {}
        }
    }

    let written = match &args.version_file {
        Some(path) if !args.dry_run => {
            write_version(path, &new_version.to_string())?;
            tracing::debug!(path = %path.display(), "version file updated");
            true
        }
        _ => false,
    };

    Ok(BumpOutcome {
        commit_subjects: analysis.subjects(),
        previous_version,
        new_version,
        change,
        last_tag: analysis.last_tag,
        version_file: args.version_file.clone(),
        written,
        warnings,
    })
}

/// Current version from, in order: the explicit value, the version file, the last tag.
fn resolve_current_version(args: &BumpWorkflowArgs, last_tag: Option<&str>) -> Result<String> {
    if let Some(version) = &args.current_version {
        return Ok(version.trim().to_string());
    }

    if let Some(path) = &args.version_file {
        return read_version(path);
    }

    if let Some(tag) = last_tag {
        return Ok(version_from_tag(tag, &args.tag_prefix).to_string());
    }

    Err(VerbumpError::version_source(
        "no version file, explicit version or tag to read the current version from",
    ))
}
