//! User interface module - output for the bump command.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Summaries built from a workflow outcome

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_commit_analysis, display_error, display_status,
    display_success, display_version_change,
};

use crate::cli::orchestration::BumpOutcome;

/// Print everything the user should know about a finished bump.
///
/// Warnings and the summary go to stderr; the new version alone is printed on
/// stdout.
pub fn display_outcome(outcome: &BumpOutcome, dry_run: bool) {
    for warning in &outcome.warnings {
        display_boundary_warning(warning);
    }

    display_commit_analysis(&outcome.commit_subjects, outcome.last_tag.as_deref());
    display_version_change(
        &outcome.previous_version,
        &outcome.new_version.to_string(),
        outcome.change,
    );

    match (&outcome.version_file, outcome.written) {
        (Some(path), true) => display_success(&format!(
            "Wrote {} to {}",
            outcome.new_version,
            path.display()
        )),
        (Some(path), false) if dry_run => display_status(&format!(
            "Dry run: {} left untouched",
            path.display()
        )),
        _ => {}
    }

    println!("{}", outcome.new_version);
}
