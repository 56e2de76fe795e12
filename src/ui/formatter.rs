//! Pure formatting functions for UI output.
//!
//! Decorated output goes to stderr so stdout carries nothing but the new
//! version, which keeps `verbump bump` usable in command substitution.

use crate::boundary::BoundaryWarning;
use crate::domain::ChangeMagnitude;

const MAX_LISTED_COMMITS: usize = 10;
const MAX_SUBJECT_WIDTH: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("\x1b[32m✓\x1b[0m {}", message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("\x1b[33m→\x1b[0m {}", message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("\x1b[33m⚠ WARNING:\x1b[0m {}", warning);
}

/// Shorten a commit subject for listing, respecting char boundaries.
pub fn truncate_subject(subject: &str) -> &str {
    match subject.char_indices().nth(MAX_SUBJECT_WIDTH) {
        Some((index, _)) => &subject[..index],
        None => subject,
    }
}

/// Display the commits that were analysed.
///
/// Shows up to 10 subjects; if there are more, the remaining count.
///
/// # Arguments
/// * `commit_subjects` - Subjects of the analysed commits, newest first
/// * `last_tag` - Tag the analysis started from (None for the whole history)
pub fn display_commit_analysis(commit_subjects: &[String], last_tag: Option<&str>) {
    match last_tag {
        Some(tag) => eprintln!("\n\x1b[1mAnalyzing commits since '{}'\x1b[0m", tag),
        None => eprintln!("\n\x1b[1mAnalyzing all commits\x1b[0m"),
    }
    eprintln!("\x1b[4m{} commits:\x1b[0m", commit_subjects.len());

    for (i, subject) in commit_subjects.iter().take(MAX_LISTED_COMMITS).enumerate() {
        eprintln!("  {}. {}", i + 1, truncate_subject(subject));
    }

    if commit_subjects.len() > MAX_LISTED_COMMITS {
        eprintln!(
            "  ... and {} more commits",
            commit_subjects.len() - MAX_LISTED_COMMITS
        );
    }
}

/// Display the computed version change.
pub fn display_version_change(old_version: &str, new_version: &str, change: ChangeMagnitude) {
    eprintln!("\n\x1b[1mVersion Change ({}):\x1b[0m", change);
    eprintln!("  From: \x1b[31m{}\x1b[0m", old_version);
    eprintln!("  To:   \x1b[32m{}\x1b[0m", new_version);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_subject() {
        assert_eq!(truncate_subject("fix: y"), "fix: y");
    }

    #[test]
    fn test_truncate_long_subject() {
        let subject = "feat: ".to_string() + &"x".repeat(100);
        assert_eq!(truncate_subject(&subject).chars().count(), MAX_SUBJECT_WIDTH);
    }

    #[test]
    fn test_truncate_multibyte_subject() {
        let subject = "é".repeat(80);
        assert_eq!(truncate_subject(&subject), "é".repeat(MAX_SUBJECT_WIDTH));
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_boundary_warning(&BoundaryWarning::NoTagFound);
        display_commit_analysis(&vec!["fix: y".to_string(); 12], Some("v1.0.0"));
        display_version_change("1.2.3", "1.2.4", ChangeMagnitude::Patch);
    }
}
