//! Conventional commit classification
//!
//! Only the `fix` and `feat` types move the version. A `!` before the colon on
//! either of them marks a breaking change.

use std::sync::LazyLock;

use regex::Regex;

pub use crate::domain::ChangeMagnitude;

static BREAKING_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(?:fix|feat)(?:\([^)]+\))?!:").ok());

static FEATURE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^feat(?:\([^)]+\))?!?:").ok());

static FIX_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^fix(?:\([^)]+\))?!?:").ok());

/// A pattern that failed to compile never matches.
fn is_match(pattern: &Option<Regex>, message: &str) -> bool {
    pattern
        .as_ref()
        .is_some_and(|regex| regex.is_match(message))
}

/// Classify a single commit subject.
pub fn classify_message(message: &str) -> ChangeMagnitude {
    if is_match(&BREAKING_PATTERN, message) {
        ChangeMagnitude::Major
    } else if is_match(&FEATURE_PATTERN, message) {
        ChangeMagnitude::Minor
    } else if is_match(&FIX_PATTERN, message) {
        ChangeMagnitude::Patch
    } else {
        ChangeMagnitude::None
    }
}

/// Determines the version change implied by a set of commit subjects.
///
/// Any breaking change wins outright and stops the scan. Otherwise a feature
/// beats a fix, and subjects that are neither contribute nothing. Order of the
/// input does not matter.
///
/// # Example
/// ```
/// use verbump::conventional::{classify, ChangeMagnitude};
///
/// assert_eq!(classify(&["feat: add x", "fix: y"]), ChangeMagnitude::Minor);
/// assert_eq!(classify(&["chore: cleanup"]), ChangeMagnitude::None);
/// ```
pub fn classify<S: AsRef<str>>(commit_messages: &[S]) -> ChangeMagnitude {
    let mut has_features = false;
    let mut has_fixes = false;

    for message in commit_messages {
        match classify_message(message.as_ref()) {
            ChangeMagnitude::Major => return ChangeMagnitude::Major,
            ChangeMagnitude::Minor => has_features = true,
            ChangeMagnitude::Patch => has_fixes = true,
            ChangeMagnitude::None => {}
        }
    }

    if has_features {
        ChangeMagnitude::Minor
    } else if has_fixes {
        ChangeMagnitude::Patch
    } else {
        ChangeMagnitude::None
    }
}
