use crate::domain::{ChangeMagnitude, PreRelease};
use crate::error::{Result, VerbumpError};
use std::fmt;

const NUM_VERSION_PARTS: usize = 3;

/// Semantic version representation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Option<PreRelease>,
}

impl SemanticVersion {
    /// Create a new release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
            pre_release: None,
        }
    }

    /// Attach a pre-release component
    pub fn with_pre_release(mut self, pre_release: PreRelease) -> Self {
        self.pre_release = Some(pre_release);
        self
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Apply a change to the numeric triple. The result is always a release
    /// version; callers re-attach a pre-release if they need one.
    ///
    /// # Returns
    /// * `Ok(SemanticVersion)` - The bumped version
    /// * `Err` - If the component being incremented is already `u64::MAX`
    pub fn bump(&self, change: ChangeMagnitude) -> Result<Self> {
        let version = match change {
            ChangeMagnitude::Major => {
                SemanticVersion::new(next_component("major", self.major)?, 0, 0)
            }
            ChangeMagnitude::Minor => {
                SemanticVersion::new(self.major, next_component("minor", self.minor)?, 0)
            }
            ChangeMagnitude::Patch => SemanticVersion::new(
                self.major,
                self.minor,
                next_component("patch", self.patch)?,
            ),
            ChangeMagnitude::None => SemanticVersion::new(self.major, self.minor, self.patch),
        };
        Ok(version)
    }
}

fn next_component(component: &'static str, value: u64) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| VerbumpError::InvalidNumericComponent {
            component,
            value: value.to_string(),
        })
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }
        Ok(())
    }
}

/// Raw components of a version string, before any numeric parsing.
#[derive(Debug)]
struct VersionParts<'a> {
    major: &'a str,
    minor: &'a str,
    patch: &'a str,
    /// Existing pre-release label and its unparsed counter, if the version carries one
    pre_release: Option<(&'a str, &'a str)>,
}

/// Split a version on `.` and `-`, dropping empty fields.
///
/// A fourth field is a pre-release label and must be followed by its counter.
fn split_version(version: &str) -> Result<VersionParts<'_>> {
    let parts: Vec<&str> = version
        .split(['.', '-'])
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() < NUM_VERSION_PARTS {
        return Err(VerbumpError::InvalidFormat(version.to_string()));
    }

    let pre_release = match parts.get(3..) {
        Some([]) | None => None,
        Some([_label]) => {
            return Err(VerbumpError::InvalidPreReleaseCounter(version.to_string()));
        }
        Some([label, counter, ..]) => Some((*label, *counter)),
    };

    Ok(VersionParts {
        major: parts[0],
        minor: parts[1],
        patch: parts[2],
        pre_release,
    })
}

fn parse_component(component: &'static str, value: &str) -> Result<u64> {
    value
        .parse::<u64>()
        .map_err(|_| VerbumpError::InvalidNumericComponent {
            component,
            value: value.to_string(),
        })
}

/// Computes the next version from the current one.
///
/// A version that already carries a pre-release component keeps its numeric
/// triple whatever `change` says; only the pre-release counter moves. Without a
/// label the result is a plain release, so an existing pre-release is dropped.
///
/// # Arguments
/// * `current_version` - Version to bump (e.g., "1.2.3" or "0.5.1-beta.0")
/// * `change` - Magnitude derived from the commits
/// * `pre_release_label` - Label to append; `None` or empty for a release
///
/// # Returns
/// * `Ok(SemanticVersion)` - The next version
/// * `Err` - If the current version or its pre-release counter can't be parsed,
///   or the incremented component would overflow
///
/// # Example
/// ```
/// use verbump::domain::{increment, ChangeMagnitude};
///
/// let next = increment("0.5.0", ChangeMagnitude::Patch, Some("beta")).unwrap();
/// assert_eq!(next.to_string(), "0.5.1-beta.0");
///
/// let next = increment("0.5.1-beta.0", ChangeMagnitude::Minor, Some("beta")).unwrap();
/// assert_eq!(next.to_string(), "0.5.1-beta.1");
/// ```
pub fn increment(
    current_version: &str,
    change: ChangeMagnitude,
    pre_release_label: Option<&str>,
) -> Result<SemanticVersion> {
    let parts = split_version(current_version)?;

    let change = if parts.pre_release.is_some() {
        ChangeMagnitude::None
    } else {
        change
    };

    let current = SemanticVersion::new(
        parse_component("major", parts.major)?,
        parse_component("minor", parts.minor)?,
        parse_component("patch", parts.patch)?,
    );
    let next = current.bump(change)?;

    let label = match pre_release_label.filter(|label| !label.is_empty()) {
        Some(label) => label,
        None => return Ok(next),
    };

    let pre_release = match parts.pre_release {
        Some((existing_label, counter)) if existing_label == label => {
            let counter = counter
                .parse::<u64>()
                .map_err(|_| VerbumpError::InvalidPreReleaseCounter(counter.to_string()))?;
            PreRelease::new(label, counter).increment_counter()?
        }
        _ => PreRelease::start(label),
    };

    Ok(next.with_pre_release(pre_release))
}

/// Label of the pre-release carried by `version`, if any.
///
/// Returns `None` for malformed versions too; `increment` reports those.
pub fn pre_release_label(version: &str) -> Option<&str> {
    split_version(version)
        .ok()
        .and_then(|parts| parts.pre_release.map(|(label, _)| label))
}

/// Strip a tag prefix such as `v` to get the version it names.
pub fn version_from_tag<'a>(tag: &'a str, prefix: &str) -> &'a str {
    tag.strip_prefix(prefix).unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bumped(version: &str, change: ChangeMagnitude, label: Option<&str>) -> String {
        increment(version, change, label).unwrap().to_string()
    }

    #[test]
    fn test_increment_major() {
        assert_eq!(bumped("1.2.3", ChangeMagnitude::Major, None), "2.0.0");
    }

    #[test]
    fn test_increment_minor() {
        assert_eq!(bumped("1.2.3", ChangeMagnitude::Minor, None), "1.3.0");
    }

    #[test]
    fn test_increment_patch() {
        assert_eq!(bumped("1.2.3", ChangeMagnitude::Patch, None), "1.2.4");
    }

    #[test]
    fn test_increment_none_is_identity() {
        for version in ["0.0.0", "1.2.3", "10.20.30"] {
            assert_eq!(bumped(version, ChangeMagnitude::None, None), version);
        }
    }

    #[test]
    fn test_fresh_pre_release() {
        assert_eq!(
            bumped("0.5.0", ChangeMagnitude::Patch, Some("beta")),
            "0.5.1-beta.0"
        );
    }

    #[test]
    fn test_pre_release_counter_increments() {
        assert_eq!(
            bumped("0.5.1-beta.0", ChangeMagnitude::None, Some("beta")),
            "0.5.1-beta.1"
        );
    }

    #[test]
    fn test_existing_pre_release_pins_triple() {
        assert_eq!(
            bumped("0.5.1-beta.1", ChangeMagnitude::Major, Some("beta")),
            "0.5.1-beta.2"
        );
        assert_eq!(
            bumped("0.5.1-beta.1", ChangeMagnitude::Minor, None),
            "0.5.1"
        );
    }

    #[test]
    fn test_release_drops_pre_release() {
        assert_eq!(bumped("1.0.0-beta.3", ChangeMagnitude::None, None), "1.0.0");
    }

    #[test]
    fn test_empty_label_means_release() {
        assert_eq!(bumped("1.0.0-beta.3", ChangeMagnitude::None, Some("")), "1.0.0");
    }

    #[test]
    fn test_label_change_resets_counter() {
        assert_eq!(
            bumped("1.0.0-alpha.4", ChangeMagnitude::Minor, Some("beta")),
            "1.0.0-beta.0"
        );
    }

    #[test]
    fn test_too_few_parts_is_invalid_format() {
        let err = increment("1.2", ChangeMagnitude::Major, None).unwrap_err();
        assert!(matches!(err, VerbumpError::InvalidFormat(ref v) if v == "1.2"));
        assert!(matches!(
            increment("", ChangeMagnitude::None, None),
            Err(VerbumpError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        assert_eq!(bumped("1..2.3", ChangeMagnitude::Patch, None), "1.2.4");
    }

    #[test]
    fn test_non_numeric_component() {
        let err = increment("1.x.3", ChangeMagnitude::Major, None).unwrap_err();
        assert!(matches!(
            err,
            VerbumpError::InvalidNumericComponent { component: "minor", ref value } if value == "x"
        ));
        assert!(matches!(
            increment("v1.2.3", ChangeMagnitude::Patch, None),
            Err(VerbumpError::InvalidNumericComponent { component: "major", .. })
        ));
    }

    #[test]
    fn test_invalid_pre_release_counter() {
        assert!(matches!(
            increment("1.0.0-beta.x", ChangeMagnitude::None, Some("beta")),
            Err(VerbumpError::InvalidPreReleaseCounter(ref c)) if c == "x"
        ));
    }

    #[test]
    fn test_missing_pre_release_counter() {
        for label in [Some("beta"), Some("rc"), None] {
            assert!(
                matches!(
                    increment("1.0.0-beta", ChangeMagnitude::Patch, label),
                    Err(VerbumpError::InvalidPreReleaseCounter(ref v)) if v == "1.0.0-beta"
                ),
                "label {:?} should not hide the missing counter",
                label
            );
        }
    }

    #[test]
    fn test_major_overflow_is_error() {
        let err = increment("18446744073709551615.0.0", ChangeMagnitude::Major, None).unwrap_err();
        assert!(matches!(
            err,
            VerbumpError::InvalidNumericComponent { component: "major", ref value }
                if value == "18446744073709551615"
        ));
    }

    #[test]
    fn test_minor_and_patch_overflow_are_errors() {
        assert!(matches!(
            increment("1.18446744073709551615.0", ChangeMagnitude::Minor, None),
            Err(VerbumpError::InvalidNumericComponent { component: "minor", .. })
        ));
        assert!(matches!(
            increment("1.0.18446744073709551615", ChangeMagnitude::Patch, None),
            Err(VerbumpError::InvalidNumericComponent { component: "patch", .. })
        ));
        // Nothing is incremented, so the largest value is still fine.
        assert_eq!(
            bumped("18446744073709551615.0.0", ChangeMagnitude::None, None),
            "18446744073709551615.0.0"
        );
    }

    #[test]
    fn test_pre_release_counter_overflow_is_error() {
        assert!(matches!(
            increment("1.0.0-beta.18446744073709551615", ChangeMagnitude::None, Some("beta")),
            Err(VerbumpError::InvalidPreReleaseCounter(ref c)) if c == "18446744073709551615"
        ));
    }

    #[test]
    fn test_display_with_pre_release() {
        let v = SemanticVersion::new(1, 2, 3).with_pre_release(PreRelease::new("rc", 2));
        assert_eq!(v.to_string(), "1.2.3-rc.2");
        assert!(v.is_pre_release());
    }

    #[test]
    fn test_pre_release_label() {
        assert_eq!(pre_release_label("1.0.0-beta.3"), Some("beta"));
        assert_eq!(pre_release_label("1.0.0"), None);
        assert_eq!(pre_release_label("1.0"), None);
        assert_eq!(pre_release_label("1.0.0-beta"), None);
    }

    #[test]
    fn test_version_from_tag() {
        assert_eq!(version_from_tag("v1.2.3", "v"), "1.2.3");
        assert_eq!(version_from_tag("1.2.3", "v"), "1.2.3");
        assert_eq!(version_from_tag("release-1.2.3", "release-"), "1.2.3");
    }
}
