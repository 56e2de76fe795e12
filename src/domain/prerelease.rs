//! Pre-release component of a version
//!
//! A pre-release is always written as `label.counter` (e.g. `beta.2`), where the
//! counter is scoped to the label: bumping with the same label increments it,
//! switching labels starts again from 0.

use crate::error::{Result, VerbumpError};
use std::fmt;

/// Pre-release label with its counter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreRelease {
    /// The pre-release label (e.g. "alpha", "beta", "rc")
    pub label: String,
    /// Number of pre-releases cut under this label, starting at 0
    pub counter: u64,
}

impl PreRelease {
    /// Create a new pre-release
    pub fn new(label: impl Into<String>, counter: u64) -> Self {
        PreRelease {
            label: label.into(),
            counter,
        }
    }

    /// Start a fresh pre-release series for `label`
    pub fn start(label: impl Into<String>) -> Self {
        PreRelease::new(label, 0)
    }

    /// Next pre-release in the same series
    ///
    /// Fails with [VerbumpError::InvalidPreReleaseCounter] once the counter is exhausted.
    pub fn increment_counter(&self) -> Result<Self> {
        let counter = self
            .counter
            .checked_add(1)
            .ok_or_else(|| VerbumpError::InvalidPreReleaseCounter(self.counter.to_string()))?;

        Ok(PreRelease {
            label: self.label.clone(),
            counter,
        })
    }

    /// Check that a label can be written into a version string.
    ///
    /// Labels may only contain ASCII letters and digits. `.` and `-` separate
    /// version components, so a label containing either could not be read back.
    ///
    /// # Returns
    /// * `Ok(())` - Label is usable
    /// * `Err` - If the label is empty or contains other characters
    pub fn validate_label(label: &str) -> Result<()> {
        if label.is_empty() || !label.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(VerbumpError::InvalidPreReleaseLabel(label.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for PreRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.label, self.counter)
    }
}
