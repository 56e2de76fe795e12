use crate::error::VerbumpError;
use std::fmt;
use std::str::FromStr;

/// Size of the version change implied by a set of commits.
///
/// Variants are declared in severity order so the derived `Ord` gives
/// `None < Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ChangeMagnitude {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl FromStr for ChangeMagnitude {
    type Err = VerbumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(ChangeMagnitude::None),
            "patch" | "fix" => Ok(ChangeMagnitude::Patch),
            "minor" | "feature" | "feat" => Ok(ChangeMagnitude::Minor),
            "major" | "breaking" => Ok(ChangeMagnitude::Major),
            _ => Err(VerbumpError::InvalidChangeType(s.to_string())),
        }
    }
}

impl fmt::Display for ChangeMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeMagnitude::None => write!(f, "none"),
            ChangeMagnitude::Patch => write!(f, "patch"),
            ChangeMagnitude::Minor => write!(f, "minor"),
            ChangeMagnitude::Major => write!(f, "major"),
        }
    }
}
