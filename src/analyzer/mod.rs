//! Analysis engine for determining version changes from commits

pub mod version_analyzer;

pub use version_analyzer::{Analysis, VersionAnalyzer};
