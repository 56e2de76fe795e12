pub mod analyzer;
pub mod boundary;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;
pub mod version_file;

pub use conventional::classify;
pub use domain::{increment, ChangeMagnitude, SemanticVersion};
pub use error::{Result, VerbumpError};
