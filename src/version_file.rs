//! Reading and writing the file that stores the current version.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Read the version stored in `path`, without surrounding whitespace.
pub fn read_version(path: &Path) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.trim().to_string())
}

/// Replace the contents of `path` with `version`. No trailing newline is written.
pub fn write_version(path: &Path, version: &str) -> Result<()> {
    fs::write(path, version)?;
    Ok(())
}
