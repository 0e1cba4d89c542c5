//! Input validation primitives.
//!
//! Path preconditions checked before any filesystem mutation. `role` names
//! the argument the path came from (e.g. `DST-DIR`) and is echoed in errors.

use std::path::Path;

use crate::error::{Error, Result};

/// Require `path` to be an existing regular file.
pub fn require_file(path: &Path, role: &str) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::setup_not_a_file(role, path.display().to_string()))
    }
}

/// Require `path` to be an existing directory.
pub fn require_dir(path: &Path, role: &str) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::setup_not_a_directory(role, path.display().to_string()))
    }
}

/// Require nothing to exist at `path`, not even a dangling symlink.
pub fn require_absent(path: &Path, role: &str) -> Result<()> {
    if path.symlink_metadata().is_ok() {
        Err(Error::destination_exists(role, path.display().to_string()))
    } else {
        Ok(())
    }
}

/// Require an existing directory to write into.
pub fn require_existing_dir(path: &Path, role: &str) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::destination_not_a_directory(
            role,
            path.display().to_string(),
        ))
    }
}

/// Require a non-empty string argument.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    if value.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn require_file_accepts_file_rejects_dir() {
        let file = NamedTempFile::new().unwrap();
        assert!(require_file(file.path(), "CASES-FILE").is_ok());

        let dir = tempdir().unwrap();
        let err = require_file(dir.path(), "CASES-FILE").unwrap_err();
        assert_eq!(err.code.as_str(), "setup.not_a_file");
    }

    #[test]
    fn require_dir_rejects_missing() {
        let dir = tempdir().unwrap();
        let err = require_dir(&dir.path().join("missing"), "TEMPLATE-DIR").unwrap_err();
        assert_eq!(err.code.as_str(), "setup.not_a_directory");
        assert!(err.message.starts_with("TEMPLATE-DIR: Not a dir: "));
    }

    #[test]
    fn require_absent_rejects_existing_file_and_dir() {
        let dir = tempdir().unwrap();
        assert!(require_absent(dir.path(), "DST-DIR").is_err());

        let file = NamedTempFile::new().unwrap();
        assert!(require_absent(file.path(), "DST-DIR").is_err());

        assert!(require_absent(&dir.path().join("fresh"), "DST-DIR").is_ok());
    }

    #[test]
    fn require_existing_dir_rejects_missing() {
        let dir = tempdir().unwrap();
        assert!(require_existing_dir(dir.path(), "DST-DIR").is_ok());

        let err = require_existing_dir(&dir.path().join("nope"), "DST-DIR").unwrap_err();
        assert_eq!(err.code.as_str(), "destination.not_a_directory");
    }

    #[test]
    fn require_non_empty_rejects_empty() {
        assert_eq!(require_non_empty("x", "f", "m").unwrap(), "x");
        assert!(require_non_empty("", "f", "m").is_err());
    }
}
