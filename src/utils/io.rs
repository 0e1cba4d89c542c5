//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Write content to file with standardized error handling.
///
/// Wraps `fs::write` with consistent `Error::internal_io` formatting.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Create a single directory. The parent must exist and `dir` must not.
pub fn create_dir(dir: &Path, operation: &str) -> Result<()> {
    fs::create_dir(dir).map_err(|e| {
        Error::internal_io(
            format!("{}: {}", dir.display(), e),
            Some(operation.to_string()),
        )
    })
}

/// Recursively copy a directory tree.
///
/// `dst` is created; entries that already exist in `dst` are an error.
/// Symlinks are followed, so the copy holds their targets' contents.
/// A failure part way leaves whatever was copied so far in place.
pub fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    create_dir(dst, "create target dir")?;

    let entries = fs::read_dir(src).map_err(|e| {
        Error::internal_io(
            format!("{}: {}", src.display(), e),
            Some("read source dir".into()),
        )
    })?;

    for entry in entries {
        let entry =
            entry.map_err(|e| Error::internal_io(e.to_string(), Some("read dir entry".into())))?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        // Follows symlinks: a linked directory is copied as a directory.
        let metadata = fs::metadata(&src_path).map_err(|e| {
            Error::internal_io(
                format!("{}: {}", src_path.display(), e),
                Some("read file type".into()),
            )
        })?;

        if metadata.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            if dst_path.exists() {
                return Err(Error::internal_io(
                    format!("File exists: {}", dst_path.display()),
                    Some("copy file".into()),
                ));
            }
            fs::copy(&src_path, &dst_path).map_err(|e| {
                Error::internal_io(
                    format!("{}: {}", src_path.display(), e),
                    Some("copy file".into()),
                )
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(
            Path::new("/nonexistent/dir/file.txt"),
            "content",
            "test write",
        );
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn copy_dir_recursive_copies_nested_tree() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("sub/deeper")).unwrap();
        fs::write(src.join("top.xly"), "top").unwrap();
        fs::write(src.join("sub/deeper/leaf.txt"), "leaf").unwrap();

        let dst = temp.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("top.xly")).unwrap(), "top");
        assert_eq!(
            fs::read_to_string(dst.join("sub/deeper/leaf.txt")).unwrap(),
            "leaf"
        );
    }

    #[cfg(unix)]
    #[test]
    fn copy_dir_recursive_follows_symlinked_dirs_and_files() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("real")).unwrap();
        fs::write(src.join("real/f.txt"), "f").unwrap();
        std::os::unix::fs::symlink(src.join("real"), src.join("linked")).unwrap();
        std::os::unix::fs::symlink(src.join("real/f.txt"), src.join("g.txt")).unwrap();

        let dst = temp.path().join("dst");
        copy_dir_recursive(&src, &dst).unwrap();

        let linked = dst.join("linked");
        assert!(linked.is_dir());
        assert!(!fs::symlink_metadata(&linked).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(linked.join("f.txt")).unwrap(), "f");
        assert_eq!(fs::read_to_string(dst.join("g.txt")).unwrap(), "f");
    }

    #[test]
    fn copy_dir_recursive_refuses_existing_destination() {
        let temp = tempdir().unwrap();
        let src = temp.path().join("src");
        let dst = temp.path().join("dst");
        fs::create_dir(&src).unwrap();
        fs::create_dir(&dst).unwrap();

        let err = copy_dir_recursive(&src, &dst).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
