// crates/prepare_destination/src/lib.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DestinationError {
    #[error(
        "The destination already appears to exist. To ensure this tool works correctly, \
         please choose a destination that does not yet exist: {}",
        .0.display()
    )]
    AlreadyExists(PathBuf),
    #[error("Failed to create project directory {}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Returns true if anything at all lives at `path`, including a dangling symlink.
pub fn destination_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Creates the project directory at `destination`.
///
/// Refuses (without touching the file system) when the path is already taken.
/// Only the last path component is created; a missing parent is an error.
/// Returns the absolute path of the new directory.
pub fn prepare_destination(destination: &Path) -> Result<PathBuf, DestinationError> {
    if destination_exists(destination) {
        return Err(DestinationError::AlreadyExists(destination.to_path_buf()));
    }

    // Shown by `--verbose` in the CLI.
    info!(target: "progress", "Making new project directory.");
    fs::create_dir(destination).map_err(|source| DestinationError::Create {
        path: destination.to_path_buf(),
        source,
    })?;

    fs::canonicalize(destination).map_err(|source| DestinationError::Create {
        path: destination.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("site");

        let created = prepare_destination(&dest).unwrap();
        assert!(dest.is_dir());
        assert!(created.is_absolute());
        assert_eq!(created, fs::canonicalize(&dest).unwrap());
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
    }

    #[test]
    fn test_existing_directory_is_refused_untouched() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("site");
        fs::create_dir(&dest).unwrap();
        fs::write(dest.join("keep.txt"), "keep").unwrap();

        let err = prepare_destination(&dest).unwrap_err();
        assert!(matches!(err, DestinationError::AlreadyExists(_)));
        assert!(err.to_string().contains("already appears to exist"));
        assert_eq!(fs::read_to_string(dest.join("keep.txt")).unwrap(), "keep");
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 1);
    }

    #[test]
    fn test_existing_file_is_refused() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("site");
        fs::write(&dest, "not a dir").unwrap();

        let err = prepare_destination(&dest).unwrap_err();
        assert!(matches!(err, DestinationError::AlreadyExists(_)));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "not a dir");
    }

    #[test]
    #[cfg(unix)]
    fn test_dangling_symlink_counts_as_existing() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("site");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &dest).unwrap();

        assert!(destination_exists(&dest));
        assert!(matches!(
            prepare_destination(&dest),
            Err(DestinationError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_missing_parent_is_create_error() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("missing").join("site");

        let err = prepare_destination(&dest).unwrap_err();
        assert!(matches!(err, DestinationError::Create { .. }));
        assert!(!dir.path().join("missing").exists());
    }
}
