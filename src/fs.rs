//! Common file system operations shared by the bootstrap and the resource mirror

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

/// Errors raised by [`copy_tree`]
#[derive(Error, Debug)]
pub enum CopyTreeError {
    #[error("source '{}' is not a readable directory: {source}", path.display())]
    SourceUnavailable { path: PathBuf, source: io::Error },

    #[error("destination '{}' already exists", path.display())]
    DestinationExists { path: PathBuf },

    #[error("failed to copy '{}': {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Create a directory and all of its parents.
///
/// A directory that already exists counts as success, so calling this twice
/// never fails the second time. A non-directory at `path` is still an error.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(_) if path.is_dir() => Ok(()),
        Err(e) => Err(e),
    }
}

/// Copy the directory `src` to `dst` recursively, returning the number of
/// files copied.
///
/// `dst` itself must not exist yet: the copy never merges into an existing
/// tree, and reports [`CopyTreeError::DestinationExists`] instead. Parents of
/// `dst` are created as needed.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<usize, CopyTreeError> {
    let metadata = fs::metadata(src).map_err(|source| CopyTreeError::SourceUnavailable {
        path: src.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(CopyTreeError::SourceUnavailable {
            path: src.to_path_buf(),
            source: io::Error::other("not a directory"),
        });
    }

    if let Some(parent) = dst.parent() {
        ensure_dir(parent).map_err(|source| CopyTreeError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    create_fresh_dir(dst)?;

    let mut files = 0usize;
    for entry in WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| CopyTreeError::Io {
            path: e.path().unwrap_or(src).to_path_buf(),
            source: e.into(),
        })?;
        let relative = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            create_fresh_dir(&target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|source| CopyTreeError::Io {
                path: entry.path().to_path_buf(),
                source,
            })?;
            files += 1;
        }
    }

    Ok(files)
}

fn create_fresh_dir(path: &Path) -> Result<(), CopyTreeError> {
    fs::create_dir(path).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            CopyTreeError::DestinationExists {
                path: path.to_path_buf(),
            }
        } else {
            CopyTreeError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
