//! Directory creation and recursive path removal.

use std::fs;
use std::path::Path;

use crate::error::Error;

/// Ensure `path` and all missing ancestors exist as directories.
///
/// Succeeds silently when the directory is already present.
pub fn create_dir(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    log::debug!("Creating directory {}...", path.display());

    fs::create_dir_all(path).map_err(|source| Error::WriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Recursively delete the file or directory at `path`.
///
/// This removes the path itself, not records within a store; see
/// [`crate::remove_record`] for that.
pub fn remove_path(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    log::debug!("Removing {}...", path.display());

    let attr = fs::metadata(path).map_err(|source| Error::RemovalFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let removed = if attr.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|source| Error::RemovalFailed {
        path: path.to_path_buf(),
        source,
    })
}
