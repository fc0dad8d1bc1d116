//! Operations that act on a selected entry.

use std::fs;
use std::path::Path;

use crate::error::{DiskManError, Result};
use crate::platform::{self, Platform};

/// Delete a file, symlink, or directory tree.
///
/// Symlinks are removed themselves, never their targets. A failure partway
/// through a directory tree leaves whatever was already removed deleted.
pub fn delete_entry(path: &Path) -> Result<()> {
    let to_err = |source| DiskManError::Deletion {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::symlink_metadata(path).map_err(to_err)?;
    if metadata.is_dir() {
        fs::remove_dir_all(path).map_err(to_err)?;
    } else {
        fs::remove_file(path).map_err(to_err)?;
    }

    tracing::info!(path = %path.display(), "Deleted entry");
    Ok(())
}

/// Open the system file manager at `path`.
pub fn reveal_entry(path: &Path) -> Result<()> {
    reveal_entry_with(path, platform::current())
}

pub fn reveal_entry_with(path: &Path, platform: &dyn Platform) -> Result<()> {
    if fs::symlink_metadata(path).is_err() {
        return Err(DiskManError::InvalidPath(path.display().to_string()));
    }
    platform.reveal(path)
}
