//! Binary file rename.
//!
//! Moves `<root>/<current>` to `<root>/<new>`. There is no staging or
//! rollback: a failure here surfaces as an `Io` error and the manifest is
//! not touched.

use crate::config::ProjectRoot;
use crate::error::{RenameError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Checks that `<root>/<current>` can be moved to `<root>/<new_name>`.
///
/// Both paths are appended to the root, so absolute names stay inside it.
///
/// # Errors
///
/// - `Io(NotFound)`: `current` does not exist
/// - `Io(AlreadyExists)`: a different file already has the new name
pub fn check_rename(
    root: &ProjectRoot,
    current: &str,
    new_name: &str,
) -> Result<(PathBuf, PathBuf)> {
    let from = root.join(current);
    let to = root.join(new_name);

    if !from.exists() {
        return Err(RenameError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!(
                "Failed to rename {} to {}: {} does not exist",
                from.display(),
                to.display(),
                from.display()
            ),
        )));
    }

    if to.exists() && !is_same_file(&from, &to) {
        return Err(RenameError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Target already exists: {}", to.display()),
        )));
    }

    Ok((from, to))
}

/// Renames the binary inside `root`.
///
/// Renaming onto itself is allowed and leaves the file in place.
///
/// # Errors
///
/// Everything [`check_rename`] reports, plus `Io` for any other rename
/// failure (permissions, disk).
pub fn rename_binary(root: &ProjectRoot, current: &str, new_name: &str) -> Result<()> {
    let (from, to) = check_rename(root, current, new_name)?;

    fs::rename(&from, &to).map_err(|e| {
        RenameError::Io(io::Error::new(
            e.kind(),
            format!(
                "Failed to rename {} to {}: {}",
                from.display(),
                to.display(),
                e
            ),
        ))
    })?;

    log::info!("Renamed: {} → {}", from.display(), to.display());
    Ok(())
}

/// Whether both paths name the same file, so a case-only rename on a
/// case-insensitive file system is not a collision.
#[cfg(unix)]
fn is_same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => {
            a.to_string_lossy().to_lowercase() == b.to_string_lossy().to_lowercase()
        }
        _ => false,
    }
}
