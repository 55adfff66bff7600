//! On-disk tree operations used when staging and publishing builds

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Recursively copy the contents of `src` into `dst`.
///
/// With `allow_existing` set to `false` the destination must not exist yet
/// and [`Error::DestinationExists`] is returned otherwise. With it set to
/// `true` the tree is merged into `dst`, overwriting files that are already
/// there. Symlinks are followed and copied as regular files.
///
/// Returns the number of files copied.
pub fn copy_tree(src: &Path, dst: &Path, allow_existing: bool) -> Result<usize> {
    if !allow_existing && dst.exists() {
        return Err(Error::DestinationExists {
            path: dst.to_path_buf(),
        });
    }
    if !src.is_dir() {
        return Err(Error::Filesystem {
            message: format!("Source is not a directory: {}", src.display()),
        });
    }

    fs::create_dir_all(dst)?;

    let mut copied = 0;
    for entry in WalkDir::new(src).follow_links(true).min_depth(1) {
        let entry = entry.map_err(|e| Error::Filesystem {
            message: format!("Failed to walk {}: {}", src.display(), e),
        })?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|_| Error::OutsideRoot {
                path: entry.path().to_path_buf(),
                root: src.to_path_buf(),
            })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }

    debug!(
        "Copied {} files from {} to {}",
        copied,
        src.display(),
        dst.display()
    );
    Ok(copied)
}

/// Remove every top-level entry of `dir` whose name does not start with `.`.
///
/// Directories are removed recursively, everything else individually.
/// Dot-entries such as `.git` are left untouched. Returns the number of
/// entries removed.
pub fn clear_directory(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
        removed += 1;
    }
    Ok(removed)
}
