//! Filesystem helpers for the driver.
//!
//! Every failure is reported with the path it happened at.

use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};

/// Removes `dir` with everything in it (if present) and creates it empty.
pub(crate) fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir).map_err(|e| BuildError::io(dir, e))?;
    }
    std::fs::create_dir_all(dir).map_err(|e| BuildError::io(dir, e))
}

pub(crate) fn create_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| BuildError::io(dir, e))
}

/// Copies one file, creating the destination's parent directories.
pub(crate) fn copy_file(src: &Path, dst: &Path) -> Result<()> {
    if !src.is_file() {
        return Err(BuildError::MissingInput {
            path: src.to_path_buf(),
        });
    }
    if let Some(parent) = dst.parent() {
        create_dir(parent)?;
    }
    std::fs::copy(src, dst).map_err(|e| BuildError::io(src, e))?;
    Ok(())
}

/// Copies a directory tree. Returns the number of files copied.
pub(crate) fn copy_dir(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Err(BuildError::MissingInput {
            path: src.to_path_buf(),
        });
    }
    create_dir(dst)?;
    copy_dir_recursive(src, dst)
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for path in read_dir_sorted(src)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dst.join(name);
        if path.is_dir() {
            create_dir(&target)?;
            copied += copy_dir_recursive(&path, &target)?;
        } else {
            std::fs::copy(&path, &target).map_err(|e| BuildError::io(&path, e))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Lists regular files directly inside `dir` whose name ends with `extension`.
///
/// A missing directory yields an empty list. Results are sorted by path.
pub(crate) fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let files = read_dir_sorted(dir)?
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().ends_with(extension))
                .unwrap_or(false)
        })
        .collect();
    Ok(files)
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| BuildError::io(dir, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| BuildError::io(dir, e))?;
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

pub(crate) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| BuildError::io(path, e))
}

pub(crate) fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| BuildError::io(path, e))
}
