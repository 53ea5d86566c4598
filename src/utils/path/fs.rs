//! Filesystem path helpers.
//!
//! - `resolve_from` - expand `~` and anchor relative paths at a base directory
//! - `normalize_path` - canonicalize with an absolute fallback
//! - `is_empty_dir` - emptiness check used before copying into a directory

use std::fs;
use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first. Paths that do not exist yet are returned
/// as-is when absolute, or joined onto the current directory.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve a user-supplied path against `base`.
///
/// `~` is expanded first; the result is joined onto `base` when still
/// relative, then normalized.
///
/// # Example
/// ```ignore
/// // inkpot.toml lives in /site, plugin declared as `path = "vendor/theme"`
/// resolve_from(Path::new("vendor/theme"), Path::new("/site")) // -> /site/vendor/theme
/// ```
pub fn resolve_from(path: &Path, base: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let expanded = PathBuf::from(shellexpand::tilde(raw.as_ref()).into_owned());
    if expanded.is_absolute() {
        normalize_path(&expanded)
    } else {
        normalize_path(&base.join(expanded))
    }
}

/// Check whether `path` is missing or an empty directory.
///
/// A regular file at `path` counts as non-empty.
pub fn is_empty_dir(path: &Path) -> std::io::Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    if !path.is_dir() {
        return Ok(false);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}
